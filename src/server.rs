//! HTTP surface (axum): the widget page plus JSON endpoints for analysis and layout.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::analyzer::{self, RankedEntry};
use crate::cloud::{self, DisplayEntry};
use crate::config::{CloudStyle, ServerConfig};

/// Shared app state: the presentation settings.
pub type AppState = Arc<CloudStyle>;

/// Body for POST /api/analyze and POST /api/cloud.
#[derive(serde::Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Laid-out cloud plus the rendered fragment.
#[derive(serde::Serialize)]
pub struct CloudResponse {
    pub entries: Vec<DisplayEntry>,
    pub html: String,
    pub empty: bool,
}

/// Routes for the page and API. `max_body_bytes` of `None` lifts axum's
/// default 2 MB request body limit so any text can be posted.
pub fn router(state: AppState, max_body_bytes: Option<usize>) -> Router {
    let body_limit = match max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };
    Router::new()
        .route("/", get(index_page))
        .route("/healthz", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/cloud", post(cloud_handler))
        .layer(body_limit)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(
    config: &ServerConfig,
    style: CloudStyle,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = config.addr()?;
    let app = router(Arc::new(style), config.max_body_bytes);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn health() -> &'static str {
    "ok"
}

/// POST /api/analyze {text} -> JSON array of { word, count }.
pub async fn analyze_handler(Json(req): Json<TextRequest>) -> Json<Vec<RankedEntry>> {
    let ranked = analyzer::analyze(&req.text);
    tracing::debug!(bytes = req.text.len(), words = ranked.len(), "analyzed text");
    Json(ranked)
}

/// POST /api/cloud {text} -> laid-out entries and their HTML.
pub async fn cloud_handler(
    State(style): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<CloudResponse> {
    let ranked = analyzer::analyze(&req.text);
    let entries = cloud::layout(&ranked, &style);
    if !style.render_delay.is_zero() {
        tokio::time::sleep(style.render_delay).await;
    }
    tracing::debug!(words = entries.len(), "built cloud");
    let html = cloud::render_html(&entries);
    Json(CloudResponse {
        empty: entries.is_empty(),
        entries,
        html,
    })
}

/// GET / -> the word cloud page.
pub async fn index_page() -> axum::response::Html<&'static str> {
    const HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Word Cloud Generator</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
    h1 { font-size: 1.5rem; }
    textarea { width: 100%; min-height: 10rem; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }
    button { margin-top: 0.5rem; padding: 0.5rem 1rem; font-size: 1rem; cursor: pointer; }
    button:disabled { cursor: default; opacity: 0.6; }
    #word-cloud-output { margin-top: 1.5rem; text-align: center; line-height: 1.4; }
    .placeholder-text { color: #666; }
    .cloud-word {
      display: inline-block; margin: 5px 8px; padding: 5px 10px; border-radius: 8px;
      font-weight: 600; transition: all 0.3s ease; animation: fadeInScale 0.6s ease forwards;
      opacity: 0; transform: scale(0.8);
    }
    .cloud-word:hover { transform: scale(1.1); box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2); position: relative; z-index: 10; }
    .cloud-word.highlight { background-color: rgba(255, 215, 0, 0.3); transform: scale(1.2); }
    @keyframes fadeInScale { to { opacity: 1; transform: scale(1); } }
    #word-info {
      position: fixed; top: 20px; right: 20px; background: rgba(0, 0, 0, 0.8); color: white;
      padding: 15px 20px; border-radius: 10px; z-index: 1000;
    }
  </style>
</head>
<body>
  <h1>Word Cloud Generator</h1>
  <textarea id="text-input">Welcome to our amazing word cloud generator! This tool helps you create beautiful visual representations of your text. Simply paste your content and watch as we transform it into an engaging word cloud. The more frequently a word appears, the larger it will be displayed. You can use this for presentations, content analysis, education, and much more. Try it out with your own text and see the magic happen!</textarea>
  <button id="generate-btn">Generate Word Cloud</button>
  <div id="word-cloud-output"><p class="placeholder-text">Your word cloud will appear here.</p></div>
  <script>
    const input = document.getElementById('text-input');
    const btn = document.getElementById('generate-btn');
    const output = document.getElementById('word-cloud-output');
    let infoTimer = null;

    input.addEventListener('input', () => {
      const empty = input.value.trim().length === 0;
      btn.disabled = empty;
      btn.textContent = empty ? 'Enter text first' : 'Generate Word Cloud';
    });

    btn.addEventListener('click', async () => {
      const text = input.value.trim();
      if (!text) return;
      btn.disabled = true;
      btn.textContent = 'Generating...';
      try {
        const r = await fetch('/api/cloud', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ text }),
        });
        const cloud = await r.json();
        output.innerHTML = cloud.html;
      } catch (err) {
        output.innerHTML = '<p class="placeholder-text">Error: ' + err + '</p>';
      }
      btn.disabled = false;
      btn.textContent = 'Generate Word Cloud';
    });

    output.addEventListener('click', (e) => {
      const el = e.target.closest('.cloud-word');
      if (!el) return;
      el.classList.add('highlight');
      setTimeout(() => el.classList.remove('highlight'), 2000);
      let info = document.getElementById('word-info');
      if (!info) {
        info = document.createElement('div');
        info.id = 'word-info';
        document.body.appendChild(info);
      }
      info.textContent = el.title;
      clearTimeout(infoTimer);
      infoTimer = setTimeout(() => info.remove(), 3000);
    });
  </script>
</body>
</html>
"#;
    axum::response::Html(HTML)
}
