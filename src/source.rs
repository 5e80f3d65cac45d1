//! Where the text to analyze comes from: an argument, a file, stdin, or a web page.

use std::io::Read;
use std::path::PathBuf;

use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// Raw text input for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Inline(String),
    File(PathBuf),
    Stdin,
    Url(String),
}

impl Source {
    /// Read the full text. Web pages are fetched and reduced to their visible body text.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::File(path) => std::fs::read_to_string(path)
                .map_err(|e| SourceError::Io(path.display().to_string(), e)),
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| SourceError::Io("stdin".to_string(), e))?;
                Ok(text)
            }
            Source::Url(url) => {
                let url = parse_page_url(url)?;
                let rt = tokio::runtime::Runtime::new()
                    .map_err(|e| SourceError::Io("runtime".to_string(), e))?;
                rt.block_on(fetch_page_text(&url))
            }
        }
    }
}

/// Accept only absolute http(s) URLs; drop the fragment.
pub fn parse_page_url(raw: &str) -> Result<Url, SourceError> {
    let mut url = Url::parse(raw).map_err(|e| SourceError::InvalidUrl(raw.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(SourceError::UnsupportedScheme(other.to_string())),
    }
    url.set_fragment(None);
    Ok(url)
}

/// Fetch a page and return its body text.
pub async fn fetch_page_text(url: &Url) -> Result<String, SourceError> {
    tracing::info!(%url, "fetching page");
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    let text = extract_body_text(&body);
    tracing::debug!(%url, bytes = text.len(), "extracted page text");
    Ok(text)
}

/// Elements whose contents never count as page text.
const SKIPPED: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start a new line when rendered, so their edges separate words.
const BLOCKS: [&str; 31] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "ul",
];

/// Visible text under `<body>` with whitespace collapsed.
///
/// Text nodes are concatenated as written, so a word split by inline markup
/// (`<b>unbe</b>lievable`) stays one word. Block elements and skipped
/// elements act as separators.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(body) = Selector::parse("body") else {
        return String::new();
    };
    let mut text = String::new();
    if let Some(el) = document.select(&body).next() {
        collect_text(el, &mut text);
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if SKIPPED.contains(&e.name()) => out.push(' '),
            Node::Element(e) => {
                let block = BLOCKS.contains(&e.name());
                if block {
                    out.push(' ');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
