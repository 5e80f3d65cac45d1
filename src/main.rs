//! word-cloud: analyze word frequencies and render them as a cloud.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use word_cloud::config::{self, CloudStyle, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use word_cloud::source::Source;
use word_cloud::{analyzer, cloud, server};

#[derive(Parser)]
#[command(name = "word-cloud")]
#[command(about = "Count word frequencies and render them as a word cloud")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text and print the ranked words.
    Analyze {
        /// Text to analyze. Reads stdin when no text, file or URL is given.
        text: Option<String>,

        /// Read text from a file.
        #[arg(long, short, conflicts_with_all = ["text", "url"])]
        file: Option<PathBuf>,

        /// Analyze the visible text of a web page.
        #[arg(long, short, conflicts_with = "text")]
        url: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Start the word cloud page and API.
    Serve {
        /// IP address to bind.
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on.
        #[arg(long, short, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Delay before answering cloud requests, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        /// Reject request bodies larger than this many bytes. Unlimited by default.
        #[arg(long)]
        max_body_bytes: Option<usize>,

        #[command(flatten)]
        style: StyleArgs,
    },
}

#[derive(Args, Clone, Copy)]
struct StyleArgs {
    /// Font size of the least frequent word, in rem.
    #[arg(long, default_value_t = config::DEFAULT_MIN_FONT_REM)]
    min_size: f64,

    /// Font size of the most frequent word, in rem.
    #[arg(long, default_value_t = config::DEFAULT_MAX_FONT_REM)]
    max_size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One "count word" line per entry.
    Text,
    /// The ranked list as JSON.
    Json,
    /// The rendered cloud fragment.
    Html,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { text, file, url, format, style } => {
            let source = pick_source(text, file, url);
            let style = CloudStyle::new(style.min_size, style.max_size, 0)?;
            println!("{}", run_analyze(&source, format, &style)?);
        }
        Command::Serve { host, port, delay_ms, max_body_bytes, style } => {
            let style = CloudStyle::new(style.min_size, style.max_size, delay_ms)?;
            run_serve(ServerConfig { host, port, max_body_bytes }, style)?;
        }
    }
    Ok(())
}

fn pick_source(text: Option<String>, file: Option<PathBuf>, url: Option<String>) -> Source {
    match (text, file, url) {
        (Some(text), _, _) => Source::Inline(text),
        (_, Some(path), _) => Source::File(path),
        (_, _, Some(url)) => Source::Url(url),
        _ => Source::Stdin,
    }
}

fn run_analyze(
    source: &Source,
    format: Format,
    style: &CloudStyle,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let text = source.read()?;
    let ranked = analyzer::analyze(&text);
    tracing::debug!(bytes = text.len(), words = ranked.len(), "analyzed input");
    let out = match format {
        Format::Json => serde_json::to_string_pretty(&ranked)?,
        Format::Html => cloud::render_html(&cloud::layout(&ranked, style)),
        Format::Text if ranked.is_empty() => cloud::EMPTY_MESSAGE.to_string(),
        Format::Text => ranked
            .iter()
            .map(|e| format!("{:>5} {}", e.count, e.word))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

fn run_serve(
    config: ServerConfig,
    style: CloudStyle,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::serve(&config, style))
}
