//! Word frequency analysis and word cloud layout.

pub mod analyzer;
pub mod cloud;
pub mod config;
pub mod server;
pub mod source;
pub mod tokenize;

pub use analyzer::{analyze, FrequencyTable, RankedEntry, MAX_ENTRIES};
pub use cloud::{describe, layout, render_html, DisplayEntry};
pub use config::{CloudStyle, ConfigError, ServerConfig};
pub use source::{Source, SourceError};
