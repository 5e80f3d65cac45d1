//! Presentation and server settings.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MIN_FONT_REM: f64 = 1.0;
pub const DEFAULT_MAX_FONT_REM: f64 = 3.0;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("font size must be a positive number of rem, got {0}")]
    NonPositiveSize(f64),

    #[error("minimum font size {min}rem is larger than maximum {max}rem")]
    InvertedSizeRange { min: f64, max: f64 },

    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
}

/// How the cloud is drawn: font size range and an optional loading delay.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudStyle {
    pub min_font_rem: f64,
    pub max_font_rem: f64,
    /// Applied before answering a cloud request; never changes the result.
    pub render_delay: Duration,
}

impl Default for CloudStyle {
    fn default() -> Self {
        Self {
            min_font_rem: DEFAULT_MIN_FONT_REM,
            max_font_rem: DEFAULT_MAX_FONT_REM,
            render_delay: Duration::ZERO,
        }
    }
}

impl CloudStyle {
    pub fn new(min_font_rem: f64, max_font_rem: f64, delay_ms: u64) -> Result<Self, ConfigError> {
        let style = Self {
            min_font_rem,
            max_font_rem,
            render_delay: Duration::from_millis(delay_ms),
        };
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.min_font_rem, self.max_font_rem] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::NonPositiveSize(size));
            }
        }
        if self.min_font_rem > self.max_font_rem {
            return Err(ConfigError::InvertedSizeRange {
                min: self.min_font_rem,
                max: self.max_font_rem,
            });
        }
        Ok(())
    }
}

/// Where `serve` listens.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body; `None` accepts any size.
    pub max_body_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: None,
        }
    }
}

impl ServerConfig {
    /// `host` must be an IP address literal.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
