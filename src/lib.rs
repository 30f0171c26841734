//! web-crawler: a single-host site crawler
//!
//! This crate walks every page reachable from a root URL on the same host,
//! skipping localized link variants, collecting static asset references and
//! reporting pages that answer with a non-success status.

pub mod config;
pub mod crawler;
pub mod locale;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    /// Non-success HTTP status, fatal only in strict mode
    #[error("Could not get content for {url} (HTTP {status})")]
    FetchStatus { url: String, status: u16 },

    /// DNS, connection, TLS or timeout failure
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlPhase,
        to: state::CrawlPhase,
    },
}

impl CrawlError {
    /// Returns true if the error was raised before any page was fetched
    pub fn is_startup_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Url(_) | Self::Client(_))
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Please supply a valid URL, e.g. www.domain.com or http://www.domain.com ({0})")]
    Parse(String),

    #[error("Only supported protocol is http[s], got: {0}")]
    InvalidScheme(String),

    #[error("Please supply a valid URL, e.g. www.domain.com or http://www.domain.com")]
    MissingHost,
}

/// Errors raised by report sinks
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Could not open out file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Out file {0} is locked by another process")]
    Locked(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::{CrawlOptions, Settings};
pub use crawler::{crawl, Coordinator};
pub use locale::LocaleSet;
pub use output::CrawlSummary;
pub use state::CrawlPhase;
pub use crate::url::{normalize_url, validate_url};
