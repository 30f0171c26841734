//! Configuration module
//!
//! Per-run options come from the command line; tunables such as the fetch
//! timeout and the locale data location come from an optional TOML file.
//!
//! # Example
//!
//! ```no_run
//! use web_crawler::config::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("crawler.toml")).unwrap();
//! println!("Fetch timeout: {}s", settings.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlOptions, FetchSettings, LocaleSettings, Settings};

// Re-export parser functions
pub use parser::{load_settings, load_settings_or_default};
