use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Per-run options taken from the command line
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Validated root URL; only its origin is used as the crawl base
    pub root_url: Url,

    /// Maximum number of pages to fetch (None = unlimited)
    pub page_limit: Option<u32>,

    /// Abort the run on the first non-success status
    pub strict: bool,

    /// Suppress the live page counter when reporting to a file
    pub quiet: bool,

    /// List every dead link in the final report
    pub verbose: bool,

    /// Report file; stdout when None
    pub out: Option<PathBuf>,
}

impl CrawlOptions {
    /// Creates options for `root_url` with every flag off
    pub fn new(root_url: Url) -> Self {
        Self {
            root_url,
            page_limit: None,
            strict: false,
            quiet: false,
            verbose: false,
            out: None,
        }
    }

    /// Returns the origin (`scheme://host[:port]`) that relative paths are appended to
    pub fn root(&self) -> String {
        self.root_url.origin().ascii_serialization()
    }
}

/// Settings loaded from the optional TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub locales: LocaleSettings,
}

/// HTTP fetch settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Maximum number of fetches in flight
    pub concurrency: u32,
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            user_agent: format!("web-crawler/{}", env!("CARGO_PKG_VERSION")),
            concurrency: 1,
        }
    }
}

/// Where the locale and language code lists live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    #[serde(rename = "data-dir")]
    pub data_dir: PathBuf,

    pub files: Vec<String>,
}

impl LocaleSettings {
    /// Full paths of every configured code list
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.data_dir.join(f)).collect()
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: vec!["locales.txt".to_string(), "languages.txt".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strips_path_and_query() {
        let options = CrawlOptions::new(Url::parse("https://example.com/docs/?x=1").unwrap());
        assert_eq!(options.root(), "https://example.com");
    }

    #[test]
    fn test_root_keeps_port() {
        let options = CrawlOptions::new(Url::parse("http://127.0.0.1:8080/").unwrap());
        assert_eq!(options.root(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_default_locale_paths() {
        let paths = LocaleSettings::default().paths();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("data/locales.txt"),
                PathBuf::from("data/languages.txt")
            ]
        );
    }
}
