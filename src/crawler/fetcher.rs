//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with timeout and user agent
//! - GET requests returning status, body bytes and declared charset
//! - Classifying transport failures
//!
//! Fetches are never retried. A response with any status is a successful
//! fetch; only transport failures are errors.

use crate::config::FetchSettings;
use crate::CrawlError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::borrow::Cow;

/// A fetched page, whatever its status
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: Vec<u8>,

    /// Charset declared by the server (or inferred for text content), lowercased
    pub encoding: Option<String>,
}

impl FetchedPage {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the declared encoding is already UTF-8
    pub fn is_utf8(&self) -> bool {
        self.encoding
            .as_deref()
            .is_some_and(|enc| enc.starts_with("utf-8") || enc == "utf8")
    }

    /// Returns the body as UTF-8 text
    ///
    /// The body is always decoded as UTF-8 regardless of the declared charset;
    /// invalid sequences become replacement characters.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Performs a single GET for an absolute URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedPage)` - A response was received, whatever its status
    /// * `Err(CrawlError::Transport)` - DNS, connection, TLS or timeout failure
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError>;
}

/// Builds an HTTP client with proper configuration
///
/// Certificate verification stays on; redirects follow reqwest's default
/// policy.
///
/// # Example
///
/// ```no_run
/// use web_crawler::config::FetchSettings;
/// use web_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&FetchSettings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &FetchSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(settings.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Extracts the charset from a Content-Type header value
///
/// Text content without an explicit charset is treated as ISO-8859-1, the
/// HTTP/1.1 default; anything else without a charset has no declared encoding.
///
/// # Examples
///
/// ```
/// use web_crawler::crawler::declared_encoding;
///
/// assert_eq!(declared_encoding(Some("text/html; charset=UTF-8")), Some("utf-8".to_string()));
/// assert_eq!(declared_encoding(Some("text/html")), Some("iso-8859-1".to_string()));
/// assert_eq!(declared_encoding(Some("image/png")), None);
/// ```
pub fn declared_encoding(content_type: Option<&str>) -> Option<String> {
    let content_type = content_type?.to_lowercase();

    let charset = content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        (key.trim() == "charset").then(|| value.trim().trim_matches(['"', '\'']).to_string())
    });

    match charset {
        Some(charset) if !charset.is_empty() => Some(charset),
        _ if content_type.trim_start().starts_with("text") => Some("iso-8859-1".to_string()),
        _ => None,
    }
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from fetch settings
    pub fn from_settings(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(settings)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status().as_u16();
        let encoding = declared_encoding(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?
            .to_vec();

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(FetchedPage {
            url: url.to_string(),
            status,
            body,
            encoding,
        })
    }
}

/// Classifies a reqwest failure into a transport error
fn transport_error(url: &str, e: reqwest::Error) -> CrawlError {
    let message = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };

    CrawlError::Transport {
        url: url.to_string(),
        message,
    }
}
