use crate::UrlError;
use url::{ParseError, Url};

/// Scheme prepended to URLs given without one
const DEFAULT_SCHEME: &str = "http://";

/// Normalizes a user-supplied root URL
///
/// Trims surrounding whitespace and prepends `http://` when the input has no
/// scheme. Input that already carries a scheme, even a non-http one such as
/// `mailto:`, is left alone for `validate_url` to judge. A bare `host:port`
/// counts as scheme-less. Applying it twice yields the same string.
///
/// # Examples
///
/// ```
/// use web_crawler::url::normalize_url;
///
/// assert_eq!(normalize_url("www.example.com"), "http://www.example.com");
/// assert_eq!(normalize_url("localhost:8080"), "http://localhost:8080");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// assert_eq!(normalize_url("mailto:me@example.com"), "mailto:me@example.com");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    let trimmed = url_str.trim();

    let needs_scheme = match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Ok(_) => is_host_port(trimmed),
        Err(_) => false,
    };

    if needs_scheme {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Returns true for `host:port[/...]`, which `Url::parse` reads as a scheme
fn is_host_port(input: &str) -> bool {
    let Some((_, rest)) = input.split_once(':') else {
        return false;
    };
    let port = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a normalized root URL
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The URL is malformed, uses a scheme other than
///   http/https, or has no host
///
/// # Examples
///
/// ```
/// use web_crawler::url::validate_url;
///
/// assert!(validate_url("https://example.com/").is_ok());
/// assert!(validate_url("ftp://example.com/").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost),
    }
}

/// Normalizes then validates a root URL
pub fn parse_root_url(url_str: &str) -> Result<Url, UrlError> {
    validate_url(&normalize_url(url_str))
}
