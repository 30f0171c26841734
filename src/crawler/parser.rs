//! Pattern-based link and asset extraction
//!
//! Pages are scanned with two regular expressions rather than parsed as HTML:
//!
//! **Links** - `href="..."` whose value is only word characters, `-` and `/`.
//! Values with a dot, a query string or a scheme never match, so every link
//! is a same-site relative path by construction.
//!
//! **Assets** - `src="..."`, `href="..."` or `content="..."` whose value is made
//! of word characters and `/ - : . @` and ends in `.` plus 1-5 word
//! characters. Values starting with `http` are skipped as absolute.
//!
//! Attribute names are matched case-insensitively. Word characters are ASCII
//! only, so values with non-ASCII letters never match.

use regex::Regex;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)href="([\w/-]+)""#).expect("hardcoded regex pattern is valid")
});

static ASSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)\b(?:src|href|content)="([\w/\-:.@]+\.\w{1,5})""#)
        .expect("hardcoded regex pattern is valid")
});

/// Extracts candidate relative links in document order, duplicates included
///
/// # Examples
///
/// ```
/// use web_crawler::crawler::extract_links;
///
/// let html = r#"<a href="/about">About</a> <a href="https://other.com/x">x</a>"#;
/// assert_eq!(extract_links(html), vec!["/about".to_string()]);
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts non-absolute asset references in document order, duplicates included
///
/// # Examples
///
/// ```
/// use web_crawler::crawler::extract_asset_refs;
///
/// let html = r#"<script src="/js/app.js"></script><img src="https://cdn.com/a.png">"#;
/// assert_eq!(extract_asset_refs(html), vec!["/js/app.js".to_string()]);
/// ```
pub fn extract_asset_refs(content: &str) -> Vec<String> {
    ASSET_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| !is_absolute(value))
        .map(str::to_string)
        .collect()
}

fn is_absolute(value: &str) -> bool {
    value
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}
