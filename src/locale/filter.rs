use crate::locale::LocaleSet;
use regex::Regex;
use std::sync::LazyLock;

/// Leading path segment such as `/en-gb/`
static LEADING_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^/([\w-]+)/").expect("hardcoded regex pattern is valid"));

/// Checks whether a relative link points at a localized variant of a page
///
/// Two tests are applied to the lowercased path, first hit wins:
///
/// 1. The path with exactly one leading and one trailing character removed
///    (`/fr/` → `fr`). Paths of one character or less strip to the empty string.
/// 2. The first path segment when the path starts with `/<segment>/`
///    (`/en/page` → `en`). The segment is ASCII word characters and `-`.
///
/// Paths without a leading delimiter are still stripped by one character at
/// each end, so `de/` tests `e/` and falls through to the second test.
///
/// # Examples
///
/// ```
/// use web_crawler::locale::{is_localized, LocaleSet};
///
/// let locales = LocaleSet::from_codes(["en", "fr"]);
/// assert!(is_localized("/en/page", &locales));
/// assert!(is_localized("/FR/", &locales));
/// assert!(!is_localized("/xx/page", &locales));
/// ```
pub fn is_localized(path: &str, locales: &LocaleSet) -> bool {
    let lowered = path.to_lowercase();

    if locales.contains(strip_delimiters(&lowered)) {
        return true;
    }

    LEADING_SEGMENT
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .is_some_and(|segment| locales.contains(segment.as_str()))
}

/// Removes one character from each end of `path`
fn strip_delimiters(path: &str) -> &str {
    let mut chars = path.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
