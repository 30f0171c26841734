//! Locale filtering
//!
//! Links such as `/en/pricing` or `/fr-fr/` are localized copies of pages the
//! crawler already reaches through the default locale. The codes used to spot
//! them are loaded once, before crawling, and never change during a run.

mod filter;
mod loader;

pub use filter::is_localized;
pub use loader::{load_locale_files, load_locales};

use std::collections::HashSet;

/// Immutable set of lowercase locale and language codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSet {
    codes: HashSet<String>,
}

impl LocaleSet {
    /// Builds a set from raw codes; codes are lowercased
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Tests membership of an already-lowercased code
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Checks whether `path` is a localized link; see [`is_localized`]
    pub fn is_localized(&self, path: &str) -> bool {
        is_localized(path, self)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
