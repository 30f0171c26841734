use crate::crawler::parser::extract_asset_refs;
use std::collections::HashSet;

/// Assets found on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// Every asset reference matched on the page, repeats included
    pub total_found: usize,

    /// References seen for the first time in this run, in scan order
    pub new_assets: Vec<String>,
}

/// Run-wide registry of asset references
///
/// The registry only grows; a reference is reported as new exactly once, on
/// the page where it is first observed.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    seen: HashSet<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `content` for asset references and records unseen ones
    ///
    /// # Examples
    ///
    /// ```
    /// use web_crawler::crawler::AssetRegistry;
    ///
    /// let mut registry = AssetRegistry::new();
    /// let page = r#"<script src="/app.js"></script>"#;
    ///
    /// assert_eq!(registry.collect(page).new_assets, vec!["/app.js".to_string()]);
    /// assert!(registry.collect(page).new_assets.is_empty());
    /// ```
    pub fn collect(&mut self, content: &str) -> AssetReport {
        let mut report = AssetReport::default();

        for asset in extract_asset_refs(content) {
            report.total_found += 1;
            if self.seen.insert(asset.clone()) {
                report.new_assets.push(asset);
            }
        }

        report
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.seen.contains(asset)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
