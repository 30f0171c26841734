//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - Pattern-based link and asset extraction
//! - Frontier, visited set and per-run session state
//! - Overall crawl coordination

mod assets;
mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod session;

pub use assets::{AssetRegistry, AssetReport};
pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, declared_encoding, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::{Frontier, VisitedSet};
pub use parser::{extract_asset_refs, extract_links};
pub use session::{CrawlSession, Dispatch, LinkReport, ROOT_PATH};

use crate::config::{CrawlOptions, Settings};
use crate::output::{CrawlSummary, Reporter};
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Load the locale code lists
/// 2. Build the HTTP client
/// 3. Drain the frontier from `/` under the page limit
/// 4. Report new links, new assets and dead links
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(CrawlError)` - Crawl aborted
pub async fn crawl(
    options: CrawlOptions,
    settings: &Settings,
    reporter: Reporter,
) -> Result<CrawlSummary, CrawlError> {
    run_crawl(options, settings, reporter).await
}
