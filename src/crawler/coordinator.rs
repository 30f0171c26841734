//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Dispatching paths from the frontier under the page limit
//! - Fetching pages, with up to `concurrency` requests in flight
//! - Asset collection, link extraction and locale filtering
//! - Dead-link accounting and the final report
//!
//! The coordinator task is the only writer of session state and the only
//! caller of the reporter, so report lines never interleave.

use crate::config::{CrawlOptions, Settings};
use crate::crawler::fetcher::{FetchedPage, Fetcher, HttpFetcher};
use crate::crawler::parser::extract_links;
use crate::crawler::session::{CrawlSession, Dispatch};
use crate::locale::{load_locales, LocaleSet};
use crate::output::{CrawlSummary, Reporter};
use crate::state::CrawlPhase;
use crate::CrawlError;
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

/// Main crawler coordinator structure
pub struct Coordinator<F: Fetcher> {
    session: CrawlSession,
    fetcher: Arc<F>,
    reporter: Reporter,
    concurrency: usize,
}

impl<F: Fetcher> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `options` - Per-run options
    /// * `locales` - Codes used to drop localized links
    /// * `fetcher` - Performs the HTTP requests
    /// * `reporter` - Receives report lines
    pub fn new(options: CrawlOptions, locales: LocaleSet, fetcher: F, reporter: Reporter) -> Self {
        Self {
            session: CrawlSession::new(options, locales),
            fetcher: Arc::new(fetcher),
            reporter,
            concurrency: 1,
        }
    }

    /// Sets the maximum number of fetches in flight (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn session(&self) -> &CrawlSession {
        &self.session
    }

    /// Runs the crawl to completion
    ///
    /// Fatal errors are written to the report as an `[ERROR]` line before
    /// being returned.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - Frontier drained or page limit reached
    /// * `Err(CrawlError::FetchStatus)` - Non-success status in strict mode
    /// * `Err(CrawlError::Transport)` - A request failed below HTTP
    pub async fn run(&mut self) -> Result<CrawlSummary, CrawlError> {
        let started_at = Utc::now();
        tracing::info!("Starting crawl of {}", self.session.root());

        match self.drive().await {
            Ok(()) => {
                let summary = self.session.summary(started_at);
                tracing::info!(
                    "Crawl completed: {} pages fetched, {} dead links in {}s",
                    summary.pages_fetched,
                    summary.dead_links.len(),
                    summary.duration_seconds()
                );
                Ok(summary)
            }
            Err(e) => {
                tracing::error!("Crawl aborted: {}", e);
                self.reporter.abort(&e.to_string());
                Err(e)
            }
        }
    }

    async fn drive(&mut self) -> Result<(), CrawlError> {
        let root_url = self.session.options().root_url.to_string();
        self.reporter.crawl_started(&root_url)?;

        let mut in_flight = FuturesUnordered::new();

        loop {
            while in_flight.len() < self.concurrency {
                let Some(dispatch) = self.session.next_dispatch()? else {
                    break;
                };

                self.reporter.page_started(dispatch.page, &dispatch.url)?;

                let fetcher = Arc::clone(&self.fetcher);
                in_flight.push(async move {
                    let result = fetcher.fetch(&dispatch.url).await;
                    (dispatch, result)
                });
            }

            let Some((dispatch, result)) = in_flight.next().await else {
                break;
            };

            self.process_page(dispatch, result?)?;
        }

        if self.session.limit_reached() {
            tracing::info!(
                "Page limit reached with {} paths left in the frontier",
                self.session.frontier().len()
            );
        }

        self.session.advance(CrawlPhase::Done)?;

        let verbose = self.session.options().verbose;
        self.reporter
            .dead_links(self.session.dead_links(), verbose)?;
        self.reporter.finish()?;

        Ok(())
    }

    /// Handles one fetched page
    ///
    /// This method:
    /// 1. Scans the body for assets
    /// 2. Normalizes the text encoding
    /// 3. Records a dead link, or aborts in strict mode
    /// 4. Extracts links and enqueues new, non-localized ones
    fn process_page(&mut self, dispatch: Dispatch, page: FetchedPage) -> Result<(), CrawlError> {
        let text = page.text();

        let assets = self.session.collect_assets(&text);
        self.reporter.assets(&assets)?;

        if !page.is_utf8() {
            tracing::debug!(
                "Decoding {} as utf-8 (declared {})",
                dispatch.url,
                page.encoding.as_deref().unwrap_or("none")
            );
        }

        if !page.is_success() {
            self.reporter.fetch_failed(&dispatch.url, page.status)?;

            if self.session.options().strict {
                return Err(CrawlError::FetchStatus {
                    url: dispatch.url,
                    status: page.status,
                });
            }

            tracing::warn!("Dead link {} (HTTP {})", dispatch.url, page.status);
            self.session.record_dead_link(dispatch.url.clone());
        }

        let links = extract_links(&text);
        let report = self.session.enqueue_links(&links);
        tracing::debug!(
            "{}: {} links, {} new",
            dispatch.path,
            report.total_found,
            report.new_links.len()
        );
        self.reporter.links(&report)?;

        Ok(())
    }
}

/// Runs a complete crawl over HTTP
///
/// Loads the locale lists, builds the HTTP client and drives a coordinator
/// with the configured concurrency.
///
/// # Example
///
/// ```no_run
/// use web_crawler::config::{CrawlOptions, Settings};
/// use web_crawler::crawler::run_crawl;
/// use web_crawler::output::{ConsoleSink, Reporter};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = CrawlOptions::new(Url::parse("https://example.com/")?);
/// let reporter = Reporter::new(Box::new(ConsoleSink::new()));
/// let summary = run_crawl(options, &Settings::default(), reporter).await?;
/// println!("{} dead links", summary.dead_links.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    options: CrawlOptions,
    settings: &Settings,
    mut reporter: Reporter,
) -> Result<CrawlSummary, CrawlError> {
    let (locales, fetcher) = match prepare(settings) {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("Crawl setup failed: {}", e);
            reporter.abort(&e.to_string());
            return Err(e);
        }
    };

    let mut coordinator = Coordinator::new(options, locales, fetcher, reporter)
        .with_concurrency(settings.fetch.concurrency as usize);
    coordinator.run().await
}

/// Loads the locale lists and builds the HTTP fetcher
fn prepare(settings: &Settings) -> Result<(LocaleSet, HttpFetcher), CrawlError> {
    let locales = load_locales(&settings.locales)?;
    tracing::debug!("Loaded {} locale codes", locales.len());

    let fetcher = HttpFetcher::from_settings(&settings.fetch)?;
    Ok((locales, fetcher))
}
