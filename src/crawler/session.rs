//! Crawl session state
//!
//! A `CrawlSession` owns every piece of mutable crawl state for one run:
//! frontier, visited set, dead links, asset registry and page counter, along
//! with the read-only locale set and run options. Nothing here is global.
//!
//! Invariants:
//! - a path is never pending and visited at the same time
//! - a path enters the visited set once, when it is dispatched
//! - the page counter starts at 1 and grows by one per dispatch

use crate::config::CrawlOptions;
use crate::crawler::assets::{AssetRegistry, AssetReport};
use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::locale::LocaleSet;
use crate::output::CrawlSummary;
use crate::state::CrawlPhase;
use crate::CrawlError;
use chrono::{DateTime, Utc};

/// Path the frontier is seeded with
pub const ROOT_PATH: &str = "/";

/// Links found on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Every candidate link on the page, localized and repeated ones included
    pub total_found: usize,

    /// Links added to the frontier by this page, in document order
    pub new_links: Vec<String>,
}

/// A path handed out for fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Page number shown in the report (counter value before the fetch)
    pub page: u32,

    /// Relative path
    pub path: String,

    /// Absolute URL (`root + path`)
    pub url: String,
}

/// All state for a single crawl run
#[derive(Debug)]
pub struct CrawlSession {
    options: CrawlOptions,
    root: String,
    locales: LocaleSet,
    frontier: Frontier,
    visited: VisitedSet,
    dead_links: Vec<String>,
    assets: AssetRegistry,
    page_counter: u32,
    phase: CrawlPhase,
}

impl CrawlSession {
    /// Creates a session whose frontier holds only the root path
    pub fn new(options: CrawlOptions, locales: LocaleSet) -> Self {
        let root = options.root();
        let mut frontier = Frontier::new();
        frontier.push(ROOT_PATH);

        Self {
            options,
            root,
            locales,
            frontier,
            visited: VisitedSet::new(),
            dead_links: Vec::new(),
            assets: AssetRegistry::new(),
            page_counter: 1,
            phase: CrawlPhase::Seeded,
        }
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    pub fn page_counter(&self) -> u32 {
        self.page_counter
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn dead_links(&self) -> &[String] {
        &self.dead_links
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    /// Resolves a relative path against the root by concatenation
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    /// Returns true once the counter has passed the page limit
    pub fn limit_reached(&self) -> bool {
        self.options
            .page_limit
            .is_some_and(|limit| self.page_counter > limit)
    }

    /// Hands out the next path to fetch
    ///
    /// The path is marked visited and the counter incremented before the
    /// fetch happens. Returns None when the run is done, the limit is
    /// reached, or the frontier is empty.
    pub fn next_dispatch(&mut self) -> Result<Option<Dispatch>, CrawlError> {
        if self.phase.is_terminal() || self.limit_reached() {
            return Ok(None);
        }

        while let Some(path) = self.frontier.pop() {
            if self.visited.contains(&path) {
                tracing::debug!("Skipping already visited path {}", path);
                continue;
            }

            self.advance(CrawlPhase::Draining)?;

            let page = self.page_counter;
            self.page_counter += 1;
            self.visited.insert(&path);

            return Ok(Some(Dispatch {
                page,
                url: self.absolute(&path),
                path,
            }));
        }

        Ok(None)
    }

    /// Runs the asset scan for one page
    pub fn collect_assets(&mut self, content: &str) -> AssetReport {
        self.assets.collect(content)
    }

    /// Appends an absolute URL to the dead-link list
    pub fn record_dead_link(&mut self, url: String) {
        self.dead_links.push(url);
    }

    /// Enqueues every candidate that is neither localized, pending nor visited
    pub fn enqueue_links(&mut self, links: &[String]) -> LinkReport {
        let mut report = LinkReport {
            total_found: links.len(),
            new_links: Vec::new(),
        };

        for link in links {
            if self.locales.is_localized(link) {
                tracing::trace!("Skipping localized link {}", link);
                continue;
            }

            if self.visited.contains(link) {
                continue;
            }

            if self.frontier.push(link) {
                report.new_links.push(link.clone());
            }
        }

        report
    }

    /// Moves the session to `next`, refusing backward moves
    pub fn advance(&mut self, next: CrawlPhase) -> Result<(), CrawlError> {
        if self.phase == next {
            return Ok(());
        }
        if !self.phase.can_transition_to(next) {
            return Err(CrawlError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        tracing::debug!("Crawl phase {} -> {}", self.phase, next);
        self.phase = next;
        Ok(())
    }

    /// Returns true if no path is both pending and visited
    pub fn is_consistent(&self) -> bool {
        self.frontier.paths().all(|p| !self.visited.contains(p))
    }

    /// Builds the run summary
    pub fn summary(&self, started_at: DateTime<Utc>) -> CrawlSummary {
        CrawlSummary {
            root: self.root.clone(),
            pages_fetched: self.page_counter - 1,
            visited: self.visited.paths().to_vec(),
            dead_links: self.dead_links.clone(),
            unvisited: self.frontier.paths().map(str::to_string).collect(),
            assets_seen: self.assets.len(),
            phase: self.phase,
            started_at,
            finished_at: Utc::now(),
        }
    }
}
