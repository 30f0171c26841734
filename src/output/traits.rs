//! Output sink trait and crawl summary types
//!
//! The engine never writes to stdout or files directly. Every report line
//! goes through an `OutputSink`, so the same run can target the console, a
//! locked log file, or an in-memory buffer in tests.

use crate::state::CrawlPhase;
use crate::OutputResult;
use chrono::{DateTime, Utc};

/// Destination for report lines
///
/// Implementations receive whole lines without trailing newlines. Calls are
/// made from a single task, one line at a time.
pub trait OutputSink: Send {
    /// Writes one report line
    ///
    /// # Arguments
    ///
    /// * `line` - The line to write, without trailing newline
    fn write_line(&mut self, line: &str) -> OutputResult<()>;

    /// Returns true if ANSI styling should be applied to lines
    fn supports_color(&self) -> bool;

    /// Updates a live progress indicator with the current page number
    fn progress(&mut self, _page: u32) -> OutputResult<()> {
        Ok(())
    }

    /// Flushes buffered output and releases held resources
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Result of a finished crawl run
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Origin every path was resolved against
    pub root: String,

    /// Number of fetches dispatched
    pub pages_fetched: u32,

    /// Visited paths in dispatch order
    pub visited: Vec<String>,

    /// Absolute URLs that answered with a non-success status, in order found
    pub dead_links: Vec<String>,

    /// Paths discovered but never fetched because the page limit was hit
    pub unvisited: Vec<String>,

    /// Distinct asset references seen across the run
    pub assets_seen: usize,

    /// Final phase of the run
    pub phase: CrawlPhase,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlSummary {
    /// Returns the run duration in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Returns true if the run stopped with paths left in the frontier
    pub fn hit_page_limit(&self) -> bool {
        !self.unvisited.is_empty()
    }
}
