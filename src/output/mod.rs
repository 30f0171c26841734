//! Output module for crawl reports
//!
//! This module handles:
//! - Formatting per-page progress and the final dead-link report
//! - Writing report lines to the console, a locked file, or memory
//! - The summary value returned from a finished run

mod console;
mod file;
mod memory;
mod reporter;
mod traits;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use reporter::Reporter;
pub use traits::{CrawlSummary, OutputSink};

use crate::config::CrawlOptions;
use crate::OutputResult;

/// Builds the sink selected by the run options
///
/// Reports go to a locked file when `--out` is given, to stdout otherwise.
pub fn open_sink(options: &CrawlOptions) -> OutputResult<Box<dyn OutputSink>> {
    match &options.out {
        Some(path) => Ok(Box::new(FileSink::open(path, options.quiet)?)),
        None => Ok(Box::new(ConsoleSink::new())),
    }
}
