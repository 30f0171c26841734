//! State tracking module
//!
//! This module defines the phases a crawl run moves through.

mod crawl_phase;

pub use crawl_phase::CrawlPhase;
