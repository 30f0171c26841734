//! Crawl phase definitions for the engine's state machine
//!
//! A run moves strictly forward: Seeded → Draining → Done. Seeded may also go
//! straight to Done when the page limit leaves no room for the root page.

use std::fmt;

/// Represents the current phase of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Frontier holds only the root path
    Seeded,

    /// Frontier is being drained, one fetch per dispatch
    Draining,

    /// Frontier is empty or the page limit was reached
    Done,
}

impl CrawlPhase {
    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::Seeded, Self::Draining)
                | (Self::Seeded, Self::Done)
                | (Self::Draining, Self::Done)
        )
    }

    /// Returns true once no further fetches will be dispatched
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::Draining => "draining",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
