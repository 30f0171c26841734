//! Root URL handling
//!
//! The crawler accepts loosely written root URLs (`www.domain.com`), so input
//! is first normalized and then validated as a separate step.

mod normalize;

pub use normalize::{normalize_url, parse_root_url, validate_url};
