//! Frontier and visited-set bookkeeping
//!
//! The frontier is a FIFO of relative paths with a membership index so a path
//! can be pending at most once. The visited set records paths in the order
//! they were dispatched.

use std::collections::{HashSet, VecDeque};

/// Pending paths, unique, drained in insertion order
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    pending: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` unless it is already pending
    ///
    /// Returns true if the path was added.
    pub fn push(&mut self, path: &str) -> bool {
        if !self.pending.insert(path.to_string()) {
            return false;
        }
        self.queue.push_back(path.to_string());
        true
    }

    /// Removes and returns the oldest pending path
    pub fn pop(&mut self) -> Option<String> {
        let path = self.queue.pop_front()?;
        self.pending.remove(&path);
        Some(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pending.contains(path)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pending paths in the order they would be popped
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

/// Paths already dispatched for fetching
#[derive(Debug, Default)]
pub struct VisitedSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path`; returns false if it was already visited
    pub fn insert(&mut self, path: &str) -> bool {
        if !self.seen.insert(path.to_string()) {
            return false;
        }
        self.order.push(path.to_string());
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited paths in dispatch order
    pub fn paths(&self) -> &[String] {
        &self.order
    }
}
