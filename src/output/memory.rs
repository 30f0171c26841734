use crate::output::traits::OutputSink;
use crate::OutputResult;
use std::sync::{Arc, Mutex};

/// Collects report lines in memory
///
/// Cloning yields a handle onto the same buffer, so a caller can keep one
/// handle and pass the other to the reporter.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    progress: Arc<Mutex<Vec<u32>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Returns every progress value reported so far
    pub fn progress_updates(&self) -> Vec<u32> {
        self.progress
            .lock()
            .map(|progress| progress.clone())
            .unwrap_or_default()
    }

    /// Returns all lines joined with newlines
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) -> OutputResult<()> {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
        Ok(())
    }

    fn supports_color(&self) -> bool {
        false
    }

    fn progress(&mut self, page: u32) -> OutputResult<()> {
        if let Ok(mut progress) = self.progress.lock() {
            progress.push(page);
        }
        Ok(())
    }
}
