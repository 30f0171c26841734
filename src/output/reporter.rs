//! Report line formatting
//!
//! The reporter turns crawl events into the human-readable report. Styling is
//! applied only when the sink supports it; file output stays plain text.

use crate::crawler::{AssetReport, LinkReport};
use crate::output::traits::OutputSink;
use crate::OutputResult;
use colored::Colorize;

/// Program name used in fatal error lines
const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Formats crawl events and writes them to an `OutputSink`
pub struct Reporter {
    sink: Box<dyn OutputSink>,
    color: bool,
}

impl Reporter {
    /// Creates a reporter writing to `sink`
    pub fn new(sink: Box<dyn OutputSink>) -> Self {
        let color = sink.supports_color();
        Self { sink, color }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn target(&self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    /// First line of every report
    pub fn crawl_started(&mut self, root_url: &str) -> OutputResult<()> {
        let line = format!("{} {}", self.label("Crawling root URL:"), self.target(root_url));
        self.sink.write_line(&line)
    }

    /// Announces a fetch and bumps the live page counter
    pub fn page_started(&mut self, page: u32, url: &str) -> OutputResult<()> {
        let line = format!("{}\t{}\t\t{}", self.label("Crawling:"), page, self.target(url));
        self.sink.write_line("")?;
        self.sink.write_line(&line)?;
        self.sink.progress(page)
    }

    /// Reports assets found on one page; writes nothing when none were found
    pub fn assets(&mut self, report: &AssetReport) -> OutputResult<()> {
        if report.total_found == 0 {
            return Ok(());
        }

        let found = format!("\t{}\t{}", self.label("Static assets found:"), report.total_found);
        let new = format!(
            "\t{}\t{}/{}",
            self.label("New static assets:"),
            report.new_assets.len(),
            report.total_found
        );
        self.sink.write_line(&found)?;
        self.sink.write_line(&new)?;
        for asset in &report.new_assets {
            self.sink.write_line(&format!("\t\t{}", asset))?;
        }
        Ok(())
    }

    /// Reports a page that answered with a non-success status
    pub fn fetch_failed(&mut self, url: &str, status: u16) -> OutputResult<()> {
        self.sink
            .write_line(&format!("[ERROR]\tCould not get content for {}", url))?;
        self.sink.write_line(&format!("Response:\tHTTP {}", status))
    }

    /// Reports links found on one page and which of them are new
    pub fn links(&mut self, report: &LinkReport) -> OutputResult<()> {
        if report.total_found > 0 {
            let found = format!("\t{}\t\t{}", self.label("Links found:"), report.total_found);
            self.sink.write_line(&found)?;
        }

        let new = format!(
            "\t{}\t\t{}/{}",
            self.label("New links:"),
            report.new_links.len(),
            report.total_found
        );
        self.sink.write_line(&new)?;
        for link in &report.new_links {
            self.sink.write_line(&format!("\t\t{}", link))?;
        }
        Ok(())
    }

    /// Final dead-link report; lists each link only when `verbose`
    pub fn dead_links(&mut self, dead_links: &[String], verbose: bool) -> OutputResult<()> {
        let line = format!("{}\t{}", self.label("Dead links found:"), dead_links.len());
        self.sink.write_line(&line)?;
        if verbose {
            for link in dead_links {
                self.sink.write_line(link)?;
            }
        }
        Ok(())
    }

    /// Writes an `[ERROR]` line for a run-aborting failure
    pub fn fatal(&mut self, message: &str) -> OutputResult<()> {
        self.sink
            .write_line(&format!("[ERROR] {}: {}", PROGRAM, message))
    }

    /// Flushes the sink and releases its resources
    pub fn finish(&mut self) -> OutputResult<()> {
        self.sink.finish()
    }

    /// Writes the fatal line and closes the sink on an aborted run
    ///
    /// The run is already failing, so sink errors here are logged rather than
    /// returned and the caller keeps the original error.
    pub fn abort(&mut self, message: &str) {
        if let Err(e) = self.fatal(message) {
            tracing::warn!("Could not write error line to report: {}", e);
        }
        if let Err(e) = self.finish() {
            tracing::warn!("Could not flush report: {}", e);
        }
    }
}
