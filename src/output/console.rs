use crate::output::traits::OutputSink;
use crate::OutputResult;
use std::io::{self, Write};

/// Writes report lines to stdout with ANSI styling
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> OutputResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn supports_color(&self) -> bool {
        true
    }

    fn finish(&mut self) -> OutputResult<()> {
        io::stdout().flush()?;
        Ok(())
    }
}
