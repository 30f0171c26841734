//! File-backed report sink
//!
//! The report file is truncated and held under an exclusive, non-blocking
//! lock for the whole run, so two crawlers can never interleave output in the
//! same file. Lines are written without ANSI codes.

use crate::output::traits::OutputSink;
use crate::{OutputError, OutputResult};
use std::fs::{File, OpenOptions, TryLockError};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes report lines to an exclusively locked file
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
    show_progress: bool,
}

impl FileSink {
    /// Creates (or truncates) `path` and takes an exclusive lock on it
    ///
    /// # Arguments
    ///
    /// * `path` - Report file location
    /// * `quiet` - Suppress the live page counter on stdout
    ///
    /// # Returns
    ///
    /// * `Ok(FileSink)` - File opened and locked
    /// * `Err(OutputError::Locked)` - Another process holds the lock
    /// * `Err(OutputError::Open)` - The file could not be created
    pub fn open(path: &Path, quiet: bool) -> OutputResult<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| OutputError::Open {
                path: path.display().to_string(),
                source,
            })?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                return Err(OutputError::Locked(path.display().to_string()))
            }
            Err(TryLockError::Error(e)) => return Err(OutputError::Io(e)),
        }

        // Truncate only once the lock is ours, never under another writer
        file.set_len(0)?;

        tracing::debug!("Locked out file {}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            show_progress: !quiet,
        })
    }
}

impl OutputSink for FileSink {
    fn write_line(&mut self, line: &str) -> OutputResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn supports_color(&self) -> bool {
        false
    }

    fn progress(&mut self, page: u32) -> OutputResult<()> {
        if self.show_progress {
            let mut stdout = io::stdout().lock();
            write!(stdout, "Crawling page:\t{}\r", page)?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        self.writer.get_ref().unlock()?;
        if self.show_progress {
            println!();
        }
        Ok(())
    }
}
