//! Job Log Module
//!
//! Append-only log files written by the periodic jobs. Each line is
//! prefixed with a local timestamp; the two prefix styles in use are
//! kept as constructors so every job writes the format its readers
//! already parse.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

/// Timestamp prefix used by the heartbeat, restock and reminder logs.
pub const COMPACT_FORMAT: &str = "%d/%m/%Y-%H:%M:%S";

/// Timestamp prefix used by the report log.
pub const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// == Job Log ==
/// A timestamped append-only log file.
#[derive(Debug, Clone)]
pub struct JobLog {
    path: PathBuf,
    format: &'static str,
    separator: &'static str,
}

impl JobLog {
    /// Log with `DD/MM/YYYY-HH:MM:SS ` line prefixes.
    pub fn compact(path: PathBuf) -> Self {
        Self {
            path,
            format: COMPACT_FORMAT,
            separator: " ",
        }
    }

    /// Log with `YYYY-MM-DD HH:MM:SS - ` line prefixes.
    pub fn report(path: PathBuf) -> Self {
        Self {
            path,
            format: REPORT_FORMAT,
            separator: " - ",
        }
    }

    /// The file this log appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a single timestamped line.
    pub fn append(&self, line: &str) -> Result<()> {
        self.append_all(std::slice::from_ref(&line.to_string()))
    }

    /// Appends a batch of lines sharing one timestamp. The file is
    /// created (or touched) even when the batch is empty.
    pub fn append_all(&self, lines: &[String]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening job log {}", self.path.display()))?;

        let stamp = Local::now().format(self.format).to_string();
        for line in lines {
            writeln!(file, "{stamp}{}{line}", self.separator)
                .with_context(|| format!("writing job log {}", self.path.display()))?;
        }
        Ok(())
    }
}
