//! Print collaborator.
//!
//! A terminal has no print dialog, so "print" renders the current estimate as
//! a plain-text quote and saves it where the user can send it to a printer.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use buildcost_utils::{AtomicWriteOptions, atomic_write_new};
use chrono::{DateTime, Local};
use thiserror::Error;

/// Attempts before giving up on finding a free file name within one second.
const MAX_NAME_ATTEMPTS: u32 = 100;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("could not create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub trait PrintTarget {
    /// Deliver `quote`; returns where it went.
    fn print(&mut self, quote: &str) -> Result<PathBuf, PrintError>;
}

/// Writes each quote to a new timestamped file under `dir`.
#[derive(Debug, Clone)]
pub struct QuoteFilePrinter {
    dir: PathBuf,
}

impl QuoteFilePrinter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_at(&self, quote: &str, now: DateTime<Local>) -> Result<PathBuf, PrintError> {
        fs::create_dir_all(&self.dir).map_err(|source| PrintError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let stamp = now.format("%Y%m%d-%H%M%S").to_string();
        let mut last_err = None;
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let path = self.dir.join(quote_file_name(&stamp, attempt));
            match atomic_write_new(&path, quote.as_bytes(), AtomicWriteOptions::default()) {
                Ok(()) => return Ok(path),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    last_err = Some((path, err));
                }
                Err(source) => return Err(PrintError::Write { path, source }),
            }
        }

        let (path, source) = last_err.unwrap_or_else(|| {
            (
                self.dir.clone(),
                io::Error::new(ErrorKind::AlreadyExists, "no free quote file name"),
            )
        });
        Err(PrintError::Write { path, source })
    }
}

impl PrintTarget for QuoteFilePrinter {
    fn print(&mut self, quote: &str) -> Result<PathBuf, PrintError> {
        self.write_at(quote, Local::now())
    }
}

fn quote_file_name(stamp: &str, attempt: u32) -> String {
    if attempt == 1 {
        format!("buildcost-quote-{stamp}.txt")
    } else {
        format!("buildcost-quote-{stamp}-{attempt}.txt")
    }
}
