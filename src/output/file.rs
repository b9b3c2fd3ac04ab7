//! Append-mode log file whose path is fixed at open time by [`rollover`](super::rollover).

use super::{Output, rollover};
use crate::internal;
use crate::level::Level;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// The handle is closed when the output is dropped.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileOutput {
    /// Creates `dir`, selects the active file for today and opens it for append.
    ///
    /// # Errors
    /// Directory creation or file open failure.
    pub fn open(dir: &Path, max_bytes: u64) -> Result<Self, crate::Error> {
        let path = rollover::active_log_file(dir, max_bytes)?;
        Self::open_path(path)
    }

    /// Opens an explicit path for append, bypassing rollover.
    ///
    /// # Errors
    /// File open failure.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug(&format!("Logging to file {}", path.display()));
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// File chosen at open time; it never changes for this output.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, _level: &Level, line: &str) -> Result<(), crate::Error> {
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');

        // Single write per line so concurrent records never interleave.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
