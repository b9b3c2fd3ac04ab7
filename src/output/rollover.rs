//! Picks the active log file: `<YYYY-MM-DD>.log`, or the first free
//! `<YYYY-MM-DD>.<n>.log` once the day's base file has outgrown the threshold.
//!
//! Evaluated once when the file output is opened. A long-running process keeps
//! appending to that file even after it passes the threshold.

use crate::internal;
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// 3 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 3 * 1024 * 1024;

const EXTENSION: &str = "log";

/// File to append to for `date` inside `dir`. Does not touch the filesystem
/// beyond reading metadata.
#[must_use]
pub fn select_log_file(dir: &Path, date: NaiveDate, max_bytes: u64) -> PathBuf {
    let stamp = date.format("%Y-%m-%d");
    let base = dir.join(format!("{stamp}.{EXTENSION}"));

    let oversized = fs::metadata(&base).is_ok_and(|meta| meta.is_file() && meta.len() > max_bytes);
    if !oversized {
        return base;
    }

    let mut n: u32 = 1;
    loop {
        let candidate = dir.join(format!("{stamp}.{n}.{EXTENSION}"));
        if !candidate.is_file() {
            internal::debug(&format!(
                "{} exceeds {max_bytes} bytes, rolling over to {}",
                base.display(),
                candidate.display()
            ));
            return candidate;
        }
        n += 1;
    }
}

/// Creates `dir` if needed and selects today's (UTC) file.
///
/// # Errors
/// Directory creation failure.
pub fn active_log_file(dir: &Path, max_bytes: u64) -> Result<PathBuf, crate::Error> {
    fs::create_dir_all(dir)?;
    Ok(select_log_file(dir, Utc::now().date_naive(), max_bytes))
}
