//! Timestamped log file naming and creation.
//!
//! Names follow `<prefix>_<YYYYMMDD_HHMMSS>.log`. Files are opened with
//! create-new semantics, so two launches in the same second get
//! `<prefix>_<ts>_1.log`, `<prefix>_<ts>_2.log`, ... instead of sharing or
//! truncating a log.

use crate::error::{LaunchError, Result};
use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Timestamp format embedded in log file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Highest collision suffix tried before giving up.
const MAX_SUFFIX: u32 = 999;

/// Format a launch time for use in a log file name.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the file name for a given collision attempt (0 means no suffix).
pub fn log_file_name(prefix: &str, timestamp: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{}_{}.log", prefix, timestamp)
    } else {
        format!("{}_{}_{}.log", prefix, timestamp, attempt)
    }
}

/// Create a fresh log file in `dir`, never reusing an existing name.
pub fn create_log_file(dir: &Path, prefix: &str, at: NaiveDateTime) -> Result<(PathBuf, File)> {
    let timestamp = format_timestamp(at);

    for attempt in 0..=MAX_SUFFIX {
        let path = dir.join(log_file_name(prefix, &timestamp, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(LaunchError::FilesystemError(format!(
                    "failed to create log file '{}': {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    Err(LaunchError::FilesystemError(format!(
        "failed to create log file in '{}': {} logs already exist for timestamp {}",
        dir.display(),
        MAX_SUFFIX + 1,
        timestamp
    )))
}
