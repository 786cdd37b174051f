//! Working-directory and log-path resolution for bglaunch.
//!
//! The log directory is interpreted relative to the directory the launcher
//! was invoked from. Every path produced here is absolute, so the printed
//! log location stays valid for the user no matter where they look from.

use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};

/// File name of the launch journal inside the log directory.
pub const JOURNAL_FILE_NAME: &str = "launches.ndjson";

/// Resolved paths for a launch.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Absolute path of the invoking working directory; inherited by the child.
    pub working_dir: PathBuf,

    /// Absolute path to the log directory (default: `{working_dir}/logs/`).
    pub log_dir: PathBuf,
}

impl LaunchContext {
    /// Resolve the launch context for a working directory.
    ///
    /// An absolute `log_dir` is used as-is.
    pub fn resolve_from<P: AsRef<Path>>(working_dir: P, log_dir: &str) -> Self {
        let working_dir = working_dir.as_ref().to_path_buf();
        let log_dir = working_dir.join(log_dir);

        Self {
            working_dir,
            log_dir,
        }
    }

    /// Path to the NDJSON launch journal.
    pub fn journal_file(&self) -> PathBuf {
        self.log_dir.join(JOURNAL_FILE_NAME)
    }

    /// Create the log directory and any missing parents.
    pub fn ensure_log_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir).map_err(|e| {
            LaunchError::FilesystemError(format!(
                "failed to create log directory '{}': {}",
                self.log_dir.display(),
                e
            ))
        })
    }
}
