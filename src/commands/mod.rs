//! Command implementations for bglaunch.
//!
//! The launcher has a single default action (launch a program) and one
//! read-only action (`--history`). This module routes the parsed CLI to
//! the matching handler.

mod history;
mod launch;

use crate::cli::Cli;
use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    if cli.history {
        history::cmd_history(&cli)
    } else {
        launch::cmd_launch(&cli)
    }
}

/// The directory the launcher was invoked from.
fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        LaunchError::FilesystemError(format!("failed to get current working directory: {}", e))
    })
}

/// Render `path` relative to `base` when it lies underneath it.
fn display_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
