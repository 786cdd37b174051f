//! CLI argument parsing for bglaunch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument structure; actual implementations
//! are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Launch a program in the background, detached from the terminal.
///
/// The program's stdout and stderr go to `logs/runner_<YYYYMMDD_HHMMSS>.log`
/// and the launcher returns as soon as the process has started, printing
/// its PID. Options must come before the program; everything from the
/// program name onward is passed through untouched.
#[derive(Parser, Debug)]
#[command(name = "bglaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory for log files, relative to the current directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Log file name prefix.
    #[arg(long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Extra environment variable for the program (repeatable).
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Config file (default: .bglaunch.yaml in the current directory, if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not record this launch in the launch journal.
    #[arg(long)]
    pub no_journal: bool,

    /// Show recent launches instead of launching.
    #[arg(long, conflicts_with = "command")]
    pub history: bool,

    /// Number of entries shown by --history.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Program to launch followed by its arguments.
    ///
    /// Defaults to the `command` from the config file (`python3 runner.py`).
    #[arg(value_name = "PROGRAM", trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
