//! Detached program launcher.
//!
//! A launch is a single linear sequence: ensure the log directory, create a
//! fresh timestamped log file, spawn the program detached with stdout and
//! stderr redirected into that file, and hand back the child's PID. The
//! launcher never waits on, polls, or signals the child afterwards.
//!
//! Process creation goes through the [`Spawner`] trait so tests can swap in
//! a fake; [`DetachedSpawner`] is the real implementation.

pub mod log_file;
mod spawn;


pub use spawn::DetachedSpawner;

use crate::context::LaunchContext;
use crate::error::{LaunchError, Result};
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// The program to launch and how to launch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Program name or path, resolved through `PATH` by the OS.
    pub program: String,
    /// Arguments passed through verbatim.
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment.
    pub environment: BTreeMap<String, String>,
}

impl LaunchRequest {
    /// Build a request from a command line (`program arg...`).
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        let mut words = words.into_iter();
        let program = words
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| LaunchError::UserError("no program to launch".to_string()))?;

        Ok(Self {
            program,
            args: words.collect(),
            environment: BTreeMap::new(),
        })
    }

    /// Add environment variables, replacing earlier values for the same key.
    pub fn with_environment<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.environment.extend(vars);
        self
    }

    /// Shell-quoted rendering of the command line, for display and the journal.
    pub fn display_command(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(self.args.iter()))
    }
}

/// Creates a process for a launch request.
pub trait Spawner {
    /// Start `request` in `working_dir` with stdout and stderr written to
    /// `log`, returning the new process ID without waiting for it.
    fn spawn(&self, request: &LaunchRequest, working_dir: &Path, log: File) -> io::Result<u32>;
}

/// Outcome of a successful launch.
#[derive(Debug, Clone)]
pub struct Launched {
    /// OS process ID of the child.
    pub pid: u32,
    /// Absolute path of the log file receiving the child's output.
    pub log_path: PathBuf,
}

/// Launches programs into timestamped log files under a context's log directory.
pub struct Launcher<S: Spawner> {
    spawner: S,
    ctx: LaunchContext,
    prefix: String,
}

impl<S: Spawner> Launcher<S> {
    pub fn new(spawner: S, ctx: LaunchContext, prefix: impl Into<String>) -> Self {
        Self {
            spawner,
            ctx,
            prefix: prefix.into(),
        }
    }

    pub fn context(&self) -> &LaunchContext {
        &self.ctx
    }

    /// Launch `request`, stamping the log file with the current local time.
    pub fn launch(&self, request: &LaunchRequest) -> Result<Launched> {
        self.launch_at(request, Local::now().naive_local())
    }

    /// Launch `request`, stamping the log file with `at`.
    ///
    /// # Errors
    ///
    /// * `FilesystemError` - the log directory or file could not be created;
    ///   nothing was spawned.
    /// * `SpawnError` - the OS refused to start the program; the empty log
    ///   file created for it has been removed.
    pub fn launch_at(&self, request: &LaunchRequest, at: NaiveDateTime) -> Result<Launched> {
        self.ctx.ensure_log_dir()?;

        let (log_path, log) = log_file::create_log_file(&self.ctx.log_dir, &self.prefix, at)?;

        match self.spawner.spawn(request, &self.ctx.working_dir, log) {
            Ok(pid) => Ok(Launched { pid, log_path }),
            Err(e) => {
                // Nothing was written yet; a leftover file would look like a launched run.
                let _ = std::fs::remove_file(&log_path);
                Err(LaunchError::SpawnError(format!(
                    "failed to start '{}': {}\n\
                     Fix: ensure the program is installed and in PATH.",
                    request.program, e
                )))
            }
        }
    }
}
