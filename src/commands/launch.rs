//! Implementation of the default launch action.
//!
//! Resolves config and CLI overrides into a [`LaunchRequest`], launches it
//! detached, prints the PID and log path, and records the attempt in the
//! launch journal.

use super::{current_dir, display_path};
use crate::cli::Cli;
use crate::config::{Config, validate_log_prefix};
use crate::context::LaunchContext;
use crate::error::{LaunchError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::launcher::{DetachedSpawner, LaunchRequest, Launched, Launcher, Spawner};
use serde_json::json;
use std::path::Path;

/// Launch the requested program from the current directory.
pub fn cmd_launch(cli: &Cli) -> Result<()> {
    let cwd = current_dir()?;
    launch_in(cli, &cwd, DetachedSpawner)?;
    Ok(())
}

/// Everything a launch needs once config and CLI flags are merged.
#[derive(Debug)]
struct LaunchPlan {
    request: LaunchRequest,
    log_dir: String,
    prefix: String,
    journal: bool,
}

impl LaunchPlan {
    /// Merge config defaults with CLI overrides. CLI values win.
    fn build(cli: &Cli, config: Config) -> Result<Self> {
        let log_dir = cli.log_dir.clone().unwrap_or(config.log_dir.clone());
        if log_dir.trim().is_empty() {
            return Err(LaunchError::UserError(
                "log directory must not be empty".to_string(),
            ));
        }

        let prefix = cli.prefix.clone().unwrap_or(config.log_prefix.clone());
        validate_log_prefix(&prefix)?;

        let words = if cli.command.is_empty() {
            config.command_words()?
        } else {
            cli.command.clone()
        };

        let request = LaunchRequest::from_words(words)?
            .with_environment(config.environment)
            .with_environment(parse_env_pairs(&cli.env)?);

        Ok(Self {
            request,
            log_dir,
            prefix,
            journal: config.journal && !cli.no_journal,
        })
    }
}

/// Launch from `working_dir` using `spawner`.
pub(crate) fn launch_in<S: Spawner>(cli: &Cli, working_dir: &Path, spawner: S) -> Result<Launched> {
    let config = Config::resolve(working_dir, cli.config.as_deref())?;
    let plan = LaunchPlan::build(cli, config)?;
    let command_line = plan.request.display_command();

    println!("Starting {} in background...", command_line);

    let ctx = LaunchContext::resolve_from(working_dir, &plan.log_dir);
    let launcher = Launcher::new(spawner, ctx, plan.prefix);

    match launcher.launch(&plan.request) {
        Ok(launched) => {
            let log_file = display_path(working_dir, &launched.log_path);
            println!(
                "Started {} with PID {}, logging to {}",
                plan.request.program, launched.pid, log_file
            );

            if plan.journal {
                let event = Event::new(EventAction::Launch)
                    .with_pid(launched.pid)
                    .with_details(json!({
                        "command": command_line,
                        "log_file": log_file,
                    }));
                // The child is already running; a journal problem must not turn
                // a successful launch into a failure.
                if let Err(e) = append_event(launcher.context(), &event) {
                    eprintln!("Warning: failed to record launch: {}", e);
                }
            }

            Ok(launched)
        }
        Err(err) => {
            if plan.journal && matches!(err, LaunchError::SpawnError(_)) {
                let event = Event::new(EventAction::LaunchFailed).with_details(json!({
                    "command": command_line,
                    "error": err.to_string(),
                }));
                let _ = append_event(launcher.context(), &event);
            }
            Err(err)
        }
    }
}

/// Parse `KEY=VALUE` pairs from `--env` flags.
fn parse_env_pairs(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(LaunchError::UserError(format!(
                "invalid --env value '{}': expected KEY=VALUE",
                pair
            ))),
        })
        .collect()
}
