//! Implementation of `--history`: show recent entries of the launch journal.

use super::current_dir;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::LaunchContext;
use crate::error::Result;
use crate::events::{Event, EventAction, read_last_events};
use chrono::Local;
use std::path::Path;

/// Print the most recent launches recorded under the configured log directory.
pub fn cmd_history(cli: &Cli) -> Result<()> {
    let cwd = current_dir()?;
    print!("{}", render_history(cli, &cwd)?);
    Ok(())
}

fn render_history(cli: &Cli, working_dir: &Path) -> Result<String> {
    let config = Config::resolve(working_dir, cli.config.as_deref())?;
    let log_dir = cli.log_dir.as_deref().unwrap_or(&config.log_dir);
    let ctx = LaunchContext::resolve_from(working_dir, log_dir);

    let events = read_last_events(&ctx.journal_file(), cli.limit);
    if events.is_empty() {
        return Ok("No launches recorded.\n".to_string());
    }

    let mut out = format!("Recent launches (last {}):\n", events.len());
    for event in &events {
        out.push_str(&format_event(event));
        out.push('\n');
    }
    Ok(out)
}

fn format_event(event: &Event) -> String {
    let when = event.ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    let pid = event
        .pid
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let command = event.detail("command").unwrap_or("-");

    match event.action {
        EventAction::Launch => format!(
            "  {}  {:13}  {:>7}  {}  {}",
            when,
            event.action,
            pid,
            event.detail("log_file").unwrap_or("-"),
            command
        ),
        EventAction::LaunchFailed => {
            let error = event
                .detail("error")
                .and_then(|e| e.lines().next())
                .unwrap_or("unknown error");
            format!(
                "  {}  {:13}  {:>7}  {}  ({})",
                when, event.action, pid, command, error
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::append_event;
    use crate::test_support::DirGuard;
    use clap::Parser;
    use serde_json::json;
    use serial_test::serial;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bglaunch").chain(args.iter().copied())).unwrap()
    }

    fn seed(dir: &Path, log_dir: &str, count: u32) {
        let ctx = LaunchContext::resolve_from(dir, log_dir);
        ctx.ensure_log_dir().unwrap();
        for pid in 1..=count {
            let event = Event::new(EventAction::Launch)
                .with_pid(1000 + pid)
                .with_details(json!({
                    "command": format!("worker {}", pid),
                    "log_file": format!("{}/runner_{}.log", log_dir, pid),
                }));
            append_event(&ctx, &event).unwrap();
        }
    }

    #[test]
    fn test_history_without_journal() {
        let temp_dir = TempDir::new().unwrap();
        let out = render_history(&cli(&["--history"]), temp_dir.path()).unwrap();
        assert_eq!(out, "No launches recorded.\n");
    }

    #[test]
    fn test_history_lists_recent_launches() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path(), "logs", 3);

        let out = render_history(&cli(&["--history", "--limit", "2"]), temp_dir.path()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Recent launches (last 2):");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("1002"));
        assert!(lines[1].contains("worker 2"));
        assert!(lines[2].contains("1003"));
        assert!(lines[2].contains("logs/runner_3.log"));
        assert!(!out.contains("worker 1"));
    }

    #[test]
    fn test_history_honours_log_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path(), "elsewhere", 1);

        let default_out = render_history(&cli(&["--history"]), temp_dir.path()).unwrap();
        assert_eq!(default_out, "No launches recorded.\n");

        let out = render_history(
            &cli(&["--history", "--log-dir", "elsewhere"]),
            temp_dir.path(),
        )
        .unwrap();
        assert!(out.contains("worker 1"));
    }

    #[test]
    fn test_format_failed_event_shows_first_error_line() {
        let event = Event::new(EventAction::LaunchFailed).with_details(json!({
            "command": "ghost --run",
            "error": "failed to start 'ghost': not found\nFix: ensure the program is installed and in PATH.",
        }));

        let line = format_event(&event);
        assert!(line.contains("launch_failed"));
        assert!(line.contains("ghost --run"));
        assert!(line.contains("(failed to start 'ghost': not found)"));
        assert!(!line.contains("Fix:"));
    }

    #[test]
    #[serial]
    fn test_cmd_history_reads_from_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path(), "logs", 1);
        let _guard = DirGuard::new(temp_dir.path());

        cmd_history(&cli(&["--history"])).unwrap();
    }
}
