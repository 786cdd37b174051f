//! Detached process spawning.
//!
//! On Unix the child calls `setsid()` between fork and exec, so it leads a
//! new session without a controlling terminal and does not receive the
//! terminal's SIGHUP. On Windows it is created with `DETACHED_PROCESS`
//! in its own process group.

use super::{LaunchRequest, Spawner};
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawns real OS processes, detached from the launcher's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn(&self, request: &LaunchRequest, working_dir: &Path, log: File) -> io::Result<u32> {
        // stdout and stderr share one open file description, so interleaved
        // writes land in order.
        let stderr_log = log.try_clone()?;

        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .current_dir(working_dir)
            .envs(&request.environment)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(stderr_log));

        detach(&mut command);

        // Dropping the handle neither waits on nor kills the child.
        let child = command.spawn()?;
        Ok(child.id())
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: the hook runs in the forked child before exec and only calls
    // setsid(2), which is async-signal-safe and touches no shared state.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}
