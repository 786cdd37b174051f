use crate::launcher::{LaunchRequest, Spawner};
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::{Duration, Instant};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Poll a file until it contains `needle`, returning its final contents.
///
/// Detached children are never waited on, so tests observe them through
/// their log file.
pub(crate) fn wait_for_contents(path: &Path, needle: &str, timeout: Duration) -> String {
    let start = Instant::now();
    loop {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.contains(needle) || start.elapsed() >= timeout {
            return content;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

/// List log files in `dir` whose names start with `prefix`.
pub(crate) fn log_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&format!("{}_", prefix)) && n.ends_with(".log"))
        })
        .collect();
    files.sort();
    files
}

/// Records each spawn instead of creating a process.
pub(crate) struct FakeSpawner {
    pub(crate) pid: Option<u32>,
    pub(crate) calls: RefCell<Vec<(LaunchRequest, PathBuf)>>,
    pub(crate) write_to_log: Option<&'static str>,
}

impl FakeSpawner {
    pub(crate) fn succeeding(pid: u32) -> Self {
        Self {
            pid: Some(pid),
            calls: RefCell::new(Vec::new()),
            write_to_log: None,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            pid: None,
            calls: RefCell::new(Vec::new()),
            write_to_log: None,
        }
    }
}

impl Spawner for &FakeSpawner {
    fn spawn(&self, request: &LaunchRequest, working_dir: &Path, mut log: File) -> io::Result<u32> {
        self.calls
            .borrow_mut()
            .push((request.clone(), working_dir.to_path_buf()));
        if let Some(text) = self.write_to_log {
            log.write_all(text.as_bytes())?;
        }
        self.pid
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}
