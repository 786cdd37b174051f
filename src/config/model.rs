//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".bglaunch.yaml";

/// Launch defaults for bglaunch.
///
/// This struct represents the contents of `.bglaunch.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory receiving log files, relative to the working directory.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// File name prefix for log files (`<prefix>_<timestamp>.log`).
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,

    /// Command launched when no program is given on the command line.
    /// Split into words with shell quoting rules.
    #[serde(default = "default_command")]
    pub command: String,

    /// Extra environment variables set for the child, on top of the
    /// inherited environment.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,

    /// Whether to append launch events to `launches.ndjson`.
    #[serde(default = "default_true")]
    pub journal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_prefix: default_log_prefix(),
            command: default_command(),
            environment: BTreeMap::new(),
            journal: default_true(),
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_prefix() -> String {
    "runner".to_string()
}

fn default_command() -> String {
    "python3 runner.py".to_string()
}

fn default_true() -> bool {
    true
}
