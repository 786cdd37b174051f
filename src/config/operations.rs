//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{LaunchError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LaunchError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            LaunchError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Resolve the config for a launch.
    ///
    /// An explicit path must exist. Without one, `.bglaunch.yaml` in
    /// `working_dir` is used when present and defaults otherwise.
    pub fn resolve(working_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    working_dir.join(path)
                };
                Self::load(path)
            }
            None => {
                let default_path = working_dir.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LaunchError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `log_dir` must be non-empty
    /// - `log_prefix` must be non-empty and contain no path separators
    /// - `command` must contain at least one word
    pub fn validate(&self) -> Result<()> {
        if self.log_dir.trim().is_empty() {
            return Err(LaunchError::UserError(
                "config validation failed: log_dir must not be empty".to_string(),
            ));
        }

        validate_log_prefix(&self.log_prefix)?;

        if self.command_words()?.is_empty() {
            return Err(LaunchError::UserError(
                "config validation failed: command must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Split the configured default command into program and arguments.
    pub fn command_words(&self) -> Result<Vec<String>> {
        shell_words::split(&self.command).map_err(|e| {
            LaunchError::UserError(format!(
                "failed to parse command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.command, e
            ))
        })
    }
}

/// Check that a log file prefix is usable as a plain file name component.
pub(crate) fn validate_log_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(LaunchError::UserError(
            "config validation failed: log_prefix must not be empty".to_string(),
        ));
    }
    if prefix.contains('/') || prefix.contains('\\') {
        return Err(LaunchError::UserError(format!(
            "config validation failed: log_prefix must not contain path separators (found '{}')",
            prefix
        )));
    }
    Ok(())
}
