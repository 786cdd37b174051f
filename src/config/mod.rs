//! Configuration model for bglaunch.
//!
//! This module defines the Config struct that represents `.bglaunch.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE};
pub(crate) use operations::validate_log_prefix;
