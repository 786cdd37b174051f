//! Exit code constants for the bglaunch CLI.
//!
//! - 0: Child spawned successfully
//! - 1: Filesystem failure (log directory or log file could not be created)
//! - 2: Spawn failure (missing executable, resource limits)
//! - 3: User error (invalid config or arguments)

/// Successful spawn. The child's own outcome is not reflected here.
pub const SUCCESS: i32 = 0;

/// Filesystem failure: log directory or log file could not be created.
pub const FILESYSTEM_FAILURE: i32 = 1;

/// Spawn failure: the OS could not create the child process.
pub const SPAWN_FAILURE: i32 = 2;

/// User error: bad config file or malformed arguments.
pub const USER_ERROR: i32 = 3;
