//! Exit code constants for the agents-runner launcher.
//!
//! - 0: Success (unreachable on the exec path; the replacement process
//!   owns the pane's exit status from then on)
//! - 1: Usage error (invalid parameter caught after clap parsing)
//! - 127: Fallback tool could not be found or exec'd

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: invalid invocation parameter.
pub const USAGE_ERROR: i32 = 1;

/// The fallback binary could not be located or executed.
pub const COMMAND_NOT_FOUND: i32 = 127;
