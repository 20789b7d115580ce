//! Error types for the agents-runner launcher.
//!
//! Uses thiserror for derive macros. Every error is terminal at process
//! scope: the launcher has no caller to return structured errors to, only
//! an exit code and the pane's terminal.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Backend unavailability is deliberately not represented here: a missing
/// rich backend is a routing decision handled inside the launcher, never a
/// failure surfaced to the caller.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Invocation parameter violated a constraint clap cannot express.
    #[error("{0}")]
    Usage(String),

    /// The process-image replacement call returned instead of replacing.
    #[error("failed to exec '{command}': {source}")]
    ExecFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Usage(_) => exit_codes::USAGE_ERROR,
            RunnerError::ExecFailed { .. } => exit_codes::COMMAND_NOT_FOUND,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_has_correct_exit_code() {
        let err = RunnerError::Usage("--role must not be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn exec_failure_maps_to_127() {
        let err = RunnerError::ExecFailed {
            command: "codex".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), exit_codes::COMMAND_NOT_FOUND);
    }

    #[test]
    fn exec_failure_message_names_the_command() {
        let err = RunnerError::ExecFailed {
            command: "codex".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("failed to exec 'codex'"));
    }
}
