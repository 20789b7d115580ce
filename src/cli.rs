//! CLI argument parsing for agents-runner.
//!
//! Uses clap derive macros for declarative argument definitions. Parameter
//! construction and validation beyond clap's own checks live in the
//! `launcher` module.

use clap::Parser;

/// Per-pane worker launcher for tmux-based multi-agent sessions.
///
/// The orchestrator spawns one invocation per pane, passing the pane's
/// session/thread identity. The launcher prints a banner, exports the
/// metadata for wrapper scripts, and execs either a rich backend adapter
/// or the fallback `codex` CLI.
#[derive(Parser, Debug)]
#[command(name = "agents-runner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Execution mode for this pane (e.g. "child" for a worker pane,
    /// "merge" for a merge-coordination pane).
    #[arg(long, default_value = "child")]
    pub mode: String,

    /// Identifier of the owning orchestration session.
    #[arg(long)]
    pub session_id: i64,

    /// Identifier of this pane's thread within the session.
    #[arg(long)]
    pub thread_id: i64,

    /// Functional role of the thread (e.g. "worker", "merger").
    #[arg(long)]
    pub role: String,

    /// Optional first input seeded into the launched tool.
    #[arg(long, default_value = "")]
    pub initial_prompt: String,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Missing or malformed required flags terminate the process through
    /// clap's standard usage-error path before any side effect.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "agents-runner",
            "--session-id",
            "7",
            "--thread-id",
            "12",
            "--role",
            "worker",
        ]
    }

    #[test]
    fn parses_required_args_with_defaults() {
        let cli = Cli::try_parse_from(base_args()).unwrap();
        assert_eq!(cli.mode, "child");
        assert_eq!(cli.session_id, 7);
        assert_eq!(cli.thread_id, 12);
        assert_eq!(cli.role, "worker");
        assert_eq!(cli.initial_prompt, "");
    }

    #[test]
    fn parses_explicit_mode_and_prompt() {
        let mut args = base_args();
        args.extend(["--mode", "merge", "--initial-prompt", "review the queue"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.mode, "merge");
        assert_eq!(cli.initial_prompt, "review the queue");
    }

    #[test]
    fn missing_session_id_is_rejected() {
        let result = Cli::try_parse_from([
            "agents-runner",
            "--thread-id",
            "12",
            "--role",
            "worker",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_thread_id_is_rejected() {
        let result = Cli::try_parse_from([
            "agents-runner",
            "--session-id",
            "7",
            "--role",
            "worker",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_role_is_rejected() {
        let result = Cli::try_parse_from([
            "agents-runner",
            "--session-id",
            "7",
            "--thread-id",
            "12",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn non_integer_session_id_is_rejected() {
        let result = Cli::try_parse_from([
            "agents-runner",
            "--session-id",
            "seven",
            "--thread-id",
            "12",
            "--role",
            "worker",
        ]);
        assert!(result.is_err());
    }
}
