//! Agents-runner: per-pane worker launcher for tmux multi-agent sessions.
//!
//! Each tmux pane in an orchestration session runs one thread (a coding
//! agent or a merge-coordination role). This binary starts that thread's
//! process: it publishes session metadata to the environment, probes for a
//! richer Agents SDK backend, and replaces itself with either the backend
//! adapter or a fallback `codex` invocation.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod interrupt;
pub mod launcher;

use cli::Cli;
use launcher::{ExecImage, LaunchRequest};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Installed before anything blocks so an early Ctrl-C still produces
    // the interrupted notice and terminates via the signal.
    if let Err(err) = interrupt::install_notice() {
        eprintln!("Warning: could not install interrupt handler: {}", err);
    }

    let cli = Cli::parse_args();

    let request = match LaunchRequest::from_cli(cli) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    // On the exec path this call never returns Ok: the process image is
    // replaced and whatever exit code the pane reports afterwards belongs
    // to the fallback tool.
    match launcher::run(&request, &ExecImage) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
