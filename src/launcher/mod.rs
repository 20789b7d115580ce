//! Launch pipeline: banner, metadata publication, backend probe, exec.
//!
//! The pipeline runs once per pane and is strictly ordered:
//!
//! 1. banner line on stdout (flushed — supervising tooling tails the pane
//!    for it before the process image changes)
//! 2. metadata exported to the environment (inherited at exec time, not
//!    communicated afterwards)
//! 3. backend probe, which today always routes to the fallback
//! 4. process-image replacement with the fallback `codex` invocation
//!
//! Only step 4 can fail; every earlier step is infallible by construction.

mod backend;
mod fallback;


pub use backend::{Backend, detect_backend};
pub use fallback::{ExecImage, ProcessImage, build_fallback_command};

use crate::cli::Cli;
use crate::error::{Result, RunnerError};
use std::env;
use std::io::{self, Write};

/// Environment variable carrying the runner mode, for wrapper scripts.
pub const ENV_RUNNER_MODE: &str = "COBOO_RUNNER_MODE";
/// Environment variable carrying the session id as a decimal string.
pub const ENV_SESSION_ID: &str = "COBOO_SESSION_ID";
/// Environment variable carrying the thread id as a decimal string.
pub const ENV_THREAD_ID: &str = "COBOO_THREAD_ID";
/// Environment variable carrying the thread role.
pub const ENV_THREAD_ROLE: &str = "COBOO_THREAD_ROLE";

/// Resolved launch parameters for one pane.
///
/// Built once from CLI arguments, consumed by the banner and probe steps,
/// projected into the environment, then discarded at exec time. Never
/// persisted.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub mode: String,
    pub session_id: i64,
    pub thread_id: i64,
    pub role: String,
    pub initial_prompt: String,
}

impl LaunchRequest {
    /// Validate parsed CLI arguments into a launch request.
    ///
    /// clap already guarantees presence and integer parsing; the remaining
    /// constraint is that `--role` carries actual content.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.role.trim().is_empty() {
            return Err(RunnerError::Usage(
                "--role must not be empty".to_string(),
            ));
        }
        Ok(Self {
            mode: cli.mode,
            session_id: cli.session_id,
            thread_id: cli.thread_id,
            role: cli.role,
            initial_prompt: cli.initial_prompt,
        })
    }
}

/// Run the launch pipeline for `request`, replacing the current process
/// via `image`.
///
/// On the real [`ExecImage`] this returns only on failure; `Ok(())` is
/// reachable only through a test stub that declines to exec.
pub fn run(request: &LaunchRequest, image: &dyn ProcessImage) -> Result<()> {
    print_banner(request);
    publish_metadata(request);

    match detect_backend() {
        Backend::AgentsSdk => {
            // Placeholder: the SDK is present in the runtime but no direct
            // adapter is wired up yet. A future integration slots in here;
            // until then the fallback keeps worker execution functional.
            println!(
                "[agents-runner] agents sdk detected, but no direct runtime \
                 adapter is bundled. falling back to codex cli execution."
            );
            let _ = io::stdout().flush();
        }
        Backend::CodexCli => {}
    }

    fallback::exec_fallback(&request.initial_prompt, image)
}

/// Format the banner line announcing the resolved parameters.
pub fn format_banner(request: &LaunchRequest) -> String {
    format!(
        "[agents-runner] mode={} session_id={} thread_id={} role={}",
        request.mode, request.session_id, request.thread_id, request.role
    )
}

fn print_banner(request: &LaunchRequest) {
    println!("{}", format_banner(request));
    let _ = io::stdout().flush();
}

/// Export the launch metadata for wrapper scripts.
///
/// Must happen before exec: the environment is inherited at replace time.
fn publish_metadata(request: &LaunchRequest) {
    // SAFETY: the only other thread is the SIGINT watcher, which never
    // touches the environment.
    unsafe {
        env::set_var(ENV_RUNNER_MODE, &request.mode);
        env::set_var(ENV_SESSION_ID, request.session_id.to_string());
        env::set_var(ENV_THREAD_ID, request.thread_id.to_string());
        env::set_var(ENV_THREAD_ROLE, &request.role);
    }
}
