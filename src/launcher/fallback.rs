//! Fallback execution: build the codex argv and replace the process image.
//!
//! The replacement is a real exec on Unix: same pid, inherited environment
//! and file descriptors, so tmux signal delivery routes to the tool once
//! the replacement succeeds. The seam is the [`ProcessImage`] trait so
//! tests can observe the argv and environment without leaving the test
//! process.

use crate::error::{Result, RunnerError};
use std::io::{self, Write};
use std::process::Command;

/// Invocation name of the fallback interactive tool.
pub const FALLBACK_BIN: &str = "codex";

/// Keeps the tool out of the alternate screen so tmux pane scrollback and
/// pane capture keep working.
pub const NO_ALT_SCREEN_FLAG: &str = "--no-alt-screen";

/// Process-image replacement seam.
pub trait ProcessImage {
    /// Replace the current process with `argv`.
    ///
    /// A real implementation returns only on failure. Test stubs may
    /// return `Ok(())` instead of replacing anything.
    fn replace(&self, argv: &[String]) -> io::Result<()>;
}

/// Production implementation: execvp semantics.
pub struct ExecImage;

impl ProcessImage for ExecImage {
    #[cfg(unix)]
    fn replace(&self, argv: &[String]) -> io::Result<()> {
        use std::os::unix::process::CommandExt;
        // exec only returns on failure; PATH search, environment and fd
        // inheritance all come with it.
        Err(Command::new(&argv[0]).args(&argv[1..]).exec())
    }

    /// Non-Unix approximation: spawn, wait, exit with the child's status.
    ///
    /// This changes process identity, so terminal signal delivery differs
    /// from the Unix exec path. Deliberate deviation on targets without
    /// process-image replacement.
    #[cfg(not(unix))]
    fn replace(&self, argv: &[String]) -> io::Result<()> {
        let status = Command::new(&argv[0]).args(&argv[1..]).status()?;
        std::process::exit(status.code().unwrap_or(crate::exit_codes::COMMAND_NOT_FOUND));
    }
}

/// Build the fallback argv.
///
/// Always `codex --no-alt-screen`; the trimmed prompt rides along as a
/// single positional argument only when it has non-whitespace content.
pub fn build_fallback_command(initial_prompt: &str) -> Vec<String> {
    let mut argv = vec![FALLBACK_BIN.to_string(), NO_ALT_SCREEN_FLAG.to_string()];
    let prompt = initial_prompt.trim();
    if !prompt.is_empty() {
        argv.push(prompt.to_string());
    }
    argv
}

/// Echo the quoted command line, flush, and hand the process over.
///
/// There is no step after this one: if the replacement call comes back,
/// the returned error carries exit code 127.
pub fn exec_fallback(initial_prompt: &str, image: &dyn ProcessImage) -> Result<()> {
    let argv = build_fallback_command(initial_prompt);
    println!("[agents-runner] fallback -> {}", shell_words::join(&argv));
    let _ = io::stdout().flush();

    image.replace(&argv).map_err(|source| RunnerError::ExecFailed {
        command: argv[0].clone(),
        source,
    })
}
