//! Backend capability probe.
//!
//! The rich execution path is an Agents SDK adapter that may or may not be
//! installed alongside the orchestrator. Detection is a PATH lookup for the
//! adapter executable; there is deliberately no dynamic loading or error
//! juggling here, just a two-variant routing decision.
//!
//! No adapter wiring exists yet, so both variants currently converge on the
//! fallback — [`Backend::AgentsSdk`] only changes what gets announced.

use std::env;
use std::path::PathBuf;

/// Executable whose presence on PATH signals the SDK capability.
pub const SDK_PROBE_BINARY: &str = "agents-sdk";

/// Execution strategy for this pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Agents SDK present in the runtime (adapter wiring still pending).
    AgentsSdk,
    /// No SDK available; run the codex CLI directly.
    CodexCli,
}

/// Decide the execution strategy from runtime capability.
pub fn detect_backend() -> Backend {
    if find_in_path(SDK_PROBE_BINARY).is_some() {
        Backend::AgentsSdk
    } else {
        Backend::CodexCli
    }
}

/// Locate `binary` on the current PATH.
fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
