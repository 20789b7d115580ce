//! Interrupt passthrough for the launcher window.
//!
//! Between startup and successful exec there is a short window where a
//! Ctrl-C lands in launcher code rather than in the tool that will own the
//! pane. The tmux session expects interrupt semantics to hold either way:
//! print a short notice for pane scrapers, then die by the signal itself so
//! job control sees a signal-terminated process, not a normal exit.
//!
//! After a successful exec the handler is gone along with the rest of the
//! process image and SIGINT routes straight to the replacement tool.

use signal_hook::consts::SIGINT;
use signal_hook::iterator::Signals;
use std::io::{self, Write};
use std::thread;

/// Install the SIGINT watcher thread.
///
/// The watcher prints the interrupted notice, flushes, and re-raises the
/// signal via its default action. It never reads or writes the process
/// environment, which keeps metadata publication in the main thread safe.
pub fn install_notice() -> io::Result<()> {
    let mut signals = Signals::new([SIGINT])?;
    thread::Builder::new()
        .name("sigint-notice".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                println!("[agents-runner] interrupted");
                let _ = io::stdout().flush();
                // Restores the default disposition and re-raises, so the
                // process terminates with the signal's exit status.
                let _ = signal_hook::low_level::emulate_default_handler(signal);
            }
        })?;
    Ok(())
}
