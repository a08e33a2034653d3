//! Advisory diagnostics, suppressed when stderr is not a terminal.
//!
//! Keeps piped output clean: scripts capturing our streams never see the
//! chatty "appended --wait" style notes. Fatal one-liners bypass this module
//! and are printed unconditionally by `main`.

use std::io::IsTerminal;

/// Print an advisory line to stderr if stderr is attached to a terminal.
/// Callers must not depend on the text for control flow.
pub fn advise(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{msg}");
    }
}
