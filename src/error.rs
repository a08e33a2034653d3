//! Fatal error taxonomy with the exit codes each condition maps to.

use std::path::PathBuf;

/// A condition that terminates the process with a fixed exit code.
///
/// Detector and selector failures are never fatal on their own; only the
/// orchestrator in `main` turns an exhausted fallback chain or a launch
/// precondition violation into one of these.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// Every detection source and the interactive fallback came up empty.
    #[error("no editor found; set $VISUAL or $EDITOR, or run `edopen --config`")]
    NoEditorFound,

    /// The recursion-guard variable was already set at startup, meaning this
    /// program was configured as its own editor.
    #[error("recursion detected: edopen is configured as its own editor")]
    RecursionDetected,

    /// The resolved command does not exist on the search path.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// The resolved command exists but lacks execute permission.
    #[error("command not executable: {}", .0.display())]
    CommandNotExecutable(PathBuf),

    /// A state the design asserts cannot occur. Defensive only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FatalError {
    /// Process exit status for this condition.
    ///
    /// `126`/`127` mirror the shell convention for "found but not executable"
    /// and "not found"; everything else is a generic `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CommandNotExecutable(_) => 126,
            Self::CommandNotFound(_) => 127,
            Self::NoEditorFound | Self::RecursionDetected | Self::Internal(_) => 1,
        }
    }
}
