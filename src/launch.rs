//! Final handoff to the editor process.
//!
//! Validates the executable up front so failures surface as classified exit
//! codes instead of a cryptic exec error, installs the recursion-guard
//! marker, and replaces the process image. On platforms without `exec`, the
//! editor runs as a child and its exit status is propagated verbatim.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::detect::system::is_executable;
use crate::error::FatalError;

/// Environment variable marking that edopen is already mid-launch.
///
/// Set on the editor process right before handoff; checked at the next
/// startup before any detection. Present at startup means the user has
/// configured edopen as its own editor and we must bail instead of looping.
pub const GUARD_VAR: &str = "EDOPEN_ACTIVE";

/// True if the recursion-guard marker is present in this process's
/// environment.
#[must_use]
pub fn guard_is_set() -> bool {
    std::env::var_os(GUARD_VAR).is_some()
}

/// Hand the process over to the editor. Diverges on success.
///
/// `argv` is the builder's output (`[executable, args...]`); `files` are
/// appended last. The executable is resolved to an absolute path first so
/// the path consulted for validation is the one actually executed.
pub fn launch(mut argv: Vec<String>, files: &[String]) -> Result<Infallible, FatalError> {
    let Some(program) = argv.first().cloned() else {
        return Err(FatalError::Internal("launch called with an empty argument vector".into()));
    };
    let resolved = resolve_program(&program)?;
    argv[0] = resolved.to_string_lossy().into_owned();
    exec(&resolved, &argv[1..], files)
}

/// Resolve a bare name via `PATH` or validate an explicit path, classifying
/// failures as not-found (127) or not-executable (126).
fn resolve_program(program: &str) -> Result<PathBuf, FatalError> {
    let path = Path::new(program);
    // A path with a separator is taken literally; only bare names go
    // through the search path.
    if path.components().count() > 1 {
        if !path.exists() {
            return Err(FatalError::CommandNotFound(program.to_string()));
        }
        if !is_executable(path) {
            return Err(FatalError::CommandNotExecutable(path.to_path_buf()));
        }
        return Ok(std::fs::canonicalize(path)
            .unwrap_or_else(|_| std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())));
    }

    let found =
        which::which(program).map_err(|_| FatalError::CommandNotFound(program.to_string()))?;
    if !is_executable(&found) {
        return Err(FatalError::CommandNotExecutable(found));
    }
    Ok(found)
}

/// Replace the current process image with the editor.
#[cfg(unix)]
fn exec(program: &Path, args: &[String], files: &[String]) -> Result<Infallible, FatalError> {
    use std::os::unix::process::CommandExt;

    let err = Command::new(program)
        .args(args)
        .args(files)
        .env(GUARD_VAR, "1")
        .exec();

    // exec only returns on failure.
    Err(match err.kind() {
        std::io::ErrorKind::NotFound => {
            FatalError::CommandNotFound(program.display().to_string())
        }
        std::io::ErrorKind::PermissionDenied => {
            FatalError::CommandNotExecutable(program.to_path_buf())
        }
        _ => FatalError::Internal(format!("exec failed: {err}")),
    })
}

/// No process-image replacement here: run the editor as a child, wait, and
/// exit with its status so the caller-visible contract is unchanged.
#[cfg(not(unix))]
fn exec(program: &Path, args: &[String], files: &[String]) -> Result<Infallible, FatalError> {
    let status = Command::new(program)
        .args(args)
        .args(files)
        .env(GUARD_VAR, "1")
        .status()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => {
                FatalError::CommandNotFound(program.display().to_string())
            }
            std::io::ErrorKind::PermissionDenied => {
                FatalError::CommandNotExecutable(program.to_path_buf())
            }
            _ => FatalError::Internal(format!("failed to run editor: {err}")),
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
