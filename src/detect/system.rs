//! System-default detection source: the `/usr/bin/editor` alternatives link.
//!
//! Debian-style systems maintain a system-wide default editor as a symlink
//! chain under the alternatives mechanism. If the link resolves to a real
//! executable we use that path; if resolution fails but the alias itself is
//! executable (e.g. a plain file was installed at that path) we use the
//! alias directly.

use super::ResolvedEditor;
use std::path::Path;

/// Well-known alias path for the system default editor.
#[cfg(unix)]
const ALTERNATIVES_ALIAS: &str = "/usr/bin/editor";

/// Detect the system-wide default editor.
#[cfg(unix)]
#[must_use]
pub fn detect() -> Option<ResolvedEditor> {
    from_alias(Path::new(ALTERNATIVES_ALIAS))
}

/// Detect the system-wide default editor. No alternatives mechanism exists
/// on this platform.
#[cfg(not(unix))]
#[must_use]
pub fn detect() -> Option<ResolvedEditor> {
    None
}

/// Resolve an alias path to a single-executable editor, tolerating broken
/// symlink resolution by falling back to the alias itself.
#[must_use]
pub fn from_alias(alias: &Path) -> Option<ResolvedEditor> {
    if !alias.exists() {
        return None;
    }
    let target = std::fs::canonicalize(alias).unwrap_or_else(|_| alias.to_path_buf());
    if !is_executable(&target) {
        return None;
    }
    Some(ResolvedEditor {
        executable: target.to_string_lossy().into_owned(),
        initial_args: Vec::new(),
    })
}

/// True if the path is a file with at least one execute bit set.
#[cfg(unix)]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// True if the path is a file. Execute permission is not a distinct bit on
/// this platform.
#[cfg(not(unix))]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
