//! Registry-scan detection source: first known editor present on `PATH`.

use super::ResolvedEditor;
use crate::registry;

/// Detect the first registry editor installed on the search path.
///
/// Returns the bare identifier only; absolute-path resolution is deferred to
/// launch time so there is exactly one authoritative lookup.
#[must_use]
pub fn detect() -> Option<ResolvedEditor> {
    scan_with(|id| which::which(id).is_ok())
}

/// Walk the registry's fixed precedence order with an injectable presence
/// probe.
#[must_use]
pub fn scan_with(probe: impl Fn(&str) -> bool) -> Option<ResolvedEditor> {
    registry::ordered_ids().find(|id| probe(id)).map(|id| ResolvedEditor {
        executable: id.to_string(),
        initial_args: Vec::new(),
    })
}

/// True if `binary` resolves to an executable anywhere on `PATH`. Shared
/// with the interactive selector so menu filtering and scanning agree.
#[must_use]
pub fn installed(binary: &str) -> bool {
    which::which(binary).is_ok()
}
