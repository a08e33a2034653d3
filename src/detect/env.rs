//! Environment-variable detection source: `$VISUAL`, then `$EDITOR`.

use super::ResolvedEditor;

/// Preferred visual editor variable, checked first.
pub const VISUAL: &str = "VISUAL";

/// Preferred basic editor variable, checked second.
pub const EDITOR: &str = "EDITOR";

/// Detect an editor from the process environment.
#[must_use]
pub fn detect() -> Option<ResolvedEditor> {
    let visual = std::env::var(VISUAL).ok();
    let editor = std::env::var(EDITOR).ok();
    from_values(visual.as_deref(), editor.as_deref())
}

/// Pure core: first non-empty value wins, split on whitespace.
#[must_use]
pub fn from_values(visual: Option<&str>, editor: Option<&str>) -> Option<ResolvedEditor> {
    visual
        .filter(|value| !value.trim().is_empty())
        .or_else(|| editor.filter(|value| !value.trim().is_empty()))
        .and_then(ResolvedEditor::from_command_line)
}
