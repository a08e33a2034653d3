//! User-configuration detection source.
//!
//! Consults the primary config file if it exists, falling back to the legacy
//! `~/.selected_editor` file otherwise. Parsing lives in [`crate::config`];
//! this source only turns a persisted value into a [`ResolvedEditor`].

use super::ResolvedEditor;
use crate::config;

/// Detect an editor from the persisted user selection.
#[must_use]
pub fn detect() -> Option<ResolvedEditor> {
    config::read_selection()
        .as_deref()
        .and_then(ResolvedEditor::from_command_line)
}

/// Pure core over file content, shared with tests.
#[must_use]
pub fn from_content(content: &str) -> Option<ResolvedEditor> {
    config::parse_selection(content)
        .as_deref()
        .and_then(ResolvedEditor::from_command_line)
}
