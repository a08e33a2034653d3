//! Persisted editor selection.
//!
//! The on-disk format is a single recognized assignment line,
//! `SELECTED_EDITOR="<command line>"`, kept shell-sourceable for
//! compatibility with the legacy `~/.selected_editor` file. Anything else in
//! the file is ignored; the first matching line wins deterministically.
//!
//! Concurrent invocations racing to write the file are an accepted,
//! unguarded hazard: every invocation is a short-lived command and the write
//! is a whole-file overwrite.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Recognized key in the configuration file.
const KEY: &str = "SELECTED_EDITOR";

/// Path of the primary configuration file, `~/.config/edopen/config`.
pub fn primary_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("edopen").join("config"))
}

/// Path of the legacy read-only file, `~/.selected_editor`.
pub fn legacy_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".selected_editor"))
}

/// Extract the selected editor command line from file content.
///
/// The first line whose key (after trimming leading whitespace) is
/// `SELECTED_EDITOR` followed by optional whitespace and `=` is used; later
/// occurrences are ignored. One layer of matching single or double quotes is
/// stripped from the value.
#[must_use]
pub fn parse_selection(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim_start();
        let Some(rest) = line.strip_prefix(KEY) else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };
        let value = strip_quotes(value.trim());
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

/// Remove one layer of surrounding quotes if both ends match.
fn strip_quotes(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}

/// Read the persisted selection, consulting the primary file if it exists and
/// the legacy file otherwise. Unreadable or keyless files yield `None`.
#[must_use]
pub fn read_selection() -> Option<String> {
    let primary = primary_path().ok()?;
    if primary.exists() {
        return read_selection_from(&primary);
    }
    let legacy = legacy_path().ok()?;
    read_selection_from(&legacy)
}

/// Read and parse the selection from one specific file.
#[must_use]
pub fn read_selection_from(path: &std::path::Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_selection(&content)
}

/// Persist a selection to the primary configuration file, creating parent
/// directories as needed and overwriting any prior content.
pub fn write_selection(value: &str) -> Result<()> {
    let path = primary_path()?;
    write_selection_to(&path, value)
}

/// Persist a selection to a specific file path.
pub fn write_selection_to(path: &std::path::Path, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    std::fs::write(path, format!("{KEY}=\"{value}\"\n"))
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_double_quoted_value() {
        assert_eq!(
            parse_selection("SELECTED_EDITOR=\"code --diff\"\n").as_deref(),
            Some("code --diff")
        );
    }

    #[test]
    fn parses_single_quoted_and_bare_values() {
        assert_eq!(parse_selection("SELECTED_EDITOR='nvim'").as_deref(), Some("nvim"));
        assert_eq!(parse_selection("SELECTED_EDITOR=vim").as_deref(), Some("vim"));
    }

    #[test]
    fn first_matching_line_wins() {
        let content = "# comment\nSELECTED_EDITOR=\"vim\"\nSELECTED_EDITOR=\"nano\"\n";
        assert_eq!(parse_selection(content).as_deref(), Some("vim"));
    }

    #[test]
    fn tolerates_whitespace_around_assignment() {
        assert_eq!(parse_selection("  SELECTED_EDITOR = \"hx\"").as_deref(), Some("hx"));
    }

    #[test]
    fn unrecognized_content_is_ignored() {
        assert_eq!(parse_selection("EDITOR=vim\nexport PATH=/bin\n"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn mismatched_quotes_are_kept_literally() {
        assert_eq!(parse_selection("SELECTED_EDITOR=\"vim'").as_deref(), Some("\"vim'"));
    }

    #[test]
    fn empty_value_is_absent() {
        assert_eq!(parse_selection("SELECTED_EDITOR=\"\""), None);
        assert_eq!(parse_selection("SELECTED_EDITOR="), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("config");
        write_selection_to(&path, "zed").unwrap();
        assert_eq!(read_selection_from(&path).as_deref(), Some("zed"));
    }

    #[test]
    fn write_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "SELECTED_EDITOR=\"vim\"\n# stale junk\n").unwrap();
        write_selection_to(&path, "code").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "SELECTED_EDITOR=\"code\"\n");
    }
}
