//! Interactive editor selection menu.
//!
//! Enumerates the registry in its fixed order, filtered to editors actually
//! installed, and persists the user's choice to the primary configuration
//! file. The menu and prompts go to stderr so stdout stays clean for
//! scripted callers.

use std::io::{BufRead, Write};

use crate::config;
use crate::detect::scan;
use crate::registry;

/// Outcome of the interactive selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this editor id and the choice was persisted.
    Chosen(&'static str),
    /// The user declined, input ended, or the choice could not be saved.
    Cancelled,
}

/// Run the selection menu against real stdin/stderr and persist the result.
#[must_use]
pub fn select(header: &str) -> Selection {
    let installed: Vec<&'static str> = registry::ordered_ids()
        .filter(|id| scan::installed(id))
        .collect();

    if installed.is_empty() {
        eprintln!("No known editors were found on your PATH.");
        eprintln!("Install one (e.g. vim, nano, or VS Code) and try again.");
        return Selection::Cancelled;
    }

    let stdin = std::io::stdin();
    let choice = match prompt_loop(stdin.lock(), &mut std::io::stderr(), header, &installed) {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("Could not read your choice: {err}");
            return Selection::Cancelled;
        }
    };

    let Some(id) = choice else {
        return Selection::Cancelled;
    };

    match config::write_selection(id) {
        Ok(()) => Selection::Chosen(id),
        Err(err) => {
            // Distinct from a user cancellation: the choice was made but
            // could not be saved.
            eprintln!("Could not save your selection: {err:#}");
            Selection::Cancelled
        }
    }
}

/// Display the numbered menu and read choices until one is valid.
///
/// Re-prompts indefinitely on non-numeric or out-of-range input; `0` and
/// end-of-input both mean cancellation. Interactive-only code path, so an
/// unbounded wait on human input is acceptable.
fn prompt_loop<'a>(
    mut input: impl BufRead,
    out: &mut impl Write,
    header: &str,
    installed: &[&'a str],
) -> std::io::Result<Option<&'a str>> {
    writeln!(out, "{header}")?;
    for (i, id) in installed.iter().enumerate() {
        writeln!(out, "  {}. {id}", i + 1)?;
    }
    writeln!(out, "  0. Cancel")?;

    loop {
        write!(out, "Choice [1-{}]: ", installed.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(0) => return Ok(None),
            Ok(n) if n <= installed.len() => return Ok(Some(installed[n - 1])),
            _ => writeln!(out, "Please enter a number between 0 and {}.", installed.len())?,
        }
    }
}
