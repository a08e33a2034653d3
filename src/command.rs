//! Command builder: turns a resolved editor into the final argument vector,
//! normalizing per-editor wait flags.
//!
//! The registry is the single source of truth for per-editor behavior; no
//! other component consults wait flags. This function never fails: unknown
//! editors degrade to terminal/no-flag behavior.

use crate::detect::ResolvedEditor;
use crate::diag;
use crate::registry::{self, Category};

/// Build the argument vector for a resolved editor.
///
/// Rules, in order:
/// - `no_wait` is an explicit user override and takes absolute precedence:
///   no wait flag is ever appended.
/// - Graphical editors with a known wait flag get it appended, unless the
///   exact flag string is already among the configured initial arguments.
///   The duplicate check is a literal match only; a differently-spelled
///   equivalent flag is not recognized and would be appended alongside.
/// - Terminal editors block by occupying the terminal; nothing is appended,
///   and `force_wait` only confirms the default decision without changing
///   the output.
///
/// Output is deterministic: identical inputs yield identical vectors.
#[must_use]
pub fn build(resolved: &ResolvedEditor, no_wait: bool, force_wait: bool) -> Vec<String> {
    let mut argv = Vec::with_capacity(resolved.initial_args.len() + 2);
    argv.push(resolved.executable.clone());
    argv.extend(resolved.initial_args.iter().cloned());

    if no_wait {
        diag::advise(&format!("not appending a wait flag to {} (--no-wait)", resolved.short_name()));
        return argv;
    }

    // Unknown editors are treated as terminal with no wait flag.
    let Some(spec) = registry::lookup(resolved.short_name()) else {
        return argv;
    };

    match spec.category {
        Category::Terminal => {
            if force_wait {
                diag::advise(&format!("{} blocks the terminal by itself; no wait flag needed", spec.id));
            }
        }
        Category::Graphical => {
            if let Some(flag) = spec.wait_flag {
                if resolved.initial_args.iter().any(|arg| arg == flag) {
                    diag::advise(&format!("{} already carries {flag}; not appending it again", spec.id));
                } else {
                    diag::advise(&format!("appending {flag} so {} blocks until the file is closed", spec.id));
                    argv.push(flag.to_string());
                }
            }
        }
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EDITORS;

    fn resolved(cmd: &str) -> ResolvedEditor {
        ResolvedEditor::from_command_line(cmd).unwrap()
    }

    #[test]
    fn graphical_editors_get_their_wait_flag_once() {
        for spec in EDITORS.iter().filter(|s| s.category == Category::Graphical) {
            let flag = spec.wait_flag.unwrap();
            for force_wait in [false, true] {
                let argv = build(&resolved(spec.id), false, force_wait);
                assert_eq!(argv.iter().filter(|a| a.as_str() == flag).count(), 1);
                assert_eq!(argv.last().map(String::as_str), Some(flag));
            }
        }
    }

    #[test]
    fn wait_flag_lands_after_initial_args() {
        let argv = build(&resolved("code --diff --new-window"), false, false);
        assert_eq!(argv, vec!["code", "--diff", "--new-window", "--wait"]);
    }

    #[test]
    fn preexisting_wait_flag_is_not_duplicated() {
        for spec in EDITORS.iter().filter(|s| s.category == Category::Graphical) {
            let flag = spec.wait_flag.unwrap();
            let argv = build(&resolved(&format!("{} {flag}", spec.id)), false, false);
            assert_eq!(argv.iter().filter(|a| a.as_str() == flag).count(), 1);
        }
    }

    #[test]
    fn duplicate_check_is_a_literal_match() {
        // An abbreviated spelling of the same flag is not recognized; the
        // canonical flag is still appended. Intentional.
        let argv = build(&resolved("gedit -w"), false, false);
        assert_eq!(argv, vec!["gedit", "-w", "--wait"]);
    }

    #[test]
    fn terminal_editors_never_get_a_flag() {
        for spec in EDITORS.iter().filter(|s| s.category == Category::Terminal) {
            for no_wait in [false, true] {
                for force_wait in [false, true] {
                    let argv = build(&resolved(spec.id), no_wait, force_wait);
                    assert_eq!(argv, vec![spec.id.to_string()]);
                }
            }
        }
    }

    #[test]
    fn no_wait_overrides_everything() {
        let argv = build(&resolved("code"), true, false);
        assert_eq!(argv, vec!["code"]);

        // Even combined with force_wait, no_wait wins.
        let argv = build(&resolved("code"), true, true);
        assert_eq!(argv, vec!["code"]);
    }

    #[test]
    fn force_wait_never_changes_the_output() {
        for spec in EDITORS {
            let input = resolved(spec.id);
            assert_eq!(build(&input, false, false), build(&input, false, true));
        }
    }

    #[test]
    fn unknown_editor_degrades_to_terminal_behavior() {
        let argv = build(&resolved("some-editor --fast"), false, true);
        assert_eq!(argv, vec!["some-editor", "--fast"]);
    }

    #[test]
    fn path_qualified_executable_still_matches_registry() {
        let argv = build(&resolved("/opt/bin/code"), false, false);
        assert_eq!(argv, vec!["/opt/bin/code", "--wait"]);
    }

    #[test]
    fn build_is_idempotent() {
        let input = resolved("zed --foreground");
        let first = build(&input, false, false);
        let second = build(&input, false, false);
        assert_eq!(first, second);
    }

    #[test]
    fn env_configured_wait_scenario() {
        // VISUAL="code --wait" must not end up with two --wait arguments.
        let input = resolved("code --wait");
        let argv = build(&input, false, false);
        assert_eq!(argv, vec!["code", "--wait"]);
    }
}
