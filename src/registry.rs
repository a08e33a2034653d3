//! Static table of known editors and their launch properties.
//!
//! The table is a fixed, explicitly ordered slice: the same ordering drives
//! both the `PATH` scan fallback and the interactive selection menu, so
//! detection stays deterministic across runs.

/// How an editor interacts with the terminal that launched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Runs inside the invoking terminal and inherently blocks the caller.
    Terminal,
    /// Opens its own window and detaches unless a wait flag is passed.
    Graphical,
}

/// A known editor and the metadata needed to launch it correctly.
#[derive(Debug, Clone, Copy)]
pub struct EditorSpec {
    /// Stable, case-sensitive identifier; also the binary name probed on `PATH`.
    pub id: &'static str,
    /// Argument that makes the editor block until the file is closed, if any.
    pub wait_flag: Option<&'static str>,
    /// Terminal or graphical behavior class.
    pub category: Category,
}

/// Known editors in precedence order.
///
/// Graphical editors that support a wait flag come first so the scan fallback
/// prefers them when several editors are installed; terminal editors follow,
/// ending with the lowest-common-denominator `vi`.
pub const EDITORS: &[EditorSpec] = &[
    EditorSpec { id: "code",   wait_flag: Some("--wait"),  category: Category::Graphical },
    EditorSpec { id: "cursor", wait_flag: Some("--wait"),  category: Category::Graphical },
    EditorSpec { id: "zed",    wait_flag: Some("--wait"),  category: Category::Graphical },
    EditorSpec { id: "subl",   wait_flag: Some("--wait"),  category: Category::Graphical },
    EditorSpec { id: "gvim",   wait_flag: Some("-f"),      category: Category::Graphical },
    EditorSpec { id: "gedit",  wait_flag: Some("--wait"),  category: Category::Graphical },
    EditorSpec { id: "kate",   wait_flag: Some("--block"), category: Category::Graphical },
    EditorSpec { id: "nvim",   wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "vim",    wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "hx",     wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "micro",  wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "emacs",  wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "nano",   wait_flag: None,            category: Category::Terminal },
    EditorSpec { id: "vi",     wait_flag: None,            category: Category::Terminal },
];

/// Look up the spec for an editor id. `None` means the editor is unknown and
/// callers should fall back to terminal/no-flag behavior.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static EditorSpec> {
    EDITORS.iter().find(|spec| spec.id == id)
}

/// All known editor ids in precedence order.
pub fn ordered_ids() -> impl Iterator<Item = &'static str> {
    EDITORS.iter().map(|spec| spec.id)
}
