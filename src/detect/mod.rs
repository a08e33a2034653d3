//! Editor detection sources and the priority resolver.
//!
//! Four independent sources each attempt to produce a [`ResolvedEditor`];
//! [`resolve`] runs them in strict priority order and stops at the first
//! success. Priority encodes user intent: an explicit environment override
//! beats a saved preference, which beats the OS default, which beats
//! opportunistic discovery on `PATH`. Results are never merged.

pub mod env;
pub mod file;
pub mod scan;
pub mod system;


/// An editor chosen by one detection source.
///
/// Constructed once per invocation and immutable afterwards; the command
/// builder consumes it to produce the final argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEditor {
    /// Path or bare name to invoke.
    pub executable: String,
    /// Arguments already part of the configured command, in order.
    pub initial_args: Vec<String>,
}

impl ResolvedEditor {
    /// Build a resolved editor from a raw configured command line.
    ///
    /// The value is split naively on whitespace; shell quoting is not
    /// supported, so a value like `code "--user-data-dir=my dir"` splits
    /// mid-quote. That matches how `$EDITOR` is conventionally consumed and
    /// is an accepted limitation. Returns `None` for blank input.
    #[must_use]
    pub fn from_command_line(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace().map(str::to_string);
        let executable = parts.next()?;
        Some(Self { executable, initial_args: parts.collect() })
    }

    /// Basename of the executable, used for registry lookups. A configured
    /// `/usr/local/bin/code` still matches the `code` registry entry.
    #[must_use]
    pub fn short_name(&self) -> &str {
        std::path::Path::new(&self.executable)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.executable)
    }
}

/// Run all detection sources in priority order, returning the first success.
///
/// `None` is an outcome, not an error: callers decide the next fallback step
/// (interactive prompt, fatal exit).
#[must_use]
pub fn resolve() -> Option<ResolvedEditor> {
    env::detect()
        .or_else(file::detect)
        .or_else(system::detect)
        .or_else(scan::detect)
}
