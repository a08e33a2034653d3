//! edopen: resolve the user's preferred text editor and hand over to it.
//!
//! The library is organized around a fixed detection hierarchy (environment
//! variables, persisted selection, system default, `PATH` scan), a static
//! registry of per-editor launch metadata, a command builder that normalizes
//! "wait for close" flags, and a launcher that validates and replaces the
//! process image. The binary in `main.rs` only sequences these pieces.

pub mod command;
pub mod config;
pub mod detect;
pub mod diag;
pub mod error;
pub mod launch;
pub mod registry;
pub mod select;

pub use detect::ResolvedEditor;
pub use error::FatalError;
