//! Core library for irregular-verbs.
//!
//! Builds a deduplicated, alphabetized table of English irregular verbs and
//! renders it into a `.docx` document.
//!
//! # Modules
//!
//! - [`verbs`] - Verb entries and table construction
//! - [`dictionaries`] - The built-in verb list
//! - [`render`] - Document rendering
//! - [`inspect`] - Reading rendered documents back
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use irregular_verbs_core::{build_table, builtin_entries, render};
//!
//! let table = build_table(builtin_entries());
//! let summary = render(&table, Utf8Path::new("irregular_verbs.docx"))
//!     .expect("Failed to write document");
//! println!("Total irregular verbs: {}", summary.rows_written);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod inspect;
pub mod render;
pub mod verbs;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionaries::irregular_verbs::builtin_entries;
pub use error::{ConfigError, ConfigResult, InspectError, RenderError, RenderResult};
pub use inspect::{TableContents, inspect};
pub use render::{RenderSummary, render};
pub use verbs::{VerbEntry, VerbTable, build_table};

/// Build the table for a run: built-in verbs followed by `extra`.
///
/// Built-ins are listed first, so they win over extras with the same base.
pub fn table_with_extras(extra: &[VerbEntry]) -> VerbTable {
    build_table(builtin_entries().into_iter().chain(extra.iter().cloned()))
}
