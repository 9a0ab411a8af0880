//! Path-directed redaction for structured trace records.
//!
//! This crate separates:
//! - **Rules**: which fields are sensitive (dotted paths) and what to do with them
//!   (`mask`, `remove`, `hash`).
//! - **Redaction**: the walker that follows compiled paths through a
//!   `serde_json::Value` record and rewrites the matched leaves.
//!
//! ```rust
//! use serde_json::json;
//! use tracemask::{RedactionRule, Redactor};
//!
//! let redactor = Redactor::new(vec![
//!     RedactionRule::mask(["attributes.password"]).with_replacement("X"),
//! ]);
//!
//! let record = json!({"attributes": {"password": "p", "user": "u"}});
//! let redacted = redactor.redact(&record);
//!
//! assert_eq!(redacted, json!({"attributes": {"password": "X", "user": "u"}}));
//! assert_eq!(record["attributes"]["password"], "p");
//! ```
//!
//! What this crate does:
//! - compiles dotted paths (`attributes.*.password`, `entries[].data.token`)
//! - redacts a deep copy of a record, leaving the caller's record untouched
//! - provides logging adapters behind feature flags (`slog`, `tracing`)
//!
//! What it does not do:
//! - validate the shape of your records
//! - detect conflicting rules
//! - persist or transport the redacted output

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod path;
mod redaction;
pub mod rule;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from path module
pub use path::{CompiledPath, Segment};
// Re-exports from redaction module
pub use redaction::{RedactedRecord, Redactor};
// Re-exports from rule module
pub use rule::{
    HASH_PREFIX, REDACTED_PLACEHOLDER, RedactionAction, RedactionRule, RuleSet, RuleSetError,
    hash_digest,
};
