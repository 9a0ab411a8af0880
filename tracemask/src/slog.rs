//! Adapters for emitting redacted records through `slog`.
//!
//! This module exists to connect [`RedactedRecord`] with `slog` by providing a
//! `slog::Value` implementation that serializes the record as structured JSON
//! via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the redacted copy, never the
//!   caller's original record.
//! - Avoiding fallible logging APIs: records that do not need redaction can
//!   still be logged through [`SlogRedactedExt`] without a `Result`.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{Redactor, redaction::RedactedRecord};

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// This is implemented only for values that have been through a [`Redactor`].
/// It is not a blanket impl for raw types.
///
/// ```compile_fail
/// use tracemask::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<serde_json::Value>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl SlogValue for RedactedRecord {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for RedactedRecord {}

/// Extension trait for ergonomic slog logging of redacted records.
///
/// ## Example
/// ```ignore
/// use tracemask::slog::SlogRedactedExt;
///
/// info!(logger, "span finished"; "span" => span.slog_redacted(&redactor));
/// ```
pub trait SlogRedactedExt {
    /// Redacts a copy of `self` with `redactor` and returns a `slog::Value`
    /// that serializes as structured JSON.
    fn slog_redacted(&self, redactor: &Redactor) -> RedactedRecord;
}

impl SlogRedactedExt for JsonValue {
    fn slog_redacted(&self, redactor: &Redactor) -> RedactedRecord {
        redactor.redacted_record(self)
    }
}
