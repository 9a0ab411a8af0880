//! Adapters for emitting redacted records through `tracing`.
//!
//! `tracing` fields are flat, so records are logged as compact JSON display
//! strings.
//!
//! # Example
//!
//! ```ignore
//! use tracemask::tracing::TracingRedactedExt;
//!
//! let record = redactor.redacted_record(&span);
//! tracing::info!(span = %record.tracing_redacted());
//! ```

use serde_json::Value as JsonValue;
use tracing::field::{DisplayValue, display};

use crate::{Redactor, redaction::RedactedRecord};

/// Marker trait for types whose `tracing` integration always emits redacted output.
///
/// This trait is implemented only for values that have been through a
/// [`Redactor`]. It is not a blanket impl for raw types.
pub trait TracingRedacted {}

impl TracingRedacted for RedactedRecord {}

/// Extension trait for logging redacted records as display strings.
pub trait TracingRedactedExt {
    /// Wraps the record for `tracing` logging as a display value.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl TracingRedactedExt for RedactedRecord {
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}

/// Redacts a raw record and wraps it for `tracing` in one step.
pub fn redacted_display(redactor: &Redactor, record: &JsonValue) -> DisplayValue<String> {
    redactor.redacted_record(record).tracing_redacted()
}
