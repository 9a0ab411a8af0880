//! Output type for logging boundaries.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A record that has already been through a [`Redactor`](crate::Redactor).
///
/// Only produced by [`Redactor::redacted_record`](crate::Redactor::redacted_record),
/// so logging adapters can accept it without redacting again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RedactedRecord(Value);

impl RedactedRecord {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Compact JSON.
impl fmt::Display for RedactedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<RedactedRecord> for Value {
    fn from(record: RedactedRecord) -> Self {
        record.0
    }
}
