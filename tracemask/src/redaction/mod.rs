//! Redaction traversal and entrypoints.
//!
//! This module provides the machinery for applying rules to records:
//!
//! - **`walk`**: follows compiled paths through a record, stepping through arrays
//! - **`leaf`**: rewrites one matched key (mask, remove, hash)
//! - **`output`**: the [`RedactedRecord`] handed to logging boundaries
//!
//! Rules and their configuration live in `crate::rule`; path compilation in
//! `crate::path`.

mod leaf;
mod output;
mod walk;

pub use output::RedactedRecord;
use serde_json::Value;

use crate::{
    path::CompiledPath,
    rule::{RedactionRule, RuleSet, RuleSetError},
};

/// Applies an ordered list of rules to records.
///
/// Paths are compiled once, here; the rules cannot change afterwards.
/// Redaction is best-effort: a path that does not fit a record (missing key,
/// scalar where an object was expected) does nothing and the remaining paths
/// still run.
#[derive(Clone, Debug, Default)]
pub struct Redactor {
    rules: Vec<CompiledRule>,
}

#[derive(Clone, Debug)]
struct CompiledRule {
    rule: RedactionRule,
    paths: Vec<CompiledPath>,
}

impl Redactor {
    pub fn new(rules: impl IntoIterator<Item = RedactionRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CompiledRule {
                paths: rule
                    .paths
                    .iter()
                    .map(String::as_str)
                    .map(CompiledPath::compile)
                    .collect(),
                rule,
            })
            .collect();
        Self { rules }
    }

    /// Loads a validated rule set from JSON. See [`RuleSet::from_json`].
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        RuleSet::from_json(json).map(Self::from)
    }

    /// Returns a redacted deep copy of `record`. `record` itself is not modified.
    #[must_use]
    pub fn redact(&self, record: &Value) -> Value {
        self.redact_owned(record.clone())
    }

    /// Redacts a record the caller no longer needs, without copying it first.
    #[must_use]
    pub fn redact_owned(&self, mut record: Value) -> Value {
        for compiled in &self.rules {
            for path in &compiled.paths {
                #[cfg(feature = "tracing")]
                ::tracing::trace!(
                    target: "tracemask",
                    path = %path,
                    action = ?compiled.rule.action,
                    "applying redaction path"
                );
                walk::walk(&mut record, path.segments(), &compiled.rule);
            }
        }
        record
    }

    /// Redacts a copy of `record` and wraps it for a logging boundary.
    pub fn redacted_record(&self, record: &Value) -> RedactedRecord {
        RedactedRecord::new(self.redact(record))
    }

    /// The rules, in application order.
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &RedactionRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }
}

impl From<RuleSet> for Redactor {
    fn from(set: RuleSet) -> Self {
        Self::new(set.into_rules())
    }
}

impl FromIterator<RedactionRule> for Redactor {
    fn from_iter<I: IntoIterator<Item = RedactionRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}
