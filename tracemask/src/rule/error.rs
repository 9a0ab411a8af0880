//! Errors raised while loading rule sets.
//!
//! Redaction itself never fails; only configuration can be rejected.

use std::{error::Error, fmt};

/// A rule set that could not be loaded.
#[derive(Debug)]
pub enum RuleSetError {
    /// The input was not valid JSON, or did not describe a list of rules.
    Parse(serde_json::Error),
    /// The rule at this index has an empty `paths` list.
    EmptyPaths { rule: usize },
}

impl fmt::Display for RuleSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSetError::Parse(err) => write!(f, "invalid rule set: {err}"),
            RuleSetError::EmptyPaths { rule } => {
                write!(f, "rule {rule} must name at least one path")
            }
        }
    }
}

impl Error for RuleSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RuleSetError::Parse(err) => Some(err),
            RuleSetError::EmptyPaths { .. } => None,
        }
    }
}

impl From<serde_json::Error> for RuleSetError {
    fn from(err: serde_json::Error) -> Self {
        RuleSetError::Parse(err)
    }
}
