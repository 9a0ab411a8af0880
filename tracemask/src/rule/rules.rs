//! Rule types and the serializable rule set.

use serde::{Deserialize, Serialize};

use super::error::RuleSetError;

/// Default replacement written by [`RedactionAction::Mask`].
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// What happens to a matched leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactionAction {
    /// Replace the value with the rule's replacement, or [`REDACTED_PLACEHOLDER`].
    Mask,
    /// Delete the key from its object.
    Remove,
    /// Replace the value with a `[HASH:xxxxxxxx]` digest of its string form.
    Hash,
}

/// A set of paths sharing one action.
///
/// Paths are applied in order. Nothing is deduplicated: a later path (or a
/// later rule) may act again on a value an earlier one already rewrote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionRule {
    pub paths: Vec<String>,
    pub action: RedactionAction,
    /// Only read by [`RedactionAction::Mask`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl RedactionRule {
    pub fn new<I, S>(paths: I, action: RedactionAction) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            action,
            replacement: None,
        }
    }

    /// Masks every matched leaf with [`REDACTED_PLACEHOLDER`] unless a
    /// replacement is set with [`RedactionRule::with_replacement`].
    pub fn mask<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths, RedactionAction::Mask)
    }

    pub fn remove<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths, RedactionAction::Remove)
    }

    pub fn hash<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths, RedactionAction::Hash)
    }

    /// Uses a specific mask replacement.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// The text written by a mask: the replacement if set, otherwise the placeholder.
    pub fn mask_text(&self) -> &str {
        self.replacement.as_deref().unwrap_or(REDACTED_PLACEHOLDER)
    }
}

/// An ordered list of rules, as loaded from configuration.
///
/// Deserializes from either a bare JSON array of rules or an object with a
/// `rules` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleSetRepr")]
pub struct RuleSet {
    rules: Vec<RedactionRule>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSetRepr {
    List(Vec<RedactionRule>),
    Wrapped { rules: Vec<RedactionRule> },
}

impl From<RuleSetRepr> for RuleSet {
    fn from(repr: RuleSetRepr) -> Self {
        match repr {
            RuleSetRepr::List(rules) | RuleSetRepr::Wrapped { rules } => Self { rules },
        }
    }
}

impl RuleSet {
    pub fn new(rules: Vec<RedactionRule>) -> Self {
        Self { rules }
    }

    /// Parses and validates a rule set.
    ///
    /// Every rule must name at least one path.
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Checks that every rule names at least one path.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        match self.rules.iter().position(|rule| rule.paths.is_empty()) {
            Some(rule) => Err(RuleSetError::EmptyPaths { rule }),
            None => Ok(()),
        }
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<RedactionRule> {
        self.rules
    }
}

impl From<Vec<RedactionRule>> for RuleSet {
    fn from(rules: Vec<RedactionRule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<RedactionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RedactionRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
