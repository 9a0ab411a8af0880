//! Redaction rules: what to match and what to do with it.
//!
//! This module provides:
//!
//! - **Rules** (`rules`): [`RedactionRule`], its [`RedactionAction`], and the
//!   serializable [`RuleSet`] container used for configuration.
//!
//! - **Hashing** (`hash`): the [`hash_digest`] used by [`RedactionAction::Hash`].
//!
//! - **Errors** (`error`): [`RuleSetError`] for rule sets loaded from JSON.
//!
//! # Example
//!
//! ```rust
//! use tracemask::{RedactionAction, RedactionRule, RuleSet};
//!
//! let rules = RuleSet::from_json(
//!     r#"[{"paths": ["attributes.*.password"], "action": "hash"}]"#,
//! )
//! .unwrap();
//!
//! assert_eq!(rules.rules()[0].action, RedactionAction::Hash);
//! assert_eq!(rules.rules()[0], RedactionRule::hash(["attributes.*.password"]));
//! ```

pub mod error;
pub mod hash;
pub mod rules;

pub use error::RuleSetError;
pub use hash::{HASH_PREFIX, hash_digest};
pub use rules::{REDACTED_PLACEHOLDER, RedactionAction, RedactionRule, RuleSet};
