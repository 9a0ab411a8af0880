//! Rewrites a single matched key in place.

use serde_json::{Map, Value};

use crate::rule::{RedactionAction, RedactionRule, hash_digest};

/// Applies `rule` to `key` on `object`. Absent keys are left alone.
///
/// `Mask` and `Hash` only rewrite leaves; an object or array under `key` is
/// left untouched. `Remove` deletes the key whatever it holds.
pub(super) fn apply(object: &mut Map<String, Value>, key: &str, rule: &RedactionRule) {
    match rule.action {
        RedactionAction::Remove => {
            object.remove(key);
        }
        RedactionAction::Mask => {
            if let Some(value) = leaf_mut(object, key) {
                *value = Value::String(rule.mask_text().to_string());
            }
        }
        RedactionAction::Hash => {
            if let Some(value) = leaf_mut(object, key) {
                *value = Value::String(hash_digest(value));
            }
        }
    }
}

fn leaf_mut<'a>(object: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Value> {
    object
        .get_mut(key)
        .filter(|value| !value.is_object() && !value.is_array())
}
