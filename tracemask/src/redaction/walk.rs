//! Tree walker.
//!
//! Arrays never consume a segment: whenever the walker meets one it steps into
//! every element with the same remaining path, at any nesting depth. Scalars
//! and nulls end the walk.

use serde_json::Value;

use super::leaf;
use crate::{path::Segment, rule::RedactionRule};

/// Follows `segments` from `node`, applying `rule` at every matched leaf.
pub(super) fn walk(node: &mut Value, segments: &[Segment], rule: &RedactionRule) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };

    let object = match node {
        Value::Array(items) => {
            for item in items {
                walk(item, segments, rule);
            }
            return;
        }
        Value::Object(object) => object,
        _ => return,
    };

    match segment {
        Segment::Wildcard => match rest.first().and_then(Segment::key) {
            // `*.key` finds `key` anywhere below this object.
            Some(key) if rest.len() == 1 => {
                for value in object.values_mut() {
                    search(value, key, rule);
                }
            }
            _ => {
                for value in object.values_mut() {
                    walk(value, rest, rule);
                }
            }
        },
        Segment::Literal(_) => {
            let Some(key) = segment.key() else { return };
            if rest.is_empty() {
                leaf::apply(object, key, rule);
            } else if let Some(child) = object.get_mut(key) {
                walk(child, rest, rule);
            }
        }
    }
}

/// Applies `rule` to `key` on every object in the subtree, then keeps
/// descending through whatever is left.
fn search(node: &mut Value, key: &str, rule: &RedactionRule) {
    match node {
        Value::Array(items) => {
            for item in items {
                search(item, key, rule);
            }
        }
        Value::Object(object) => {
            leaf::apply(object, key, rule);
            for value in object.values_mut() {
                search(value, key, rule);
            }
        }
        _ => {}
    }
}
