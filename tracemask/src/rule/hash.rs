//! Digest used by the `hash` action.
//!
//! This is a 32-bit rolling hash (`h = h * 31 + c` over UTF-16 code units),
//! not a cryptographic digest. It hides the literal value from casual reading
//! and keeps equal values correlatable; it does not resist guessing. Callers
//! needing real anonymization should use a keyed digest instead.

use serde_json::Value;

/// Prefix of every hashed value.
pub const HASH_PREFIX: &str = "[HASH:";

/// Hashes the string form of a value into `[HASH:xxxxxxxx]`.
///
/// Strings hash their contents; any other value hashes its JSON text, so
/// `42`, `true` and `null` hash as `"42"`, `"true"` and `"null"`.
pub fn hash_digest(value: &Value) -> String {
    let digest = match value {
        Value::String(text) => rolling_hash(text),
        other => rolling_hash(&other.to_string()),
    };
    format!("{HASH_PREFIX}{digest:08x}]")
}

fn rolling_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}
