//! Property-based test generators using proptest.

use proptest::prelude::*;

/// Strategy for engine-style preference keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_.:]{0,31}").expect("Invalid regex")
}

/// Strategy for base64-looking values, the common case.
pub fn base64_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([A-Za-z0-9+/]{4}){0,16}([A-Za-z0-9+/]{2}==)?")
        .expect("Invalid regex")
}

/// Strategy for arbitrary text values without NUL bytes.
pub fn text_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        base64_value_strategy(),
        "[^\\x00]{0,64}",
    ]
}

/// A single store operation.
#[derive(Debug, Clone)]
pub enum Op {
    /// Write a value.
    Set(String, String),
    /// Read a value.
    Get(String),
    /// Remove a value.
    Remove(String),
}

/// Strategy for operation sequences over a small key space.
///
/// Keys are drawn from a pool of eight so that sets, gets and removes
/// collide often.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    let key = (0u8..8).prop_map(|i| format!("key{i}"));
    let op = prop_oneof![
        (key.clone(), text_value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        key.clone().prop_map(Op::Get),
        key.prop_map(Op::Remove),
    ];
    prop::collection::vec(op, 0..max_len)
}
