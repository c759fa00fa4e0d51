//! Shared inputs for the PrefStore benchmarks.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random alphanumeric value of `len` characters.
pub fn random_value(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `count` prefixed key/value pairs, as an engine would write them.
pub fn prefixed_entries(count: usize, value_len: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("CCUserDefault::key_{i}"), random_value(value_len)))
        .collect()
}
