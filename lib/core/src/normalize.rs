//! Key normalization
//!
//! Every key that enters the classifier (schema definitions, aliases,
//! extracted document keys) passes through [`normalize_key`] exactly once,
//! so comparisons between the three sources never diverge.

use std::collections::BTreeSet;

/// A set of normalized keys.
///
/// Ordered so that anything derived from it serializes identically
/// on every run.
pub type KeySet = BTreeSet<String>;

/// Normalize a raw key: surrounding whitespace removed, lowercased.
#[inline]
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Normalize a collection of raw keys into a [`KeySet`].
///
/// Keys that normalize to the empty string are dropped and duplicates
/// collapse.
pub fn normalize_keys<I, S>(keys: I) -> KeySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .map(|k| normalize_key(k.as_ref()))
        .filter(|k| !k.is_empty())
        .collect()
}
