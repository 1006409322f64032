//! Key alias resolution
//!
//! Maps alternate spellings found in extracted term sheets (for example
//! `"termination date"`) onto the canonical schema key (`maturitydate`).

use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use termclass_core::{normalize_key, KeySet};
use tracing::debug;

use crate::config::AliasConfig;
use crate::schema::{SchemaError, SchemaRegistry};

/// Forward (alias -> canonical) and reverse (canonical -> aliases) mappings
///
/// An alias maps to exactly one canonical key. When the same alias is
/// configured twice the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    forward: AHashMap<String, String>,
    reverse: BTreeMap<String, KeySet>,
}

/// An alias whose canonical key no instrument type expects
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeadAlias {
    pub alias: String,
    pub canonical: String,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(alias, canonical)` pairs, in order
    pub fn from_pairs<I, A, C>(pairs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let mut table = Self::new();
        for (index, (alias, canonical)) in pairs.into_iter().enumerate() {
            let alias = normalize_key(alias.as_ref());
            let canonical = normalize_key(canonical.as_ref());
            if alias.is_empty() || canonical.is_empty() {
                return Err(SchemaError::BlankAlias(index));
            }
            table.insert(alias, canonical);
        }
        Ok(table)
    }

    pub fn from_config(aliases: &[AliasConfig]) -> Result<Self, SchemaError> {
        Self::from_pairs(aliases.iter().map(|a| (a.alias.as_str(), a.canonical.as_str())))
    }

    fn insert(&mut self, alias: String, canonical: String) {
        if let Some(previous) = self.forward.insert(alias.clone(), canonical.clone()) {
            if previous != canonical {
                debug!("Alias '{}' remapped from '{}' to '{}'", alias, previous, canonical);
            }
            if let Some(set) = self.reverse.get_mut(&previous) {
                set.remove(&alias);
                if set.is_empty() {
                    self.reverse.remove(&previous);
                }
            }
        }
        self.reverse.entry(canonical).or_default().insert(alias);
    }

    /// Canonical key for a normalized alias
    #[inline]
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.forward.get(alias).map(String::as_str)
    }

    /// All aliases configured for a normalized canonical key
    pub fn aliases_for(&self, canonical: &str) -> Option<&KeySet> {
        self.reverse.get(canonical)
    }

    /// Canonical keys with at least one alias, ascending
    pub fn canonicals(&self) -> impl Iterator<Item = &str> {
        self.reverse.keys().map(String::as_str)
    }

    /// Aliases that can never produce a match against `registry`
    pub fn dead_aliases(&self, registry: &SchemaRegistry) -> Vec<DeadAlias> {
        self.reverse
            .iter()
            .filter(|(canonical, _)| !registry.expects_key(canonical))
            .flat_map(|(canonical, aliases)| {
                aliases.iter().map(move |alias| DeadAlias {
                    alias: alias.clone(),
                    canonical: canonical.clone(),
                })
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
