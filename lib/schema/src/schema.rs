//! Instrument schema definitions
//!
//! Each instrument type declares the full set of keys a canonical term
//! sheet of that type carries, and the mandatory subset required for a
//! confident classification. Keys are normalized on construction.

use serde::Serialize;
use termclass_core::{normalize_key, KeySet};

use crate::config::TypeConfig;

/// Expected key layout of one instrument type
///
/// Invariant: `mandatory_keys ⊆ full_keys`, both non-empty-string keys,
/// `full_keys` non-empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaDefinition {
    type_name: String,
    full_keys: KeySet,
    mandatory_keys: KeySet,
}

impl SchemaDefinition {
    /// Build a definition from raw (unnormalized) keys
    pub fn new<K, M>(type_name: impl Into<String>, keys: K, mandatory: M) -> Result<Self, SchemaError>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let type_name: String = type_name.into();
        let type_name = type_name.trim().to_string();
        if type_name.is_empty() {
            return Err(SchemaError::BlankTypeName);
        }

        let full_keys = normalize_strict(&type_name, keys)?;
        let mandatory_keys = normalize_strict(&type_name, mandatory)?;

        if full_keys.is_empty() {
            return Err(SchemaError::EmptyKeySet(type_name));
        }

        let stray: Vec<String> = mandatory_keys.difference(&full_keys).cloned().collect();
        if !stray.is_empty() {
            return Err(SchemaError::MandatoryNotSubset { type_name, keys: stray });
        }

        Ok(Self { type_name, full_keys, mandatory_keys })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn full_keys(&self) -> &KeySet {
        &self.full_keys
    }

    pub fn mandatory_keys(&self) -> &KeySet {
        &self.mandatory_keys
    }
}

/// Normalizes keys, rejecting any that normalize to the empty string
fn normalize_strict<I>(type_name: &str, keys: I) -> Result<KeySet, SchemaError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = KeySet::new();
    for key in keys {
        let normalized = normalize_key(key.as_ref());
        if normalized.is_empty() {
            return Err(SchemaError::EmptyKey(type_name.to_string()));
        }
        set.insert(normalized);
    }
    Ok(set)
}

/// Catalogue of known instrument types
///
/// Built once at startup and read-only afterwards. Iteration follows
/// ascending type name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaRegistry {
    types: Vec<SchemaDefinition>,
}

impl SchemaRegistry {
    pub fn new(mut types: Vec<SchemaDefinition>) -> Result<Self, SchemaError> {
        if types.is_empty() {
            return Err(SchemaError::EmptyRegistry);
        }

        types.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        if let Some(dup) = types.windows(2).find(|w| w[0].type_name == w[1].type_name) {
            return Err(SchemaError::DuplicateType(dup[0].type_name.clone()));
        }

        Ok(Self { types })
    }

    pub fn from_config(types: &[TypeConfig]) -> Result<Self, SchemaError> {
        let definitions = types
            .iter()
            .map(|t| SchemaDefinition::new(t.name.as_str(), &t.keys, &t.mandatory))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(definitions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.types.iter()
    }

    pub fn get(&self, type_name: &str) -> Option<&SchemaDefinition> {
        self.types
            .binary_search_by(|t| t.type_name.as_str().cmp(type_name))
            .ok()
            .map(|i| &self.types[i])
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_name.as_str()).collect()
    }

    /// Whether any instrument type expects this (normalized) key
    pub fn expects_key(&self, key: &str) -> bool {
        self.types.iter().any(|t| t.full_keys.contains(key))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Errors that can occur while building the registry or alias table
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema registry cannot be empty")]
    EmptyRegistry,

    #[error("Instrument type name cannot be blank")]
    BlankTypeName,

    #[error("Instrument type '{0}' is defined more than once")]
    DuplicateType(String),

    #[error("Instrument type '{0}' has no expected keys")]
    EmptyKeySet(String),

    #[error("Instrument type '{0}' contains a blank key")]
    EmptyKey(String),

    #[error("Mandatory keys of '{type_name}' are missing from its key set: {keys:?}")]
    MandatoryNotSubset { type_name: String, keys: Vec<String> },

    #[error("Alias entry {0} has a blank alias or canonical key")]
    BlankAlias(usize),

    #[error("Failed to read configuration {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid configuration format: {0}")]
    Format(String),
}

impl From<SchemaError> for termclass_core::Error {
    fn from(err: SchemaError) -> Self {
        termclass_core::Error::Config(err.to_string())
    }
}
