//! Loadable classifier configuration
//!
//! The instrument catalogue and alias list are plain data so new
//! instrument types can be added from a JSON file without code changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builtin;
use crate::schema::SchemaError;

/// Raw classifier configuration, before normalization and validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Format version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Instrument types
    pub types: Vec<TypeConfig>,

    /// Alias list; order matters when an alias repeats
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeConfig {
    pub name: String,
    pub keys: Vec<String>,
    #[serde(default)]
    pub mandatory: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AliasConfig {
    pub alias: String,
    pub canonical: String,
}

impl ClassifierConfig {
    /// The six instrument types and alias list shipped with the classifier
    pub fn builtin() -> Self {
        let types = builtin::INSTRUMENT_TYPES
            .iter()
            .map(|(name, keys, mandatory)| TypeConfig {
                name: name.to_string(),
                keys: keys.iter().map(|k| k.to_string()).collect(),
                mandatory: mandatory.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        let aliases = builtin::KEY_ALIASES
            .iter()
            .map(|(alias, canonical)| AliasConfig {
                alias: alias.to_string(),
                canonical: canonical.to_string(),
            })
            .collect();

        Self { version: 1, types, aliases }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::Format(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }
}
