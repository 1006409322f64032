//! Schema registry and alias table built together from one configuration

use crate::alias::{AliasTable, DeadAlias};
use crate::config::ClassifierConfig;
use crate::schema::{SchemaError, SchemaRegistry};
use tracing::warn;

/// Immutable classification reference data
///
/// Constructed once at process start; safe to share across threads
/// without synchronization.
#[derive(Debug, Clone)]
pub struct Catalogue {
    registry: SchemaRegistry,
    aliases: AliasTable,
}

impl Catalogue {
    pub fn new(registry: SchemaRegistry, aliases: AliasTable) -> Self {
        Self { registry, aliases }
    }

    /// Validate and normalize a configuration
    ///
    /// Dead aliases are reported as warnings, not errors.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, SchemaError> {
        let registry = SchemaRegistry::from_config(&config.types)?;
        let aliases = AliasTable::from_config(&config.aliases)?;
        let catalogue = Self::new(registry, aliases);

        for dead in catalogue.dead_aliases() {
            warn!(
                "Alias '{}' points to '{}', which no instrument type expects",
                dead.alias, dead.canonical
            );
        }

        Ok(catalogue)
    }

    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_config(&ClassifierConfig::builtin())
    }

    #[inline]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    #[inline]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn dead_aliases(&self) -> Vec<DeadAlias> {
        self.aliases.dead_aliases(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AliasConfig, TypeConfig};

    #[test]
    fn test_builtin_registry_invariants() {
        let catalogue = Catalogue::builtin().unwrap();
        let registry = catalogue.registry();

        assert_eq!(registry.len(), 6);
        for def in registry.iter() {
            assert!(
                def.mandatory_keys().is_subset(def.full_keys()),
                "{} violates mandatory ⊆ full",
                def.type_name()
            );
            assert!(!def.mandatory_keys().is_empty());
        }
        assert_eq!(
            registry.get("InterestRateSwap").unwrap().full_keys().len(),
            13
        );
    }

    #[test]
    fn test_builtin_dead_aliases() {
        let catalogue = Catalogue::builtin().unwrap();
        let dead: Vec<String> = catalogue.dead_aliases().into_iter().map(|d| d.alias).collect();
        assert_eq!(dead, vec!["party b", "payment frequency", "trade date"]);
    }

    #[test]
    fn test_builtin_alias_lookup() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_eq!(catalogue.aliases().resolve("termination date"), Some("maturitydate"));
        assert_eq!(catalogue.aliases().len(), 31);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClassifierConfig {
            version: 1,
            types: vec![TypeConfig {
                name: "Broken".to_string(),
                keys: vec!["notional".to_string()],
                mandatory: vec!["strike".to_string()],
            }],
            aliases: vec![AliasConfig {
                alias: "notional amount".to_string(),
                canonical: "notional".to_string(),
            }],
        };
        assert!(matches!(
            Catalogue::from_config(&config),
            Err(SchemaError::MandatoryNotSubset { .. })
        ));
    }
}
