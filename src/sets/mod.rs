//! Shipped legendary set definitions.
//!
//! Each set module contributes a static [`SetDefinition`]: its name, a
//! catalog constructor, and the default rule documents seeded into the
//! user data directory on first run. Card data is static, rules are not:
//! the actual rule layers are always read through the loader so edited
//! house files take effect.

use std::path::Path;

use crate::catalog::{CardCatalog, SetId, SetRegistry};
use crate::errors::RulesError;
use crate::rules::load_rule_config;

pub mod big_trouble;
pub mod buffy;

/// A set as shipped: everything needed to register it.
pub struct SetDefinition {
    /// Name used for registry lookup and rule file names.
    pub name: &'static str,
    /// Builds the set's card catalog.
    pub catalog: fn() -> CardCatalog,
    /// Default base rules JSON, written on first run.
    pub default_base_rules: &'static str,
    /// Default house rules JSON, written on first run.
    pub default_house_rules: &'static str,
}

/// Every set this build ships.
pub const ALL: [&SetDefinition; 2] = [&big_trouble::DEFINITION, &buffy::DEFINITION];

/// Load a shipped set's rules from `data_dir` and register it.
pub fn register(
    registry: &mut SetRegistry,
    definition: &SetDefinition,
    data_dir: &Path,
) -> Result<SetId, RulesError> {
    let rules = load_rule_config(
        data_dir,
        definition.name,
        definition.default_base_rules,
        definition.default_house_rules,
    )?;
    Ok(registry.register(definition.name, (definition.catalog)(), rules))
}

/// Find a shipped set definition by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SetDefinition> {
    ALL.into_iter().find(|definition| definition.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("big_trouble").unwrap().name, "big_trouble");
        assert_eq!(lookup("buffy").unwrap().name, "buffy");
        assert!(lookup("x_men").is_none());
    }

    #[test]
    fn test_default_rules_parse() {
        for definition in ALL {
            let _: crate::rules::RuleLayer =
                serde_json::from_str(definition.default_base_rules).unwrap();
            let _: crate::rules::RuleLayer =
                serde_json::from_str(definition.default_house_rules).unwrap();
        }
    }

    #[test]
    fn test_register_shipped_sets() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = SetRegistry::new();
        for definition in ALL {
            register(&mut registry, definition, dir.path()).unwrap();
        }
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("buffy").is_some());
    }
}
