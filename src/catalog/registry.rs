//! Registry of loaded legendary sets.
//!
//! Rule configurations and catalogs are loaded once per process and then
//! consulted from memory. The registry makes that lifecycle explicit: an
//! owned object handed to the pieces that need it, instead of hidden
//! process-global "already loaded" state. Tests swap in fixture sets by
//! building their own registry.

use rustc_hash::FxHashMap;

use crate::rules::RuleConfig;

use super::catalog::CardCatalog;
use super::group::SetId;

/// One registered legendary set: its name, card catalog, and rule layers.
#[derive(Clone, Debug)]
pub struct LegendarySet {
    /// Set name, as used in rule file names (e.g. "big_trouble").
    pub name: String,
    /// The card groups the set enumerates.
    pub catalog: CardCatalog,
    /// Base and house rule layers.
    pub rules: RuleConfig,
}

/// Registry of legendary sets, keyed by `SetId`.
///
/// ## Example
///
/// ```
/// use legendary_chooser::catalog::{CardCatalog, SetRegistry};
/// use legendary_chooser::rules::RuleConfig;
///
/// let mut registry = SetRegistry::new();
/// let id = registry.register("big_trouble", CardCatalog::new(), RuleConfig::default());
///
/// assert_eq!(registry.name(id), "big_trouble");
/// assert_eq!(registry.lookup("big_trouble"), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetRegistry {
    sets: Vec<LegendarySet>,
    by_name: FxHashMap<String, SetId>,
}

impl SetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set and return its handle.
    ///
    /// Panics if a set with the same name is already registered - sets are
    /// loaded once per process, so a duplicate means the caller's wiring
    /// is wrong.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        catalog: CardCatalog,
        rules: RuleConfig,
    ) -> SetId {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            panic!("Legendary set '{name}' already registered");
        }

        let id = SetId::new(u16::try_from(self.sets.len()).expect("too many sets"));
        self.by_name.insert(name.clone(), id);
        self.sets.push(LegendarySet {
            name,
            catalog,
            rules,
        });
        id
    }

    /// Get a registered set, panicking on a stale or foreign ID.
    ///
    /// IDs only come from `register` on the same registry, so an invalid
    /// one is a programmer error.
    #[must_use]
    pub fn get(&self, id: SetId) -> &LegendarySet {
        &self.sets[id.raw() as usize]
    }

    /// The set's name.
    #[must_use]
    pub fn name(&self, id: SetId) -> &str {
        &self.get(id).name
    }

    /// The set's card catalog.
    #[must_use]
    pub fn catalog(&self, id: SetId) -> &CardCatalog {
        &self.get(id).catalog
    }

    /// The set's rule configuration pair.
    #[must_use]
    pub fn rules(&self, id: SetId) -> &RuleConfig {
        &self.get(id).rules
    }

    /// Find a set by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SetId> {
        self.by_name.get(name).copied()
    }

    /// Handles of every registered set, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = SetId> + '_ {
        (0..self.sets.len()).map(|i| SetId::new(i as u16))
    }

    /// Number of registered sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no sets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
