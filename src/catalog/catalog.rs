//! Per-set card catalogs.
//!
//! A `CardCatalog` enumerates which card groups a legendary set makes
//! available for each card class, together with their display names. The
//! engine only branches over these enumerations; everything it needs to
//! know about a group is its identity.

use rustc_hash::FxHashMap;

use super::group::CardClass;

/// One enumerated card group within a set's catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry {
    /// Index within the card class.
    pub index: u32,
    /// Name as printed on the card group.
    pub name: String,
}

/// Enumeration of the card groups one legendary set provides.
///
/// ## Example
///
/// ```
/// use legendary_chooser::catalog::{CardCatalog, CardClass};
///
/// let mut catalog = CardCatalog::new();
/// catalog.add_group(CardClass::Masterminds, 1, "Six Shooter");
///
/// assert!(catalog.contains(CardClass::Masterminds, 1));
/// assert_eq!(catalog.name_of(CardClass::Masterminds, 1), Some("Six Shooter"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    groups: FxHashMap<CardClass, Vec<GroupEntry>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card group to the catalog.
    ///
    /// Panics if the (class, index) pair is already present - set data is
    /// static and a duplicate is a defect in the set definition.
    pub fn add_group(&mut self, class: CardClass, index: u32, name: impl Into<String>) {
        let entries = self.groups.entry(class).or_default();
        if entries.iter().any(|entry| entry.index == index) {
            panic!("Card group {class}/{index} already in catalog");
        }
        entries.push(GroupEntry {
            index,
            name: name.into(),
        });
    }

    /// All groups of a class, in registration order.
    ///
    /// Returns an empty slice for classes the set doesn't populate.
    #[must_use]
    pub fn groups(&self, class: CardClass) -> &[GroupEntry] {
        self.groups.get(&class).map_or(&[], Vec::as_slice)
    }

    /// Whether the catalog enumerates the given group.
    #[must_use]
    pub fn contains(&self, class: CardClass, index: u32) -> bool {
        self.groups(class).iter().any(|entry| entry.index == index)
    }

    /// Display name of a group, if enumerated.
    #[must_use]
    pub fn name_of(&self, class: CardClass, index: u32) -> Option<&str> {
        self.groups(class)
            .iter()
            .find(|entry| entry.index == index)
            .map(|entry| entry.name.as_str())
    }

    /// Number of groups of a class.
    #[must_use]
    pub fn len(&self, class: CardClass) -> usize {
        self.groups(class).len()
    }

    /// Whether the catalog has no groups at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = CardCatalog::new();
        catalog.add_group(CardClass::Villains, 1, "Wing Kong Gang");
        catalog.add_group(CardClass::Villains, 2, "Monsters");
        catalog.add_group(CardClass::Henchmen, 1, "Lords of Death");

        assert_eq!(catalog.len(CardClass::Villains), 2);
        assert_eq!(catalog.len(CardClass::Henchmen), 1);
        assert_eq!(catalog.len(CardClass::Schemes), 0);
        assert!(catalog.contains(CardClass::Villains, 2));
        assert!(!catalog.contains(CardClass::Villains, 3));
        assert_eq!(catalog.name_of(CardClass::Henchmen, 1), Some("Lords of Death"));
        assert_eq!(catalog.name_of(CardClass::Henchmen, 9), None);
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut catalog = CardCatalog::new();
        catalog.add_group(CardClass::Schemes, 3, "C");
        catalog.add_group(CardClass::Schemes, 1, "A");

        let indices: Vec<u32> = catalog
            .groups(CardClass::Schemes)
            .iter()
            .map(|entry| entry.index)
            .collect();
        assert_eq!(indices, vec![3, 1]);
    }

    #[test]
    #[should_panic(expected = "already in catalog")]
    fn test_duplicate_group_panics() {
        let mut catalog = CardCatalog::new();
        catalog.add_group(CardClass::Heroes, 1, "Jack Burton");
        catalog.add_group(CardClass::Heroes, 1, "Wang Chi");
    }

    #[test]
    fn test_is_empty() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.is_empty());
        catalog.add_group(CardClass::Heroes, 1, "Spike");
        assert!(!catalog.is_empty());
    }
}
