//! A single bounded slot of a game configuration.

use std::hash::{Hash, Hasher};

use im::OrdMap;

use crate::catalog::{CardClass, CardGroup, ComponentKind, SetId};
use crate::errors::ConfigurationError;

/// An append-only collection of card groups for one configuration slot,
/// bounded by the count the rules resolved for it.
///
/// Members map each configured group to the set catalog it was drawn
/// from, and stay ordered so equality, hashing, and display are
/// deterministic. The backing map is persistent (`im`), so cloning a
/// component during search is O(1) and the clone is structurally
/// independent - appends to one branch never leak into another.
///
/// The bound is a hard invariant, not a validation outcome: exceeding it
/// means the driver ignored a known cardinality, which is a bug to
/// surface immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationComponent {
    kind: ComponentKind,
    card_class: CardClass,
    count: u32,
    members: OrdMap<CardGroup, SetId>,
}

impl ConfigurationComponent {
    /// Create an empty component for a slot with a resolved count.
    ///
    /// A zero-count component is complete from birth and accepts nothing.
    #[must_use]
    pub fn new(kind: ComponentKind, count: u32) -> Self {
        Self {
            kind,
            card_class: kind.card_class(),
            count,
            members: OrdMap::new(),
        }
    }

    /// The slot this component fills.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// The card class candidates are drawn from.
    #[must_use]
    pub fn card_class(&self) -> CardClass {
        self.card_class
    }

    /// The resolved cardinality of this slot.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Add a card group, recording which set catalog it came from.
    ///
    /// Re-appending a present group is a no-op. Appending a new group to
    /// a full component is a [`ConfigurationError::TooManyMembers`] hard
    /// error, and leaves the component untouched.
    pub fn append(&mut self, group: CardGroup, source: SetId) -> Result<(), ConfigurationError> {
        if self.members.contains_key(&group) {
            return Ok(());
        }
        if self.members.len() as u32 >= self.count {
            return Err(ConfigurationError::TooManyMembers {
                label: self.kind.label(),
                count: self.count,
            });
        }
        self.members.insert(group, source);
        Ok(())
    }

    /// Whether the configured group is already a member.
    #[must_use]
    pub fn contains(&self, group: CardGroup) -> bool {
        self.members.contains_key(&group)
    }

    /// Whether the slot holds exactly as many groups as it needs.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.members.len() as u32 == self.count
    }

    /// Number of configured groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no groups are configured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Configured groups in order, with their source sets.
    pub fn members(&self) -> impl Iterator<Item = (&CardGroup, &SetId)> {
        self.members.iter()
    }

    /// Configured groups in order.
    pub fn groups(&self) -> impl Iterator<Item = &CardGroup> {
        self.members.keys()
    }
}

// Members are ordered, so hashing the iteration is deterministic and
// consistent with `PartialEq`.
impl Hash for ConfigurationComponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.count.hash(state);
        for (group, source) in &self.members {
            group.hash(state);
            source.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardClass;

    fn mastermind(index: u32) -> CardGroup {
        CardGroup::new(SetId::new(0), CardClass::Masterminds, index)
    }

    #[test]
    fn test_construction() {
        let comp = ConfigurationComponent::new(ComponentKind::Masterminds, 1);
        assert_eq!(comp.kind(), ComponentKind::Masterminds);
        assert_eq!(comp.card_class(), CardClass::Masterminds);
        assert_eq!(comp.count(), 1);
        assert!(comp.is_empty());
        assert!(!comp.is_complete());
    }

    #[test]
    fn test_append_and_idempotence() {
        let mut comp = ConfigurationComponent::new(ComponentKind::Masterminds, 1);
        comp.append(mastermind(1), SetId::new(0)).unwrap();
        assert_eq!(comp.len(), 1);
        assert!(comp.is_complete());
        assert!(comp.contains(mastermind(1)));

        // same group again: no-op, no limit violation
        comp.append(mastermind(1), SetId::new(0)).unwrap();
        assert_eq!(comp.len(), 1);
    }

    #[test]
    fn test_append_past_count_fails_without_mutation() {
        let mut comp = ConfigurationComponent::new(ComponentKind::Masterminds, 1);
        comp.append(mastermind(1), SetId::new(0)).unwrap();

        let err = comp.append(mastermind(2), SetId::new(0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::TooManyMembers { label: "Masterminds", count: 1 }
        ));
        assert_eq!(comp.len(), 1);
        assert!(!comp.contains(mastermind(2)));
    }

    #[test]
    fn test_zero_count_component_is_born_complete() {
        let mut comp = ConfigurationComponent::new(ComponentKind::Enforcers, 0);
        assert!(comp.is_complete());
        assert!(comp.append(mastermind(1), SetId::new(0)).is_err());
    }

    #[test]
    fn test_structural_equality() {
        let mut a = ConfigurationComponent::new(ComponentKind::Villains, 2);
        let mut b = ConfigurationComponent::new(ComponentKind::Villains, 2);
        assert_eq!(a, b);

        a.append(mastermind(1), SetId::new(0)).unwrap();
        assert_ne!(a, b);
        b.append(mastermind(1), SetId::new(0)).unwrap();
        assert_eq!(a, b);

        // differing counts differ even when empty
        assert_ne!(
            ConfigurationComponent::new(ComponentKind::Villains, 1),
            ConfigurationComponent::new(ComponentKind::Villains, 2)
        );
        // differing kinds differ
        assert_ne!(
            ConfigurationComponent::new(ComponentKind::Villains, 1),
            ConfigurationComponent::new(ComponentKind::Enforcers, 1)
        );
    }

    #[test]
    fn test_members_insertion_is_branch_independent() {
        let mut a = ConfigurationComponent::new(ComponentKind::Villains, 2);
        a.append(mastermind(1), SetId::new(0)).unwrap();

        let mut b = a.clone();
        b.append(mastermind(2), SetId::new(0)).unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert!(!a.contains(mastermind(2)));
    }

    #[test]
    fn test_members_ordered() {
        let mut comp = ConfigurationComponent::new(ComponentKind::Villains, 3);
        comp.append(mastermind(3), SetId::new(0)).unwrap();
        comp.append(mastermind(1), SetId::new(0)).unwrap();
        comp.append(mastermind(2), SetId::new(0)).unwrap();

        let indices: Vec<u32> = comp.groups().map(|g| g.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
