//! Card-group identity types.
//!
//! A card group is an opaque identity: a class (Schemes, Masterminds, ...),
//! an index within that class, and the legendary set it belongs to. The
//! engine never looks at card text or attributes - those live with external
//! collaborators. Identity, equality, and ordering are all this module
//! provides.

use serde::{Deserialize, Serialize};

/// The five classes of card groups a legendary set enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardClass {
    /// Win-condition cards; a scheme bootstraps a configuration.
    Schemes,
    /// Lead villain cards.
    Masterminds,
    /// Villain groups for the villain deck (and the enforcer deck).
    Villains,
    /// Henchmen groups for the villain deck.
    Henchmen,
    /// Hero groups (also usable inside the villain deck).
    Heroes,
}

impl std::fmt::Display for CardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardClass::Schemes => "Schemes",
            CardClass::Masterminds => "Masterminds",
            CardClass::Villains => "Villains",
            CardClass::Henchmen => "Henchmen",
            CardClass::Heroes => "Heroes",
        };
        f.write_str(name)
    }
}

/// The component slots of a game configuration, in fill order.
///
/// This is a closed enum on purpose: the slot order is a fixed total
/// order, not configurable. Schemes that don't use a slot set its count
/// to zero rather than reordering anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Lead villain slot.
    Masterminds,
    /// Villain groups in the villain deck.
    Villains,
    /// Henchmen groups in the villain deck.
    Henchmen,
    /// Hero groups shuffled into the villain deck.
    HeroesInVillainDeck,
    /// Villain groups in the separate enforcer deck.
    Enforcers,
}

impl ComponentKind {
    /// Every component kind, in the order configurations are filled.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Masterminds,
        ComponentKind::Villains,
        ComponentKind::Henchmen,
        ComponentKind::HeroesInVillainDeck,
        ComponentKind::Enforcers,
    ];

    /// The stable key this kind is looked up under in rule files.
    #[must_use]
    pub const fn rule_key(self) -> &'static str {
        match self {
            ComponentKind::Masterminds => "masterminds",
            ComponentKind::Villains => "villains",
            ComponentKind::Henchmen => "henchmen",
            ComponentKind::HeroesInVillainDeck => "heroes_in_villain_deck",
            ComponentKind::Enforcers => "enforcers",
        }
    }

    /// The card class this slot draws candidates from.
    ///
    /// Enforcers are villain groups in a different deck; heroes in the
    /// villain deck are ordinary hero groups.
    #[must_use]
    pub const fn card_class(self) -> CardClass {
        match self {
            ComponentKind::Masterminds => CardClass::Masterminds,
            ComponentKind::Villains | ComponentKind::Enforcers => CardClass::Villains,
            ComponentKind::Henchmen => CardClass::Henchmen,
            ComponentKind::HeroesInVillainDeck => CardClass::Heroes,
        }
    }

    /// Display label, as printed in configuration listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ComponentKind::Masterminds => "Masterminds",
            ComponentKind::Villains => "Villains",
            ComponentKind::Henchmen => "Henchmen",
            ComponentKind::HeroesInVillainDeck => "Heroes",
            ComponentKind::Enforcers => "Villains",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rule_key())
    }
}

/// Handle to a registered legendary set.
///
/// Assigned by `SetRegistry::register`. Opaque outside the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetId(pub u16);

impl SetId {
    /// Create a new set ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set({})", self.0)
    }
}

/// Totally ordered identity of one card group.
///
/// The same index can exist independently in multiple sets when sets are
/// combined, so the owning set is part of identity. Ordering is primarily
/// by (class, index), with the set as tiebreaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardGroup {
    /// The legendary set this group belongs to.
    pub set: SetId,
    /// The card class the group is enumerated under.
    pub class: CardClass,
    /// Index within the class, as enumerated by the set (1-based in the
    /// shipped sets, but opaque here).
    pub index: u32,
}

impl CardGroup {
    /// Create a new card group identity.
    #[must_use]
    pub const fn new(set: SetId, class: CardClass, index: u32) -> Self {
        Self { set, class, index }
    }

    /// The villain group this group "always leads": the group sharing its
    /// index in the Villains enumeration of its own set. Meaningful for
    /// masterminds only.
    #[must_use]
    pub const fn led_villains(self) -> CardGroup {
        CardGroup::new(self.set, CardClass::Villains, self.index)
    }
}

impl Ord for CardGroup {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.class, self.index, self.set).cmp(&(other.class, other.index, other.set))
    }
}

impl PartialOrd for CardGroup {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_kind_fill_order() {
        assert_eq!(ComponentKind::ALL[0], ComponentKind::Masterminds);
        assert_eq!(ComponentKind::ALL[4], ComponentKind::Enforcers);
    }

    #[test]
    fn test_component_kind_card_classes() {
        assert_eq!(ComponentKind::Enforcers.card_class(), CardClass::Villains);
        assert_eq!(
            ComponentKind::HeroesInVillainDeck.card_class(),
            CardClass::Heroes
        );
        assert_eq!(ComponentKind::Masterminds.card_class(), CardClass::Masterminds);
    }

    #[test]
    fn test_rule_keys() {
        assert_eq!(ComponentKind::HeroesInVillainDeck.rule_key(), "heroes_in_villain_deck");
        assert_eq!(format!("{}", ComponentKind::Villains), "villains");
    }

    #[test]
    fn test_card_group_ordering() {
        let a = CardGroup::new(SetId::new(0), CardClass::Masterminds, 2);
        let b = CardGroup::new(SetId::new(0), CardClass::Masterminds, 3);
        let c = CardGroup::new(SetId::new(1), CardClass::Masterminds, 2);
        let d = CardGroup::new(SetId::new(0), CardClass::Villains, 1);

        assert!(a < b);
        // same (class, index) orders by set
        assert!(a < c);
        assert!(c < b);
        // class dominates index
        assert!(b < d);
    }

    #[test]
    fn test_card_group_identity_is_set_scoped() {
        let a = CardGroup::new(SetId::new(0), CardClass::Villains, 1);
        let b = CardGroup::new(SetId::new(1), CardClass::Villains, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_led_villains() {
        let mastermind = CardGroup::new(SetId::new(3), CardClass::Masterminds, 4);
        let led = mastermind.led_villains();
        assert_eq!(led.set, SetId::new(3));
        assert_eq!(led.class, CardClass::Villains);
        assert_eq!(led.index, 4);
    }
}
