//! The villain deck assembly sub-unit.

use crate::catalog::{CardGroup, ComponentKind};
use crate::errors::RulesError;
use crate::rules::{resolver, RuleConfig};

use super::component::ConfigurationComponent;

/// The three slots that make up the villain deck: villain groups,
/// henchmen groups, and hero groups shuffled in against the players.
///
/// Each slot is sized by the rule resolver at construction for the
/// chosen (scheme, player count); the aggregate itself adds no rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VillainDeck {
    villains: ConfigurationComponent,
    henchmen: ConfigurationComponent,
    heroes_in_villain_deck: ConfigurationComponent,
}

impl VillainDeck {
    /// Size the three components from the rules.
    ///
    /// Fails with a [`RulesError::ConfigKey`] when the base rules carry no
    /// count for one of the slots at this player count.
    pub fn new(rules: &RuleConfig, scheme: CardGroup, player_count: u32) -> Result<Self, RulesError> {
        let component = |kind| -> Result<ConfigurationComponent, RulesError> {
            let count = resolver::count(rules, scheme, player_count, kind)?;
            Ok(ConfigurationComponent::new(kind, count))
        };

        Ok(Self {
            villains: component(ComponentKind::Villains)?,
            henchmen: component(ComponentKind::Henchmen)?,
            heroes_in_villain_deck: component(ComponentKind::HeroesInVillainDeck)?,
        })
    }

    /// The villain groups slot.
    #[must_use]
    pub fn villains(&self) -> &ConfigurationComponent {
        &self.villains
    }

    /// The henchmen groups slot.
    #[must_use]
    pub fn henchmen(&self) -> &ConfigurationComponent {
        &self.henchmen
    }

    /// The heroes-fighting-for-evil slot.
    #[must_use]
    pub fn heroes_in_villain_deck(&self) -> &ConfigurationComponent {
        &self.heroes_in_villain_deck
    }

    pub(crate) fn villains_mut(&mut self) -> &mut ConfigurationComponent {
        &mut self.villains
    }

    pub(crate) fn henchmen_mut(&mut self) -> &mut ConfigurationComponent {
        &mut self.henchmen
    }

    pub(crate) fn heroes_in_villain_deck_mut(&mut self) -> &mut ConfigurationComponent {
        &mut self.heroes_in_villain_deck
    }
}
