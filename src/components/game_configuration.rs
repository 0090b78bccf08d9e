//! The top-level incremental configuration builder and validator.

use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use tracing::debug;

use crate::catalog::{CardGroup, ComponentKind, SetId, SetRegistry};
use crate::errors::{ConfigurationError, RulesError};
use crate::rules::{resolver, RuleConfig};

use super::component::ConfigurationComponent;
use super::villain_deck::VillainDeck;

/// One concrete configuration of game components: a scheme, mastermind(s),
/// the villain deck, and enforcers. Built incrementally by appending card
/// groups to whichever slot [`next_needed_component`] names, and ruled in
/// or out by [`validate`] at each component-completion boundary.
///
/// All slot cardinalities are resolved from the rules at construction, as
/// soon as the scheme is known. The hero deck is sized by the same rule
/// files but chosen by a separate process; it is not part of this builder.
///
/// Equality and hashing cover exactly the configured cards (scheme and
/// the four card-bearing slots). `always_leads` and `player_count` are
/// search parameters - constant across one generation run - and two runs'
/// worth of identical cards are the same configuration.
///
/// [`next_needed_component`]: GameConfiguration::next_needed_component
/// [`validate`]: GameConfiguration::validate
#[derive(Clone, Debug)]
pub struct GameConfiguration {
    scheme: CardGroup,
    always_leads: bool,
    player_count: u32,
    masterminds: ConfigurationComponent,
    villain_deck: VillainDeck,
    enforcers: ConfigurationComponent,
}

impl GameConfiguration {
    /// Bootstrap a configuration from a chosen scheme.
    ///
    /// Slot counts are resolved immediately against the scheme's set's
    /// rules; a missing base count surfaces here as
    /// [`RulesError::ConfigKey`].
    pub fn new(
        registry: &SetRegistry,
        scheme: CardGroup,
        always_leads: bool,
        player_count: u32,
    ) -> Result<Self, RulesError> {
        let rules = registry.rules(scheme.set);
        let sized = |kind| -> Result<ConfigurationComponent, RulesError> {
            let count = resolver::count(rules, scheme, player_count, kind)?;
            Ok(ConfigurationComponent::new(kind, count))
        };

        Ok(Self {
            scheme,
            always_leads,
            player_count,
            masterminds: sized(ComponentKind::Masterminds)?,
            villain_deck: VillainDeck::new(rules, scheme, player_count)?,
            enforcers: sized(ComponentKind::Enforcers)?,
        })
    }

    /// The scheme this configuration is built around.
    #[must_use]
    pub fn scheme(&self) -> CardGroup {
        self.scheme
    }

    /// Whether the always-leads rule is enforced for villains.
    #[must_use]
    pub fn always_leads(&self) -> bool {
        self.always_leads
    }

    /// The player count this configuration was sized for.
    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// The masterminds slot.
    #[must_use]
    pub fn masterminds(&self) -> &ConfigurationComponent {
        &self.masterminds
    }

    /// The villain deck sub-unit.
    #[must_use]
    pub fn villain_deck(&self) -> &VillainDeck {
        &self.villain_deck
    }

    /// The enforcer deck slot.
    #[must_use]
    pub fn enforcers(&self) -> &ConfigurationComponent {
        &self.enforcers
    }

    /// The component filling the given slot.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> &ConfigurationComponent {
        match kind {
            ComponentKind::Masterminds => &self.masterminds,
            ComponentKind::Villains => self.villain_deck.villains(),
            ComponentKind::Henchmen => self.villain_deck.henchmen(),
            ComponentKind::HeroesInVillainDeck => self.villain_deck.heroes_in_villain_deck(),
            ComponentKind::Enforcers => &self.enforcers,
        }
    }

    fn component_mut(&mut self, kind: ComponentKind) -> &mut ConfigurationComponent {
        match kind {
            ComponentKind::Masterminds => &mut self.masterminds,
            ComponentKind::Villains => self.villain_deck.villains_mut(),
            ComponentKind::Henchmen => self.villain_deck.henchmen_mut(),
            ComponentKind::HeroesInVillainDeck => self.villain_deck.heroes_in_villain_deck_mut(),
            ComponentKind::Enforcers => &mut self.enforcers,
        }
    }

    /// Append a card group to a slot.
    ///
    /// Same contract as [`ConfigurationComponent::append`]: idempotent on
    /// re-adds, hard error past the slot's cardinality.
    pub fn append(
        &mut self,
        kind: ComponentKind,
        group: CardGroup,
        source: SetId,
    ) -> Result<(), ConfigurationError> {
        self.component_mut(kind).append(group, source)
    }

    /// The first slot, in fill order, that still needs card groups.
    ///
    /// `None` means the configuration is complete. Zero-count slots are
    /// complete from birth and are skipped entirely.
    #[must_use]
    pub fn next_needed_component(&self) -> Option<ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .find(|&kind| !self.component(kind).is_complete())
    }

    /// Validate the configuration as built so far.
    ///
    /// Walks the slots from the innermost populated one back toward the
    /// scheme and returns that slot's rule check - at a component
    /// boundary the most recently completed slot is always the most
    /// specific thing to check, and everything shallower was already
    /// validated at its own boundary. With no card-bearing slot populated
    /// the check is the scheme blacklist.
    ///
    /// A rule violation is `Ok(false)`, a legitimately rejected branch.
    /// Validating while the innermost populated slot is still incomplete
    /// is a [`ConfigurationError::PrematureValidation`] - validation is a
    /// boundary operation only.
    pub fn validate(&self, registry: &SetRegistry) -> Result<bool, ConfigurationError> {
        let rules = registry.rules(self.scheme.set);

        for kind in ComponentKind::ALL.into_iter().rev() {
            let component = self.component(kind);
            if component.is_empty() {
                continue;
            }
            if !component.is_complete() {
                return Err(ConfigurationError::PrematureValidation(kind));
            }
            return if kind == ComponentKind::Villains {
                self.validate_villains(rules)
            } else {
                Ok(self.simple_validate(rules, component))
            };
        }

        if resolver::scheme_blacklisted(rules, self.scheme, self.player_count) {
            debug!(
                scheme = self.scheme.index,
                player_count = self.player_count,
                "config with blacklisted scheme marked as invalid"
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// The required and exclusive checks every card-bearing slot gets.
    fn simple_validate(&self, rules: &RuleConfig, component: &ConfigurationComponent) -> bool {
        self.check_required(rules, component) && self.check_exclusive(rules, component)
    }

    /// Villains additionally answer to the always-leads rule before the
    /// simple checks.
    ///
    /// Each mastermind leads the villain group sharing its index in its
    /// own set. With fewer villain slots than masterminds every slot must
    /// hold a led group; with at least as many, one per mastermind
    /// suffices and the rest are free choices. Hence the bound
    /// `k = min(|villains|, |masterminds|)`.
    fn validate_villains(&self, rules: &RuleConfig) -> Result<bool, ConfigurationError> {
        let villains = self.villain_deck.villains();

        if self.always_leads {
            let led: SmallVec<[CardGroup; 4]> =
                self.masterminds.groups().map(|m| m.led_villains()).collect();
            let needed = villains.len().min(self.masterminds.len());
            let found = villains.groups().filter(|&v| led.contains(v)).count();
            if found < needed {
                debug!(
                    scheme = self.scheme.index,
                    found,
                    needed,
                    "config missing always-leads villains marked as invalid"
                );
                return Ok(false);
            }
        }

        Ok(self.simple_validate(rules, villains))
    }

    /// `true` when nothing is required, or everything required is
    /// configured. Extras beyond the required set are fine.
    fn check_required(&self, rules: &RuleConfig, component: &ConfigurationComponent) -> bool {
        match resolver::required(rules, self.scheme, component.kind()) {
            None => true,
            Some(required) => required.iter().all(|group| component.contains(*group)),
        }
    }

    /// `true` when nothing is restricted, or every configured member is
    /// drawn from the exclusive set. An active exclusive set rejects an
    /// empty member set: exclusivity implies at least one of its members
    /// must eventually be chosen, so empty is a failure, not vacuous
    /// success.
    fn check_exclusive(&self, rules: &RuleConfig, component: &ConfigurationComponent) -> bool {
        match resolver::exclusive(rules, self.scheme, component.kind()) {
            None => true,
            Some(exclusive) => {
                !component.is_empty() && component.groups().all(|group| exclusive.contains(group))
            }
        }
    }

    /// Multi-line human-readable listing, with names from the registry's
    /// catalogs. Slots that hold nothing are omitted.
    #[must_use]
    pub fn render(&self, registry: &SetRegistry) -> String {
        let name_of = |group: &CardGroup| -> String {
            registry
                .catalog(group.set)
                .name_of(group.class, group.index)
                .map_or_else(|| format!("{}/{}", group.class, group.index), str::to_owned)
        };
        let listing = |component: &ConfigurationComponent| -> String {
            component
                .groups()
                .map(|group| name_of(group))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut out = String::from("\nGame Configuration\n");
        out.push_str(&format!("\tScheme: {}\n", name_of(&self.scheme)));
        if !self.masterminds.is_empty() {
            out.push_str(&format!("\tMasterminds: {}\n", listing(&self.masterminds)));
        }

        let deck = &self.villain_deck;
        if !deck.villains().is_empty()
            || !deck.henchmen().is_empty()
            || !deck.heroes_in_villain_deck().is_empty()
        {
            out.push_str("\tVillain Deck:\n");
            for component in [deck.villains(), deck.henchmen(), deck.heroes_in_villain_deck()] {
                if !component.is_empty() {
                    out.push_str(&format!(
                        "\t\t{}: {}\n",
                        component.kind().label(),
                        listing(component)
                    ));
                }
            }
        }

        if !self.enforcers.is_empty() {
            out.push_str("\tEnforcer Deck:\n");
            out.push_str(&format!(
                "\t\t{}: {}\n",
                self.enforcers.kind().label(),
                listing(&self.enforcers)
            ));
        }

        out
    }
}

// Identity is the card content only; see the type docs.
impl PartialEq for GameConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.masterminds == other.masterminds
            && self.villain_deck == other.villain_deck
            && self.enforcers == other.enforcers
    }
}

impl Eq for GameConfiguration {}

impl Hash for GameConfiguration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.masterminds.hash(state);
        self.villain_deck.hash(state);
        self.enforcers.hash(state);
    }
}
