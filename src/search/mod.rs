//! Exhaustive configuration generation.
//!
//! A breadth-style work-list search over partial configurations: seed one
//! candidate per (scheme, set) pair, then repeatedly pop a candidate, ask
//! it which slot it needs next, and branch over every eligible card group
//! across the included sets. Validation runs only at component-completion
//! boundaries, so each rule is checked exactly once per branch and whole
//! subtrees are pruned the moment a completed slot breaks a rule.
//!
//! Cloning a partial configuration per branch is cheap: component members
//! live in persistent maps, so a clone shares structure with its parent.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::catalog::{CardClass, CardGroup, SetId, SetRegistry};
use crate::components::GameConfiguration;
use crate::errors::ConfigurationError;

/// Generate every valid game configuration for the included sets.
///
/// `included` names the sets whose schemes seed the search and whose
/// catalogs supply candidate card groups; a candidate configuration may
/// mix groups from any of them. `always_leads` turns the mastermind
/// always-leads villain rule on or off for the whole run.
///
/// Returns the complete, validated configurations, deduplicated by card
/// content. An empty result is a legitimate outcome (every branch was
/// ruled out); errors surface only genuine defects such as validating at
/// a non-boundary.
pub fn generate(
    registry: &SetRegistry,
    included: &[SetId],
    player_count: u32,
    always_leads: bool,
) -> Result<Vec<GameConfiguration>, ConfigurationError> {
    let mut work = seed(registry, included, player_count, always_leads)?;
    let mut completed: FxHashSet<GameConfiguration> = FxHashSet::default();
    let mut examined = 0u64;

    while let Some(config) = work.pop() {
        examined += 1;
        let Some(kind) = config.next_needed_component() else {
            completed.insert(config);
            continue;
        };

        for &set in included {
            for entry in registry.catalog(set).groups(kind.card_class()) {
                let group = CardGroup::new(set, kind.card_class(), entry.index);
                if config.component(kind).contains(group) {
                    continue;
                }

                let mut candidate = config.clone();
                candidate.append(kind, group, set)?;

                // boundary: this append just completed the slot
                if candidate.component(kind).is_complete() && !candidate.validate(registry)? {
                    continue;
                }
                work.push(candidate);
            }
        }
    }

    info!(
        examined,
        valid = completed.len(),
        player_count,
        always_leads,
        "configuration generation finished"
    );
    Ok(completed.into_iter().collect())
}

/// One candidate per (scheme, set), minus those the blacklist rules out.
fn seed(
    registry: &SetRegistry,
    included: &[SetId],
    player_count: u32,
    always_leads: bool,
) -> Result<Vec<GameConfiguration>, ConfigurationError> {
    let mut seeds = Vec::new();
    for &set in included {
        for entry in registry.catalog(set).groups(CardClass::Schemes) {
            let scheme = CardGroup::new(set, CardClass::Schemes, entry.index);
            let config = GameConfiguration::new(registry, scheme, always_leads, player_count)?;
            if config.validate(registry)? {
                seeds.push(config);
            } else {
                debug!(set = registry.name(set), scheme = entry.index, "scheme ruled out at seed");
            }
        }
    }
    Ok(seeds)
}
