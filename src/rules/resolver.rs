//! Layered rule resolution.
//!
//! Pure functions of (rule pair, scheme, player count, component kind).
//! Counts start from the base layer's `player_counts` entry (mandatory)
//! and add the `diff` from each layer's scheme rules where present.
//! Blacklists and required/exclusive sets union across layers: a layer can
//! add a constraint, never silently cancel one.

use std::collections::BTreeSet;

use crate::catalog::{CardGroup, ComponentKind};
use crate::errors::RulesError;

use super::config::{RuleConfig, SchemeRule};

/// Resolved count of card groups a component needs.
///
/// `base + base_diff + house_diff`, floored at zero - a game can never
/// require a negative number of cards. Missing diffs are zero; a missing
/// base count is a [`RulesError::ConfigKey`] because the base layer is
/// authoritative for starting counts.
pub fn count(
    rules: &RuleConfig,
    scheme: CardGroup,
    player_count: u32,
    kind: ComponentKind,
) -> Result<u32, RulesError> {
    let rule_key = kind.rule_key();
    let base = rules
        .base
        .player_counts
        .get(&player_count)
        .and_then(|counts| counts.get(rule_key))
        .copied()
        .ok_or(RulesError::ConfigKey {
            player_count,
            rule_key,
        })?;

    let mut total = i64::from(base);
    for layer in rules.layers() {
        if let Some(diff) = scheme_rule(layer, scheme, kind).and_then(|rule| rule.diff) {
            total += i64::from(diff);
        }
    }

    Ok(total.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Whether either layer blacklists the scheme at this player count.
#[must_use]
pub fn scheme_blacklisted(rules: &RuleConfig, scheme: CardGroup, player_count: u32) -> bool {
    rules.layers().iter().any(|layer| {
        layer
            .blacklisted_schemes
            .get(&player_count)
            .is_some_and(|indices| indices.contains(&scheme.index))
    })
}

/// The card groups the scheme requires for this component, or `None` when
/// no layer requires any.
///
/// `None` means "no constraint". The required set need only be a subset of
/// what ends up configured - extras are fine.
#[must_use]
pub fn required(
    rules: &RuleConfig,
    scheme: CardGroup,
    kind: ComponentKind,
) -> Option<BTreeSet<CardGroup>> {
    constraint_set(rules, scheme, kind, |rule| rule.required.as_deref())
}

/// The only card groups the scheme allows for this component, or `None`
/// when no layer restricts it.
///
/// Everything configured must come from this set; an active exclusive set
/// also implies at least one of its members must be chosen.
#[must_use]
pub fn exclusive(
    rules: &RuleConfig,
    scheme: CardGroup,
    kind: ComponentKind,
) -> Option<BTreeSet<CardGroup>> {
    constraint_set(rules, scheme, kind, |rule| rule.exclusive.as_deref())
}

fn scheme_rule<'a>(
    layer: &'a super::config::RuleLayer,
    scheme: CardGroup,
    kind: ComponentKind,
) -> Option<&'a SchemeRule> {
    layer
        .scheme_rules
        .get(&scheme.index)
        .and_then(|slots| slots.get(kind.rule_key()))
}

/// Union a constraint list across layers, mapping raw indices to card
/// groups in the scheme's set. An empty union collapses to `None` so an
/// empty set can never masquerade as "nothing is allowed".
fn constraint_set(
    rules: &RuleConfig,
    scheme: CardGroup,
    kind: ComponentKind,
    pick: fn(&SchemeRule) -> Option<&[u32]>,
) -> Option<BTreeSet<CardGroup>> {
    let mut groups = BTreeSet::new();
    for layer in rules.layers() {
        if let Some(indices) = scheme_rule(layer, scheme, kind).and_then(pick) {
            for &index in indices {
                groups.insert(CardGroup::new(scheme.set, kind.card_class(), index));
            }
        }
    }

    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}
