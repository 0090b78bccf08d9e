//! # legendary-chooser
//!
//! Exhaustive game-setup generation for Legendary deck-building games.
//!
//! Given one or more card sets, a player count, and the rule layers for
//! each set, the engine enumerates every valid combination of scheme,
//! masterminds, villain deck, and enforcers. Rules ship as editable JSON
//! so house rules layer on top of the printed rule book.
//!
//! ## Architecture
//!
//! - **Incremental construction**: a [`GameConfiguration`] is built one
//!   card group at a time; it always knows which slot it needs next.
//! - **Boundary validation**: rules are checked only when a slot reaches
//!   its resolved cardinality, so each rule prunes a whole subtree once.
//! - **Persistent components**: slot members live in `im` maps, making
//!   the per-branch clone in the search driver O(1).
//!
//! ## Modules
//!
//! - `catalog`: card group identities, per-set catalogs, the set registry
//! - `rules`: rule data model, layered resolution, rule-file bootstrap
//! - `components`: configuration slots and the top-level builder
//! - `search`: the work-list generation driver
//! - `sets`: shipped set definitions with their default rules

pub mod catalog;
pub mod components;
pub mod errors;
pub mod rules;
pub mod search;
pub mod sets;

pub use crate::catalog::{
    CardCatalog, CardClass, CardGroup, ComponentKind, GroupEntry, LegendarySet, SetId, SetRegistry,
};

pub use crate::components::{ConfigurationComponent, GameConfiguration, VillainDeck};

pub use crate::errors::{ConfigurationError, RulesError};

pub use crate::rules::{default_data_dir, load_rule_config, RuleConfig, RuleLayer, SchemeRule};

pub use crate::search::generate;
