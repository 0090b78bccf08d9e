//! Game configuration components.
//!
//! A configuration is assembled bottom-up: [`ConfigurationComponent`] is
//! one bounded slot, [`VillainDeck`] groups the three villain-deck slots,
//! and [`GameConfiguration`] ties them to a scheme and drives incremental
//! construction and validation.

mod component;
mod game_configuration;
mod villain_deck;

pub use component::ConfigurationComponent;
pub use game_configuration::GameConfiguration;
pub use villain_deck::VillainDeck;
