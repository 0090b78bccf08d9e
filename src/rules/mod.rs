//! Rule configuration: data model, layered resolution, file bootstrap.
//!
//! Rules are stored in per-set JSON files so that house rules and
//! overrides persist across runs. The resolver is pure: it consumes a
//! pre-loaded `RuleConfig` and never touches the filesystem itself.

mod config;
mod loader;
pub mod resolver;

pub use config::{RuleConfig, RuleLayer, SchemeRule};
pub use loader::{default_data_dir, load_rule_config};
