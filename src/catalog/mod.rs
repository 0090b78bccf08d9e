//! Card-group identity, per-set catalogs, and the set registry.

mod catalog;
mod group;
mod registry;

pub use catalog::{CardCatalog, GroupEntry};
pub use group::{CardClass, CardGroup, ComponentKind, SetId};
pub use registry::{LegendarySet, SetRegistry};
