//! Error taxonomy.
//!
//! Only contract violations are errors here: a malformed rule file, a
//! driver appending past a known cardinality, or validating a half-filled
//! component. A configuration that merely breaks a game rule is *not* an
//! error - `validate` returns `Ok(false)` for those, because a rejected
//! branch is a normal outcome of the search.

use thiserror::Error;

use crate::catalog::ComponentKind;

/// Errors surfaced while loading or resolving rule configurations.
///
/// All of these mean the rule files for a set are unusable; the caller
/// should abort that set's processing rather than retry.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The base layer is missing a mandatory key. The base layer is
    /// authoritative for starting counts; only `diff`s are optional.
    #[error("no base rule count for '{rule_key}' at player count {player_count}")]
    ConfigKey {
        /// Player count being looked up.
        player_count: u32,
        /// Component rule key (e.g. "masterminds").
        rule_key: &'static str,
    },

    /// A rules file could not be read or written.
    #[error("rules file i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A rules file is not valid JSON for the expected shape.
    #[error("malformed rules file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building or validating a game configuration.
///
/// These indicate a defect in the calling code, not a rule violation.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// An append would push a component past its resolved cardinality.
    /// The component is left unchanged.
    #[error("too many {label} added to this configuration (limit {count})")]
    TooManyMembers {
        /// Display label of the offended component.
        label: &'static str,
        /// The component's resolved cardinality.
        count: u32,
    },

    /// `validate` was called while the innermost populated component was
    /// still incomplete. Validation is a component-boundary operation.
    #[error("the '{0}' component was validated before it was complete")]
    PrematureValidation(ComponentKind),

    /// Rule resolution failed underneath a configuration operation.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
