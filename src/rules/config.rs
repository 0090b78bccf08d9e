//! Rule configuration data model.
//!
//! Rules ship as JSON, one file per set per layer
//! (`{setname}.{base|house}.rules.json`). A layer has three sections:
//!
//! - `player_counts`: starting counts per card slot, keyed by player count.
//! - `blacklisted_schemes`: schemes not playable at a given player count.
//! - `scheme_rules`: per-scheme adjustments - a count `diff`, a `required`
//!   list (all of these must be configured, extras allowed), and an
//!   `exclusive` list (only these may be configured).
//!
//! Every section is optional in a file; the resolver decides what absence
//! means. Unknown keys are ignored so house rule files can carry notes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-scheme, per-slot rule adjustments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeRule {
    /// Added to the starting count. Layers sum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<i32>,

    /// Group indices that must all be configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<u32>>,

    /// The only group indices that may be configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<Vec<u32>>,
}

/// One rule layer (base or house) as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleLayer {
    /// `player_counts[playerCount][ruleKey] -> count`.
    #[serde(default)]
    pub player_counts: FxHashMap<u32, FxHashMap<String, u32>>,

    /// `scheme_rules[schemeIndex][ruleKey] -> SchemeRule`.
    #[serde(default)]
    pub scheme_rules: FxHashMap<u32, FxHashMap<String, SchemeRule>>,

    /// `blacklisted_schemes[playerCount] -> [schemeIndex...]`.
    #[serde(default)]
    pub blacklisted_schemes: FxHashMap<u32, Vec<u32>>,
}

/// The base + house rule layer pair for one legendary set.
///
/// The base layer is authoritative for starting counts; the house layer
/// adds to, or further constrains, what the base layer says. Neither layer
/// ever cancels the other: diffs sum, blacklists and required/exclusive
/// lists union.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Shipped rule-book layer.
    pub base: RuleLayer,
    /// User-editable override/addition layer.
    pub house: RuleLayer,
}

impl RuleConfig {
    /// Both layers, base first - the order diffs are applied in.
    #[must_use]
    pub fn layers(&self) -> [&RuleLayer; 2] {
        [&self.base, &self.house]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer() {
        let layer: RuleLayer = serde_json::from_str(
            r#"{
                "player_counts": {
                    "2": { "masterminds": 1, "villains": 2 }
                },
                "blacklisted_schemes": { "1": [4] },
                "scheme_rules": {
                    "12": {
                        "masterminds": { "diff": 1, "exclusive": [3, 4] }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(layer.player_counts[&2]["villains"], 2);
        assert_eq!(layer.blacklisted_schemes[&1], vec![4]);
        let rule = &layer.scheme_rules[&12]["masterminds"];
        assert_eq!(rule.diff, Some(1));
        assert_eq!(rule.exclusive, Some(vec![3, 4]));
        assert_eq!(rule.required, None);
    }

    #[test]
    fn test_empty_document_is_a_valid_layer() {
        let layer: RuleLayer = serde_json::from_str("{}").unwrap();
        assert_eq!(layer, RuleLayer::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let layer: RuleLayer = serde_json::from_str(
            r#"{ "scheme_rules": { "4": { "masterminds": { "something": "else" } } } }"#,
        )
        .unwrap();
        assert_eq!(layer.scheme_rules[&4]["masterminds"], SchemeRule::default());
    }

    #[test]
    fn test_layer_order() {
        let config = RuleConfig::default();
        let [base, house] = config.layers();
        assert!(std::ptr::eq(base, &config.base));
        assert!(std::ptr::eq(house, &config.house));
    }
}
