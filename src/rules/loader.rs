//! Rules-file bootstrap.
//!
//! Each set's layers live in the user data directory as
//! `{setname}.base.rules.json` and `{setname}.house.rules.json`. On first
//! run the shipped defaults are written there, so users have a file to
//! edit house rules into. Loading happens once per set per process; the
//! parsed `RuleConfig` is then cached in the `SetRegistry`.
//!
//! The directory is an explicit parameter so tests can point the loader at
//! a scratch directory instead of the real user data dir.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::RulesError;

use super::config::{RuleConfig, RuleLayer};

/// The user data directory rule files are kept in.
///
/// Falls back to the current directory on platforms with no data dir.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("legendary-chooser"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load both rule layers for a set, seeding missing files from defaults.
///
/// `default_base` and `default_house` are JSON documents (the shipped
/// defaults from the set definition). A present but malformed file is an
/// error - it must be fixed or deleted, never silently replaced.
pub fn load_rule_config(
    dir: &Path,
    set_name: &str,
    default_base: &str,
    default_house: &str,
) -> Result<RuleConfig, RulesError> {
    fs::create_dir_all(dir)?;
    let base = load_layer(dir, set_name, "base", default_base)?;
    let house = load_layer(dir, set_name, "house", default_house)?;
    Ok(RuleConfig { base, house })
}

fn load_layer(
    dir: &Path,
    set_name: &str,
    layer: &str,
    default_json: &str,
) -> Result<RuleLayer, RulesError> {
    let path = dir.join(format!("{set_name}.{layer}.rules.json"));
    match fs::read_to_string(&path) {
        Ok(text) => {
            debug!(set = set_name, layer, path = %path.display(), "rules file loaded");
            Ok(serde_json::from_str(&text)?)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let parsed: RuleLayer = serde_json::from_str(default_json)?;
            fs::write(&path, default_json)?;
            info!(set = set_name, layer, path = %path.display(), "created default rules file");
            Ok(parsed)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"{ "player_counts": { "1": { "masterminds": 1 } } }"#;
    const HOUSE: &str = "{}";

    #[test]
    fn test_first_run_seeds_default_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_rule_config(dir.path(), "foobar", BASE, HOUSE).unwrap();

        assert_eq!(config.base.player_counts[&1]["masterminds"], 1);
        assert!(dir.path().join("foobar.base.rules.json").exists());
        assert!(dir.path().join("foobar.house.rules.json").exists());

        // seeded file content round-trips
        let text = fs::read_to_string(dir.path().join("foobar.base.rules.json")).unwrap();
        assert_eq!(text, BASE);
    }

    #[test]
    fn test_existing_file_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("foobar.base.rules.json"),
            r#"{ "player_counts": { "1": { "masterminds": 2 } } }"#,
        )
        .unwrap();

        let config = load_rule_config(dir.path(), "foobar", BASE, HOUSE).unwrap();
        assert_eq!(config.base.player_counts[&1]["masterminds"], 2);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("foobar.house.rules.json"), "not json").unwrap();

        let err = load_rule_config(dir.path(), "foobar", BASE, HOUSE).unwrap_err();
        assert!(matches!(err, RulesError::Json(_)));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("legendary-chooser");
        load_rule_config(&nested, "foobar", BASE, HOUSE).unwrap();
        assert!(nested.join("foobar.base.rules.json").exists());
    }
}
