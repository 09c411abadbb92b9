//! Scenario file loading.
//!
//! Scenarios are TOML documents deserialised straight into a
//! [`CostSnapshot`]; omitted sections fall back to the reference
//! defaults, so a minimal file only names the fields it changes.

use landed_model::params::CostSnapshot;
use tracing::debug;

use crate::{CliError, Result};

/// Load a scenario snapshot from a TOML file.
pub fn load_scenario(path: &str) -> Result<CostSnapshot<f64>> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let source = std::fs::read_to_string(path)?;
    let snapshot = toml::from_str(&source).map_err(|err| CliError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    })?;

    debug!("Loaded scenario from {}", path);
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_scenario("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_partial_scenario_parses_with_defaults() {
        let dir = std::env::temp_dir().join("landed_cli_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scenario.toml");
        std::fs::write(&path, "[transaction]\nfob_price = 50000.0\n").unwrap();

        let snapshot = load_scenario(path.to_str().unwrap()).unwrap();
        assert_eq!(snapshot.transaction.fob_price, 50_000.0);
        assert_eq!(snapshot.advanced.base_freight, 800.0);
    }

    #[test]
    fn test_malformed_scenario_is_a_parse_error() {
        let dir = std::env::temp_dir().join("landed_cli_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[transaction]\nfob_price = \"not a number\"\n").unwrap();

        let err = load_scenario(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }
}
