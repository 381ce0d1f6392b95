//! Machine configuration.
//!
//! Everything is optional: with no configuration file the machine starts at
//! factory stock with quiet logging.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use coffee_inventory::StockLevels;
use coffee_observability::LogConfig;

/// Names a JSON configuration file.
pub const CONFIG_ENV: &str = "COFFEE_MACHINE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub initial_stock: StockLevels,
    pub log: LogConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MachineConfig {
    /// Load from the file named by `COFFEE_MACHINE_CONFIG`, or use defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_factory_default() {
        let config = MachineConfig::from_json("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
        assert_eq!(config.initial_stock, StockLevels::default());
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn partial_stock_overrides_only_named_fields() {
        let config =
            MachineConfig::from_json(r#"{ "initial_stock": { "cups": 0, "money": 10 } }"#).unwrap();

        assert_eq!(
            config.initial_stock,
            StockLevels {
                money: 10,
                cups: 0,
                ..StockLevels::default()
            }
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MachineConfig::from_json("{ initial_stock").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = MachineConfig::from_file(Path::new("/nonexistent/coffee.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/coffee.json"));
    }
}
