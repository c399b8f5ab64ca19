//! Board configuration, optionally read from a YAML file named by `LINEUP_CONFIG_PATH`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};
use thiserror::Error;

use crate::i18n::SUPPORTED_LOCALES;
use crate::lineup::BoardMode;
use crate::tactics::{FormationCatalog, DEFAULT_FORMATION_ID};

pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file from LINEUP_CONFIG_PATH='{path}': {source}")]
    Read { path: String, source: std::io::Error },

    #[error("Failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Which sink the CLI persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Json,
    Archive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub default_formation: String,
    pub board_mode: BoardMode,
    pub locale: String,
    pub output_dir: PathBuf,
    pub sink: SinkKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_formation: DEFAULT_FORMATION_ID.to_string(),
            board_mode: BoardMode::CallUp,
            locale: "es-CO".to_string(),
            output_dir: PathBuf::from("callups"),
            sink: SinkKind::Json,
        }
    }
}

impl BoardConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults unless `LINEUP_CONFIG_PATH` points at a YAML file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_path_value(env::var(CONFIG_PATH_ENV).ok())
    }

    pub(crate) fn from_path_value(path: Option<String>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if FormationCatalog::get(&self.default_formation).is_none() {
            return Err(ConfigError::Invalid(format!("unknown default_formation '{}'", self.default_formation)));
        }
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unsupported locale '{}', expected one of {:?}",
                self.locale, SUPPORTED_LOCALES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_mode, BoardMode::CallUp);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = BoardConfig::from_yaml("board_mode: with-bench\nsink: archive\n").unwrap();
        assert_eq!(config.board_mode, BoardMode::WithBench);
        assert_eq!(config.sink, SinkKind::Archive);
        assert_eq!(config.default_formation, "4-3-3");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(BoardConfig::from_yaml("default_formation: 2-3-5"), Err(ConfigError::Invalid(_))));
        assert!(matches!(BoardConfig::from_yaml("locale: pt-BR"), Err(ConfigError::Invalid(_))));
        assert!(matches!(BoardConfig::from_yaml("board_mode: [1, 2]"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_path_value_handling() {
        assert_eq!(BoardConfig::from_path_value(None).unwrap(), BoardConfig::default());
        assert_eq!(BoardConfig::from_path_value(Some("  ".into())).unwrap(), BoardConfig::default());
        assert!(matches!(
            BoardConfig::from_path_value(Some("/missing/lineup.yaml".into())),
            Err(ConfigError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_formation: 4-4-2\nlocale: en-US").unwrap();
        let config = BoardConfig::from_path_value(Some(file.path().display().to_string())).unwrap();
        assert_eq!(config.default_formation, "4-4-2");
        assert_eq!(config.locale, "en-US");
    }
}
