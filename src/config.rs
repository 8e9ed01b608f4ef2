use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a [`PredictiveText`](crate::PredictiveText) engine.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Highest accumulated cost the correction search may reach.
    pub max_edit_cost: u32,
    /// Score deducted per unit of correction cost.
    pub edit_penalty: u64,
    pub default_limit: usize,
    /// Increment applied when the user picks a word.
    pub selection_boost: u64,
    pub prediction_limit: usize,
    /// Suggestions taken per starter letter when predicting.
    pub starter_suggestions: usize,
    pub seed_common_words: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_edit_cost: 2,
            edit_penalty: 10,
            default_limit: 5,
            selection_boost: 5,
            prediction_limit: 6,
            starter_suggestions: 2,
            seed_common_words: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "max_edit_cost": 1 }"#).unwrap();
        assert_eq!(config.max_edit_cost, 1);
        assert_eq!(config.edit_penalty, 10);
        assert!(config.seed_common_words);
    }

    #[test]
    fn test_invalid_json() {
        let err = EngineConfig::from_json_str("{ max_edit_cost: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_json_file(Path::new("/nonexistent/predictext.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = EngineConfig {
            seed_common_words: false,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }
}
