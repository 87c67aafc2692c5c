//! Engine configuration.
//!
//! Missing keys are not errors: each one is logged as a warning and replaced
//! by its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::DecisionError;

const DEFAULT_MAX_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Informational for the library; front ends may refuse to decide when
    /// disabled.
    pub enabled: bool,

    /// History bound. `0` keeps no history.
    pub max_history_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }
}

impl EngineConfig {
    pub const KEYS: [&'static str; 2] = ["enabled", "max_history_size"];

    /// Build from a JSON object, warning about every missing key.
    pub fn from_value(value: &Value) -> Result<Self, DecisionError> {
        let map = value.as_object().ok_or_else(|| {
            DecisionError::Config(format!("configuration must be a JSON object, got {value}"))
        })?;

        for key in Self::KEYS {
            if !map.contains_key(key) {
                warn!("Missing config key '{key}', using default");
            }
        }

        serde_json::from_value(value.clone()).map_err(|e| DecisionError::Config(e.to_string()))
    }

    /// Read a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DecisionError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let value: Value = serde_json::from_str(&raw)?;
        Self::from_value(&value)
    }

    pub fn with_max_history_size(mut self, max_history_size: usize) -> Self {
        self.max_history_size = max_history_size;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn defaults_are_enabled_with_1000_entries() {
        let config = EngineConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_history_size, 1000);
    }

    #[rstest]
    #[case::empty(json!({}), EngineConfig::default())]
    #[case::only_size(json!({"max_history_size": 5}), EngineConfig::default().with_max_history_size(5))]
    #[case::only_enabled(json!({"enabled": false}), EngineConfig::default().with_enabled(false))]
    #[case::extra_keys_ignored(json!({"enabled": true, "max_history_size": 3, "mode": "x"}), EngineConfig::default().with_max_history_size(3))]
    fn missing_keys_fall_back_to_defaults(#[case] raw: Value, #[case] expected: EngineConfig) {
        assert_eq!(EngineConfig::from_value(&raw).unwrap(), expected);
    }

    #[rstest]
    #[case::not_object(json!([1, 2]))]
    #[case::wrong_type(json!({"max_history_size": "lots"}))]
    #[case::negative(json!({"max_history_size": -1}))]
    fn ill_formed_config_is_rejected(#[case] raw: Value) {
        assert!(matches!(EngineConfig::from_value(&raw), Err(DecisionError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DecisionError::Io(_)));
    }
}
