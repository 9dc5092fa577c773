//! Engine configuration persistence
//!
//! Loading and saving the engine configuration as versioned JSON. All
//! operations are deterministic and safe against corrupt input: a host
//! that cannot parse stored bytes falls back to defaults rather than
//! failing startup.

use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable container for the engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigData {
    /// Version of the config format (for future migrations)
    pub version: u32,
    /// The configuration payload
    pub config: EngineConfig,
}

impl EngineConfigData {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    /// Wraps a configuration in the current container version
    pub fn new(config: EngineConfig) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            config,
        }
    }
}

impl Default for EngineConfigData {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Result type for persistence operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during config persistence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {0}")]
    SerializationFailed(String),
    /// Failed to deserialize the configuration
    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(String),
    /// Unsupported config format version
    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

/// Serializes the configuration to JSON bytes
pub fn serialize_config(data: &EngineConfigData) -> ConfigResult<Vec<u8>> {
    serde_json::to_vec_pretty(data).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
}

/// Deserializes the configuration from JSON bytes
pub fn deserialize_config(bytes: &[u8]) -> ConfigResult<EngineConfigData> {
    let data: EngineConfigData = serde_json::from_slice(bytes)
        .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

    if data.version != EngineConfigData::CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion(data.version));
    }

    Ok(data)
}

/// Attempts to load the configuration, falling back to defaults on error
pub fn load_config_safe(bytes: &[u8]) -> EngineConfigData {
    match deserialize_config(bytes) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, "stored config unreadable, using defaults");
            EngineConfigData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckedItemPolicy, UncheckedItemPolicy};

    #[test]
    fn test_config_data_creation() {
        let data = EngineConfigData::default();
        assert_eq!(data.version, EngineConfigData::CURRENT_VERSION);
        assert_eq!(data.config, EngineConfig::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let data = EngineConfigData::new(EngineConfig {
            checked_item_policy: CheckedItemPolicy::MoveToBottomOfChecked,
            unchecked_item_policy: UncheckedItemPolicy::MoveToBottomOfUnchecked,
            focus_delay_ms: 250,
            keep_checkbox_symbols: true,
            keep_checked_items: false,
        });

        let bytes = serialize_config(&data).unwrap();
        let deserialized = deserialize_config(&bytes).unwrap();
        assert_eq!(data, deserialized);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let result = deserialize_config(b"{ invalid json }");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn test_deserialize_unsupported_version() {
        let json = r#"{
            "version": 999,
            "config": {
                "checked_item_policy": "MoveToTopOfChecked",
                "unchecked_item_policy": "MoveToPreviousPosition",
                "focus_delay_ms": 100,
                "keep_checkbox_symbols": true,
                "keep_checked_items": true
            }
        }"#;
        let result = deserialize_config(json.as_bytes());
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(999))));
    }

    #[test]
    fn test_load_config_safe_with_valid_data() {
        let data = EngineConfigData::new(EngineConfig {
            focus_delay_ms: 42,
            ..EngineConfig::default()
        });
        let bytes = serialize_config(&data).unwrap();
        assert_eq!(load_config_safe(&bytes), data);
    }

    #[test]
    fn test_load_config_safe_with_invalid_data() {
        let loaded = load_config_safe(b"not json at all");
        assert_eq!(loaded, EngineConfigData::default());
    }

    #[test]
    fn test_deterministic_serialization() {
        let data = EngineConfigData::default();
        let bytes1 = serialize_config(&data).unwrap();
        let bytes2 = serialize_config(&data).unwrap();
        assert_eq!(bytes1, bytes2);
    }
}
