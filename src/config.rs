//! Client configuration.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Configuration for a [`RequestGate`](crate::RequestGate).
///
/// Immutable once the client is built. Derives serde so callers can embed
/// it in their own configuration files; the crate itself loads nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GateConfig {
    /// API key for the remote service.
    pub api_key: String,

    /// Named configuration profile on the service side.
    #[serde(default = "default_profile")]
    pub config_profile: String,

    /// Service endpoint. Override for self-hosted deployments and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_base_url() -> String {
    "https://api.requestgate.io".to_string()
}

fn default_timeout() -> u64 {
    5000
}

impl GateConfig {
    /// Create a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            config_profile: default_profile(),
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = GateConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.config_profile, "default");
        assert_eq!(config.base_url, "https://api.requestgate.io");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: GateConfig = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.config_profile, "default");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_deserialize_overrides() {
        let json = r#"{
            "api_key": "k",
            "config_profile": "strict",
            "base_url": "http://localhost:8080",
            "timeout_ms": 1500
        }"#;
        let config: GateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.config_profile, "strict");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn test_validate_empty_key() {
        let config = GateConfig::new("");
        assert!(matches!(config.validate(), Err(Error::MissingApiKey)));

        let config = GateConfig::new("   ");
        assert!(matches!(config.validate(), Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GateConfig::new("k").validate().is_ok());
    }
}
