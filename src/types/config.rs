//! Configuration structures.
//!
//! Configuration is loaded from environment variables or a JSON file.
//! Every section has serde defaults, so partial documents are accepted.

use super::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Env var overriding [`ObservabilityConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "LIFECYCLE_LOG_LEVEL";

/// Env var selecting the log format (`json` or anything else for compact).
pub const ENV_LOG_FORMAT: &str = "LIFECYCLE_LOG_FORMAT";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Build a config from defaults overridden by `LIFECYCLE_*` env vars.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            config.observability.log_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_LOG_LEVEL, "debug"), (ENV_LOG_FORMAT, "JSON")]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(
            config.observability,
            ObservabilityConfig {
                log_level: "debug".to_string(),
                json_logs: true,
            }
        );
    }

    #[test]
    fn test_empty_level_keeps_default() {
        let config = Config::from_lookup(|key| (key == ENV_LOG_LEVEL).then(String::new));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(r#"{"observability": {"json_logs": true}}"#).unwrap();
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.json_logs);

        let empty = Config::from_json_str("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"observability": {{"log_level": "trace"}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.observability.log_level, "trace");
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::types::Error::Io(_)));
    }
}
