//! Session and logging configuration.
//!
//! # Responsibility
//! - Provide defaults for a dashboard session.
//! - Overlay `PALETTE_*` environment variables on those defaults.
//!
//! # Invariants
//! - Unset or blank variables keep the default value.
//! - Configuration loading never fails; validation happens where values are
//!   used (e.g. `init_logging`).

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_SEED: &str = "PALETTE_SEED";
pub const ENV_LOG_LEVEL: &str = "PALETTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PALETTE_LOG_DIR";

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files; stderr when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Settings for one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Load the sample projects and their contents on start.
    pub seed_fixtures: bool,
    pub logging: LoggingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        if let Some(raw) = value(ENV_SEED) {
            config.seed_fixtures = parse_flag(&raw).unwrap_or(config.seed_fixtures);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            config.logging.log_dir = Some(PathBuf::from(dir));
        }
        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_seed_fixtures_and_log_to_stderr() {
        let config = SessionConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SessionConfig::default());
        assert!(config.seed_fixtures);
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn env_values_override_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[
            (ENV_SEED, "off"),
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "/tmp/palette-logs"),
        ]));
        assert!(!config.seed_fixtures);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.logging.log_dir,
            Some(PathBuf::from("/tmp/palette-logs"))
        );
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"logging":{"level":"error"}}"#).unwrap();
        assert!(config.seed_fixtures);
        assert_eq!(config.logging.level, "error");
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn unrecognized_seed_flag_keeps_default() {
        let config = SessionConfig::from_lookup(lookup(&[(ENV_SEED, "maybe"), (ENV_LOG_DIR, "  ")]));
        assert!(config.seed_fixtures);
        assert!(config.logging.log_dir.is_none());
    }
}
