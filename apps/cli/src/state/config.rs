//! # Configuration State
//!
//! Stores terminal configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`)
//! 2. Environment variables (`TIPCALC_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};

/// Default log filter when neither `RUST_LOG` nor `TIPCALC_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,tipcalc=info";

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// How views are printed.
    pub output: OutputFormat,

    /// Prompt shown before each interactive line.
    pub prompt: String,

    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

/// How a view is written to stdout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block.
    #[default]
    Text,

    /// One JSON object per view.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            output: OutputFormat::Text,
            prompt: "tip> ".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPCALC_OUTPUT`: `text` or `json`
    /// - `TIPCALC_PROMPT`: interactive prompt
    /// - `TIPCALC_LOG`: log filter (RUST_LOG still wins)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(output) = lookup("TIPCALC_OUTPUT") {
            config.output = output
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_OUTPUT".to_string()))?;
        }

        if let Some(prompt) = lookup("TIPCALC_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(filter) = lookup("TIPCALC_LOG") {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue("TIPCALC_LOG".to_string()));
            }
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("TIPCALC_OUTPUT", "JSON"),
            ("TIPCALC_PROMPT", "> "),
            ("TIPCALC_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_output_rejected() {
        let err = ConfigState::from_lookup(lookup(&[("TIPCALC_OUTPUT", "yaml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TIPCALC_OUTPUT");
    }

    #[test]
    fn test_blank_log_filter_rejected() {
        assert!(ConfigState::from_lookup(lookup(&[("TIPCALC_LOG", "  ")])).is_err());
    }
}
