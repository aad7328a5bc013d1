//! Runtime configuration.
//!
//! Values come from the environment (optionally seeded from a `.env` file)
//! and are then overridden by command-line flags.

use clap::ValueEnum;

use crate::error::{CliError, Result};

const FORMAT_VAR: &str = "QUIZ_COMPARE_FORMAT";
const LOG_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default = Self::default();

        let format = match lookup(FORMAT_VAR) {
            Some(value) => OutputFormat::from_str(value.trim(), true).map_err(|_| {
                CliError::Config(format!("{FORMAT_VAR} must be 'text' or 'json', got '{value}'"))
            })?,
            None => default.format,
        };

        Ok(Self {
            format,
            log_filter: lookup(LOG_VAR).unwrap_or(default.log_filter),
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, verbose: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if verbose {
            self.log_filter = "debug".to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_format_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("QUIZ_COMPARE_FORMAT", "JSON")])).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Config::from_lookup(lookup_from(&[("QUIZ_COMPARE_FORMAT", "xml")]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_flags_override_env() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "warn")]))
            .unwrap()
            .with_overrides(Some(OutputFormat::Json), true);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_no_flags_keep_env() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "warn")]))
            .unwrap()
            .with_overrides(None, false);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.format, OutputFormat::Text);
    }
}
