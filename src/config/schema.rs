//! Configuration schema types for `vigil.toml`
//!
//! Defines the structure and validation rules for vigil configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::event_loop::DEFAULT_PROMPT;
use crate::handler::DEFAULT_THRESHOLD;

/// Which stock handler reacts to each value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// Print `Alert!` when the value exceeds the threshold
    #[default]
    Alert,
    /// Print every value as it arrives
    Echo,
    /// Alert first, then echo
    Both,
}

impl HandlerKind {
    /// Name as it appears in config files and the session log
    pub fn name(&self) -> &'static str {
        match self {
            HandlerKind::Alert => "alert",
            HandlerKind::Echo => "echo",
            HandlerKind::Both => "both",
        }
    }
}

/// Watch loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Alert threshold; values strictly above it fire the alert
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// Prompt written before each read
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Handler reacting to each value
    #[serde(default)]
    pub handler: HandlerKind,
    /// Treat malformed lines as errors
    #[serde(default)]
    pub strict: bool,
}

fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            prompt: default_prompt(),
            handler: HandlerKind::default(),
            strict: false,
        }
    }
}

/// Session log settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Whether dispatched values are recorded
    #[serde(default)]
    pub enabled: bool,
    /// JSONL file the session log appends to
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("vigil-session.jsonl")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VigilConfig {
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl VigilConfig {
    /// Validate semantic constraints that serde cannot express.
    ///
    /// A threshold at or below zero would sit on the wrong side of the
    /// sentinel, and an enabled log needs somewhere to write.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.watch.threshold <= 0 {
            errors.push(format!(
                "watch.threshold must be positive, got {}",
                self.watch.threshold
            ));
        }
        if self.log.enabled && self.log.path.as_os_str().is_empty() {
            errors.push("log.path must not be empty when logging is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VigilConfig::default();
        assert_eq!(config.watch.threshold, 50);
        assert_eq!(config.watch.prompt, DEFAULT_PROMPT);
        assert_eq!(config.watch.handler, HandlerKind::Alert);
        assert!(!config.watch.strict);
        assert!(!config.log.enabled);
        assert_eq!(config.log.path, PathBuf::from("vigil-session.jsonl"));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(VigilConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let mut config = VigilConfig::default();
        config.watch.threshold = 0;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("threshold"));
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let mut config = VigilConfig::default();
        config.log.enabled = true;
        config.log.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: VigilConfig = toml::from_str("[watch]\nthreshold = 75\n").unwrap();
        assert_eq!(config.watch.threshold, 75);
        assert_eq!(config.watch.handler, HandlerKind::Alert);
        assert!(!config.log.enabled);
    }

    #[test]
    fn test_handler_names_round_trip() {
        for kind in [HandlerKind::Alert, HandlerKind::Echo, HandlerKind::Both] {
            let toml = format!("[watch]\nhandler = \"{}\"\n", kind.name());
            let config: VigilConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config.watch.handler, kind);
        }
    }
}
