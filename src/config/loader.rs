//! Configuration loading and discovery for `vigil.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{HandlerKind, VigilConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse vigil.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the alert threshold
    pub threshold: Option<i64>,
    /// Override the handler selection
    pub handler: Option<HandlerKind>,
    /// Enable strict mode
    pub strict: Option<bool>,
    /// Enable the session log at this path
    pub log_path: Option<PathBuf>,
}

/// Find vigil.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for vigil.toml
/// 2. Check XDG_CONFIG_HOME/vigil/vigil.toml (or ~/.config/vigil/vigil.toml)
///
/// # Returns
/// - `Some(path)` if a vigil.toml file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find vigil.toml in the XDG config directory.
///
/// Checks XDG_CONFIG_HOME/vigil/vigil.toml or ~/.config/vigil/vigil.toml
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("vigil").join("vigil.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find vigil.toml by walking up from a specific directory.
///
/// This is the internal implementation that allows specifying the start
/// directory, useful for testing.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join("vigil.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate configuration from a specific file.
pub fn load_config(path: &Path) -> Result<VigilConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: VigilConfig = toml::from_str(&contents)?;
    config.validate().map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load the discovered configuration, falling back to defaults.
///
/// A missing config file is not an error; a present-but-broken one is.
pub fn load_or_default() -> Result<VigilConfig, ConfigError> {
    match find_config() {
        Some(path) => load_config(&path),
        None => Ok(VigilConfig::default()),
    }
}

/// Merge command-line overrides over file values. CLI wins.
pub fn apply_overrides(mut config: VigilConfig, overrides: &CliOverrides) -> VigilConfig {
    if let Some(threshold) = overrides.threshold {
        config.watch.threshold = threshold;
    }
    if let Some(handler) = overrides.handler {
        config.watch.handler = handler;
    }
    if let Some(strict) = overrides.strict {
        config.watch.strict = strict;
    }
    if let Some(ref path) = overrides.log_path {
        config.log.enabled = true;
        config.log.path = path.clone();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("vigil.toml"), "[watch]\nthreshold = 10\n").unwrap();

        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(nested).unwrap();
        assert_eq!(found, root.join("vigil.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        // Walking up from a tempdir may still hit a config in an ancestor,
        // so only assert when nothing was found on the way to the root.
        if let Some(found) = find_config_from(temp.path().to_path_buf()) {
            assert!(!found.starts_with(temp.path()));
        }
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vigil.toml");
        fs::write(
            &path,
            "[watch]\nthreshold = 75\nhandler = \"both\"\n\n[log]\nenabled = true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.watch.threshold, 75);
        assert_eq!(config.watch.handler, HandlerKind::Both);
        assert!(config.log.enabled);
        assert_eq!(config.log.path, PathBuf::from("vigil-session.jsonl"));
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vigil.toml");
        fs::write(&path, "[watch\nthreshold = 75\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vigil.toml");
        fs::write(&path, "[watch]\nthreshold = -1\n").unwrap();

        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors[0].contains("threshold"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_win() {
        let config = VigilConfig::default();
        let overrides = CliOverrides {
            threshold: Some(99),
            handler: Some(HandlerKind::Echo),
            strict: Some(true),
            log_path: Some(PathBuf::from("out.jsonl")),
        };

        let merged = apply_overrides(config, &overrides);
        assert_eq!(merged.watch.threshold, 99);
        assert_eq!(merged.watch.handler, HandlerKind::Echo);
        assert!(merged.watch.strict);
        assert!(merged.log.enabled);
        assert_eq!(merged.log.path, PathBuf::from("out.jsonl"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = VigilConfig::default();
        let merged = apply_overrides(config.clone(), &CliOverrides::default());
        assert_eq!(merged.watch.threshold, config.watch.threshold);
        assert_eq!(merged.watch.handler, config.watch.handler);
        assert!(!merged.log.enabled);
    }
}
