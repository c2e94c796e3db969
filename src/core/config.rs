//! Configuration management with layered hierarchy

use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a config file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {message}")]
    #[diagnostic(code(ftr::config::read))]
    Read { path: PathBuf, message: String },

    #[error("malformed config file {path:?}: {message}")]
    #[diagnostic(code(ftr::config::parse), help("expected YAML keys: banner, color, log_level"))]
    Parse { path: PathBuf, message: String },
}

/// FTR configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print the welcome banner before setup
    pub banner: Option<bool>,

    /// Style the banner and farewell when the terminal supports it
    pub color: Option<bool>,

    /// Log level used when neither RUST_LOG nor --verbose is given
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    ///
    /// `explicit` is a file named on the command line; unlike the global
    /// config it must exist and parse. A broken global config is skipped and
    /// handed back alongside the result, since logging is not set up yet.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Vec<ConfigError>), ConfigError> {
        let mut config = Config::default();
        let mut skipped = Vec::new();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/ftr/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                match Self::from_file(&global_path) {
                    Ok(global) => config.merge(global),
                    Err(e) => skipped.push(e),
                }
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            config.merge(Self::from_file(path)?);
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        Ok((config, skipped))
    }

    /// Read a single YAML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yml::from_str::<Config>(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the environment layer from `FTR_BANNER`, `FTR_COLOR` and `FTR_LOG`
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            banner: lookup("FTR_BANNER").and_then(|v| parse_flag(&v)),
            color: lookup("FTR_COLOR").and_then(|v| parse_flag(&v)),
            log_level: lookup("FTR_LOG").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ftr")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.banner.is_some() {
            self.banner = other.banner;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// Whether to print the welcome banner
    pub fn banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    /// Whether to style the banner and farewell
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Log level filter, defaulting to warnings only
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(log::LevelFilter::Warn)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.banner());
        assert!(config.color());
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            banner: Some(true),
            color: Some(true),
            log_level: Some("info".to_string()),
        };
        base.merge(Config {
            banner: Some(false),
            color: None,
            log_level: None,
        });
        assert_eq!(base.banner, Some(false));
        assert_eq!(base.color, Some(true));
        assert_eq!(base.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "banner: false\nlog_level: debug\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.banner());
        assert!(config.color());
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_from_file_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.yaml");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let bad = tmp.path().join("bad.yaml");
        fs::write(&bad, "banner: [not, a, bool]\n").unwrap();
        assert!(matches!(
            Config::from_file(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_env() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("FTR_BANNER", "off"), ("FTR_COLOR", "maybe"), ("FTR_LOG", "trace")]);
        let config = Config::from_env(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.banner, Some(false));
        assert_eq!(config.color, None);
        assert_eq!(config.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = Config {
            log_level: Some("loud".to_string()),
            ..Config::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
    }
}
