//! Configuration management for Photodex.
//!
//! Settings are read from a TOML file in the platform config directory and
//! fall back to built-in defaults. The per-invocation [`ScanConfiguration`] is
//! derived from them.

mod scan;
mod types;
mod validate;

pub use scan::{normalize_extension, ScanConfiguration};
pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Photodex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan filter settings
    pub scan: ScanConfig,

    /// Manifest output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.photodex.photodex/config.toml
    /// - Linux: ~/.config/photodex/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\photodex\config\config.toml
    ///
    /// Falls back to ~/.photodex/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "photodex", "photodex")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = shellexpand::tilde("~").into_owned();
                PathBuf::from(home).join(".photodex").join("config.toml")
            })
    }

    /// Build the immutable configuration for one scan of `root`.
    pub fn scan_configuration(&self, root: impl Into<PathBuf>) -> ScanConfiguration {
        ScanConfiguration::new(root, &self.scan)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.extensions.len(), 9);
        assert!(config.scan.exclude_dirs.contains(&".git".to_string()));
        assert!(config.scan.read_dimensions);
        assert_eq!(config.output.file_name, "image_index.json");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[scan]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nexclude_dirs = [\"node_modules\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scan.exclude_dirs, vec!["node_modules".to_string()]);
        assert_eq!(config.scan.extensions.len(), 9);
        assert_eq!(config.output.file_name, "image_index.json");
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nextensions = []\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.output.pretty = false;
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert!(!parsed.output.pretty);
        assert_eq!(parsed.scan.exclude_dirs, config.scan.exclude_dirs);
    }
}
