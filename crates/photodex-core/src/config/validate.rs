//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "scan.extensions must not be empty".into(),
            ));
        }
        for ext in &self.scan.extensions {
            let bare = ext.trim().trim_start_matches('.');
            if bare.is_empty() || bare.contains(['.', '/', '\\']) {
                return Err(ConfigError::ValidationError(format!(
                    "scan.extensions contains an invalid entry: {ext:?}"
                )));
            }
        }
        for name in &self.scan.exclude_dirs {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                return Err(ConfigError::ValidationError(format!(
                    "scan.exclude_dirs entries must be single path segments, got {name:?}"
                )));
            }
        }
        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.file_name must not be empty".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = Config::default();
        config.scan.extensions.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scan.extensions"));
    }

    #[test]
    fn test_validate_rejects_bare_dot_extension() {
        let mut config = Config::default();
        config.scan.extensions = vec![".".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_extension_without_dot() {
        let mut config = Config::default();
        config.scan.extensions = vec!["jpg".to_string(), ".PNG".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nested_exclusion() {
        let mut config = Config::default();
        config.scan.exclude_dirs = vec!["a/b".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exclude_dirs"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
