//! Error types for the Photodex scanner.
//!
//! Two tiers: [`ScanError`] aborts a scan invocation and is handed to the
//! caller, while [`EntryError`] describes a failure local to one filesystem
//! entry. Entry errors are logged and discarded by the scanner, never
//! propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level, scan-fatal error.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scan root is missing or is not a directory
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The manifest could not be written to its destination
    #[error("Failed to write manifest to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failure confined to a single entry. Never fatal to a scan.
#[derive(Error, Debug)]
pub enum EntryError {
    /// Entry could not be read during traversal (permissions, broken link)
    #[error("Cannot access {}: {message}", path.display())]
    Access { path: PathBuf, message: String },

    /// Dimensions could not be read from an otherwise eligible file
    #[error("Could not read image dimensions for {}: {message}", path.display())]
    Metadata { path: PathBuf, message: String },
}

/// Convenience type alias for Photodex results.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_mentions_path() {
        let err = ScanError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Directory does not exist: /no/such/dir");
    }

    #[test]
    fn test_write_failure_keeps_source() {
        let err = ScanError::WriteFailure {
            path: PathBuf::from("/ro/image_index.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/ro/image_index.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_converts() {
        let err: ScanError = ConfigError::ValidationError("bad".into()).into();
        assert!(matches!(err, ScanError::Config(_)));
    }
}
