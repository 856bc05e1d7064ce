//! Sub-configuration structs with the built-in defaults.

use serde::{Deserialize, Serialize};

/// Default recognized image extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".heic", ".heif", ".webp", ".tiff",
];

/// Default excluded path-segment names.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "__pycache__", "venv", ".vscode"];

/// Default manifest file name.
pub const DEFAULT_OUTPUT_FILE: &str = "image_index.json";

/// Scan filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Recognized extensions, matched case-insensitively ("jpg" and ".jpg" are both accepted)
    pub extensions: Vec<String>,

    /// Path-segment names whose subtrees are skipped (exact, case-sensitive)
    pub exclude_dirs: Vec<String>,

    /// Read pixel dimensions of each image
    pub read_dimensions: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            read_dimensions: true,
        }
    }
}

/// Manifest output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when the manifest is written inside the scanned folder
    pub file_name: String,

    /// Pretty-print the manifest (2-space indentation)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
