//! Per-invocation scan configuration.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::ScanConfig;

/// Immutable inputs for one scan: the root directory plus the extension and
/// exclusion filters.
///
/// Extensions are stored lower-cased with a leading `.`; exclusions are
/// compared verbatim against path segment names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfiguration {
    root: PathBuf,
    extensions: BTreeSet<String>,
    exclude: BTreeSet<String>,
}

impl ScanConfiguration {
    /// Create a configuration for `root` using the filters in `scan`.
    pub fn new(root: impl Into<PathBuf>, scan: &ScanConfig) -> Self {
        Self {
            root: root.into(),
            extensions: BTreeSet::new(),
            exclude: BTreeSet::new(),
        }
        .with_extensions(&scan.extensions)
        .with_exclusions(&scan.exclude_dirs)
    }

    /// Replace the recognized extension set.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter(|e| !e.as_ref().trim().is_empty())
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Replace the excluded segment-name set. Blank names are dropped.
    pub fn with_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        self
    }

    /// The directory to scan, as supplied by the caller.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recognized extensions, lower-cased with a leading `.`.
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Excluded segment names.
    pub fn exclusions(&self) -> &BTreeSet<String> {
        &self.exclude
    }

    /// Whether the path's extension, lower-cased, is recognized.
    pub fn is_recognized(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .map(|ext| self.extensions.contains(&format!(".{}", ext.to_lowercase())))
            .unwrap_or(false)
    }

    /// Whether a single path segment is excluded. Case-sensitive.
    pub fn is_excluded(&self, segment: &OsStr) -> bool {
        segment
            .to_str()
            .map(|s| self.exclude.contains(s))
            .unwrap_or(false)
    }
}

/// Lower-case an extension and make sure it carries a leading `.`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(root: &str) -> ScanConfiguration {
        ScanConfiguration::new(root, &ScanConfig::default())
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("JPG"), ".jpg");
        assert_eq!(normalize_extension(".Png"), ".png");
        assert_eq!(normalize_extension(" .webp "), ".webp");
    }

    #[test]
    fn test_is_recognized_case_insensitive() {
        let config = defaults("/photos");
        assert!(config.is_recognized(Path::new("PHOTO.JPG")));
        assert!(config.is_recognized(Path::new("a/b/c.jpeg")));
        assert!(config.is_recognized(Path::new("scan.TiFf")));
        assert!(!config.is_recognized(Path::new("notes.txt")));
        assert!(!config.is_recognized(Path::new("scan.tif")));
        assert!(!config.is_recognized(Path::new("jpg")));
        assert!(!config.is_recognized(Path::new(".jpg")));
    }

    #[test]
    fn test_only_last_suffix_counts() {
        let config = defaults("/photos");
        assert!(config.is_recognized(Path::new("archive.tar.png")));
        assert!(!config.is_recognized(Path::new("photo.jpg.bak")));
    }

    #[test]
    fn test_is_excluded_is_exact() {
        let config = defaults("/photos");
        assert!(config.is_excluded(OsStr::new(".git")));
        assert!(config.is_excluded(OsStr::new("venv")));
        assert!(!config.is_excluded(OsStr::new("VENV")));
        assert!(!config.is_excluded(OsStr::new(".github")));
    }

    #[test]
    fn test_overrides_replace_sets() {
        let config = defaults("/photos")
            .with_extensions(["RAW", " "])
            .with_exclusions(["tmp", ""]);
        assert_eq!(config.extensions().len(), 1);
        assert!(config.extensions().contains(".raw"));
        assert_eq!(config.exclusions().len(), 1);
        assert!(config.is_excluded(OsStr::new("tmp")));
        assert!(!config.is_excluded(OsStr::new(".git")));
    }
}
