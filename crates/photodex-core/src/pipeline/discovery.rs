//! Directory traversal and eligibility filtering.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfiguration;
use crate::error::{EntryError, Result, ScanError};

/// Walks a scan root and yields eligible image files.
pub struct FileDiscovery<'a> {
    config: &'a ScanConfiguration,
}

/// An eligible file found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Path relative to the resolved scan root
    pub relative: PathBuf,
}

impl DiscoveredFile {
    /// Relative path with `/` separators regardless of platform.
    pub fn relative_path(&self) -> String {
        self.relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Base name of the file, case preserved.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl<'a> FileDiscovery<'a> {
    /// Create a new file discovery instance.
    pub fn new(config: &'a ScanConfiguration) -> Self {
        Self { config }
    }

    /// Start walking the configured root.
    ///
    /// Fails with [`ScanError::DirectoryNotFound`] before yielding anything if
    /// the root is missing or not a directory. The walk itself is lazy.
    ///
    /// A root whose resolved path already contains an excluded segment yields
    /// nothing: every file below it would carry that segment too.
    pub fn discover(&self) -> Result<DiscoveredFiles<'a>> {
        let root = resolve_root(self.config.root())?;

        let walker = match self.excluded_segment(&root) {
            Some(segment) => {
                tracing::info!("Scan root {:?} is under excluded {:?}", root, segment);
                None
            }
            None => {
                tracing::debug!("Walking {:?}", root);
                Some(
                    WalkDir::new(&root)
                        .follow_links(false)
                        .sort_by_file_name()
                        .into_iter(),
                )
            }
        };

        Ok(DiscoveredFiles {
            config: self.config,
            root,
            walker,
        })
    }

    /// First component of `root` that matches the exclusion set.
    fn excluded_segment<'p>(&self, root: &'p Path) -> Option<&'p OsStr> {
        root.components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .find(|name| self.config.is_excluded(name))
    }
}

/// Check that `root` is an existing directory and return its absolute form.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }
    Ok(std::fs::canonicalize(root)?)
}

/// Lazy, depth-first sequence of eligible files, sorted by name within each
/// directory.
///
/// Excluded directories are pruned without being read. Entries that cannot be
/// read are logged and skipped.
pub struct DiscoveredFiles<'a> {
    config: &'a ScanConfiguration,
    root: PathBuf,
    walker: Option<walkdir::IntoIter>,
}

impl DiscoveredFiles<'_> {
    /// The resolved, absolute scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for DiscoveredFiles<'_> {
    type Item = DiscoveredFile;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.walker.as_mut()?;
        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let err = EntryError::Access {
                        path: e.path().unwrap_or(self.root.as_path()).to_path_buf(),
                        message: e.to_string(),
                    };
                    tracing::warn!("{err}, skipping");
                    continue;
                }
            };

            // The root's own segments were checked in `discover`.
            if entry.depth() == 0 {
                continue;
            }

            if self.config.is_excluded(entry.file_name()) {
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
                tracing::debug!("Excluded: {:?}", entry.path());
                continue;
            }

            if entry.file_type().is_dir() || !self.config.is_recognized(entry.path()) {
                continue;
            }

            // Follows symlinks: links to files are kept, dangling links and
            // links to directories are dropped.
            if !entry.path().is_file() {
                tracing::debug!("Not a regular file: {:?}", entry.path());
                continue;
            }

            let path = entry.into_path();
            let Ok(relative) = path.strip_prefix(&self.root).map(Path::to_path_buf) else {
                continue;
            };
            return Some(DiscoveredFile { path, relative });
        }
    }
}
