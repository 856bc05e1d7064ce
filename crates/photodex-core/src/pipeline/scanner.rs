//! Scan orchestration: traversal, record extraction and manifest assembly.

use std::time::Instant;

use crate::config::{ScanConfig, ScanConfiguration};
use crate::error::Result;
use crate::types::{ImageRecord, ScanResult};

use super::dimensions::{DimensionReader, ImageDimensionReader, NoDimensions};
use super::discovery::FileDiscovery;
use super::metadata::MetadataExtractor;

/// Runs scans and assembles manifests.
///
/// Holds no state between scans; a single `Scanner` may be reused and shared
/// across threads.
pub struct Scanner {
    extractor: MetadataExtractor,
}

impl Scanner {
    /// Create a scanner that reads dimensions with `reader`.
    pub fn new(reader: Box<dyn DimensionReader>) -> Self {
        Self {
            extractor: MetadataExtractor::new(reader),
        }
    }

    /// Create a scanner using the `image` crate for reading dimensions.
    pub fn with_defaults() -> Self {
        Self::new(Box::new(ImageDimensionReader))
    }

    /// Create a scanner honouring `scan.read_dimensions`.
    pub fn from_config(scan: &ScanConfig) -> Self {
        if scan.read_dimensions {
            Self::with_defaults()
        } else {
            Self::new(Box::new(NoDimensions))
        }
    }

    /// Scan `config.root()` and return the manifest.
    pub fn scan(&self, config: &ScanConfiguration) -> Result<ScanResult> {
        self.scan_with_progress(config, |_| {})
    }

    /// Scan, calling `on_record` for each record in discovery order.
    ///
    /// Only a missing or non-directory root is an error; unreadable entries
    /// and unmeasurable images are absorbed.
    pub fn scan_with_progress<F>(
        &self,
        config: &ScanConfiguration,
        mut on_record: F,
    ) -> Result<ScanResult>
    where
        F: FnMut(&ImageRecord),
    {
        let start = Instant::now();
        let files = FileDiscovery::new(config).discover()?;
        let root = files.root().to_path_buf();
        tracing::info!("Scanning: {}", root.display());

        let mut images = Vec::new();
        for file in files {
            let record = self.extractor.extract(&file);
            on_record(&record);
            images.push(record);
        }

        let result = ScanResult::assemble(&root, images);
        tracing::info!(
            "Found {} image(s) in {:?}",
            result.total_images(),
            start.elapsed()
        );
        Ok(result)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
