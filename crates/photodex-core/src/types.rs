//! Manifest data types.
//!
//! These serialize directly to the manifest document. Field order is
//! declaration order, and absent dimensions are omitted rather than written
//! as `null`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timestamp layout used for `scan_date`: local time, microsecond precision, no offset.
pub const SCAN_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One image found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Base name including extension, case preserved
    pub filename: String,

    /// Path relative to the scan root, `/`-separated on every platform
    pub relative_path: String,

    /// Width in pixels, when it could be read
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<u32>,

    /// Height in pixels, when it could be read
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<u32>,
}

impl ImageRecord {
    /// Create a record with no dimensions.
    pub fn new(filename: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            relative_path: relative_path.into(),
            width: None,
            height: None,
        }
    }

    /// Attach pixel dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Both dimensions are present.
    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

/// Scan-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInfo {
    /// When the manifest was assembled (see [`SCAN_DATE_FORMAT`])
    pub scan_date: String,

    /// Number of records in `images`
    pub total_images: usize,

    /// Absolute path of the scanned root
    pub scan_directory: String,
}

/// The complete manifest for one scan.
///
/// Built through [`ScanResult::new`], which keeps `total_images` equal to the
/// number of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    scan_info: ScanInfo,
    images: Vec<ImageRecord>,
}

impl ScanResult {
    /// Assemble a manifest, stamping it with `assembled_at`.
    pub fn new(
        scan_directory: &Path,
        images: Vec<ImageRecord>,
        assembled_at: DateTime<Local>,
    ) -> Self {
        Self {
            scan_info: ScanInfo {
                scan_date: format_scan_date(&assembled_at),
                total_images: images.len(),
                scan_directory: scan_directory.to_string_lossy().into_owned(),
            },
            images,
        }
    }

    /// Assemble a manifest stamped with the current local time.
    pub fn assemble(scan_directory: &Path, images: Vec<ImageRecord>) -> Self {
        Self::new(scan_directory, images, Local::now())
    }

    /// Scan-level metadata.
    pub fn scan_info(&self) -> &ScanInfo {
        &self.scan_info
    }

    /// Records in discovery order.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Number of records.
    pub fn total_images(&self) -> usize {
        self.scan_info.total_images
    }

    /// Absolute path of the scanned root.
    pub fn scan_directory(&self) -> &str {
        &self.scan_info.scan_directory
    }
}

/// Render a timestamp in the `scan_date` layout.
pub fn format_scan_date(at: &DateTime<Local>) -> String {
    at.format(SCAN_DATE_FORMAT).to_string()
}
