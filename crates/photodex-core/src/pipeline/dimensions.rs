//! Best-effort pixel dimension reading.
//!
//! The reader is a capability injected into the scanner so that environments
//! without a usable decoder still produce complete manifests, just without
//! dimensions.

use std::path::Path;

use crate::error::EntryError;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Reads pixel dimensions from an image file.
pub trait DimensionReader: Send + Sync {
    /// Read the dimensions of `path`.
    ///
    /// `Ok(None)` means the reader does not measure images at all; `Err` means
    /// this particular file could not be measured.
    fn read(&self, path: &Path) -> Result<Option<Dimensions>, EntryError>;
}

/// Header-only reader backed by the `image` crate.
///
/// The format is sniffed from file content first, so a PNG saved as `.jpg` is
/// still measured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDimensionReader;

impl DimensionReader for ImageDimensionReader {
    fn read(&self, path: &Path) -> Result<Option<Dimensions>, EntryError> {
        let metadata_err = |message: String| EntryError::Metadata {
            path: path.to_path_buf(),
            message,
        };

        let (width, height) = image::ImageReader::open(path)
            .map_err(|e| metadata_err(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| metadata_err(format!("Cannot detect image format: {e}")))?
            .into_dimensions()
            .map_err(|e| metadata_err(e.to_string()))?;

        Ok(Some(Dimensions { width, height }))
    }
}

/// Fallback that never measures anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDimensions;

impl DimensionReader for NoDimensions {
    fn read(&self, _path: &Path) -> Result<Option<Dimensions>, EntryError> {
        Ok(None)
    }
}
