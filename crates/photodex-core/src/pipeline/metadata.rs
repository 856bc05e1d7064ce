//! Per-file record extraction.

use super::dimensions::{DimensionReader, ImageDimensionReader};
use super::discovery::DiscoveredFile;
use crate::types::ImageRecord;

/// Turns discovered files into manifest records.
pub struct MetadataExtractor {
    reader: Box<dyn DimensionReader>,
}

impl MetadataExtractor {
    /// Create an extractor that reads dimensions with `reader`.
    pub fn new(reader: Box<dyn DimensionReader>) -> Self {
        Self { reader }
    }

    /// Build the record for one file.
    ///
    /// Never fails: if dimensions cannot be read the record is returned
    /// without them and the failure is logged at debug level.
    pub fn extract(&self, file: &DiscoveredFile) -> ImageRecord {
        let record = ImageRecord::new(file.file_name(), file.relative_path());

        match self.reader.read(&file.path) {
            Ok(Some(dims)) => record.with_dimensions(dims.width, dims.height),
            Ok(None) => record,
            Err(e) => {
                tracing::debug!("{e}");
                record
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(Box::new(ImageDimensionReader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::dimensions::{Dimensions, NoDimensions};
    use crate::error::EntryError;
    use std::path::{Path, PathBuf};

    struct FixedReader(u32, u32);

    impl DimensionReader for FixedReader {
        fn read(&self, _path: &Path) -> Result<Option<Dimensions>, EntryError> {
            Ok(Some(Dimensions {
                width: self.0,
                height: self.1,
            }))
        }
    }

    struct FailingReader;

    impl DimensionReader for FailingReader {
        fn read(&self, path: &Path) -> Result<Option<Dimensions>, EntryError> {
            Err(EntryError::Metadata {
                path: path.to_path_buf(),
                message: "decoder exploded".into(),
            })
        }
    }

    fn file(rel: &str) -> DiscoveredFile {
        DiscoveredFile {
            path: PathBuf::from("/photos").join(rel),
            relative: PathBuf::from(rel),
        }
    }

    #[test]
    fn test_extract_with_dimensions() {
        let extractor = MetadataExtractor::new(Box::new(FixedReader(640, 480)));
        let record = extractor.extract(&file("trip/IMG_01.JPG"));
        assert_eq!(record.filename, "IMG_01.JPG");
        assert_eq!(record.relative_path, "trip/IMG_01.JPG");
        assert_eq!((record.width, record.height), (Some(640), Some(480)));
    }

    #[test]
    fn test_extract_survives_reader_failure() {
        let extractor = MetadataExtractor::new(Box::new(FailingReader));
        let record = extractor.extract(&file("a.png"));
        assert_eq!(record, ImageRecord::new("a.png", "a.png"));
    }

    #[test]
    fn test_extract_without_reader_capability() {
        let extractor = MetadataExtractor::new(Box::new(NoDimensions));
        let record = extractor.extract(&file("x/y/z.gif"));
        assert!(!record.has_dimensions());
        assert_eq!(record.relative_path, "x/y/z.gif");
    }
}
