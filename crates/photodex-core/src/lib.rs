//! Photodex Core - directory scanning and image manifest assembly.
//!
//! Photodex walks a directory tree, picks out image files by extension,
//! reads their pixel dimensions where possible, and assembles a JSON manifest:
//!
//! ```text
//! Root → Walk & Filter → Extract Record (name, path, dimensions) → Manifest → JSON
//! ```
//!
//! The scan is synchronous and single-threaded. Front ends that must not
//! block can run it on any thread; the [`Scanner`] keeps no state between
//! invocations.
//!
//! # Usage
//!
//! ```rust,no_run
//! use photodex_core::{output, Config, Scanner};
//! use std::path::Path;
//!
//! fn main() -> photodex_core::Result<()> {
//!     let config = Config::load()?;
//!     let scan = config.scan_configuration("./photos");
//!     let result = Scanner::from_config(&config.scan).scan(&scan)?;
//!
//!     output::write_manifest(Path::new("image_index.json"), &result, true)?;
//!     println!("Found {} images", result.total_images());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{Config, ScanConfiguration};
pub use error::{ConfigError, EntryError, Result, ScanError};
pub use output::{write_manifest, OutputWriter};
pub use pipeline::{DimensionReader, Dimensions, ImageDimensionReader, NoDimensions, Scanner};
pub use types::{ImageRecord, ScanInfo, ScanResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scanner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner>();
        assert_send_sync::<ScanResult>();
    }
}
