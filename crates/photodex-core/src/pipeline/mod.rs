//! Scan pipeline components.
//!
//! - **discovery**: Walk the root and yield eligible image files
//! - **dimensions**: Best-effort pixel dimension reading
//! - **metadata**: Turn each file into a manifest record
//! - **scanner**: Orchestrates the scan and assembles the manifest

pub mod dimensions;
pub mod discovery;
pub mod metadata;
pub mod scanner;

// Re-exports for convenient access
pub use dimensions::{DimensionReader, Dimensions, ImageDimensionReader, NoDimensions};
pub use discovery::{resolve_root, DiscoveredFile, DiscoveredFiles, FileDiscovery};
pub use metadata::MetadataExtractor;
pub use scanner::Scanner;
