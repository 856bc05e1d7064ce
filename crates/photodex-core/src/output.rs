//! Manifest serialization.
//!
//! Manifests are written as UTF-8 JSON, either pretty-printed with two-space
//! indentation or compact. Non-ASCII characters are written verbatim.

use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::types::ScanResult;

/// A writer that serializes manifests as JSON.
pub struct OutputWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Write a single item followed by a newline.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Write `result` to `path`, replacing any existing file.
///
/// The manifest is written to a `.tmp` sibling and renamed into place, so an
/// existing manifest is either fully replaced or left untouched. Any failure
/// surfaces as [`ScanError::WriteFailure`].
pub fn write_manifest(path: &Path, result: &ScanResult, pretty: bool) -> Result<()> {
    let temp_path = temp_sibling(path);

    let write = || -> io::Result<()> {
        let mut file = BufWriter::new(File::create(&temp_path)?);
        let mut writer = OutputWriter::new(&mut file, pretty);
        writer.write(result)?;
        writer.flush()?;
        file.get_ref().sync_all()?;
        fs::rename(&temp_path, path)
    };

    if let Err(source) = write() {
        let _ = fs::remove_file(&temp_path);
        return Err(ScanError::WriteFailure {
            path: path.to_path_buf(),
            source,
        });
    }
    tracing::info!("Written to {}", path.display());
    Ok(())
}

/// `image_index.json` -> `image_index.json.tmp`, in the same directory.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
