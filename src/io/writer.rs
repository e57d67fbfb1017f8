//! Serialization of the merged document.
//!
//! Writes are atomic by default: the document is saved to a sibling
//! temporary file and renamed over the destination, so an interrupted or
//! failed write never leaves a truncated PDF at the output path.

use crate::error::{DocFuseError, Result};
use lopdf::Document;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::task;

/// Options controlling how the output is written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary file and rename into place.
    pub atomic: bool,
    /// Compress uncompressed streams before saving.
    pub compress: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
        }
    }
}

/// Statistics from a completed write.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Size of the written file in bytes.
    pub file_size: u64,
    /// Wall-clock time spent serializing and renaming.
    pub write_time: Duration,
}

/// Writer for merged documents.
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a writer with default options (atomic, compressed).
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with explicit options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Write `document` to `path`.
    ///
    /// Serialization runs on the blocking pool; compression and the
    /// temp-file dance happen there too.
    ///
    /// # Errors
    ///
    /// Returns [`DocFuseError::FailedToCreateOutput`] when the destination
    /// (or its temporary sibling) cannot be created and
    /// [`DocFuseError::FailedToWrite`] when serialization or the final
    /// rename fails.
    pub async fn save(&self, document: Document, path: &Path) -> Result<WriteStatistics> {
        let started = Instant::now();
        let options = self.options.clone();
        let target = path.to_path_buf();

        let file_size = task::spawn_blocking(move || write_document(document, &target, &options))
            .await
            .map_err(|err| DocFuseError::other(format!("write task failed: {err}")))??;

        Ok(WriteStatistics {
            file_size,
            write_time: started.elapsed(),
        })
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_document(mut document: Document, path: &Path, options: &WriteOptions) -> Result<u64> {
    if options.compress {
        document.compress();
    }

    let temp_path = path.with_extension("pdf.tmp");
    let write_path: &Path = if options.atomic { &temp_path } else { path };

    let file = std::fs::File::create(write_path).map_err(|err| {
        DocFuseError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    let mut writer = std::io::BufWriter::new(file);
    document
        .save_to(&mut writer)
        .map_err(|err| write_error(path, std::io::Error::other(err)))?;
    writer.flush().map_err(|err| write_error(path, err))?;
    drop(writer);

    if options.atomic {
        std::fs::rename(&temp_path, path).map_err(|err| write_error(path, err))?;
    }

    Ok(std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0))
}

fn write_error(path: &Path, source: std::io::Error) -> DocFuseError {
    DocFuseError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    }
}
