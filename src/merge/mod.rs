//! The merge engine.
//!
//! [`Merger`] walks the configured inputs in order, routes each file to its
//! adapter, and assembles one output document. Processing is fail-fast: the
//! first per-file error aborts the merge, wrapped so the message names the
//! offending file. Nothing is written to disk until every input succeeded.
//!
//! # Examples
//!
//! ```no_run
//! use docfuse::config::Config;
//! use docfuse::merge;
//! use std::path::PathBuf;
//!
//! # async fn example() -> docfuse::Result<()> {
//! let config = Config::new(
//!     vec![PathBuf::from("scan.png"), PathBuf::from("notes.md")],
//!     "merged.pdf",
//! );
//! let stats = merge::merge_documents(&config, |done, total, name| {
//!     eprintln!("[{done}/{total}] {name}");
//! })
//! .await?;
//! println!("{} pages written", stats.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod metadata;

pub use builder::DocumentBuilder;

use crate::adapters;
use crate::config::Config;
use crate::error::{DocFuseError, Result};
use crate::io::PdfWriter;
use crate::utils;
use lopdf::Document;
use std::time::{Duration, Instant};

/// Measurements taken during a merge.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of input files merged.
    pub files_merged: usize,
    /// Number of pages in the output document.
    pub total_pages: usize,
    /// Wall-clock time spent merging (excluding the final write).
    pub merge_time: Duration,
    /// Combined size of the input files in bytes.
    pub input_size: u64,
}

/// A finished merge: the assembled document plus its statistics.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged document, ready to serialize.
    pub document: Document,
    /// Statistics for reporting.
    pub statistics: MergeStatistics,
}

/// The merge engine.
pub struct Merger;

impl Merger {
    /// Create a merger.
    pub fn new() -> Self {
        Self
    }

    /// Merge the configured inputs into one document.
    pub async fn merge(&self, config: &Config) -> Result<MergeResult> {
        self.merge_with_progress(config, |_, _, _| {}).await
    }

    /// Merge with a progress callback.
    ///
    /// The callback receives the 1-based file index, the total file count
    /// and the file's base name, and is invoked before the file is
    /// processed so failures still report the file they happened on.
    ///
    /// # Errors
    ///
    /// Returns [`DocFuseError::NoFilesToMerge`] for an empty input list and
    /// [`DocFuseError::FileFailed`] for the first input that fails.
    pub async fn merge_with_progress<F>(
        &self,
        config: &Config,
        mut on_progress: F,
    ) -> Result<MergeResult>
    where
        F: FnMut(usize, usize, &str),
    {
        if config.inputs.is_empty() {
            return Err(DocFuseError::NoFilesToMerge);
        }

        let started = Instant::now();
        let mut builder = DocumentBuilder::new();
        let total = config.inputs.len();
        let mut input_size: u64 = 0;

        for (index, path) in config.inputs.iter().enumerate() {
            let name = utils::base_name(path);
            on_progress(index + 1, total, &name);

            input_size += tokio::fs::metadata(path)
                .await
                .map(|meta| meta.len())
                .unwrap_or(0);

            adapters::add_file(&mut builder, path)
                .await
                .map_err(|err| DocFuseError::file_failed(name, err))?;
        }

        let total_pages = builder.page_count();
        let document = builder.finalize(&config.info)?;

        Ok(MergeResult {
            document,
            statistics: MergeStatistics {
                files_merged: total,
                total_pages,
                merge_time: started.elapsed(),
                input_size,
            },
        })
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the configured inputs and write the result atomically.
///
/// This is the top-level library entry point: it runs the engine, then
/// serializes to a temporary file next to `config.output` and renames it
/// into place, so a failed merge never leaves a partial output behind.
pub async fn merge_documents<F>(config: &Config, on_progress: F) -> Result<MergeStatistics>
where
    F: FnMut(usize, usize, &str),
{
    let merger = Merger::new();
    let result = merger.merge_with_progress(config, on_progress).await?;

    let writer = PdfWriter::new();
    writer.save(result.document, &config.output).await?;

    Ok(result.statistics)
}
