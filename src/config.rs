//! Merge configuration.
//!
//! [`Config`] is the validated description of one merge run: the ordered
//! input list, the output path, verbosity flags and the document metadata
//! to stamp on the result. The CLI builds one from arguments; library users
//! construct it directly.

use anyhow::bail;
use std::path::PathBuf;

/// Default title written to the output Info dictionary.
pub const DEFAULT_TITLE: &str = "Document fusionné";

/// Default creator written to the output Info dictionary.
pub const DEFAULT_CREATOR: &str = "PDF Merger";

/// Metadata stamped on the merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Info dictionary `Title`.
    pub title: String,
    /// Info dictionary `Creator`.
    pub creator: String,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
        }
    }
}

/// Configuration for a merge operation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input files, merged in this exact order.
    pub inputs: Vec<PathBuf>,
    /// Destination for the merged PDF. Overwritten if it exists.
    pub output: PathBuf,
    /// Echo per-file progress and a final summary.
    pub verbose: bool,
    /// Suppress all non-error output.
    pub quiet: bool,
    /// Metadata for the output document.
    pub info: DocumentInfo,
}

impl Config {
    /// Create a configuration with default verbosity and metadata.
    pub fn new(inputs: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            inputs,
            output: output.into(),
            verbose: false,
            quiet: false,
            info: DocumentInfo::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when there are no inputs, when the output path is
    /// empty or also listed as an input, or when both `verbose` and `quiet`
    /// are set.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.inputs.is_empty() {
            bail!("at least one input file is required");
        }

        if self.output.as_os_str().is_empty() {
            bail!("output path must not be empty");
        }

        if self.inputs.contains(&self.output) {
            bail!(
                "output file {} is also listed as an input",
                self.output.display()
            );
        }

        if self.verbose && self.quiet {
            bail!("verbose and quiet modes are mutually exclusive");
        }

        Ok(())
    }
}
