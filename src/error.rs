//! Error types for docfuse.
//!
//! All fallible operations in the crate return [`Result<T>`], an alias for
//! `std::result::Result<T, DocFuseError>`. The error enum covers the whole
//! pipeline: argument handling, input reading, per-format conversion, merge
//! assembly and output writing.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocFuseError>;

/// All errors docfuse can produce.
#[derive(Debug, thiserror::Error)]
pub enum DocFuseError {
    /// An input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// An input file exists but could not be read.
    #[error("Cannot read file: {path}")]
    FileNotReadable {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be decoded.
    #[error("Failed to read image {path}: {reason}")]
    FailedToReadImage {
        /// Path of the offending image.
        path: PathBuf,
        /// Decoder failure description.
        reason: String,
    },

    /// A PDF file could not be parsed.
    #[error("Failed to load PDF {path}: {reason}")]
    FailedToLoadPdf {
        /// Path of the offending document.
        path: PathBuf,
        /// Parser failure description.
        reason: String,
    },

    /// A source PDF is encrypted and cannot be imported.
    #[error("PDF is encrypted: {path}")]
    EncryptedPdf {
        /// Path of the encrypted document.
        path: PathBuf,
    },

    /// No usable input files remained after argument handling.
    #[error("No input files to merge")]
    NoFilesToMerge,

    /// The output file could not be created.
    #[error("Failed to create output file: {path}")]
    FailedToCreateOutput {
        /// Output path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The merged document could not be written out.
    #[error("Failed to write output file: {path}")]
    FailedToWrite {
        /// Output path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A single input failed during the merge loop.
    ///
    /// The engine is fail-fast: the first per-file error aborts the whole
    /// merge, wrapped in this variant so the message names the file.
    #[error("Error processing '{file}': {source}")]
    FileFailed {
        /// Base name of the file that failed.
        file: String,
        /// The underlying failure.
        #[source]
        source: Box<DocFuseError>,
    },

    /// Document assembly failed.
    #[error("Merge failed: {reason}")]
    MergeFailed {
        /// Assembly failure description.
        reason: String,
    },

    /// Configuration was rejected by validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Validation failure description.
        message: String,
    },

    /// Generic I/O error not tied to a specific input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors that fit no other variant.
    #[error("{message}")]
    Other {
        /// Error description.
        message: String,
    },
}

impl DocFuseError {
    /// Create a `FileNotFound` error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a `FileNotReadable` error.
    pub fn file_not_readable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotReadable {
            path: path.into(),
            source,
        }
    }

    /// Create a `FailedToReadImage` error.
    pub fn failed_to_read_image(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToReadImage {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a `FailedToLoadPdf` error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error in per-file context for the merge loop.
    pub fn file_failed(file: impl Into<String>, source: DocFuseError) -> Self {
        Self::FileFailed {
            file: file.into(),
            source: Box::new(source),
        }
    }

    /// Create a `MergeFailed` error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidConfig` error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an `Other` error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Map an I/O error from reading `path` to the matching variant.
    pub fn from_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            Self::file_not_readable(path, source)
        }
    }
}
