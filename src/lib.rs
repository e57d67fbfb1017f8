//! docfuse merges images, PDF files and Markdown documents into a single
//! PDF, preserving the given input order.
//!
//! Images become one full-size page each, PDF pages are imported verbatim,
//! and markdown is rendered as paginated plain text with the file name as
//! a title. The merge is fail-fast and the output is written atomically.
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
//!     vec![
//!         PathBuf::from("cover.png"),
//!         PathBuf::from("report.pdf"),
//!         PathBuf::from("appendix.md"),
//!     ],
//!     "combined.pdf",
//! );
//! let stats = merge::merge_documents(&config, |_, _, _| {}).await?;
//! println!("merged {} files into {} pages", stats.files_merged, stats.total_pages);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod kind;
pub mod merge;
pub mod output;
pub mod text;
pub mod utils;

pub use config::Config;
pub use error::{DocFuseError, Result};
pub use kind::FileKind;
pub use merge::{MergeStatistics, Merger, merge_documents};

/// Crate version, as written to the output's Producer field.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
