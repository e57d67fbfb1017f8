//! Per-format content adapters.
//!
//! Each adapter turns one input file into pages on the shared
//! [`DocumentBuilder`]: images become a single full-size page, PDFs are
//! imported verbatim, markdown is rendered as paginated text. Dispatch is
//! by [`FileKind`]; unrecognized extensions are skipped without error.

pub mod image;
pub mod markdown;
pub mod pdf;

use crate::error::Result;
use crate::kind::FileKind;
use crate::merge::DocumentBuilder;
use std::path::Path;

/// Route one input file to its adapter.
///
/// [`FileKind::Unknown`] paths contribute no pages and are not an error;
/// the CLI already warns about them, and the engine treats them as a
/// no-op so library callers get the same skip behavior.
pub async fn add_file(builder: &mut DocumentBuilder, path: &Path) -> Result<()> {
    match FileKind::from_path(path) {
        FileKind::Image => image::add_image(builder, path).await,
        FileKind::Pdf => pdf::add_pdf(builder, path).await,
        FileKind::Markdown => markdown::add_markdown(builder, path).await,
        FileKind::Unknown => Ok(()),
    }
}
