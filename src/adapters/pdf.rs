//! PDF adapter: source pages are imported verbatim.

use crate::error::{DocFuseError, Result};
use crate::merge::DocumentBuilder;
use lopdf::Document;
use std::path::Path;
use tokio::task;

/// Load the PDF at `path` and append all of its pages to the builder.
///
/// Page content, sizes and resources are preserved exactly; only the page
/// tree parent changes. Encrypted documents are rejected.
pub async fn add_pdf(builder: &mut DocumentBuilder, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| DocFuseError::from_read_error(path, err))?;

    let document = task::spawn_blocking(move || Document::load_mem(&bytes))
        .await
        .map_err(|err| DocFuseError::other(format!("PDF parse task failed: {err}")))?
        .map_err(|err| DocFuseError::failed_to_load_pdf(path, err.to_string()))?;

    if document.trailer.has(b"Encrypt") {
        return Err(DocFuseError::EncryptedPdf {
            path: path.to_path_buf(),
        });
    }

    builder.append_document(document)?;
    Ok(())
}
