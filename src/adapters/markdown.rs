//! Markdown adapter: rendered as paginated plain text.
//!
//! The file is converted to plain text, laid out on A4 pages with the file
//! stem as a bold title on the first page, and appended page by page.

use crate::error::{DocFuseError, Result};
use crate::merge::DocumentBuilder;
use crate::text::{LayoutOptions, layout_document, to_plain_text};
use std::path::Path;

/// Render the markdown file at `path` and append its pages to the builder.
pub async fn add_markdown(builder: &mut DocumentBuilder, path: &Path) -> Result<()> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| DocFuseError::from_read_error(path, err))?;

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let opts = LayoutOptions::default();
    let body = to_plain_text(&source);
    for page in layout_document(&title, &body, &opts) {
        builder.add_text_page(&page, &opts)?;
    }

    Ok(())
}
