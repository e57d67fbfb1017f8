//! Input file classification.
//!
//! Files are routed to an adapter purely by their extension, compared
//! case-insensitively. Anything unrecognized is [`FileKind::Unknown`] and is
//! excluded from merging at the CLI boundary.

use std::path::Path;

/// Image extensions handled by the image adapter.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif"];

/// Markdown extensions handled by the markdown adapter.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// The category an input file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Raster image, rendered as one full-size page.
    Image,
    /// PDF document, pages imported verbatim.
    Pdf,
    /// Markdown document, rendered as paginated plain text.
    Markdown,
    /// Unsupported extension (or no extension at all).
    Unknown,
}

impl FileKind {
    /// Classify a path by its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfuse::kind::FileKind;
    ///
    /// assert_eq!(FileKind::from_path("scan.JPEG"), FileKind::Image);
    /// assert_eq!(FileKind::from_path("report.pdf"), FileKind::Pdf);
    /// assert_eq!(FileKind::from_path("notes.markdown"), FileKind::Markdown);
    /// assert_eq!(FileKind::from_path("archive.zip"), FileKind::Unknown);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(extension) = path.as_ref().extension() else {
            return Self::Unknown;
        };
        let extension = extension.to_string_lossy().to_lowercase();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Self::Image
        } else if extension == "pdf" {
            Self::Pdf
        } else if MARKDOWN_EXTENSIONS.contains(&extension.as_str()) {
            Self::Markdown
        } else {
            Self::Unknown
        }
    }

    /// Whether this kind has an adapter.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
