//! Append-only construction of the merged document.
//!
//! [`DocumentBuilder`] owns the output `lopdf::Document` while adapters
//! append pages to it: raster pages for images, laid-out text pages for
//! markdown, and verbatim imports for source PDFs. `finalize` assembles the
//! page tree, catalog and Info dictionary and hands back the finished
//! document.

use crate::config::DocumentInfo;
use crate::error::{DocFuseError, Result};
use crate::merge::metadata;
use crate::text::{Font, LayoutOptions, TextPage, encode_win_ansi};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Maximum page-tree depth walked when resolving inherited attributes.
const MAX_TREE_DEPTH: usize = 16;

/// Page attributes a PDF page may inherit from its ancestors.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Builder for the merged output document.
pub struct DocumentBuilder {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: Option<(ObjectId, ObjectId)>,
}

impl DocumentBuilder {
    /// Create an empty builder with a reserved page-tree id.
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            fonts: None,
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append one page showing `image` scaled to `width` x `height` points.
    ///
    /// The page's media box matches the image size exactly, so the image
    /// fills the page with no margins.
    pub fn add_image_page(&mut self, image: Stream, width: f64, height: f64) -> Result<()> {
        let image_id = self.doc.add_object(Object::Stream(image));
        let resources = dictionary! {
            "XObject" => dictionary! {
                "Im0" => Object::Reference(image_id),
            },
        };

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Real(width as f32),
                        0.into(),
                        0.into(),
                        Object::Real(height as f32),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };

        self.push_page(width, height, content, resources)
    }

    /// Append one laid-out text page.
    ///
    /// Line positions are given as offsets from the page top and converted
    /// to PDF coordinates here. The two Helvetica font objects are created
    /// on first use and shared by every text page.
    pub fn add_text_page(&mut self, page: &TextPage, opts: &LayoutOptions) -> Result<()> {
        let (regular_id, bold_id) = self.ensure_fonts();
        let resources = dictionary! {
            "Font" => dictionary! {
                "F1" => Object::Reference(regular_id),
                "F2" => Object::Reference(bold_id),
            },
        };

        let mut operations = Vec::new();
        for line in &page.lines {
            let font_name = match line.font {
                Font::Helvetica => "F1",
                Font::HelveticaBold => "F2",
            };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![font_name.into(), Object::Real(line.size as f32)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![
                    Object::Real(opts.margin as f32),
                    Object::Real((opts.page_height - line.y) as f32),
                ],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(&line.text),
                    StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        self.push_page(
            opts.page_width,
            opts.page_height,
            Content { operations },
            resources,
        )
    }

    /// Import every page of `source` into the output, in order.
    ///
    /// The source is renumbered above the output's current id range, page
    /// attributes inherited from the source page tree are materialized onto
    /// each page, and all non-structural objects are carried over. Returns
    /// the number of pages imported.
    pub fn append_document(&mut self, mut source: Document) -> Result<usize> {
        source.renumber_objects_with(self.doc.max_id + 1);
        self.doc.max_id = source.max_id;

        let source_pages: Vec<ObjectId> = source.get_pages().into_values().collect();
        if source_pages.is_empty() {
            return Err(DocFuseError::merge_failed("source PDF has no pages"));
        }

        for &page_id in &source_pages {
            materialize_inherited(&mut source, page_id);
        }

        for (object_id, object) in std::mem::take(&mut source.objects) {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" | b"Pages" | b"Outlines" | b"Outline" => {}
                _ => {
                    self.doc.objects.insert(object_id, object);
                }
            }
        }

        for &page_id in &source_pages {
            if let Some(Object::Dictionary(page)) = self.doc.objects.get_mut(&page_id) {
                page.set("Parent", Object::Reference(self.pages_id));
            }
            self.page_ids.push(page_id);
        }

        Ok(source_pages.len())
    }

    /// Assemble the page tree, catalog and Info dictionary.
    ///
    /// # Errors
    ///
    /// Fails when no pages were appended; a zero-page PDF is not valid.
    pub fn finalize(mut self, info: &DocumentInfo) -> Result<Document> {
        if self.page_ids.is_empty() {
            return Err(DocFuseError::merge_failed(
                "no pages were produced from the inputs",
            ));
        }

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        metadata::set_document_info(&mut self.doc, info);
        self.doc.renumber_objects();

        Ok(self.doc)
    }

    fn ensure_fonts(&mut self) -> (ObjectId, ObjectId) {
        if let Some(ids) = self.fonts {
            return ids;
        }
        let regular = self.add_font(Font::Helvetica);
        let bold = self.add_font(Font::HelveticaBold);
        self.fonts = Some((regular, bold));
        (regular, bold)
    }

    fn add_font(&mut self, font: Font) -> ObjectId {
        self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        })
    }

    fn push_page(
        &mut self,
        width: f64,
        height: f64,
        content: Content,
        resources: Dictionary,
    ) -> Result<()> {
        let encoded = content
            .encode()
            .map_err(|err| DocFuseError::merge_failed(format!("cannot encode page content: {err}")))?;
        let content_id = self
            .doc
            .add_object(Object::Stream(Stream::new(dictionary! {}, encoded)));
        let resources_id = self.doc.add_object(Object::Dictionary(resources));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        self.page_ids.push(page_id);

        Ok(())
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy attributes a page inherits from its ancestors onto the page itself.
///
/// Source page-tree nodes are dropped during import, so inherited values
/// must be pinned to the page dictionary first.
fn materialize_inherited(doc: &mut Document, page_id: ObjectId) {
    for key in INHERITABLE_KEYS {
        let already_set = matches!(
            doc.get_object(page_id),
            Ok(Object::Dictionary(dict)) if dict.has(key)
        );
        if already_set {
            continue;
        }
        if let Some(value) = find_inherited(doc, page_id, key)
            && let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id)
        {
            page.set(key, value);
        }
    }
}

/// Walk the Parent chain looking for `key`, bounded against cycles.
fn find_inherited(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = doc.get_object(page_id).ok()?;
    for _ in 0..MAX_TREE_DEPTH {
        let dict = current.as_dict().ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value.clone());
        }
        let parent_id = dict.get(b"Parent").and_then(|p| p.as_reference()).ok()?;
        current = doc.get_object(parent_id).ok()?;
    }
    None
}
