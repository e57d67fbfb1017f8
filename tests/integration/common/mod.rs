//! Shared fixture helpers for integration tests.
//!
//! Fixtures are generated on the fly in a temp directory: images with the
//! `image` crate, PDFs with lopdf, markdown with plain `fs::write`.

#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Write a solid-color PNG of the given pixel size.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    write_image(dir, name, width, height, ImageFormat::Png)
}

/// Write a solid-color JPEG of the given pixel size.
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    write_image(dir, name, width, height, ImageFormat::Jpeg)
}

fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, Rgb([80, 120, 200]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();

    let path = dir.join(name);
    std::fs::write(&path, buf.into_inner()).unwrap();
    path
}

/// Write a minimal PDF with one empty page per entry in `page_sizes`
/// (width, height in points).
pub fn write_pdf(dir: &Path, name: &str, page_sizes: &[(i64, i64)]) -> PathBuf {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for &(width, height) in page_sizes {
        let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, vec![])));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Write a markdown file.
pub fn write_markdown(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Media box (width, height) of every page, in page order.
pub fn page_sizes(doc: &Document) -> Vec<(f32, f32)> {
    let mut sizes = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        sizes.push((
            media_box[2].as_float().unwrap(),
            media_box[3].as_float().unwrap(),
        ));
    }
    sizes
}
