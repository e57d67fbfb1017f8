//! End-to-end merges across the three input formats.

use crate::common;
use docfuse::config::Config;
use docfuse::merge;
use lopdf::{Document, Object};

#[tokio::test]
async fn merges_image_pdf_and_markdown_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let image = common::write_png(dir.path(), "cover.png", 96, 192);
    let pdf = common::write_pdf(dir.path(), "body.pdf", &[(612, 792), (300, 500)]);
    let markdown = common::write_markdown(dir.path(), "notes.md", "# Notes\n\nShort body.\n");
    let output = dir.path().join("combined.pdf");

    let config = Config::new(vec![image, pdf, markdown], output.clone());
    let stats = merge::merge_documents(&config, |_, _, _| {}).await.unwrap();

    assert_eq!(stats.files_merged, 3);
    assert_eq!(stats.total_pages, 4);

    let doc = Document::load(&output).unwrap();
    assert_eq!(
        common::page_sizes(&doc),
        vec![
            (72.0, 144.0),   // 96x192 px at 96 DPI
            (612.0, 792.0),  // imported verbatim
            (300.0, 500.0),  // imported verbatim
            (595.0, 842.0),  // A4 markdown page
        ]
    );
}

#[tokio::test]
async fn image_pages_scale_at_96_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let image = common::write_jpeg(dir.path(), "photo.jpg", 960, 480);
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![image], output.clone());
    merge::merge_documents(&config, |_, _, _| {}).await.unwrap();

    let doc = Document::load(&output).unwrap();
    assert_eq!(common::page_sizes(&doc), vec![(720.0, 360.0)]);
}

#[tokio::test]
async fn output_carries_default_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let image = common::write_png(dir.path(), "only.png", 10, 10);
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![image], output.clone());
    merge::merge_documents(&config, |_, _, _| {}).await.unwrap();

    let doc = Document::load(&output).unwrap();
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_object(info_id).unwrap().as_dict().unwrap();

    let Object::String(title, _) = info.get(b"Title").unwrap() else {
        panic!("Title is not a string");
    };
    assert_eq!(title.as_slice(), b"Document fusionn\xE9");

    let Object::String(creator, _) = info.get(b"Creator").unwrap() else {
        panic!("Creator is not a string");
    };
    assert_eq!(creator.as_slice(), b"PDF Merger");
}

#[tokio::test]
async fn progress_reports_every_file_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = vec![
        common::write_png(dir.path(), "one.png", 8, 8),
        common::write_markdown(dir.path(), "two.md", "text\n"),
        common::write_pdf(dir.path(), "three.pdf", &[(100, 100)]),
    ];
    let output = dir.path().join("out.pdf");

    let config = Config::new(inputs, output);
    let mut calls = Vec::new();
    merge::merge_documents(&config, |done, total, name| {
        calls.push((done, total, name.to_string()));
    })
    .await
    .unwrap();

    assert_eq!(
        calls,
        vec![
            (1, 3, "one.png".to_string()),
            (2, 3, "two.md".to_string()),
            (3, 3, "three.pdf".to_string()),
        ]
    );
}

#[tokio::test]
async fn same_file_can_repeat() {
    let dir = tempfile::tempdir().unwrap();
    let image = common::write_png(dir.path(), "twice.png", 16, 16);
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![image.clone(), image], output.clone());
    let stats = merge::merge_documents(&config, |_, _, _| {}).await.unwrap();
    assert_eq!(stats.total_pages, 2);

    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let image = common::write_png(dir.path(), "in.png", 8, 8);
    let output = dir.path().join("out.pdf");
    std::fs::write(&output, "stale bytes").unwrap();

    let config = Config::new(vec![image], output.clone());
    merge::merge_documents(&config, |_, _, _| {}).await.unwrap();

    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
