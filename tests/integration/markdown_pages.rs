//! Markdown rendering through the full pipeline.

use crate::common;
use docfuse::config::Config;
use docfuse::merge;
use lopdf::Document;

async fn merge_single_markdown(name: &str, content: &str) -> Document {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_markdown(dir.path(), name, content);
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![input], output.clone());
    merge::merge_documents(&config, |_, _, _| {}).await.unwrap();
    Document::load(&output).unwrap()
}

#[tokio::test]
async fn short_markdown_is_a_single_a4_page() {
    let doc = merge_single_markdown("memo.md", "# Memo\n\nOne short paragraph.\n").await;
    assert_eq!(common::page_sizes(&doc), vec![(595.0, 842.0)]);
}

#[tokio::test]
async fn empty_markdown_still_produces_a_title_page() {
    let doc = merge_single_markdown("empty.md", "").await;
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn long_markdown_spans_multiple_pages() {
    let content: String = (0..150)
        .map(|i| format!("Paragraph number {i} with some running text.\n\n"))
        .collect();
    let doc = merge_single_markdown("long.md", &content).await;
    assert!(doc.get_pages().len() > 1);
}

#[tokio::test]
async fn title_appears_only_on_the_first_page() {
    let content: String = (0..150).map(|i| format!("Line {i}.\n\n")).collect();
    let doc = merge_single_markdown("chapters.md", &content).await;

    let pages = doc.get_pages();
    assert!(pages.len() > 1);

    let first = String::from_utf8_lossy(&doc.get_page_content(pages[&1]).unwrap()).into_owned();
    let second = String::from_utf8_lossy(&doc.get_page_content(pages[&2]).unwrap()).into_owned();

    // The bold title font is selected on page one only.
    assert!(first.contains("/F2"));
    assert!(first.contains("chapters"));
    assert!(!second.contains("/F2"));
}

#[tokio::test]
async fn formatting_is_stripped_to_plain_text() {
    let doc = merge_single_markdown("fmt.md", "Some **bold** and [a link](https://x.y).\n").await;

    let content =
        String::from_utf8_lossy(&doc.get_page_content(doc.get_pages()[&1]).unwrap()).into_owned();
    assert!(content.contains("Some bold and a link."));
    assert!(!content.contains("**"));
    assert!(!content.contains("https://x.y"));
}
