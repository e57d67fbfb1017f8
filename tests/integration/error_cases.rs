//! Failure behavior: fail-fast, error wrapping, no partial output.

use crate::common;
use docfuse::config::Config;
use docfuse::error::DocFuseError;
use docfuse::merge;

#[tokio::test]
async fn missing_input_aborts_the_merge() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_png(dir.path(), "good.png", 8, 8);
    let missing = dir.path().join("missing.pdf");
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![good, missing], output.clone());
    let err = merge::merge_documents(&config, |_, _, _| {}).await.unwrap_err();

    match &err {
        DocFuseError::FileFailed { file, source } => {
            assert_eq!(file, "missing.pdf");
            assert!(matches!(**source, DocFuseError::FileNotFound { .. }));
        }
        other => panic!("expected FileFailed, got {other}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn corrupt_pdf_reports_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, "%PDF-1.4 garbage").unwrap();
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![bad], output.clone());
    let err = merge::merge_documents(&config, |_, _, _| {}).await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Error processing 'bad.pdf':"));
    assert!(!output.exists());
}

#[tokio::test]
async fn corrupt_image_reports_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, "not a png at all").unwrap();
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![bad], output.clone());
    let err = merge::merge_documents(&config, |_, _, _| {}).await.unwrap_err();

    match &err {
        DocFuseError::FileFailed { file, source } => {
            assert_eq!(file, "bad.png");
            assert!(matches!(**source, DocFuseError::FailedToReadImage { .. }));
        }
        other => panic!("expected FileFailed, got {other}"),
    }
}

#[tokio::test]
async fn failure_midway_stops_processing_later_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = common::write_png(dir.path(), "first.png", 8, 8);
    let bad = dir.path().join("bad.md");
    // A directory where a file is expected makes read_to_string fail.
    std::fs::create_dir(&bad).unwrap();
    let last = common::write_png(dir.path(), "last.png", 8, 8);
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![first, bad, last], output.clone());
    let mut progressed = Vec::new();
    let err = merge::merge_documents(&config, |done, _, name| {
        progressed.push((done, name.to_string()));
    })
    .await
    .unwrap_err();

    assert!(matches!(err, DocFuseError::FileFailed { .. }));
    // The failing file was announced, the one after it never was.
    assert_eq!(
        progressed,
        vec![(1, "first.png".to_string()), (2, "bad.md".to_string())]
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn empty_input_list_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let config = Config::new(vec![], output.clone());
    let err = merge::merge_documents(&config, |_, _, _| {}).await.unwrap_err();
    assert!(matches!(err, DocFuseError::NoFilesToMerge));
    assert!(!output.exists());
}
