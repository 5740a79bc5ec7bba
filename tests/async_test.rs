//! Tests for the async file entry point.
#![cfg(feature = "async")]

use std::io::Write;

use pagedhtml::{parse_file_async, ParseOptions};

#[tokio::test]
async fn test_parse_file_async() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Hello\n World\nimage:x.png,page=1,after=0").unwrap();

    let doc = parse_file_async(file.path(), ParseOptions::default())
        .await
        .unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.pages[0].len(), 3);
    assert_eq!(doc.metadata.source, Some(file.path().display().to_string()));
}

#[tokio::test]
async fn test_parse_file_async_missing() {
    let result = parse_file_async("/nonexistent/book.txt", ParseOptions::default()).await;
    assert!(matches!(result, Err(pagedhtml::Error::Io(_))));
}
