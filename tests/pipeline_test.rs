//! End-to-end tests for text → pages → HTML.

use std::io::Write;

use pagedhtml::render::{self, RenderOptions};
use pagedhtml::{
    parse_file, parse_text, parse_text_with_options, ContentNode, Error, NodeKind, ParseOptions,
};

fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("Line {}\n", i)).collect()
}

#[test]
fn test_classification_scenario() {
    let doc = parse_text("Hello\n World\nShort\n").unwrap();

    assert_eq!(doc.page_count(), 1);
    assert_eq!(
        doc.pages[0].body().children(),
        &[
            ContentNode::heading_minor("Hello"),
            ContentNode::quoted(" World"),
            ContentNode::heading_minor("Short"),
        ]
    );
}

#[test]
fn test_two_full_pages() {
    let doc = parse_text(&numbered_lines(140)).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.pages[0].len(), 70);
    assert_eq!(doc.pages[1].len(), 70);
    assert_eq!(doc.pages[0].body().children()[0].text(), Some("Line 0"));
    assert_eq!(doc.pages[0].body().children()[69].text(), Some("Line 69"));
    assert_eq!(doc.pages[1].body().children()[0].text(), Some("Line 70"));
    assert_eq!(doc.pages[1].body().children()[69].text(), Some("Line 139"));
}

#[test]
fn test_page_count_is_ceiling() {
    for (count, size, expected) in [(0, 70, 0), (1, 70, 1), (70, 70, 1), (71, 70, 2), (10, 3, 4)] {
        let options = ParseOptions::new().with_page_size(size);
        let doc = parse_text_with_options(&numbered_lines(count), options).unwrap();
        assert_eq!(doc.page_count(), expected, "{} nodes, page size {}", count, size);
    }
}

#[test]
fn test_primary_sequence_reconstructed() {
    let mut text = numbered_lines(25);
    text.push_str("image:a.png,page=1,after=3\nimage:b.png,page=3,after=0\n");
    let options = ParseOptions::new().with_page_size(10);
    let doc = parse_text_with_options(&text, options).unwrap();

    let primary: Vec<_> = doc.primary_nodes().filter_map(ContentNode::text).collect();
    let expected: Vec<_> = (0..25).map(|i| format!("Line {}", i)).collect();
    assert_eq!(primary, expected);
    assert_eq!(doc.inserted_count(), 2);
}

#[test]
fn test_directive_lands_after_index() {
    let mut text = numbered_lines(10);
    text.push_str("image:x.png,page=1,after=5\n");
    let doc = parse_text(&text).unwrap();

    let page = &doc.pages[0];
    assert_eq!(page.len(), 11);
    assert_eq!(page.body().children()[6], ContentNode::image("x.png"));
    assert_eq!(page.body().children()[5].text(), Some("Line 5"));
    assert_eq!(page.body().children()[7].text(), Some("Line 6"));
}

#[test]
fn test_directive_before_content_still_applies() {
    let mut text = String::from("image:x.png,page=1,after=0\n");
    text.push_str(&numbered_lines(3));
    let doc = parse_text(&text).unwrap();

    assert_eq!(doc.pages[0].body().children()[1], ContentNode::image("x.png"));
}

#[test]
fn test_out_of_range_directive_appends() {
    let mut text = numbered_lines(4);
    text.push_str("image:end.png,page=1,after=100\nimage:neg.png,page=1,after=-1\n");
    let doc = parse_text(&text).unwrap();

    let children = doc.pages[0].body().children();
    assert_eq!(children.len(), 6);
    assert_eq!(children[4], ContentNode::image("end.png"));
    assert_eq!(children[5], ContentNode::image("neg.png"));
}

#[test]
fn test_unmatched_directive_dropped() {
    let mut text = numbered_lines(140);
    text.push_str("image:x.png,page=99,after=0\n");
    let doc = parse_text(&text).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.inserted_count(), 0);
    assert_eq!(doc.metadata.directive_count, 1);
    assert_eq!(doc.metadata.dropped_directives, 1);
}

#[test]
fn test_malformed_directive_lenient() {
    let text = "Alpha\nimage:x.png,page=1,after=abc\nBeta\n";
    let doc = parse_text(text).unwrap();

    assert_eq!(doc.pages[0].len(), 2);
    assert_eq!(doc.metadata.dropped_directives, 1);
}

#[test]
fn test_malformed_directive_strict() {
    let text = "Alpha\nimage:x.png,page=1,after=abc\nBeta\n";
    let result = parse_text_with_options(text, ParseOptions::new().strict());

    match result {
        Err(Error::MalformedDirective { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected malformed directive, got {:?}", other),
    }
}

#[test]
fn test_button_lines_suppressed() {
    let doc = parse_text("Hello\nbutton:Next\nWorld\n").unwrap();
    assert_eq!(doc.pages[0].len(), 2);
}

#[test]
fn test_inline_image_is_primary() {
    let doc = parse_text("Hello\nimage: cover.png\n").unwrap();
    assert_eq!(doc.pages[0].body().children()[1], ContentNode::image("cover.png"));
    assert_eq!(doc.metadata.primary_count, 2);
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "The Tragedy of Romeo and Juliet\r\n Two households\r\nimage:a.png,page=1,after=0\r\n"
    )
    .unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc.metadata.title.as_deref(), Some("The Tragedy of Romeo and Juliet"));
    assert_eq!(doc.metadata.source, Some(file.path().display().to_string()));

    let kinds: Vec<_> = doc.pages[0].body().iter().map(ContentNode::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::HeadingMajor, NodeKind::Image, NodeKind::QuotedBlock]
    );
}

#[test]
fn test_parse_missing_file() {
    let result = parse_file("/nonexistent/book.txt");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_html_document_structure() {
    let mut text = numbered_lines(140);
    text.push_str("image:x.png,page=2,after=0\n");
    let doc = parse_text(&text).unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<style>"));
    assert!(html.contains("id=\"page0\" style=\"display:block\""));
    assert!(html.contains("id=\"page1\" style=\"display:none\""));
    assert!(!html.contains("id=\"page2\""));
    assert!(html.contains("const totalPages = 2;"));
    assert_eq!(html.matches("<img src=\"x.png\"").count(), 1);

    let page1 = html.find("id=\"page1\"").unwrap();
    assert!(html.find("<img src=\"x.png\"").unwrap() > page1);
}

#[test]
fn test_html_rendering_is_deterministic() {
    let doc = parse_text(&numbered_lines(90)).unwrap();
    let options = RenderOptions::default();
    assert_eq!(
        render::to_html(&doc, &options).unwrap(),
        render::to_html(&doc, &options).unwrap()
    );
}
