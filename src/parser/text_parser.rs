//! Plain-text document parser.

use std::io::Read;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::assemble::Assembler;
use crate::error::Result;
use crate::model::{ContentNode, Document, InsertionDirective, Metadata};

use super::classify::{classify_with_threshold, LineClass};
use super::directive::{parse_image_line, ImageLine};
use super::options::{ErrorMode, ParseOptions};

/// Lines split into primary nodes and insertion directives.
#[derive(Debug, Clone, Default)]
pub struct ScannedText {
    /// Primary nodes in source order
    pub nodes: Vec<ContentNode>,

    /// Well-formed directives in source order
    pub directives: Vec<InsertionDirective>,

    /// Directives dropped because they were malformed
    pub malformed: usize,

    /// `button:` lines that were suppressed
    pub suppressed: usize,

    /// Number of input lines
    pub line_count: usize,
}

/// Plain-text document parser.
pub struct TextParser {
    text: String,
    options: ParseOptions,
}

impl TextParser {
    /// Create a parser over in-memory text.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    /// Create a parser over in-memory text with custom options.
    pub fn with_options(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Open a text file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a text file with custom options.
    ///
    /// The path is recorded as the document source unless one is already set.
    pub fn open_with_options<P: AsRef<Path>>(path: P, mut options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        if options.source.is_none() {
            options.source = Some(path.display().to_string());
        }
        Self::from_bytes_with_options(&data, options)
    }

    /// Create a parser from UTF-8 bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Create a parser from UTF-8 bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let text = std::str::from_utf8(data)?;
        Ok(Self::with_options(text, options))
    }

    /// Create a parser from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Create a parser from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Partition the text into primary nodes and directives.
    pub fn scan(&self) -> Result<ScannedText> {
        let normalized;
        let text = if self.options.normalize_unicode {
            normalized = self.text.nfc().collect::<String>();
            normalized.as_str()
        } else {
            self.text.as_str()
        };
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut scanned = ScannedText::default();
        for (index, raw) in text.lines().enumerate() {
            scanned.line_count += 1;
            match classify_with_threshold(raw, self.options.heading_threshold) {
                LineClass::Blank => {}
                LineClass::Button => scanned.suppressed += 1,
                LineClass::Node(node) => scanned.nodes.push(node),
                LineClass::Image => match parse_image_line(raw, index + 1) {
                    Ok(ImageLine::Inline(node)) => scanned.nodes.push(node),
                    Ok(ImageLine::Directive(directive)) => scanned.directives.push(directive),
                    Err(e) if self.options.error_mode == ErrorMode::Lenient && e.is_local() => {
                        log::warn!("Dropping image directive: {}", e);
                        scanned.malformed += 1;
                    }
                    Err(e) => return Err(e),
                },
            }
        }

        log::debug!(
            "Scanned {} lines: {} nodes, {} directives, {} malformed, {} suppressed",
            scanned.line_count,
            scanned.nodes.len(),
            scanned.directives.len(),
            scanned.malformed,
            scanned.suppressed
        );

        Ok(scanned)
    }

    /// Parse the text and return a paginated document.
    pub fn parse(&self) -> Result<Document> {
        let assembler = Assembler::new(self.options.elements_per_page)?;
        let scanned = self.scan()?;

        let mut metadata = Metadata {
            title: find_title(&scanned.nodes),
            source: self.options.source.clone(),
            line_count: scanned.line_count,
            primary_count: scanned.nodes.len(),
            directive_count: scanned.directives.len(),
            elements_per_page: assembler.elements_per_page(),
            ..Default::default()
        };

        let assembled = assembler.assemble(scanned.nodes, scanned.directives);
        metadata.dropped_directives = scanned.malformed + assembled.unmatched;
        metadata.page_count = assembled.pages.len() as u32;

        Ok(Document {
            metadata,
            pages: assembled.pages,
        })
    }
}

fn find_title(nodes: &[ContentNode]) -> Option<String> {
    nodes.iter().find_map(|node| match node {
        ContentNode::HeadingMajor { content } => Some(content.trim().to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::NodeKind;

    #[test]
    fn test_scan_partitions_lines() {
        let text = "A fairly long opening line of text\n\
                    image:a.png\n\
                    image:b.png,page=1,after=0\n\
                    button:Click me!\n\
                    \n\
                    \x20indented";
        let scanned = TextParser::new(text).scan().unwrap();

        let kinds: Vec<_> = scanned.nodes.iter().map(ContentNode::kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::HeadingMajor, NodeKind::Image, NodeKind::QuotedBlock]
        );
        assert_eq!(scanned.directives.len(), 1);
        assert_eq!(scanned.suppressed, 1);
        assert_eq!(scanned.line_count, 6);
    }

    #[test]
    fn test_crlf_lines() {
        let scanned = TextParser::new("One\r\nTwo\r\n").scan().unwrap();
        assert_eq!(scanned.nodes.len(), 2);
        assert_eq!(scanned.nodes[0].text(), Some("One"));
    }

    #[test]
    fn test_lenient_drops_malformed_directive() {
        let text = "Alpha\nimage:x.png,page=1,after=abc\nimage:y.png,page=1,after=0\nBeta";
        let scanned = TextParser::new(text).scan().unwrap();
        assert_eq!(scanned.malformed, 1);
        assert_eq!(scanned.directives.len(), 1);
        assert_eq!(scanned.nodes.len(), 2);
    }

    #[test]
    fn test_strict_rejects_malformed_directive() {
        let text = "Alpha\nimage:x.png,page=1,after=abc";
        let parser = TextParser::with_options(text, ParseOptions::new().strict());
        let err = parser.scan().unwrap_err();
        assert!(matches!(err, Error::MalformedDirective { line: 2, .. }));
    }

    #[test]
    fn test_parse_fills_metadata() {
        let text = "Short\nThis line is clearly a major heading\nimage:x.png,page=9,after=0";
        let doc = TextParser::with_options(text, ParseOptions::new().with_source("mem"))
            .parse()
            .unwrap();

        assert_eq!(doc.page_count(), 1);
        assert_eq!(
            doc.metadata.title.as_deref(),
            Some("This line is clearly a major heading")
        );
        assert_eq!(doc.metadata.source.as_deref(), Some("mem"));
        assert_eq!(doc.metadata.primary_count, 2);
        assert_eq!(doc.metadata.directive_count, 1);
        assert_eq!(doc.metadata.dropped_directives, 1);
        assert_eq!(doc.metadata.page_count, 1);
    }

    #[test]
    fn test_zero_page_size_fails() {
        let parser = TextParser::with_options("Hello", ParseOptions::new().with_page_size(0));
        assert!(matches!(parser.parse(), Err(Error::InvalidPageSize(0))));
    }

    #[test]
    fn test_invalid_utf8() {
        let result = TextParser::from_bytes(&[0x48, 0xFF, 0x49]);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let scanned = TextParser::new("\u{feff}Hello").scan().unwrap();
        assert_eq!(scanned.nodes[0].text(), Some("Hello"));
    }

    #[test]
    fn test_normalization_is_opt_in() {
        let scanned = TextParser::new("Cafe\u{301}").scan().unwrap();
        assert_eq!(scanned.nodes[0].text(), Some("Cafe\u{301}"));

        let parser =
            TextParser::with_options("Cafe\u{301}", ParseOptions::new().with_normalization(true));
        assert_eq!(parser.scan().unwrap().nodes[0].text(), Some("Caf\u{e9}"));
    }

    #[test]
    fn test_decomposed_line_keeps_raw_content_and_class() {
        // 20 chars before composition, 10 after
        let raw = "e\u{301}".repeat(10);
        let scanned = TextParser::new(raw.as_str()).scan().unwrap();

        assert_eq!(scanned.nodes[0].kind(), NodeKind::HeadingMajor);
        assert_eq!(scanned.nodes[0].text(), Some(raw.as_str()));
    }
}
