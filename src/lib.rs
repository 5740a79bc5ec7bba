//! # pagedhtml
//!
//! Convert plain text into a single paginated HTML document.
//!
//! Every non-blank line becomes a content node: short lines are minor
//! headings, long lines are major headings, indented lines are quoted
//! blocks and `image:` lines are images. Nodes are grouped into pages of a
//! fixed size, images can be placed at a position on a given page with
//! `image:<src>,page=<n>,after=<k>`, and the output carries a small script
//! that shows one page at a time.
//!
//! ## Quick Start
//!
//! ```
//! use pagedhtml::{parse_text, render};
//!
//! fn main() -> pagedhtml::Result<()> {
//!     let doc = parse_text("Hello\n World\nimage:cover.png,page=1,after=0\n")?;
//!     assert_eq!(doc.page_count(), 1);
//!
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     assert!(html.contains("<img src=\"cover.png\""));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line classification**: headings, quoted blocks, inline images
//! - **Positional insertion**: images placed after a node on a chosen page
//! - **Client-side paging**: Previous/Next controls with a page counter
//! - **Lifecycle hooks**: observe every rendering step via [`render::RenderObserver`]
//! - **JSON dump** of the paginated model

pub mod assemble;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use assemble::{AssembledPages, Assembler, DEFAULT_ELEMENTS_PER_PAGE};
pub use error::{Error, Result};
pub use model::{Container, ContentNode, Document, InsertionDirective, Metadata, NodeKind, Page};
pub use parser::{ErrorMode, ParseOptions, TextParser};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats, StyleSheet};

use std::io::Read;
use std::path::Path;

/// Parse in-memory text into a paginated document.
///
/// # Example
///
/// ```
/// use pagedhtml::parse_text;
///
/// let doc = parse_text("Hello\n World\nShort\n").unwrap();
/// assert_eq!(doc.page_count(), 1);
/// assert_eq!(doc.pages[0].len(), 3);
/// ```
pub fn parse_text(text: &str) -> Result<Document> {
    TextParser::new(text).parse()
}

/// Parse in-memory text with custom options.
///
/// # Example
///
/// ```
/// use pagedhtml::{parse_text_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_page_size(2).strict();
/// let doc = parse_text_with_options("a\nb\nc\n", options).unwrap();
/// assert_eq!(doc.page_count(), 2);
/// ```
pub fn parse_text_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    TextParser::with_options(text, options).parse()
}

/// Parse a UTF-8 text file.
///
/// # Example
///
/// ```no_run
/// use pagedhtml::parse_file;
///
/// let doc = parse_file("book.txt").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    TextParser::open(path)?.parse()
}

/// Parse a UTF-8 text file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    TextParser::open_with_options(path, options)?.parse()
}

/// Parse a text file without blocking the async runtime.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(
    path: P,
    mut options: ParseOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    if options.source.is_none() {
        options.source = Some(path.display().to_string());
    }
    TextParser::from_bytes_with_options(&data, options)?.parse()
}

/// Parse UTF-8 bytes.
///
/// Invalid UTF-8 yields [`Error::Encoding`].
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    TextParser::from_bytes(data)?.parse()
}

/// Parse UTF-8 bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    TextParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse text from a reader.
///
/// # Example
///
/// ```no_run
/// use pagedhtml::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    TextParser::from_reader(reader)?.parse()
}

/// Parse text from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    TextParser::from_reader_with_options(reader, options)?.parse()
}

/// Convert text to paginated HTML with default options.
///
/// # Example
///
/// ```
/// use pagedhtml::to_html;
///
/// let html = to_html("Hello\n").unwrap();
/// assert!(html.contains("const totalPages = 1;"));
/// ```
pub fn to_html(text: &str) -> Result<String> {
    let doc = parse_text(text)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Convert text to paginated HTML with custom parse and render options.
///
/// # Example
///
/// ```
/// use pagedhtml::{to_html_with_options, ParseOptions, RenderOptions};
///
/// let html = to_html_with_options(
///     "<b>bold</b>\n",
///     ParseOptions::new(),
///     &RenderOptions::new().with_escaping(true).with_standalone(true),
/// )
/// .unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("&lt;b&gt;"));
/// ```
pub fn to_html_with_options(
    text: &str,
    parse_options: ParseOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let doc = parse_text_with_options(text, parse_options)?;
    render::to_html(&doc, render_options)
}

/// Convert text to a JSON dump of the paginated model.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = parse_text(text)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and rendering text documents.
///
/// # Example
///
/// ```
/// use pagedhtml::PagedHtml;
///
/// let html = PagedHtml::new()
///     .with_page_size(10)
///     .standalone()
///     .with_title("Notes")
///     .parse("Hello\n World\n")?
///     .to_html()?;
/// assert!(html.contains("<title>Notes</title>"));
/// # Ok::<(), pagedhtml::Error>(())
/// ```
pub struct PagedHtml {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl PagedHtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the number of primary nodes per page.
    pub fn with_page_size(mut self, elements_per_page: usize) -> Self {
        self.parse_options = self.parse_options.with_page_size(elements_per_page);
        self
    }

    /// Abort on malformed directives.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Drop malformed directives and keep going.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the minor/major heading length threshold.
    pub fn with_heading_threshold(mut self, threshold: usize) -> Self {
        self.parse_options = self.parse_options.with_heading_threshold(threshold);
        self
    }

    /// Wrap output in a complete HTML document.
    pub fn standalone(mut self) -> Self {
        self.render_options = self.render_options.with_standalone(true);
        self
    }

    /// Set the document title (standalone output only).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Escape HTML special characters in content.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.render_options = self.render_options.with_escaping(escape);
        self
    }

    /// Set the class shared by every rendered node.
    pub fn with_base_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_base_class(class);
        self
    }

    /// Parse in-memory text.
    pub fn parse(self, text: &str) -> Result<PagedHtmlResult> {
        let document = parse_text_with_options(text, self.parse_options)?;
        Ok(PagedHtmlResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a text file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<PagedHtmlResult> {
        let document = parse_file_with_options(path, self.parse_options)?;
        Ok(PagedHtmlResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for PagedHtml {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a text document.
pub struct PagedHtmlResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl PagedHtmlResult {
    /// Convert to paginated HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to paginated HTML with rendering statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
