//! Document-level types.

use super::{ContentNode, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paginated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, source, counts)
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            pages: Vec::new(),
        }
    }

    /// Create a document from assembled pages.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        let mut doc = Self::new();
        doc.metadata.page_count = pages.len() as u32;
        doc.pages = pages;
        doc
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All primary nodes across pages, in document order.
    pub fn primary_nodes(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.pages.iter().flat_map(Page::primary_nodes)
    }

    /// Total number of nodes inserted by directives.
    pub fn inserted_count(&self) -> usize {
        self.pages.iter().map(Page::inserted_count).sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// First major heading, trimmed
    pub title: Option<String>,

    /// Where the text came from (path or URL)
    pub source: Option<String>,

    /// Number of lines in the input text
    pub line_count: usize,

    /// Number of primary nodes
    pub primary_count: usize,

    /// Number of well-formed insertion directives
    pub directive_count: usize,

    /// Directives that were malformed or matched no page
    pub dropped_directives: usize,

    /// Page size used during assembly
    pub elements_per_page: usize,

    /// Total number of pages
    pub page_count: u32,

    /// When the document was produced
    pub generated: DateTime<Utc>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: None,
            source: None,
            line_count: 0,
            primary_count: 0,
            directive_count: 0,
            dropped_directives: 0,
            elements_per_page: crate::assemble::DEFAULT_ELEMENTS_PER_PAGE,
            page_count: 0,
            generated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_get_page_is_one_indexed() {
        let doc = Document::with_pages(vec![
            Page::new(1, vec![ContentNode::heading_minor("a")]),
            Page::new(2, vec![ContentNode::heading_minor("b")]),
        ]);
        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(2).map(|p| p.number), Some(2));
        assert!(doc.get_page(3).is_none());
        assert_eq!(doc.metadata.page_count, 2);
    }

    #[test]
    fn test_metadata_default() {
        let metadata = Metadata::default();
        assert!(metadata.source.is_none());
        assert_eq!(metadata.elements_per_page, 70);
        assert_eq!(metadata.dropped_directives, 0);
    }
}
