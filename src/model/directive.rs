//! Deferred insertion instructions.

use super::ContentNode;
use serde::{Deserialize, Serialize};

/// An instruction to insert a node after a position on a given page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionDirective {
    /// Target page (1-indexed)
    pub target_page: u32,

    /// Position within the page after which the element goes (0-indexed).
    /// Values outside the page's current range append at the end.
    pub after_index: i64,

    /// The node to insert
    pub element: ContentNode,
}

impl InsertionDirective {
    /// Create a new directive.
    pub fn new(target_page: u32, after_index: i64, element: ContentNode) -> Self {
        Self {
            target_page,
            after_index,
            element,
        }
    }

    /// Create a directive inserting an image.
    pub fn image(source: impl Into<String>, target_page: u32, after_index: i64) -> Self {
        Self::new(target_page, after_index, ContentNode::image(source))
    }

    /// Check if this directive targets the page at `page_index` (0-indexed).
    pub fn targets_index(&self, page_index: usize) -> bool {
        self.target_page as usize == page_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_index() {
        let directive = InsertionDirective::image("x.png", 1, 5);
        assert!(directive.targets_index(0));
        assert!(!directive.targets_index(1));
    }

    #[test]
    fn test_image_directive() {
        let directive = InsertionDirective::image("cover.jpg", 3, 0);
        assert_eq!(directive.element, ContentNode::image("cover.jpg"));
        assert_eq!(directive.target_page, 3);
    }
}
