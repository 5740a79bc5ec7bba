//! Rendering result with metadata and statistics.

use crate::model::{Metadata, NodeKind};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes (UTF-8).
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of pages rendered
    pub page_count: u32,

    /// Number of major headings
    pub heading_major_count: u32,

    /// Number of minor headings
    pub heading_minor_count: u32,

    /// Number of quoted blocks
    pub quote_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of containers, page bodies included
    pub container_count: u32,

    /// Size of the final output in bytes
    pub byte_size: usize,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one rendered node.
    pub fn add_node(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::HeadingMajor => self.heading_major_count += 1,
            NodeKind::HeadingMinor => self.heading_minor_count += 1,
            NodeKind::QuotedBlock => self.quote_count += 1,
            NodeKind::Image => self.image_count += 1,
            NodeKind::Container => self.container_count += 1,
        }
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_add_node() {
        let mut stats = RenderStats::new();
        stats.add_node(NodeKind::HeadingMajor);
        stats.add_node(NodeKind::Image);
        stats.add_node(NodeKind::Image);
        stats.add_node(NodeKind::Container);

        assert_eq!(stats.heading_major_count, 1);
        assert_eq!(stats.image_count, 2);
        assert_eq!(stats.container_count, 1);
    }

    #[test]
    fn test_render_stats_add_page() {
        let mut stats = RenderStats::new();
        stats.add_page();
        stats.add_page();
        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.byte_size, 0);
    }

    #[test]
    fn test_render_result_content_len() {
        let result = RenderResult::new(
            "<div></div>".to_string(),
            Metadata::default(),
            RenderStats::default(),
        );
        assert_eq!(result.content_len(), 11);
    }
}
