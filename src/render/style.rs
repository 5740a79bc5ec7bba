//! Per-kind inline styles.

use crate::model::NodeKind;
use std::collections::HashMap;

/// Default inline style for major headings.
pub const HEADING_MAJOR_STYLE: &str = "font-size: 32px; color: darkblue; margin-top: 20px;";

/// Default inline style for minor headings.
pub const HEADING_MINOR_STYLE: &str = "font-size: 24px; color: darkgreen; margin-top: 16px;";

/// Default inline style for quoted blocks.
pub const QUOTED_BLOCK_STYLE: &str = "margin-left: 20px; font-style: italic; color: gray;";

/// Default inline style for images.
pub const IMAGE_STYLE: &str = "max-width: 100%; display: block; margin: 12px auto;";

/// Maps node kinds to the inline style applied during rendering.
///
/// Containers carry no style unless one is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    styles: HashMap<NodeKind, String>,
}

impl StyleSheet {
    /// Create a style sheet with the default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style sheet with no styles at all.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Set the style for a node kind.
    pub fn with_style(mut self, kind: NodeKind, style: impl Into<String>) -> Self {
        self.styles.insert(kind, style.into());
        self
    }

    /// Remove the style for a node kind.
    pub fn without_style(mut self, kind: NodeKind) -> Self {
        self.styles.remove(&kind);
        self
    }

    /// Get the style for a node kind.
    pub fn style_for(&self, kind: NodeKind) -> Option<&str> {
        self.styles.get(&kind).map(String::as_str)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::empty()
            .with_style(NodeKind::HeadingMajor, HEADING_MAJOR_STYLE)
            .with_style(NodeKind::HeadingMinor, HEADING_MINOR_STYLE)
            .with_style(NodeKind::QuotedBlock, QUOTED_BLOCK_STYLE)
            .with_style(NodeKind::Image, IMAGE_STYLE)
    }
}
