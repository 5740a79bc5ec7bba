//! Rendering options and configuration.

use super::StyleSheet;
use crate::model::NodeKind;

/// Class appended to every rendered node.
pub const DEFAULT_BASE_CLASS: &str = "contentText";

/// Options for rendering paged HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Class appended to each node's class list
    pub base_class: String,

    /// Inline styles per node kind
    pub styles: StyleSheet,

    /// Escape HTML special characters in text and attribute values
    pub escape_text: bool,

    /// Wrap output in `<html>`, `<head>` and `<body>`
    pub standalone: bool,

    /// Title for the `<title>` element (standalone only)
    pub title: Option<String>,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base class.
    pub fn with_base_class(mut self, class: impl Into<String>) -> Self {
        self.base_class = class.into();
        self
    }

    /// Replace the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Override the style of one node kind.
    pub fn with_style(mut self, kind: NodeKind, style: impl Into<String>) -> Self {
        self.styles = self.styles.with_style(kind, style);
        self
    }

    /// Enable or disable escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Enable or disable the full-document wrapper.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            styles: StyleSheet::default(),
            escape_text: false,
            standalone: false,
            title: None,
            collect_stats: false,
        }
    }
}
