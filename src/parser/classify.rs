//! Line classification.

use crate::model::ContentNode;

/// Prefix of image lines.
pub const IMAGE_PREFIX: &str = "image:";

/// Prefix of button lines. Recognized only so they are not read as headings.
pub const BUTTON_PREFIX: &str = "button:";

/// Default minor/major heading length threshold.
pub const DEFAULT_HEADING_THRESHOLD: usize = 20;

/// What a single raw line turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Nothing but whitespace
    Blank,
    /// An `image:` line, handled by the directive parser
    Image,
    /// A `button:` line, which never renders
    Button,
    /// A primary content node
    Node(ContentNode),
}

impl LineClass {
    /// The node produced, if any.
    pub fn into_node(self) -> Option<ContentNode> {
        match self {
            LineClass::Node(node) => Some(node),
            _ => None,
        }
    }
}

/// Classify a raw line using the default heading threshold.
pub fn classify(raw: &str) -> LineClass {
    classify_with_threshold(raw, DEFAULT_HEADING_THRESHOLD)
}

/// Classify a raw line.
///
/// Rules are checked in order: blank, `image:`, `button:`, leading space
/// (quote), short trimmed length (minor heading), anything else (major
/// heading). Node content is always the raw line.
pub fn classify_with_threshold(raw: &str, threshold: usize) -> LineClass {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if raw.starts_with(IMAGE_PREFIX) {
        return LineClass::Image;
    }

    if raw.starts_with(BUTTON_PREFIX) {
        return LineClass::Button;
    }

    let node = if raw.starts_with(' ') {
        ContentNode::quoted(raw)
    } else if trimmed.chars().count() < threshold {
        ContentNode::heading_minor(raw)
    } else {
        ContentNode::heading_major(raw)
    };

    LineClass::Node(node)
}
