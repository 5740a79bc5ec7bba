//! Content node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a content node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Long line rendered as a major heading
    HeadingMajor,
    /// Short line rendered as a minor heading
    HeadingMinor,
    /// Indented line rendered as a quotation
    QuotedBlock,
    /// Image reference
    Image,
    /// Group of child nodes
    Container,
}

impl NodeKind {
    /// HTML tag name used for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::HeadingMajor => "h1",
            NodeKind::HeadingMinor => "h2",
            NodeKind::QuotedBlock => "blockquote",
            NodeKind::Image => "img",
            NodeKind::Container => "div",
        }
    }

    /// Check if nodes of this kind can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Container)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::HeadingMajor => "HeadingMajor",
            NodeKind::HeadingMinor => "HeadingMinor",
            NodeKind::QuotedBlock => "QuotedBlock",
            NodeKind::Image => "Image",
            NodeKind::Container => "Container",
        };
        f.write_str(name)
    }
}

/// A node in the document tree.
///
/// Leaves carry an immutable text payload (or an image source); a
/// [`Container`] exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    /// A major heading (`<h1>`)
    HeadingMajor {
        /// Raw line text
        content: String,
    },

    /// A minor heading (`<h2>`)
    HeadingMinor {
        /// Raw line text
        content: String,
    },

    /// A quotation (`<blockquote>`)
    QuotedBlock {
        /// Raw line text, leading whitespace included
        content: String,
    },

    /// An image reference (`<img>`)
    Image {
        /// URL or path, used verbatim
        source: String,
    },

    /// A group of nodes (`<div>`)
    Container(Container),
}

impl ContentNode {
    /// Create a major heading.
    pub fn heading_major(content: impl Into<String>) -> Self {
        ContentNode::HeadingMajor {
            content: content.into(),
        }
    }

    /// Create a minor heading.
    pub fn heading_minor(content: impl Into<String>) -> Self {
        ContentNode::HeadingMinor {
            content: content.into(),
        }
    }

    /// Create a quoted block.
    pub fn quoted(content: impl Into<String>) -> Self {
        ContentNode::QuotedBlock {
            content: content.into(),
        }
    }

    /// Create an image.
    pub fn image(source: impl Into<String>) -> Self {
        ContentNode::Image {
            source: source.into(),
        }
    }

    /// Create a container holding the given children.
    pub fn container(children: Vec<ContentNode>) -> Self {
        ContentNode::Container(Container::with_children(children))
    }

    /// Get the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            ContentNode::HeadingMajor { .. } => NodeKind::HeadingMajor,
            ContentNode::HeadingMinor { .. } => NodeKind::HeadingMinor,
            ContentNode::QuotedBlock { .. } => NodeKind::QuotedBlock,
            ContentNode::Image { .. } => NodeKind::Image,
            ContentNode::Container(_) => NodeKind::Container,
        }
    }

    /// Text payload of a heading or quote.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentNode::HeadingMajor { content }
            | ContentNode::HeadingMinor { content }
            | ContentNode::QuotedBlock { content } => Some(content),
            _ => None,
        }
    }

    /// Children of this node. Always empty for leaves.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Container(container) => container.children(),
            _ => &[],
        }
    }

    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        !self.kind().is_container()
    }

    /// Check if this node is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, ContentNode::Image { .. })
    }

    /// Count this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ContentNode::node_count)
            .sum::<usize>()
    }
}

/// An ordered group of content nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    children: Vec<ContentNode>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from existing children, keeping their order.
    pub fn with_children(children: Vec<ContentNode>) -> Self {
        Self { children }
    }

    /// Append a child at the end.
    pub fn append(&mut self, child: ContentNode) {
        self.children.push(child);
    }

    /// Insert a child immediately after position `after`.
    ///
    /// Positions outside `0..len` append at the end instead. Returns the
    /// position the child was placed at.
    pub fn insert_after(&mut self, after: i64, child: ContentNode) -> usize {
        let position = usize::try_from(after)
            .ok()
            .filter(|&index| index < self.children.len())
            .map(|index| index + 1);

        match position {
            Some(position) => {
                self.children.insert(position, child);
                position
            }
            None => {
                log::debug!(
                    "Insert position {} out of range for {} children, appending",
                    after,
                    self.children.len()
                );
                self.children.push(child);
                self.children.len() - 1
            }
        }
    }

    /// Get the children in order.
    pub fn children(&self) -> &[ContentNode] {
        &self.children
    }

    /// Iterate over the children.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentNode> {
        self.children.iter()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Take the children out of the container.
    pub fn into_children(self) -> Vec<ContentNode> {
        self.children
    }
}

impl From<Container> for ContentNode {
    fn from(container: Container) -> Self {
        ContentNode::Container(container)
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a ContentNode;
    type IntoIter = std::slice::Iter<'a, ContentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Container {
        Container::with_children(
            (0..count)
                .map(|i| ContentNode::heading_minor(format!("n{}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_node_kinds() {
        assert_eq!(ContentNode::heading_major("x").kind(), NodeKind::HeadingMajor);
        assert_eq!(ContentNode::heading_minor("x").kind(), NodeKind::HeadingMinor);
        assert_eq!(ContentNode::quoted(" x").kind(), NodeKind::QuotedBlock);
        assert_eq!(ContentNode::image("x.png").kind(), NodeKind::Image);
        assert_eq!(ContentNode::container(vec![]).kind(), NodeKind::Container);
    }

    #[test]
    fn test_leaves_have_no_children() {
        let leaves = [
            ContentNode::heading_major("a"),
            ContentNode::heading_minor("b"),
            ContentNode::quoted(" c"),
            ContentNode::image("d.png"),
        ];
        for leaf in &leaves {
            assert!(leaf.is_leaf());
            assert!(leaf.children().is_empty());
        }
    }

    #[test]
    fn test_insert_after_in_range() {
        let mut container = numbered(10);
        let position = container.insert_after(5, ContentNode::image("x.png"));

        assert_eq!(position, 6);
        assert_eq!(container.len(), 11);
        assert!(container.children()[6].is_image());
        assert_eq!(container.children()[5].text(), Some("n5"));
        assert_eq!(container.children()[7].text(), Some("n6"));
    }

    #[test]
    fn test_insert_after_last_index() {
        let mut container = numbered(3);
        let position = container.insert_after(2, ContentNode::image("x.png"));
        assert_eq!(position, 3);
        assert!(container.children()[3].is_image());
    }

    #[test]
    fn test_insert_after_out_of_range_appends() {
        let mut container = numbered(3);
        assert_eq!(container.insert_after(3, ContentNode::image("a.png")), 3);
        assert_eq!(container.insert_after(-1, ContentNode::image("b.png")), 4);
        assert_eq!(container.insert_after(1000, ContentNode::image("c.png")), 5);
        assert_eq!(container.len(), 6);
    }

    #[test]
    fn test_insert_into_empty_container() {
        let mut container = Container::new();
        assert_eq!(container.insert_after(0, ContentNode::image("x.png")), 0);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_node_count() {
        let nested = ContentNode::container(vec![
            ContentNode::heading_major("a"),
            ContentNode::container(vec![ContentNode::image("b.png")]),
        ]);
        assert_eq!(nested.node_count(), 4);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(NodeKind::HeadingMajor.tag(), "h1");
        assert_eq!(NodeKind::QuotedBlock.tag(), "blockquote");
        assert_eq!(NodeKind::Container.to_string(), "Container");
    }
}
