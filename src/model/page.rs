//! Page-level types.

use super::{Container, ContentNode};
use serde::{Deserialize, Serialize};

/// A single navigable page of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Container wrapping the page's nodes
    body: Container,

    /// Positions in `body` holding directive-inserted nodes, ascending
    inserted: Vec<usize>,
}

/// Unchecked wire form of [`Page`].
#[derive(Deserialize)]
struct RawPage {
    number: u32,
    body: Container,
    #[serde(default)]
    inserted: Vec<usize>,
}

impl TryFrom<RawPage> for Page {
    type Error = String;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        let ascending = raw.inserted.windows(2).all(|pair| pair[0] < pair[1]);
        if !ascending {
            return Err(format!(
                "page {}: inserted positions must be strictly ascending",
                raw.number
            ));
        }
        if let Some(&last) = raw.inserted.last() {
            if last >= raw.body.len() {
                return Err(format!(
                    "page {}: inserted position {} is outside a body of {} nodes",
                    raw.number,
                    last,
                    raw.body.len()
                ));
            }
        }
        Ok(Self {
            number: raw.number,
            body: raw.body,
            inserted: raw.inserted,
        })
    }
}

impl Page {
    /// Create a page from a chunk of primary nodes.
    pub fn new(number: u32, primary: Vec<ContentNode>) -> Self {
        Self {
            number,
            body: Container::with_children(primary),
            inserted: Vec::new(),
        }
    }

    /// Container wrapping the page's nodes.
    pub fn body(&self) -> &Container {
        &self.body
    }

    /// Insert a supplementary node after position `after` of the body.
    ///
    /// Out-of-range positions append. Returns the position used.
    pub fn insert_after(&mut self, after: i64, node: ContentNode) -> usize {
        let position = self.body.insert_after(after, node);
        for index in self.inserted.iter_mut() {
            if *index >= position {
                *index += 1;
            }
        }
        let slot = self.inserted.partition_point(|&index| index < position);
        self.inserted.insert(slot, position);
        position
    }

    /// Nodes that came from the text itself, in order.
    pub fn primary_nodes(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.body
            .iter()
            .enumerate()
            .filter(|(index, _)| self.inserted.binary_search(index).is_err())
            .map(|(_, node)| node)
    }

    /// Nodes placed by insertion directives, in body order.
    pub fn inserted_nodes(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.inserted
            .iter()
            .filter_map(|&index| self.body.children().get(index))
    }

    /// Number of primary nodes on the page.
    pub fn primary_count(&self) -> usize {
        self.body.len().saturating_sub(self.inserted.len())
    }

    /// Number of inserted nodes on the page.
    pub fn inserted_count(&self) -> usize {
        self.inserted.len()
    }

    /// Total number of nodes in the body.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the page has no nodes.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Zero-based index of the page.
    pub fn index(&self) -> usize {
        self.number.saturating_sub(1) as usize
    }
}
