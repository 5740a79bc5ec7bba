//! Page assembly: chunking primary nodes and applying insertion directives.

use crate::error::{Error, Result};
use crate::model::{ContentNode, InsertionDirective, Page};

/// Default number of primary nodes per page.
pub const DEFAULT_ELEMENTS_PER_PAGE: usize = 70;

/// Splits a flat node sequence into fixed-size pages.
#[derive(Debug, Clone, Copy)]
pub struct Assembler {
    elements_per_page: usize,
}

/// Output of [`Assembler::assemble`].
#[derive(Debug, Clone, Default)]
pub struct AssembledPages {
    /// Pages in order
    pub pages: Vec<Page>,

    /// Directives that targeted a page that does not exist
    pub unmatched: usize,
}

impl Assembler {
    /// Create an assembler. A page size of zero is rejected.
    pub fn new(elements_per_page: usize) -> Result<Self> {
        if elements_per_page == 0 {
            return Err(Error::InvalidPageSize(elements_per_page));
        }
        Ok(Self { elements_per_page })
    }

    /// Number of primary nodes per page.
    pub fn elements_per_page(&self) -> usize {
        self.elements_per_page
    }

    /// Number of pages `node_count` primary nodes produce.
    pub fn page_count_for(&self, node_count: usize) -> usize {
        node_count.div_ceil(self.elements_per_page)
    }

    /// Build pages from primary nodes, then apply directives page by page.
    ///
    /// Directives for the same page are applied in the order given, so an
    /// earlier insertion shifts the positions seen by later ones.
    pub fn assemble(
        &self,
        nodes: Vec<ContentNode>,
        directives: Vec<InsertionDirective>,
    ) -> AssembledPages {
        let mut pages = self.chunk(nodes);

        let mut unmatched = 0;
        for directive in directives {
            let page = pages
                .iter_mut()
                .enumerate()
                .find(|(index, _)| directive.targets_index(*index))
                .map(|(_, page)| page);

            match page {
                Some(page) => {
                    let position = page.insert_after(directive.after_index, directive.element);
                    log::debug!(
                        "Inserted node on page {} at position {} (requested after {})",
                        page.number,
                        position,
                        directive.after_index
                    );
                }
                None => {
                    log::debug!(
                        "Dropping directive for page {}: document has {} pages",
                        directive.target_page,
                        pages.len()
                    );
                    unmatched += 1;
                }
            }
        }

        AssembledPages { pages, unmatched }
    }

    /// Build pages, discarding the unmatched-directive count.
    pub fn paginate(
        &self,
        nodes: Vec<ContentNode>,
        directives: Vec<InsertionDirective>,
    ) -> Vec<Page> {
        self.assemble(nodes, directives).pages
    }

    fn chunk(&self, nodes: Vec<ContentNode>) -> Vec<Page> {
        let mut pages = Vec::with_capacity(self.page_count_for(nodes.len()));
        let mut nodes = nodes.into_iter().peekable();

        while nodes.peek().is_some() {
            let chunk: Vec<ContentNode> = nodes.by_ref().take(self.elements_per_page).collect();
            let number = pages.len() as u32 + 1;
            pages.push(Page::new(number, chunk));
        }

        pages
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            elements_per_page: DEFAULT_ELEMENTS_PER_PAGE,
        }
    }
}
