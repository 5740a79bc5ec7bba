//! Document model types for paged HTML output.
//!
//! This module defines the tree that sits between text parsing and HTML
//! rendering: typed content nodes, the containers that group them into
//! pages, and the deferred insertion directives applied during assembly.

mod directive;
mod document;
mod node;
mod page;

pub use directive::InsertionDirective;
pub use document::{Document, Metadata};
pub use node::{Container, ContentNode, NodeKind};
pub use page::Page;
