//! Plain-text parsing module.

pub mod classify;
pub mod directive;
mod options;
mod text_parser;

pub use classify::{classify, classify_with_threshold, LineClass};
pub use directive::{parse_image_line, ImageLine};
pub use options::{ErrorMode, ParseOptions};
pub use text_parser::{ScannedText, TextParser};
