//! Rendering module for converting paged documents to HTML and JSON.

mod html;
mod json;
pub mod lifecycle;
mod options;
pub mod pager;
mod result;
mod style;

pub use html::{escape_html, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use lifecycle::{
    CompositeObserver, LifecycleStage, LoggingObserver, NoopObserver, RecordingObserver,
    RenderObserver,
};
pub use options::{RenderOptions, DEFAULT_BASE_CLASS};
pub use result::{RenderResult, RenderStats};
pub use style::{
    StyleSheet, HEADING_MAJOR_STYLE, HEADING_MINOR_STYLE, IMAGE_STYLE, QUOTED_BLOCK_STYLE,
};
