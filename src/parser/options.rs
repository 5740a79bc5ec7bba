//! Parsing options and configuration.

use crate::assemble::DEFAULT_ELEMENTS_PER_PAGE;
use crate::parser::classify::DEFAULT_HEADING_THRESHOLD;

/// Options for parsing and paginating text documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode for malformed directives
    pub error_mode: ErrorMode,

    /// Number of primary nodes per page
    pub elements_per_page: usize,

    /// Trimmed lines shorter than this (in characters) become minor headings
    pub heading_threshold: usize,

    /// Normalize input text to Unicode NFC before classification
    pub normalize_unicode: bool,

    /// Source label recorded in the document metadata
    pub source: Option<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (malformed directives abort parsing).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable lenient mode (malformed directives are dropped).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the number of primary nodes per page.
    pub fn with_page_size(mut self, elements_per_page: usize) -> Self {
        self.elements_per_page = elements_per_page;
        self
    }

    /// Set the minor/major heading length threshold.
    pub fn with_heading_threshold(mut self, threshold: usize) -> Self {
        self.heading_threshold = threshold;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Record where the text came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            elements_per_page: DEFAULT_ELEMENTS_PER_PAGE,
            heading_threshold: DEFAULT_HEADING_THRESHOLD,
            normalize_unicode: false,
            source: None,
        }
    }
}

/// How to handle malformed insertion directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first malformed directive
    Strict,
    /// Drop malformed directives and keep going
    #[default]
    Lenient,
}
