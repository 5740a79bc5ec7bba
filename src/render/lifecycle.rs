//! Observers for the node rendering lifecycle.
//!
//! Every node passes through the same hooks while it is rendered:
//!
//! 1. `on_created`
//! 2. `on_styles_applied`
//! 3. `on_class_list_applied`
//! 4. content rendering (children first, for containers)
//! 5. `on_text_rendered`, then `on_inserted`
//!
//! Observers see these hooks but cannot change the markup.
//!
//! # Example
//!
//! ```
//! use pagedhtml::render::lifecycle::RenderObserver;
//! use pagedhtml::model::NodeKind;
//!
//! #[derive(Default)]
//! struct ImageCounter(usize);
//!
//! impl RenderObserver for ImageCounter {
//!     fn on_inserted(&mut self, kind: NodeKind) {
//!         if kind == NodeKind::Image {
//!             self.0 += 1;
//!         }
//!     }
//! }
//! ```

use crate::model::NodeKind;

/// A point in a node's rendering lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Rendering of the node began
    Created,
    /// The node's style was resolved
    StylesApplied,
    /// The base class was appended to the class list
    ClassListApplied,
    /// Markup for the node was produced
    TextRendered,
    /// The node's markup was handed to its parent
    Inserted,
}

/// Trait for observing node rendering.
///
/// All methods do nothing by default.
pub trait RenderObserver: Send {
    /// Called when rendering of a node begins.
    fn on_created(&mut self, kind: NodeKind) {
        let _ = kind;
    }

    /// Called once the node's style is known (`None` for unstyled kinds).
    fn on_styles_applied(&mut self, kind: NodeKind, style: Option<&str>) {
        let _ = (kind, style);
    }

    /// Called once the base class has been appended.
    fn on_class_list_applied(&mut self, kind: NodeKind, class_list: &str) {
        let _ = (kind, class_list);
    }

    /// Called with the node's finished markup.
    fn on_text_rendered(&mut self, kind: NodeKind, html: &str) {
        let _ = (kind, html);
    }

    /// Called after the node's markup is returned to its parent.
    fn on_inserted(&mut self, kind: NodeKind) {
        let _ = kind;
    }

    /// Called before a page body is rendered.
    fn on_page_start(&mut self, page_number: u32) {
        let _ = page_number;
    }

    /// Called after a page body is rendered.
    fn on_page_end(&mut self, page_number: u32) {
        let _ = page_number;
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {}

/// Observer that traces every hook through the `log` facade.
#[derive(Debug, Clone, Default)]
pub struct LoggingObserver;

impl RenderObserver for LoggingObserver {
    fn on_created(&mut self, kind: NodeKind) {
        log::trace!("{}: OnCreated", kind);
    }

    fn on_styles_applied(&mut self, kind: NodeKind, _style: Option<&str>) {
        log::trace!("{}: OnStylesApplied", kind);
    }

    fn on_class_list_applied(&mut self, kind: NodeKind, class_list: &str) {
        log::trace!("{}: OnClassListApplied ({})", kind, class_list);
    }

    fn on_text_rendered(&mut self, kind: NodeKind, html: &str) {
        log::trace!("{}: OnTextRendered ({} bytes)", kind, html.len());
    }

    fn on_inserted(&mut self, kind: NodeKind) {
        log::trace!("{}: OnInserted", kind);
    }

    fn on_page_start(&mut self, page_number: u32) {
        log::trace!("Page {}: start", page_number);
    }

    fn on_page_end(&mut self, page_number: u32) {
        log::trace!("Page {}: end", page_number);
    }
}

/// Observer that records every hook as `(stage, kind)` pairs.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<(LifecycleStage, NodeKind)>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in order.
    pub fn events(&self) -> &[(LifecycleStage, NodeKind)] {
        &self.events
    }

    /// Stages recorded for a given kind, in order.
    pub fn stages_for(&self, kind: NodeKind) -> Vec<LifecycleStage> {
        self.events
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(stage, _)| *stage)
            .collect()
    }
}

impl RenderObserver for RecordingObserver {
    fn on_created(&mut self, kind: NodeKind) {
        self.events.push((LifecycleStage::Created, kind));
    }

    fn on_styles_applied(&mut self, kind: NodeKind, _style: Option<&str>) {
        self.events.push((LifecycleStage::StylesApplied, kind));
    }

    fn on_class_list_applied(&mut self, kind: NodeKind, _class_list: &str) {
        self.events.push((LifecycleStage::ClassListApplied, kind));
    }

    fn on_text_rendered(&mut self, kind: NodeKind, _html: &str) {
        self.events.push((LifecycleStage::TextRendered, kind));
    }

    fn on_inserted(&mut self, kind: NodeKind) {
        self.events.push((LifecycleStage::Inserted, kind));
    }
}

/// Composite observer that forwards every hook to each observer in order.
pub struct CompositeObserver {
    observers: Vec<Box<dyn RenderObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer to the chain.
    pub fn with_observer<O: RenderObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Number of chained observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are chained.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for CompositeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderObserver for CompositeObserver {
    fn on_created(&mut self, kind: NodeKind) {
        for observer in &mut self.observers {
            observer.on_created(kind);
        }
    }

    fn on_styles_applied(&mut self, kind: NodeKind, style: Option<&str>) {
        for observer in &mut self.observers {
            observer.on_styles_applied(kind, style);
        }
    }

    fn on_class_list_applied(&mut self, kind: NodeKind, class_list: &str) {
        for observer in &mut self.observers {
            observer.on_class_list_applied(kind, class_list);
        }
    }

    fn on_text_rendered(&mut self, kind: NodeKind, html: &str) {
        for observer in &mut self.observers {
            observer.on_text_rendered(kind, html);
        }
    }

    fn on_inserted(&mut self, kind: NodeKind) {
        for observer in &mut self.observers {
            observer.on_inserted(kind);
        }
    }

    fn on_page_start(&mut self, page_number: u32) {
        for observer in &mut self.observers {
            observer.on_page_start(page_number);
        }
    }

    fn on_page_end(&mut self, page_number: u32) {
        for observer in &mut self.observers {
            observer.on_page_end(page_number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer_accepts_all_hooks() {
        let mut observer = NoopObserver;
        observer.on_created(NodeKind::Image);
        observer.on_styles_applied(NodeKind::Image, None);
        observer.on_inserted(NodeKind::Image);
    }

    #[test]
    fn test_recording_observer() {
        let mut observer = RecordingObserver::new();
        observer.on_created(NodeKind::HeadingMinor);
        observer.on_inserted(NodeKind::HeadingMinor);
        observer.on_created(NodeKind::Image);

        assert_eq!(observer.events().len(), 3);
        assert_eq!(
            observer.stages_for(NodeKind::HeadingMinor),
            vec![LifecycleStage::Created, LifecycleStage::Inserted]
        );
    }

    #[test]
    fn test_composite_observer() {
        let mut composite = CompositeObserver::new()
            .with_observer(NoopObserver)
            .with_observer(LoggingObserver);
        assert_eq!(composite.len(), 2);
        composite.on_page_start(1);
        composite.on_created(NodeKind::Container);
    }
}
