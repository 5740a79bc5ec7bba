//! HTML rendering for paged documents.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::{Container, ContentNode, Document, NodeKind, Page};

use super::lifecycle::{NoopObserver, RenderObserver};
use super::{pager, RenderOptions, RenderResult, RenderStats};

/// Convert a document to paged HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut renderer = HtmlRenderer::new(options.clone());
    Ok(renderer.render(doc))
}

/// Convert a document to paged HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut renderer = HtmlRenderer::new(options.clone());
    Ok(renderer.render_with_stats(doc))
}

/// HTML renderer.
///
/// Each node goes through the same hook sequence: created, styles applied,
/// class list applied, content rendered, text rendered, inserted. Style and
/// class are resolved before content because the markup embeds them.
pub struct HtmlRenderer<O: RenderObserver = NoopObserver> {
    options: RenderOptions,
    observer: O,
    stats: RenderStats,
}

impl HtmlRenderer<NoopObserver> {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            observer: NoopObserver,
            stats: RenderStats::new(),
        }
    }
}

impl<O: RenderObserver> HtmlRenderer<O> {
    /// Replace the lifecycle observer.
    pub fn with_observer<P: RenderObserver>(self, observer: P) -> HtmlRenderer<P> {
        HtmlRenderer {
            options: self.options,
            observer,
            stats: self.stats,
        }
    }

    /// Get the lifecycle observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Take the lifecycle observer back.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Statistics collected so far (only when `collect_stats` is set).
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Render a document to a complete paged HTML string.
    pub fn render(&mut self, doc: &Document) -> String {
        let pages: Vec<String> = doc.pages.iter().map(|page| self.render_page(page)).collect();
        let html = pager::emit(&pages, &self.options.base_class);

        if self.options.standalone {
            let title = self
                .options
                .title
                .as_deref()
                .or(doc.metadata.title.as_deref());
            pager::wrap_document(&html, title)
        } else {
            html
        }
    }

    /// Render a document and return it with statistics.
    pub fn render_with_stats(&mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        self.stats = RenderStats::new();

        let content = self.render(doc);
        self.stats.byte_size = content.len();

        RenderResult::new(content, doc.metadata.clone(), self.stats.clone())
    }

    /// Render a single page body (without the page wrapper).
    pub fn render_page(&mut self, page: &Page) -> String {
        self.observer.on_page_start(page.number);
        if self.options.collect_stats {
            self.stats.add_page();
        }

        let html = self.render_container(page.body());

        self.observer.on_page_end(page.number);
        html
    }

    /// Render any node, recursing into containers.
    pub fn render_node(&mut self, node: &ContentNode) -> String {
        let kind = node.kind();
        let (style, class_list) = self.begin(kind);

        let html = match node {
            ContentNode::HeadingMajor { content } => {
                let attrs = self.attributes(style.as_deref(), &class_list);
                self.text_element("h1", &attrs, content)
            }
            ContentNode::HeadingMinor { content } => {
                let attrs = self.attributes(style.as_deref(), &class_list);
                self.text_element("h2", &attrs, content)
            }
            ContentNode::QuotedBlock { content } => {
                // class before style for quotes
                let attrs =
                    self.class_attribute(&class_list) + &self.style_attribute(style.as_deref());
                self.text_element("blockquote", &attrs, content)
            }
            ContentNode::Image { source } => {
                let src = self.escape(source);
                let attrs = self.attributes(style.as_deref(), &class_list);
                format!("<img src=\"{}\"{}>", src, attrs)
            }
            ContentNode::Container(container) => {
                self.container_element(container, style.as_deref(), &class_list)
            }
        };

        self.finish(kind, html)
    }

    /// Render a container with the full lifecycle.
    pub fn render_container(&mut self, container: &Container) -> String {
        let (style, class_list) = self.begin(NodeKind::Container);
        let html = self.container_element(container, style.as_deref(), &class_list);
        self.finish(NodeKind::Container, html)
    }

    /// Created, style and class-list hooks. Returns the resolved style and class list.
    fn begin(&mut self, kind: NodeKind) -> (Option<String>, String) {
        self.observer.on_created(kind);
        if self.options.collect_stats {
            self.stats.add_node(kind);
        }

        let style = self.options.styles.style_for(kind).map(str::to_string);
        self.observer.on_styles_applied(kind, style.as_deref());

        let mut class_list = String::new();
        append_class(&mut class_list, &self.options.base_class);
        self.observer.on_class_list_applied(kind, &class_list);

        (style, class_list)
    }

    /// Post-render hooks.
    fn finish(&mut self, kind: NodeKind, html: String) -> String {
        self.observer.on_text_rendered(kind, &html);
        self.observer.on_inserted(kind);
        html
    }

    fn text_element(&self, tag: &str, attrs: &str, content: &str) -> String {
        format!("<{tag}{}>{}</{tag}>", attrs, self.escape(content))
    }

    fn container_element(
        &mut self,
        container: &Container,
        style: Option<&str>,
        class_list: &str,
    ) -> String {
        let mut children = String::new();
        for child in container {
            children.push_str(&self.render_node(child));
        }
        format!("<div{}>{}</div>", self.attributes(style, class_list), children)
    }

    /// Style then class.
    fn attributes(&self, style: Option<&str>, class_list: &str) -> String {
        self.style_attribute(style) + &self.class_attribute(class_list)
    }

    fn style_attribute(&self, style: Option<&str>) -> String {
        style
            .map(|style| format!(" style=\"{}\"", self.escape(style)))
            .unwrap_or_default()
    }

    fn class_attribute(&self, class_list: &str) -> String {
        if class_list.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", self.escape(class_list))
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_text {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn append_class(class_list: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !class_list.is_empty() {
        class_list.push(' ');
    }
    class_list.push_str(class);
}

/// Escape `& < > " '` for use in HTML text or attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
