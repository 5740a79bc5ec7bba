//! Parsing of `image:` lines.
//!
//! Two forms are accepted:
//!
//! ```text
//! image:cover.png                          inline image, joins the page flow
//! image:https://x/map.png,page=2,after=5   insert after node 5 of page 2
//! ```

use crate::error::{Error, Result};
use crate::model::{ContentNode, InsertionDirective};

use super::classify::IMAGE_PREFIX;

/// Marker that turns an image line into a positioned directive.
const DIRECTIVE_MARKER: &str = ",page=";

/// Result of parsing an `image:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLine {
    /// Image placed where the line appears
    Inline(ContentNode),
    /// Image placed by page and position
    Directive(InsertionDirective),
}

/// Parse an `image:` line. `line` is the 1-indexed source line, used in errors.
pub fn parse_image_line(raw: &str, line: usize) -> Result<ImageLine> {
    let rest = raw
        .strip_prefix(IMAGE_PREFIX)
        .ok_or_else(|| Error::malformed(line, "line does not start with `image:`"))?;

    if !rest.contains(DIRECTIVE_MARKER) {
        let source = rest.trim();
        if source.is_empty() {
            return Err(Error::malformed(line, "empty image source"));
        }
        return Ok(ImageLine::Inline(ContentNode::image(source)));
    }

    parse_directive(rest, line).map(ImageLine::Directive)
}

fn parse_directive(rest: &str, line: usize) -> Result<InsertionDirective> {
    let mut segments = rest.split(',');
    let source = segments.next().unwrap_or_default().trim();
    if source.is_empty() {
        return Err(Error::malformed(line, "empty image source"));
    }

    let mut page = None;
    let mut after = None;
    for segment in segments {
        let Some((key, value)) = segment.split_once('=') else {
            log::debug!("Line {}: ignoring directive segment {:?}", line, segment);
            continue;
        };
        match key.trim() {
            "page" => page = Some(value.trim()),
            "after" => after = Some(value.trim()),
            other => log::debug!("Line {}: ignoring unknown directive key {:?}", line, other),
        }
    }

    let page = page.ok_or_else(|| Error::malformed(line, "missing `page`"))?;
    let target_page: u32 = page
        .parse()
        .map_err(|_| Error::malformed(line, format!("`page` is not an integer: {}", page)))?;
    if target_page == 0 {
        return Err(Error::malformed(line, "page numbers start at 1"));
    }

    let after = after.ok_or_else(|| Error::malformed(line, "missing `after`"))?;
    let after_index: i64 = after
        .parse()
        .map_err(|_| Error::malformed(line, format!("`after` is not an integer: {}", after)))?;

    Ok(InsertionDirective::image(source, target_page, after_index))
}
