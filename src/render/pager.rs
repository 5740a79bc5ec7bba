//! Page wrappers, navigation controls and the page-switching script.
//!
//! The emitted markup shows one `.page` block at a time. `Previous`/`Next`
//! stop at the first and last page; there is no wraparound.

use std::fmt::Write;

use super::html::escape_html;

/// Element id prefix for page wrappers (`page0`, `page1`, ...).
pub const PAGE_ID_PREFIX: &str = "page";

/// Element id of the page-count label.
pub const PAGE_INFO_ID: &str = "pageInfo";

const BODY_STYLE: &str = "display:flex;flex-direction:column;align-items:center;";

/// Join rendered page fragments into one navigable HTML string.
///
/// `base_class` names the content rule in the shared stylesheet.
pub fn emit(pages: &[String], base_class: &str) -> String {
    let capacity = pages.iter().map(String::len).sum::<usize>() + 2048;
    let mut html = String::with_capacity(capacity);

    html.push_str(&stylesheet(base_class));

    for (index, fragment) in pages.iter().enumerate() {
        let display = if index == 0 { "block" } else { "none" };
        let _ = writeln!(
            html,
            "<div class=\"page\" id=\"{}{}\" style=\"display:{}\">",
            PAGE_ID_PREFIX, index, display
        );
        html.push_str(fragment);
        html.push_str("\n</div>\n");
    }

    html.push_str(CONTROLS);
    html.push_str(&script(pages.len()));
    html
}

/// Shared page and content rules.
///
/// The content rule is left out when `base_class` is empty.
pub fn stylesheet(base_class: &str) -> String {
    let mut css = String::from(
        "<style>
.page {
    width: 75%;
    height: 80vh;
    page-break-before: always;
    overflow-y: auto;
}
",
    );
    if !base_class.is_empty() {
        let _ = write!(
            css,
            ".{} {{
    font-family: Arial, sans-serif;
    line-height: 1.5;
}}
",
            base_class
        );
    }
    css.push_str("</style>\n");
    css
}

const CONTROLS: &str = "<div style=\"margin-top:20px\">
    <button onclick=\"prevPage()\">Previous Page</button>
    <span id=\"pageInfo\"></span>
    <button onclick=\"nextPage()\">Next Page</button>
</div>
";

/// Navigation script for `total_pages` pages.
pub fn script(total_pages: usize) -> String {
    format!(
        "<script>
let currentPage = 0;
const totalPages = {total};

function showPage(index) {{
    if (totalPages === 0) {{
        document.getElementById('{info}').innerText = 'Page: 0 / 0';
        return;
    }}
    for (let i = 0; i < totalPages; i++) {{
        document.getElementById('{prefix}' + i).style.display = i === index ? 'block' : 'none';
    }}
    document.getElementById('{info}').innerText = `Page: ${{index + 1}} / ${{totalPages}}`;
    currentPage = index;
}}

function nextPage() {{
    if (currentPage < totalPages - 1) {{
        showPage(currentPage + 1);
    }}
}}

function prevPage() {{
    if (currentPage > 0) {{
        showPage(currentPage - 1);
    }}
}}

showPage(currentPage);
</script>
",
        total = total_pages,
        info = PAGE_INFO_ID,
        prefix = PAGE_ID_PREFIX,
    )
}

/// Wrap a body fragment in a complete HTML document.
pub fn wrap_document(body: &str, title: Option<&str>) -> String {
    let title = title
        .map(|t| format!("<title>{}</title>", escape_html(t)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">{}</head><body style=\"{}\">\n{}</body></html>\n",
        title, BODY_STYLE, body
    )
}
