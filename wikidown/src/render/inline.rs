//! Inline runs
//!
//! Flattens a node's contents into one line of text with Markdown emphasis, links and code
//! spans embedded. Text fragments are appended as written and the whole run is trimmed once at
//! the end, so spacing between adjacent fragments survives.

use crate::dom;
use crate::options::RenderOptions;
use crate::render::kind::{BOLD, ITALIC};
use log::warn;
use markup5ever_rcdom::Handle;

/// Render the contents of `node` as a single inline run.
pub fn render_inline(node: &Handle, depth: usize, options: &RenderOptions) -> String {
    if depth > options.max_depth {
        warn!("inline content nested deeper than {}; flattening", options.max_depth);
        return dom::text_content(node).trim().to_string();
    }

    let mut run = String::new();
    for child in dom::contents(node) {
        if let Some(text) = dom::text_of(&child) {
            run.push_str(&text);
        } else if dom::is_any(&child, &["a"]) {
            run.push_str(&link(&child));
        } else if dom::is_any(&child, BOLD) {
            run.push_str(&format!("**{}**", dom::text_content(&child)));
        } else if dom::is_any(&child, ITALIC) {
            run.push_str(&format!("*{}*", dom::text_content(&child)));
        } else if dom::is_any(&child, &["code"]) {
            run.push_str(&format!("`{}`", dom::text_content(&child)));
        } else if dom::is_any(&child, &["br"]) {
            run.push('\n');
        } else {
            run.push_str(&render_inline(&child, depth + 1, options));
        }
    }
    run.trim().to_string()
}

/// `[text](href)` for a link with both parts, bare text without a target, nothing without text.
pub fn link(node: &Handle) -> String {
    let text = dom::text_content(node);
    let href = dom::attr(node, "href").unwrap_or_default();
    match (text.is_empty(), href.is_empty()) {
        (true, _) => String::new(),
        (false, false) => format!("[{text}]({href})"),
        (false, true) => text,
    }
}
