//! Nested `ul`/`ol` rendering
//!
//! Items are written one per line, indented two spaces per nesting level. Ordered items are
//! numbered by their position among the list's own `li` children, so numbering restarts at 1
//! for every list, nested ones included. Only the outermost list closes the block with a
//! blank line.

use crate::dom;
use crate::normalize_text;
use crate::options::RenderOptions;
use crate::render::inline::render_inline;
use crate::render::kind::LISTS;
use log::warn;
use markup5ever_rcdom::Handle;

const INDENT: &str = "  ";

/// Append the list rooted at `list` to `out`.
pub fn render_list(
    out: &mut String,
    list: &Handle,
    level: usize,
    ordered: bool,
    depth: usize,
    options: &RenderOptions,
) {
    let items = dom::element_children(list)
        .into_iter()
        .filter(|child| dom::is_any(child, &["li"]));

    for (index, item) in items.enumerate() {
        let text = item_text(&item, depth + 1, options);
        if !text.is_empty() {
            out.push_str(&INDENT.repeat(level));
            if ordered {
                out.push_str(&format!("{}. ", index + 1));
            } else {
                out.push_str("- ");
            }
            out.push_str(&text);
            out.push('\n');
        }

        for nested in dom::element_children(&item)
            .into_iter()
            .filter(|child| dom::is_any(child, LISTS))
        {
            if depth + 2 > options.max_depth {
                warn!("list nested deeper than {}; flattening", options.max_depth);
                let flattened = normalize_text(&dom::text_content(&nested));
                if !flattened.is_empty() {
                    out.push_str(&format!("{}- {flattened}\n", INDENT.repeat(level + 1)));
                }
                continue;
            }
            let nested_ordered = dom::is_any(&nested, &["ol"]);
            render_list(out, &nested, level + 1, nested_ordered, depth + 2, options);
        }
    }

    if level == 0 {
        out.push('\n');
    }
}

/// Text of the item itself, leaving out its nested lists.
fn item_text(item: &Handle, depth: usize, options: &RenderOptions) -> String {
    let mut text = String::new();
    for content in dom::contents(item) {
        if dom::is_any(&content, LISTS) {
            continue;
        }
        match dom::text_of(&content) {
            Some(raw) => text.push_str(&raw),
            None => text.push_str(&render_inline(&content, depth, options)),
        }
    }
    text.trim().to_string()
}
