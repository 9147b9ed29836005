//! Node classification for the block dispatcher
//!
//! Each node maps to exactly one [`BlockKind`]. The checks run in a fixed priority order and
//! the first match wins; anything unrecognized becomes [`BlockKind::Generic`], which the
//! dispatcher handles by recursing into the children.

use crate::dom;
use crate::options::RenderOptions;
use markup5ever_rcdom::{Handle, NodeData};

pub const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
pub const LISTS: &[&str] = &["ul", "ol"];
pub const CONTAINERS: &[&str] = &["div", "section", "article"];
pub const BOLD: &[&str] = &["strong", "b"];
pub const ITALIC: &[&str] = &["em", "i"];

/// What a node is, as far as block rendering is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `h1`..`h6`, with the level taken from the tag name
    Heading(usize),
    Paragraph,
    List { ordered: bool },
    /// `li` outside of list rendering; emits nothing
    ListItem,
    Preformatted,
    /// `code` whose parent is not a `pre`
    InlineCode,
    Blockquote,
    Table,
    Rule,
    /// `div`/`section`/`article` carrying a panel marker in its class
    Panel,
    /// `div`/`section`/`article` without a panel marker
    Container,
    Link,
    Bold,
    Italic,
    Break,
    Text(String),
    /// Comments, doctypes and processing instructions
    Ignored,
    Generic,
}

/// Classify a node against the block dispatch table.
pub fn classify(node: &Handle, options: &RenderOptions) -> BlockKind {
    let tag = match &node.data {
        NodeData::Element { name, .. } => name.local.as_ref(),
        NodeData::Text { contents } => return BlockKind::Text(contents.borrow().to_string()),
        NodeData::Document => return BlockKind::Generic,
        _ => return BlockKind::Ignored,
    };

    if HEADINGS.contains(&tag) {
        return BlockKind::Heading(heading_level(tag));
    }
    match tag {
        "p" => BlockKind::Paragraph,
        "ul" | "ol" => BlockKind::List {
            ordered: tag == "ol",
        },
        "li" => BlockKind::ListItem,
        "pre" => BlockKind::Preformatted,
        "code" if !dom::parent(node).is_some_and(|p| dom::is_any(&p, &["pre"])) => {
            BlockKind::InlineCode
        }
        "blockquote" => BlockKind::Blockquote,
        "table" => BlockKind::Table,
        "hr" => BlockKind::Rule,
        _ if CONTAINERS.contains(&tag) => {
            if options.is_panel_class(&dom::class_attr(node)) {
                BlockKind::Panel
            } else {
                BlockKind::Container
            }
        }
        "a" => BlockKind::Link,
        _ if BOLD.contains(&tag) => BlockKind::Bold,
        _ if ITALIC.contains(&tag) => BlockKind::Italic,
        "br" => BlockKind::Break,
        _ => BlockKind::Generic,
    }
}

/// Level of a heading tag, the digit after the `h`.
fn heading_level(tag: &str) -> usize {
    tag[1..].parse().unwrap_or(1)
}
