//! Parsing and tree queries
//!
//! We use `html5ever` + `markup5ever_rcdom` for the HTML side. html5ever is browser-grade and
//! recovers from malformed markup the way a browser does, so a page that opens in a browser
//! produces a tree here too.
//!
//! Renderers never touch `NodeData` directly; they go through the helpers below, which cover
//! everything the rendering core needs: children, contents, attributes, flattened text and
//! descendant selection.

use crate::error::RenderError;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse raw page bytes into a DOM.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD rather than an error.
pub fn parse(mut bytes: &[u8]) -> Result<RcDom, RenderError> {
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut bytes)
        .map_err(|e| RenderError::Parse(e.to_string()))
}

/// Local tag name of an element, `None` for text, comments and the document node.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Whether the node is an element with one of the given tag names.
pub fn is_any(node: &Handle, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|tag| tags.contains(&tag))
}

/// Raw text of a text node.
pub fn text_of(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// Attribute value by name.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// The raw `class` attribute, empty when absent.
pub fn class_attr(node: &Handle) -> String {
    attr(node, "class").unwrap_or_default()
}

/// Whether the whitespace-separated `class` list contains `token`.
pub fn has_class(node: &Handle, token: &str) -> bool {
    class_attr(node).split_whitespace().any(|t| t == token)
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

/// Direct element children, in order.
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// All direct child nodes (elements, text, comments), in order.
pub fn contents(node: &Handle) -> Vec<Handle> {
    node.children.borrow().clone()
}

/// Concatenation of every descendant text node, in document order.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if let NodeData::Text { contents } = &current.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    text
}

/// A single predicate in a selector list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Element with this tag name
    Tag(&'a str),
    /// Element whose `id` equals the value
    Id(&'a str),
    /// Element carrying this class token
    Class(&'a str),
    /// Element with this tag whose raw `class` attribute contains the substring
    TagWithClassContaining(&'a str, &'a str),
}

impl Selector<'_> {
    pub fn matches(&self, node: &Handle) -> bool {
        match *self {
            Selector::Tag(tag) => tag_name(node) == Some(tag),
            Selector::Id(id) => attr(node, "id").as_deref() == Some(id),
            Selector::Class(token) => has_class(node, token),
            Selector::TagWithClassContaining(tag, needle) => {
                tag_name(node) == Some(tag)
                    && attr(node, "class").is_some_and(|class| class.contains(needle))
            }
        }
    }
}

/// First strict descendant (pre-order) matching any of the selectors.
pub fn find_first(root: &Handle, selectors: &[Selector<'_>]) -> Option<Handle> {
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(current) = stack.pop() {
        if selectors.iter().any(|s| s.matches(&current)) {
            return Some(current);
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    None
}

/// Every strict descendant (pre-order) matching any of the selectors.
pub fn find_all(root: &Handle, selectors: &[Selector<'_>]) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(current) = stack.pop() {
        if selectors.iter().any(|s| s.matches(&current)) {
            found.push(current.clone());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    found
}
