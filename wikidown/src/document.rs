//! Page-level assembly: title, content root, final trim
//!
//! The content root is the first element matching one of the configured root ids or classes.
//! Failing that, the first `div` whose class contains the fallback substring, and failing that
//! the `body`. Everything outside the chosen root (navigation, sidebars, footers) is ignored.

use crate::dom::{self, Selector};
use crate::normalize_text;
use crate::options::RenderOptions;
use crate::render::Renderer;
use log::debug;
use markup5ever_rcdom::Handle;

/// Render a parsed document to its final Markdown.
pub fn assemble(document: &Handle, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(options);

    if let Some(title) = title(document) {
        renderer.push_str(&format!("# {title}\n\n"));
    }

    match content_root(document, options) {
        Some(root) => renderer.render_children(&root, 0, 0),
        None => debug!("document has no body; nothing to render"),
    }

    let markdown = renderer.finish().trim().to_string();
    debug!("rendered {} bytes of markdown", markdown.len());
    markdown
}

/// Normalized text of the `title` element, when present and non-blank.
pub fn title(document: &Handle) -> Option<String> {
    let title = dom::find_first(document, &[Selector::Tag("title")])?;
    let text = normalize_text(&dom::text_content(&title));
    (!text.is_empty()).then_some(text)
}

/// Locate the element whose children make up the page body.
pub fn content_root(document: &Handle, options: &RenderOptions) -> Option<Handle> {
    let mut primary: Vec<Selector<'_>> = options
        .root_ids
        .iter()
        .map(|id| Selector::Id(id.as_str()))
        .collect();
    primary.extend(
        options
            .root_classes
            .iter()
            .map(|class| Selector::Class(class.as_str())),
    );

    if let Some(root) = dom::find_first(document, &primary) {
        debug!("content root: main content element");
        return Some(root);
    }

    if !options.fallback_class.is_empty() {
        let fallback = Selector::TagWithClassContaining("div", &options.fallback_class);
        if let Some(root) = dom::find_first(document, &[fallback]) {
            debug!("content root: div with class containing {:?}", options.fallback_class);
            return Some(root);
        }
    }

    debug!("content root: body");
    dom::find_first(document, &[Selector::Tag("body")])
}
