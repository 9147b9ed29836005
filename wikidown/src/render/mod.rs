//! Block dispatcher
//!
//! Walks element children left to right, depth first, classifying each node with
//! [`kind::classify`] and either writing Markdown for it or handing it to the inline, list,
//! table or panel renderers. Containers that are not panels are transparent: their children are
//! rendered in place at the same list level.
//!
//! Output goes into a single buffer owned by the [`Renderer`]; nothing already written is ever
//! revisited.

pub mod inline;
pub mod kind;
pub mod list;
pub mod panel;
pub mod table;
pub mod text;

use crate::dom::{self, Selector};
use crate::options::RenderOptions;
use kind::BlockKind;
use log::warn;
use markup5ever_rcdom::Handle;
use text::normalize_text;

/// Accumulates the Markdown for one render call
pub struct Renderer<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    /// Append raw Markdown, used for content outside the tree walk (the title).
    pub fn push_str(&mut self, markdown: &str) {
        self.out.push_str(markdown);
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Render every element child of `node`.
    pub fn render_children(&mut self, node: &Handle, level: usize, depth: usize) {
        for child in dom::element_children(node) {
            self.render_node(&child, level, depth + 1);
        }
    }

    /// Render one node according to its [`BlockKind`].
    pub fn render_node(&mut self, node: &Handle, level: usize, depth: usize) {
        if depth > self.options.max_depth {
            warn!("block content nested deeper than {}; flattening", self.options.max_depth);
            let text = normalize_text(&dom::text_content(node));
            if !text.is_empty() {
                self.block(&text);
            }
            return;
        }

        match kind::classify(node, self.options) {
            BlockKind::Heading(rank) => {
                let text = normalize_text(&dom::text_content(node));
                self.block(&format!("{} {text}", "#".repeat(rank)));
            }
            BlockKind::Paragraph => {
                let text = inline::render_inline(node, depth + 1, self.options);
                if !text.is_empty() {
                    self.block(&text);
                }
            }
            BlockKind::List { ordered } => {
                list::render_list(&mut self.out, node, level, ordered, depth, self.options);
            }
            BlockKind::ListItem | BlockKind::Ignored => {}
            BlockKind::Preformatted => {
                let code: String = dom::find_all(node, &[Selector::Tag("code")])
                    .iter()
                    .map(dom::text_content)
                    .collect();
                let code = if code.is_empty() {
                    dom::text_content(node)
                } else {
                    code
                };
                self.block(&format!("```\n{code}\n```"));
            }
            BlockKind::InlineCode => {
                self.out.push_str(&format!("`{}`", dom::text_content(node)));
            }
            BlockKind::Blockquote => {
                let quoted = inline::render_inline(node, depth + 1, self.options);
                for line in quoted.trim().split('\n') {
                    self.out.push_str("> ");
                    self.out.push_str(line);
                    self.out.push('\n');
                }
                self.out.push('\n');
            }
            BlockKind::Table => table::render_table(&mut self.out, node),
            BlockKind::Rule => self.block("---"),
            BlockKind::Panel => {
                let title = panel::panel_title(node, self.options);
                let body = normalize_text(&dom::text_content(node));
                self.block(&format!("> **{title}**: {body}"));
            }
            BlockKind::Container | BlockKind::Generic => {
                self.render_children(node, level, depth);
            }
            BlockKind::Link => self.out.push_str(&inline::link(node)),
            BlockKind::Bold => {
                self.out.push_str(&format!("**{}**", dom::text_content(node)));
            }
            BlockKind::Italic => {
                self.out.push_str(&format!("*{}*", dom::text_content(node)));
            }
            BlockKind::Break => self.out.push('\n'),
            BlockKind::Text(raw) => {
                let text = normalize_text(&raw);
                if !text.is_empty() {
                    self.out.push_str(&text);
                }
            }
        }
    }

    /// Write a block followed by its blank line.
    fn block(&mut self, markdown: &str) {
        self.out.push_str(markdown);
        self.out.push_str("\n\n");
    }
}
