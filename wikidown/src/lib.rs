//! Markdown rendering for exported wiki pages
//!
//!     This crate turns a wiki-style HTML export (one page per file) into Markdown text. It keeps
//!     the document structure (headings, paragraphs, lists, tables, code blocks, panels, inline
//!     emphasis and links) and drops the navigation chrome around the page body.
//!
//!     This is a pure lib: it powers wikidown-cli but is shell agnostic. No code here reads files,
//!     prints, or looks at env vars. The whole surface is [`render`] and its variants.
//!
//! Architecture
//!
//!     The HTML side is parsed by html5ever into an RcDom (see ./dom.rs), which is the only tree
//!     the crate knows. The Markdown side has no tree at all: rendering is a single depth-first
//!     fold that appends text to one buffer owned by the render call.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── dom.rs                  # Parsing and tree queries over RcDom
//!     ├── options.rs              # RenderOptions (content-root and panel conventions)
//!     ├── document.rs             # Title, content-root discovery, final trim
//!     ├── render
//!     │   ├── mod.rs              # Block dispatcher
//!     │   ├── kind.rs             # Node classification (BlockKind)
//!     │   ├── inline.rs           # Inline runs
//!     │   ├── list.rs             # Nested ul/ol
//!     │   ├── table.rs            # Pipe tables
//!     │   ├── panel.rs            # Callout titles
//!     │   └── text.rs             # Whitespace normalization
//!     └── lib.rs
//!
//! Output Conventions
//!
//!     Every block construct ends with exactly one blank line. Inline constructs met at block
//!     level (links, bold, inline code) are written without a terminator, so they run into
//!     whatever follows them.
//!
//!     Source text is not Markdown-escaped: literal `*`, `` ` ``, `[` and `]` pass through as-is.
//!
//! Failure
//!
//!     Only the parse can fail. Once a tree exists every node lands in some dispatch arm, with
//!     "recurse into children" as the default, so rendering itself is infallible.
//!
pub mod document;
pub mod dom;
pub mod error;
pub mod options;
pub mod render;

pub use error::RenderError;
pub use options::RenderOptions;
pub use render::text::normalize_text;

/// Renders an HTML page to Markdown using the default conventions.
pub fn render(html: &str) -> Result<String, RenderError> {
    render_with_options(html, &RenderOptions::default())
}

/// Renders an HTML page to Markdown with explicit options.
pub fn render_with_options(html: &str, options: &RenderOptions) -> Result<String, RenderError> {
    render_bytes(html.as_bytes(), options)
}

/// Renders raw page bytes, decoding them as (lossy) UTF-8.
pub fn render_bytes(bytes: &[u8], options: &RenderOptions) -> Result<String, RenderError> {
    let dom = dom::parse(bytes)?;
    Ok(document::assemble(&dom.document, options))
}
