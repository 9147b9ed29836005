//! Error types for rendering

use thiserror::Error;

/// Errors that can occur while rendering a page
///
/// Parsing is the only fallible step; the tree walk never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The input could not be turned into a tree
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}
