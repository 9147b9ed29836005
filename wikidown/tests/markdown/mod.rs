//! Markdown rendering tests
//!
//! Tests for HTML page → Markdown rendering, grouped by construct.

mod blocks;
mod document;
mod inline;
mod panels;
mod tables;
