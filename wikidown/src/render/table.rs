//! Pipe tables
//!
//! Rows are collected from anywhere under the table. A first row with `th` cells becomes the
//! header plus a `---` separator; every other row is written from its `td` cells. Cell text is
//! normalized, so cell markup is dropped.

use crate::dom::{self, Selector};
use crate::normalize_text;
use markup5ever_rcdom::Handle;

/// Append `table` as a pipe table. Tables without rows emit nothing.
pub fn render_table(out: &mut String, table: &Handle) {
    let rows = dom::find_all(table, &[Selector::Tag("tr")]);
    let Some(first) = rows.first() else {
        return;
    };

    let header = dom::find_all(first, &[Selector::Tag("th")]);
    let data_rows = if header.is_empty() {
        &rows[..]
    } else {
        push_row(out, &header);
        out.push('|');
        for _ in &header {
            out.push_str(" --- |");
        }
        out.push('\n');
        &rows[1..]
    };

    for row in data_rows {
        let cells = dom::find_all(row, &[Selector::Tag("td")]);
        if !cells.is_empty() {
            push_row(out, &cells);
        }
    }

    out.push('\n');
}

fn push_row(out: &mut String, cells: &[Handle]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&normalize_text(&dom::text_content(cell)));
        out.push_str(" |");
    }
    out.push('\n');
}
