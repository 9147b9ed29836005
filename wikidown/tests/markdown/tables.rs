//! Pipe tables.

use crate::common::render_content;

#[test]
fn test_table_with_header() {
    let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
    assert_eq!(render_content(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
}

#[test]
fn test_table_without_rows_renders_nothing() {
    assert_eq!(render_content("<p>a</p><table></table><p>b</p>"), "a\n\nb");
}

#[test]
fn test_table_inside_wrapper_div() {
    let html = r#"<div class="table-wrap"><table class="confluenceTable"><tbody><tr><td>only</td></tr></tbody></table></div>"#;
    assert_eq!(render_content(html), "| only |");
}

#[test]
fn test_rows_without_data_cells_are_skipped() {
    let html = "<table><thead><tr><th>H</th></tr></thead><tbody><tr></tr><tr><td>d</td></tr></tbody></table>";
    assert_eq!(render_content(html), "| H |\n| --- |\n| d |");
}

#[test]
fn test_cell_markup_is_flattened() {
    let html = "<table><tr><td><p>multi\n line</p> <b>cell</b></td><td><a href=\"u\">link</a></td></tr></table>";
    assert_eq!(render_content(html), "| multi line cell | link |");
}
