//! Inline runs inside paragraphs.

use crate::common::render_content;

#[test]
fn test_link_rules() {
    assert_eq!(render_content(r#"<p><a href="y">x</a></p>"#), "[x](y)");
    assert_eq!(render_content("<p><a>x</a></p>"), "x");
    assert_eq!(render_content(r#"<p>[<a href="y"></a>]</p>"#), "[]");
}

#[test]
fn test_bold_and_italic_use_raw_text() {
    assert_eq!(
        render_content("<p><b>bold <i>inner</i></b> and <em>soft</em></p>"),
        "**bold inner** and *soft*"
    );
}

#[test]
fn test_spacing_between_fragments_is_preserved() {
    assert_eq!(
        render_content("<p>  lead <span>mid</span>  <strong>end</strong>  </p>"),
        "lead mid  **end**"
    );
}

#[test]
fn test_line_breaks() {
    assert_eq!(render_content("<p>first<br/>second</p>"), "first\nsecond");
}

// Source text is not escaped; literal Markdown characters pass straight through.
#[test]
fn test_markdown_characters_are_not_escaped() {
    assert_eq!(
        render_content("<p>use *args and [brackets] and `ticks`</p>"),
        "use *args and [brackets] and `ticks`"
    );
}
