//! Block-level constructs: headings, paragraphs, code, quotes, rules, containers.

use crate::common::render_content;

#[test]
fn test_heading_levels() {
    assert_eq!(render_content("<h3>Title</h3>"), "### Title");
    assert_eq!(
        render_content("<h1>One</h1><h6>  Six\n  words </h6>"),
        "# One\n\n###### Six words"
    );
}

#[test]
fn test_paragraph_keeps_inline_markup() {
    assert_eq!(
        render_content(r#"<p>Read <a href="/docs">the docs</a> <em>first</em>, then <code>run</code>.</p>"#),
        "Read [the docs](/docs) *first*, then `run`."
    );
}

#[test]
fn test_blank_paragraphs_are_skipped() {
    assert_eq!(render_content("<p>a</p><p> \n </p><p>b</p>"), "a\n\nb");
}

#[test]
fn test_code_block_uses_inner_code_text() {
    let html = "<pre class=\"syntaxhighlighter-pre\"><code>let x = 1;\nlet y = 2;</code></pre>";
    assert_eq!(render_content(html), "```\nlet x = 1;\nlet y = 2;\n```");
}

#[test]
fn test_code_block_without_code_element() {
    assert_eq!(render_content("<pre>  indented\n    more</pre>"), "```\n  indented\n    more\n```");
}

#[test]
fn test_blockquote_with_breaks() {
    assert_eq!(
        render_content("<blockquote>to be<br>or not <b>to be</b></blockquote>"),
        "> to be\n> or not **to be**"
    );
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(render_content("<p>above</p><hr><p>below</p>"), "above\n\n---\n\nbelow");
}

#[test]
fn test_layout_containers_are_transparent() {
    let html = r#"<div class="contentLayout2"><div class="columnLayout single"><div class="cell normal"><div class="innerCell"><p>inside layout</p></div></div></div></div>"#;
    assert_eq!(render_content(html), "inside layout");
}

#[test]
fn test_inline_elements_between_blocks_run_together() {
    assert_eq!(
        render_content(r#"<p>a</p><a href="x">link</a><strong>bold</strong><p>b</p>"#),
        "a\n\n[link](x)**bold**b"
    );
}

#[test]
fn test_loose_text_between_blocks_is_not_rendered() {
    assert_eq!(render_content("loose <p>kept</p> text"), "kept");
}

#[test]
fn test_unknown_markup_is_walked() {
    assert_eq!(
        render_content("<details><summary><h4>More</h4></summary><p>hidden</p></details>"),
        "#### More\n\nhidden"
    );
}
