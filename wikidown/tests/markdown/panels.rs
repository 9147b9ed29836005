//! Panels and callouts.

use crate::common::{render_content, render_content_with};
use wikidown::RenderOptions;

#[test]
fn test_note_panel_without_title() {
    assert_eq!(
        render_content(r#"<div class="panel note">be careful</div>"#),
        "> **Note**: be careful"
    );
}

#[test]
fn test_panel_with_header_title() {
    let html = r#"<div class="panel"><div class="panelHeader"><b>Heads up</b></div><div class="panelContent"> <p>Deploys pause at 5pm.</p></div></div>"#;
    assert_eq!(
        render_content(html),
        "> **Heads up**: Heads up Deploys pause at 5pm."
    );
}

#[test]
fn test_label_from_class() {
    assert_eq!(
        render_content(r#"<section class="info">fyi</section>"#),
        "> **Info**: fyi"
    );
    assert_eq!(
        render_content(r#"<article class="panel warning">hot</article>"#),
        "> **Warning**: hot"
    );
}

#[test]
fn test_information_macro_matches_on_substring() {
    let html = r#"<div class="confluence-information-macro confluence-information-macro-tip"><div class="confluence-information-macro-body"><p>Tip text</p></div></div>"#;
    assert_eq!(render_content(html), "> **Info**: Tip text");
}

#[test]
fn test_panel_markup_is_flattened() {
    let html = r#"<div class="panel note"><ul><li>one</li><li>two</li></ul></div>"#;
    assert_eq!(render_content(html), "> **Note**: onetwo");
}

#[test]
fn test_custom_panel_markers() {
    let options = RenderOptions {
        panel_markers: vec!["callout".to_string()],
        ..RenderOptions::default()
    };
    assert_eq!(
        render_content_with(r#"<div class="callout">c</div><div class="panel"><p>p</p></div>"#, &options),
        "> **Note**: c\n\np"
    );
}
