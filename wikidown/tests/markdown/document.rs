//! Whole-page rendering: title, content root selection, block spacing.

use crate::common::{render_content, RELEASE_CHECKLIST};
use insta::assert_snapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use wikidown::{render, render_with_options, RenderError, RenderOptions};

static TRIPLE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

#[test]
fn test_end_to_end_page() {
    let html = r#"<html><title>Doc</title><body><div id="main-content"><h1>Head</h1><p>Hello <b>world</b></p></div></body></html>"#;
    assert_eq!(render(html).unwrap(), "# Doc\n\n# Head\n\nHello **world**");
}

#[test]
fn test_release_checklist_export() {
    let markdown = render(&RELEASE_CHECKLIST).unwrap();
    assert_snapshot!(markdown, @r#"
# Team Space : Release Checklist

## Overview

This page lists the steps for a **production** release. See [the runbook](https://example.com/runbook) for details.

> **Before you start**: Before you start Check the on-call rota.

### Steps

1. Freeze the main branch
2. Run the checks
  - unit tests
  - integration tests
3. Tag the release

```
cargo build --release
cargo publish
```

| Service | Owner |
| --- | --- |
| api | Platform team |
| web | Frontend team |

> **Note**: Releases need two approvals.

> Ship small, ship often.

---

Questions? Ask in *#releases*.
"#);
}

#[test]
fn test_chrome_outside_content_root_is_dropped() {
    let markdown = render(&RELEASE_CHECKLIST).unwrap();
    assert!(!markdown.contains("Created by Jo Doe"));
    assert!(!markdown.contains("Document generated by Confluence"));
    assert!(!markdown.contains("[Team Space](index.html)"));
}

#[test]
fn test_blocks_are_separated_by_one_blank_line() {
    let markdown = render(&RELEASE_CHECKLIST).unwrap();
    assert!(!TRIPLE_NEWLINE.is_match(&markdown));
    assert_eq!(markdown.trim(), markdown);
}

#[test]
fn test_fallback_to_content_class_div() {
    let html = r#"<body><div class="nav">menu</div><div class="pageContent-main">x</div><div class="page-content"><p>body text</p></div></body>"#;
    assert_eq!(render(html).unwrap(), "body text");
}

#[test]
fn test_fallback_to_body() {
    let html = "<html><head><title>T</title></head><body><h2>Only</h2><p>body</p></body></html>";
    assert_eq!(render(html).unwrap(), "# T\n\n## Only\n\nbody");
}

#[test]
fn test_empty_input_renders_empty_markdown() {
    assert_eq!(render("").unwrap(), "");
    assert_eq!(render("   ").unwrap(), "");
}

#[test]
fn test_malformed_markup_still_renders() {
    let html = "<div id=main-content><p>unclosed <b>bold<table><tr><td>cell</div></span></ul>";
    let markdown = render(html).unwrap();
    assert!(markdown.contains("unclosed"));
    assert!(markdown.contains("cell"));
}

#[test]
fn test_custom_root_conventions() {
    let options = RenderOptions {
        root_ids: vec!["article-body".to_string()],
        root_classes: vec![],
        ..RenderOptions::default()
    };
    let html = r#"<body><div id="main-content"><p>ignored</p></div><div id="article-body"><p>kept</p></div></body>"#;
    assert_eq!(render_with_options(html, &options).unwrap(), "kept");
}

#[test]
fn test_deeply_nested_containers_do_not_fail() {
    let depth = 2000;
    let fragment = format!("{}<p>bottom</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let markdown = render_content(&fragment);
    assert_eq!(markdown, "bottom");
}

#[test]
fn test_parse_error_message() {
    let err = RenderError::Parse("boom".to_string());
    assert_eq!(format!("{err}"), "failed to parse HTML: boom");
}
