//! Callout titles
//!
//! An explicit title element wins. Otherwise the container's class decides, checked in the
//! order info, warning, note, with "Note" when nothing matches.

use crate::dom::{self, Selector};
use crate::normalize_text;
use crate::options::RenderOptions;
use markup5ever_rcdom::Handle;

const CLASS_LABELS: &[(&str, &str)] = &[("info", "Info"), ("warning", "Warning"), ("note", "Note")];
const DEFAULT_LABEL: &str = "Note";

/// Label for a panel container.
pub fn panel_title(panel: &Handle, options: &RenderOptions) -> String {
    let selectors: Vec<Selector<'_>> = options
        .panel_title_classes
        .iter()
        .map(|class| Selector::Class(class.as_str()))
        .collect();

    if let Some(title) = dom::find_first(panel, &selectors) {
        let title = normalize_text(&dom::text_content(&title));
        if !title.is_empty() {
            return title;
        }
    }

    let class = dom::class_attr(panel);
    CLASS_LABELS
        .iter()
        .find(|(needle, _)| class.contains(*needle))
        .map_or(DEFAULT_LABEL, |&(_, label)| label)
        .to_string()
}
