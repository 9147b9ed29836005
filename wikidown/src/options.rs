use serde::{Deserialize, Serialize};

/// Conventions of the exported document family, plus the recursion limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Element ids that mark the main content root
    pub root_ids: Vec<String>,

    /// Class tokens that mark the main content root
    pub root_classes: Vec<String>,

    /// Substring of a `div` class used when no root id/class matches
    pub fallback_class: String,

    /// Substrings of a container's class that make it a panel
    pub panel_markers: Vec<String>,

    /// Class tokens of the element holding a panel's title
    pub panel_title_classes: Vec<String>,

    /// Deepest tree level rendered structurally; deeper nodes are flattened to text
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root_ids: vec!["main-content".to_string()],
            root_classes: vec!["wiki-content".to_string()],
            fallback_class: "content".to_string(),
            panel_markers: vec!["panel".to_string(), "note".to_string(), "info".to_string()],
            panel_title_classes: vec![
                "panelHeader".to_string(),
                "panel-heading".to_string(),
                "title".to_string(),
            ],
            max_depth: 128,
        }
    }
}

impl RenderOptions {
    /// Whether a raw `class` attribute marks a panel container.
    pub fn is_panel_class(&self, class: &str) -> bool {
        self.panel_markers
            .iter()
            .any(|marker| class.contains(marker.as_str()))
    }
}
