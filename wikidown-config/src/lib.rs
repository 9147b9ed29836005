//! Shared configuration loader for the wikidown toolchain.
//!
//! `defaults/wikidown.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikidownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wikidown::RenderOptions;

pub const DEFAULT_TOML: &str = include_str!("../defaults/wikidown.default.toml");

/// Top-level configuration consumed by wikidown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WikidownConfig {
    pub render: RenderConfig,
    pub content: ContentConfig,
    pub panels: PanelsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub max_depth: usize,
}

/// Where the page body lives in an export.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub root_ids: Vec<String>,
    pub root_classes: Vec<String>,
    pub fallback_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelsConfig {
    pub markers: Vec<String>,
    pub title_classes: Vec<String>,
}

/// How the CLI writes its result.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub extension: String,
    pub overwrite: bool,
}

impl From<&WikidownConfig> for RenderOptions {
    fn from(config: &WikidownConfig) -> Self {
        RenderOptions {
            root_ids: config.content.root_ids.clone(),
            root_classes: config.content.root_classes.clone(),
            fallback_class: config.content.fallback_class.clone(),
            panel_markers: config.panels.markers.clone(),
            panel_title_classes: config.panels.title_classes.clone(),
            max_depth: config.render.max_depth,
        }
    }
}

impl From<WikidownConfig> for RenderOptions {
    fn from(config: WikidownConfig) -> Self {
        RenderOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WikidownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikidownConfig, ConfigError> {
    Loader::new().build()
}
