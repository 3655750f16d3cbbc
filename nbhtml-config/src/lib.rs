//! Shared configuration loader for nbhtml.
//!
//! `defaults/nbhtml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NbhtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nbhtml_convert::{FencePolicy, HtmlOptions, HtmlTheme, MarkdownOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/nbhtml.default.toml");

/// Top-level configuration consumed by nbhtml applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NbhtmlConfig {
    pub paths: PathsConfig,
    pub markdown: MarkdownConfig,
    pub html: HtmlConfig,
}

/// Fallback input and output paths.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub input: String,
    pub output: String,
}

/// Mirrors the knobs exposed by the markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub unterminated_fence: FencePolicy,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions::new(config.unterminated_fence)
    }
}

/// HTML output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: HtmlTheme,
    pub title: Option<String>,
    /// Path to a CSS file appended after the built-in styles, relative to the working directory
    pub custom_css: Option<String>,
}

impl NbhtmlConfig {
    /// Build serializer options from the configuration.
    ///
    /// `custom_css` is the content of the file named by `html.custom_css`; reading it is
    /// left to the caller.
    pub fn html_options(&self, custom_css: Option<String>) -> HtmlOptions {
        HtmlOptions {
            theme: self.html.theme,
            title: self.html.title.clone(),
            custom_css,
            markdown: MarkdownOptions::from(&self.markdown),
        }
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
    pub fn build(self) -> Result<NbhtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NbhtmlConfig, ConfigError> {
    Loader::new().build()
}
