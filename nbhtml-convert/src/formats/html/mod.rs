//! HTML output
//!
//! Renders a [`Notebook`](crate::formats::ipynb::Notebook) as one self-contained HTML5 page.
//!
//! # Element Mapping Table
//!
//! | Notebook element        | HTML                                                              |
//! |-------------------------|-------------------------------------------------------------------|
//! | Document                | `<div class="container">` inside `<body>`                         |
//! | Markdown cell           | `<div class="cell markdown-cell">` + converted fragment           |
//! | Code cell               | `<div class="cell code-cell">`, `Code:` label, `<pre><code>`      |
//! | Outputs (if any)        | one `<div class="output-cell">` headed by `<strong>Output:</strong>` |
//! | Stream                  | `<pre class="output-text">` (escaped)                            |
//! | Rich result, text/html  | `<div class="output-html">` (passed through unescaped)           |
//! | Rich result, text/plain | `<pre class="output-text">` (escaped)                            |
//! | Error                   | `<pre class="output-error"><strong>Name:</strong> value</pre>`   |
//! | Raw cell, other outputs | nothing                                                           |
//!
//! # CSS and Theming
//!
//! The page embeds its style sheet in a `<style>` element:
//! - `css/notebook.css`: baseline presentation (always included)
//! - `css/themes/theme-*.css`: optional overrides layered on top of the baseline
//! - custom CSS from [`HtmlOptions::custom_css`], appended last
//!
//! The light theme injects nothing, so the baseline alone controls rendering.

mod serializer;

use crate::error::ConvertError;
use crate::formats::markdown::MarkdownOptions;
use serde::Deserialize;
use std::str::FromStr;

pub use serializer::{render_cell, render_output, serialize_to_html};

const BASELINE_CSS: &str = include_str!("../../../css/notebook.css");
const THEME_LIGHT_CSS: &str = "";
const THEME_DARK_CSS: &str = include_str!("../../../css/themes/theme-dark.css");

/// Title used when neither the options nor the notebook metadata provide one
pub const DEFAULT_TITLE: &str = "Notebook";

/// The baseline style sheet embedded in every exported page.
pub fn default_css() -> &'static str {
    BASELINE_CSS
}

/// Available CSS themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlTheme {
    /// Baseline look (no overrides)
    #[default]
    Light,
    /// Dark background overrides
    Dark,
}

impl HtmlTheme {
    fn css(self) -> &'static str {
        match self {
            HtmlTheme::Light => THEME_LIGHT_CSS,
            HtmlTheme::Dark => THEME_DARK_CSS,
        }
    }
}

impl FromStr for HtmlTheme {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" | "default" => Ok(HtmlTheme::Light),
            "dark" => Ok(HtmlTheme::Dark),
            other => Err(ConvertError::UnknownTheme(other.to_string())),
        }
    }
}

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Page title; falls back to the notebook metadata title, then [`DEFAULT_TITLE`]
    pub title: Option<String>,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
    /// Options for markdown cells
    pub markdown: MarkdownOptions,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }

    pub fn with_markdown(mut self, markdown: MarkdownOptions) -> Self {
        self.markdown = markdown;
        self
    }
}
