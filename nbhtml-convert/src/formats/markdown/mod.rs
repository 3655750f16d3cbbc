//! Markdown dialect used by notebook markdown cells
//!
//! This is not CommonMark. Conversion is a single pass over the lines of a cell, tracking
//! only whether a fenced code block is open and which list (if any) is open. Every line is
//! handled in isolation otherwise, so nested constructs are out of reach by construction.
//!
//! # Block Rules
//!
//! Evaluated per line, first match wins:
//!
//! | Line (trimmed)                  | Output                                               |
//! |---------------------------------|------------------------------------------------------|
//! | starts with ```` ``` ````       | opens / closes `<pre><code class="language-x">`      |
//! | anything, inside a fence        | accumulated verbatim (escaped on close)              |
//! | `# `, `## `, `### `, `#### `    | closes list, `<h1>`..`<h4>`                          |
//! | `- ` or `* `                    | opens `<ul>` if no list is open, `<li>`              |
//! | `1. ` (any digits)              | closes a non-ordered list, opens `<ol>`, `<li>`      |
//! | empty                           | closes list, `<br>`                                  |
//! | raw line holds `<` and `>`      | passed through untouched                             |
//! | anything else                   | `<p>` with inline markup                             |
//!
//! # Inline Rules
//!
//! The line is HTML-escaped first, then these substitutions run in order: bold, italic,
//! inline code, link, image. See [`inline`].
//!
//! # Unterminated Fences
//!
//! A fence still open when the cell ends is governed by [`FencePolicy`]. The default
//! flushes it as if it had been closed.

pub mod block;
pub mod inline;

use crate::error::ConvertError;
use serde::Deserialize;

/// What to do with a fenced code block that is still open at the end of the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FencePolicy {
    /// Close the block and emit its content
    #[default]
    Flush,
    /// Fail with [`ConvertError::UnterminatedCodeBlock`]
    Reject,
}

/// Options for markdown conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub unterminated_fence: FencePolicy,
}

impl MarkdownOptions {
    pub fn new(unterminated_fence: FencePolicy) -> Self {
        Self { unterminated_fence }
    }
}

/// Convert markdown text to an HTML fragment, flushing unterminated fences.
pub fn convert(text: &str) -> String {
    let mut converter = block::BlockConverter::new(MarkdownOptions::default());
    for line in text.split('\n') {
        converter.push_line(line);
    }
    converter.finish_flushing()
}

/// Convert markdown text to an HTML fragment with explicit options.
pub fn convert_with_options(text: &str, options: &MarkdownOptions) -> Result<String, ConvertError> {
    let mut converter = block::BlockConverter::new(*options);
    for line in text.split('\n') {
        converter.push_line(line);
    }
    converter.finish()
}
