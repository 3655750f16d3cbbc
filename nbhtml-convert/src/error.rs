//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur while converting a notebook
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not a well-formed notebook document
    #[error("Malformed notebook: {0}")]
    Notebook(#[from] serde_json::Error),

    /// A fenced code block was still open at the end of a markdown cell
    #[error("Malformed markdown: unterminated code block opened at line {line}")]
    UnterminatedCodeBlock { line: usize },

    /// A theme name that does not match any built-in theme
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
}
