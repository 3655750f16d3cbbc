//! Format implementations
//!
//! The input side (`ipynb`), the markdown dialect used inside notebook cells, and the HTML
//! output side.

pub mod html;
pub mod ipynb;
pub mod markdown;

pub use html::{default_css, HtmlOptions, HtmlTheme};
pub use ipynb::Notebook;
pub use markdown::{FencePolicy, MarkdownOptions};
