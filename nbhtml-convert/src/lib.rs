//! Notebook to static HTML conversion
//!
//!     This crate turns a notebook document (an ordered list of markdown and code cells, the
//!     latter possibly carrying captured outputs) into one self-contained HTML page.
//!
//!     This is a pure lib: it powers the nbhtml binary but is shell agnostic. No code here
//!     should assume a shell environment, be it printing to stdout, reading env vars or
//!     touching the file system. Callers hand in strings and get strings back.
//!
//! Architecture
//!
//!     The pipeline is linear:
//!
//!         JSON text ──ipynb──▶ Notebook ──html serializer──▶ HTML document
//!                                  │
//!                                  └─ markdown cells ──markdown──▶ HTML fragments
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── escape.rs               # The one HTML escaping routine everything shares
//!     ├── formats
//!     │   ├── ipynb               # Typed notebook model, validated at the parse boundary
//!     │   ├── markdown
//!     │   │   ├── block.rs        # Line-by-line block converter
//!     │   │   ├── inline.rs       # Ordered inline substitution rules
//!     │   │   └── mod.rs
//!     │   └── html
//!     │       ├── serializer.rs   # Document assembly
//!     │       └── mod.rs          # Options and themes
//!     └── lib.rs
//!
//! The Markdown Dialect
//!
//!     Markdown cells are not CommonMark. The dialect is deliberately small: ATX headings up
//!     to level four, flat bullet and numbered lists, fenced code blocks, raw HTML lines,
//!     paragraphs, and five inline constructs (bold, italic, inline code, links, images).
//!     Blank lines become explicit `<br>` breaks. See formats/markdown/mod.rs for the full
//!     rules.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <area>
//!     │   ├── mod.rs
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so each area is included
//!     from tests/lib.rs.
//!
pub mod error;
pub mod escape;
pub mod formats;

pub use error::ConvertError;
pub use escape::escape_html;
pub use formats::html::{default_css, serialize_to_html, HtmlOptions, HtmlTheme};
pub use formats::ipynb::Notebook;
pub use formats::markdown::{FencePolicy, MarkdownOptions};

/// Parses a notebook from its JSON text and renders it as a complete HTML document.
pub fn convert_notebook(source: &str, options: &HtmlOptions) -> Result<String, ConvertError> {
    let notebook = Notebook::from_json(source)?;
    serialize_to_html(&notebook, options)
}
