//! Notebook (`.ipynb`) input model
//!
//! Notebooks are JSON documents. The shapes consumed here are modelled as tagged unions so
//! that malformed documents are rejected while parsing, with `serde_json`'s line and column
//! information, instead of surfacing later as a missing key.
//!
//! # Mapping
//!
//! | JSON                                | Rust                               | Notes                                  |
//! |-------------------------------------|------------------------------------|----------------------------------------|
//! | `{"cells": [...], "metadata": {}}`  | [`Notebook`]                       | `cells` is required                    |
//! | `cell_type: "markdown"`             | [`Cell::Markdown`]                 |                                        |
//! | `cell_type: "code"`                 | [`Cell::Code`]                     | `outputs` defaults to empty            |
//! | `cell_type: "raw"`                  | [`Cell::Raw`]                      | never rendered                         |
//! | `output_type: "stream"`             | [`Output::Stream`]                 |                                        |
//! | `output_type: "execute_result"`     | [`Output::ExecuteResult`]          |                                        |
//! | `output_type: "display_data"`       | [`Output::DisplayData`]            |                                        |
//! | `output_type: "error"`              | [`Output::Error`]                  | `ename` defaults to `Error`            |
//! | any other `output_type`             | [`Output::Unknown`]                | never rendered                         |
//! | `"text"` or `["li", "nes"]`         | [`MultilineString`]                | arrays are joined without separator    |
//!
//! Unknown keys (cell ids, cell metadata, attachments, ...) are ignored.

mod model;

pub use model::{Cell, MimeBundle, MimeContent, MultilineString, Notebook, NotebookMetadata, Output};
