use crate::error::ConvertError;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const MIME_HTML: &str = "text/html";
pub const MIME_PLAIN: &str = "text/plain";

/// A parsed notebook document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: NotebookMetadata,
}

impl Notebook {
    /// Parse a notebook from its JSON text
    pub fn from_json(source: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Build a notebook from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Notebook-level metadata. Only the title is consumed; a title that is not a string is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotebookMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// One notebook cell, discriminated by `cell_type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        #[serde(default)]
        source: MultilineString,
    },
    Code {
        #[serde(default)]
        source: MultilineString,
        #[serde(default, deserialize_with = "deserialize_outputs")]
        outputs: Vec<Output>,
        #[serde(default)]
        execution_count: Option<u32>,
    },
    Raw {
        #[serde(default)]
        source: MultilineString,
    },
}

impl Cell {
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Markdown { .. } => "markdown",
            Cell::Code { .. } => "code",
            Cell::Raw { .. } => "raw",
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Cell::Markdown { source } | Cell::Code { source, .. } | Cell::Raw { source } => {
                source.as_str()
            }
        }
    }
}

/// A captured result of running a code cell, discriminated by `output_type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    Stream {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default)]
        text: MultilineString,
    },
    ExecuteResult {
        #[serde(default)]
        data: MimeBundle,
        #[serde(default)]
        execution_count: Option<u32>,
    },
    DisplayData {
        #[serde(default)]
        data: MimeBundle,
    },
    Error {
        #[serde(default = "default_error_name")]
        ename: String,
        #[serde(default)]
        evalue: MultilineString,
        #[serde(default, deserialize_with = "lenient")]
        traceback: Vec<String>,
    },
    #[serde(other)]
    Unknown,
}

fn default_error_name() -> String {
    "Error".to_string()
}

/// Deserialize a field that is never rendered, falling back to its default when the value
/// has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Outputs without a string `output_type` become [`Output::Unknown`]; outputs that do carry
/// one are parsed strictly.
fn deserialize_outputs<'de, D>(deserializer: D) -> Result<Vec<Output>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|value| {
            if value.get("output_type").is_some_and(Value::is_string) {
                serde_json::from_value(value).map_err(D::Error::custom)
            } else {
                log::debug!("Output without output_type ignored");
                Ok(Output::Unknown)
            }
        })
        .collect()
}

/// Text stored either as one string or as a list of lines
///
/// Lines keep their own trailing newlines in the notebook format, so joining them without
/// a separator restores the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TextRepr")]
pub struct MultilineString(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Joined(String),
    Lines(Vec<String>),
}

impl From<TextRepr> for MultilineString {
    fn from(repr: TextRepr) -> Self {
        match repr {
            TextRepr::Joined(text) => MultilineString(text),
            TextRepr::Lines(lines) => MultilineString(lines.concat()),
        }
    }
}

impl From<&str> for MultilineString {
    fn from(text: &str) -> Self {
        MultilineString(text.to_string())
    }
}

impl MultilineString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// MIME type → payload mapping of rich outputs
///
/// Payloads are kept as raw JSON since some types (`application/json`, widget state) are
/// objects rather than text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(BTreeMap<String, Value>);

/// The renderable content picked from a [`MimeBundle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeContent {
    /// Trusted HTML, emitted as is
    Html(String),
    /// Plain text, escaped on output
    Plain(String),
}

impl MimeBundle {
    /// Textual payload for `mime`, if present and stored as text.
    pub fn text(&self, mime: &str) -> Option<String> {
        match self.0.get(mime)? {
            Value::String(text) => Some(text.clone()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str())
                .collect::<Option<Vec<_>>>()
                .map(|lines| lines.concat()),
            _ => None,
        }
    }

    /// Prefer `text/html`, fall back to `text/plain`.
    pub fn preferred(&self) -> Option<MimeContent> {
        self.text(MIME_HTML)
            .map(MimeContent::Html)
            .or_else(|| self.text(MIME_PLAIN).map(MimeContent::Plain))
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
