//! Block-level conversion (markdown lines → HTML fragment)
//!
//! [`BlockConverter`] consumes one line at a time and keeps two pieces of state: the open
//! fenced code block, if any, and the kind of the open list, if any. Emitted fragments are
//! joined with newlines when the converter is finished.

use super::inline;
use super::{FencePolicy, MarkdownOptions};
use crate::error::ConvertError;
use crate::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";

static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("ordered list marker pattern is valid"));

/// Kind of list currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A fenced code block being accumulated
#[derive(Debug)]
struct OpenFence {
    language: String,
    content: String,
    /// 1-based line of the opening fence
    opened_at: usize,
}

/// Classification of a line outside a fenced code block
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Heading(usize, &'a str),
    Bullet(&'a str),
    Numbered(&'a str),
    Blank,
    RawHtml,
    Text,
}

fn classify<'a>(raw: &'a str, stripped: &'a str) -> Line<'a> {
    if let Some((level, text)) = heading(stripped) {
        return Line::Heading(level, text);
    }
    if let Some(text) = stripped
        .strip_prefix("- ")
        .or_else(|| stripped.strip_prefix("* "))
    {
        return Line::Bullet(text);
    }
    if let Some(marker) = ORDERED_MARKER.find(stripped) {
        return Line::Numbered(&stripped[marker.end()..]);
    }
    if stripped.is_empty() {
        return Line::Blank;
    }
    if raw.contains('<') && raw.contains('>') {
        return Line::RawHtml;
    }
    Line::Text
}

/// `# ` through `#### `. Longer runs of hashes are not headings.
fn heading(stripped: &str) -> Option<(usize, &str)> {
    let level = stripped.bytes().take_while(|b| *b == b'#').count();
    if !(1..=4).contains(&level) {
        return None;
    }
    stripped[level..]
        .strip_prefix(' ')
        .map(|text| (level, text))
}

/// Line-by-line markdown to HTML converter
#[derive(Debug)]
pub struct BlockConverter {
    options: MarkdownOptions,
    out: Vec<String>,
    fence: Option<OpenFence>,
    list: Option<ListKind>,
    line_no: usize,
}

impl BlockConverter {
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
            out: Vec::new(),
            fence: None,
            list: None,
            line_no: 0,
        }
    }

    /// Feed the next line (without its trailing newline).
    pub fn push_line(&mut self, raw: &str) {
        self.line_no += 1;
        let stripped = raw.trim();

        if stripped.starts_with(FENCE) {
            self.toggle_fence(stripped);
            return;
        }

        if let Some(fence) = self.fence.as_mut() {
            fence.content.push_str(raw);
            fence.content.push('\n');
            return;
        }

        match classify(raw, stripped) {
            Line::Heading(level, text) => {
                self.close_list();
                self.out
                    .push(format!("<h{level}>{}</h{level}>", inline::process(text)));
            }
            Line::Bullet(text) => {
                self.ensure_list(ListKind::Unordered);
                self.out.push(format!("<li>{}</li>", inline::process(text)));
            }
            Line::Numbered(text) => {
                self.ensure_list(ListKind::Ordered);
                self.out.push(format!("<li>{}</li>", inline::process(text)));
            }
            Line::Blank => {
                self.close_list();
                self.out.push("<br>".to_string());
            }
            Line::RawHtml => self.out.push(raw.to_string()),
            Line::Text => {
                let processed = inline::process(raw);
                if !processed.trim().is_empty() {
                    self.out.push(format!("<p>{processed}</p>"));
                }
            }
        }
    }

    /// Finish conversion, applying the configured policy to an unterminated fence.
    pub fn finish(mut self) -> Result<String, ConvertError> {
        if let Some(fence) = self.fence.take() {
            match self.options.unterminated_fence {
                FencePolicy::Reject => {
                    return Err(ConvertError::UnterminatedCodeBlock {
                        line: fence.opened_at,
                    })
                }
                FencePolicy::Flush => self.flush_unterminated(fence),
            }
        }
        Ok(self.close_and_join())
    }

    /// Finish conversion, always flushing an unterminated fence.
    pub fn finish_flushing(mut self) -> String {
        if let Some(fence) = self.fence.take() {
            self.flush_unterminated(fence);
        }
        self.close_and_join()
    }

    fn toggle_fence(&mut self, stripped: &str) {
        match self.fence.take() {
            Some(fence) => self.emit_code_block(fence),
            None => {
                self.fence = Some(OpenFence {
                    language: stripped.replace(FENCE, "").trim().to_string(),
                    content: String::new(),
                    opened_at: self.line_no,
                });
            }
        }
    }

    fn flush_unterminated(&mut self, fence: OpenFence) {
        log::warn!(
            "code block opened at line {} is never closed; flushing its content",
            fence.opened_at
        );
        self.emit_code_block(fence);
    }

    fn emit_code_block(&mut self, fence: OpenFence) {
        let class = if fence.language.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{}\"", escape_html(&fence.language))
        };
        self.out.push(format!(
            "<pre><code{class}>{}</code></pre>",
            escape_html(&fence.content)
        ));
    }

    /// Make sure a list of `kind` is open, closing a list of the other kind first.
    fn ensure_list(&mut self, kind: ListKind) {
        if self.list == Some(kind) {
            return;
        }
        self.close_list();
        self.out.push(format!("<{}>", kind.tag()));
        self.list = Some(kind);
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            self.out.push(format!("</{}>", kind.tag()));
        }
    }

    fn close_and_join(mut self) -> String {
        self.close_list();
        self.out.join("\n")
    }
}
