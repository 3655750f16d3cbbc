//! HTML serialization (Notebook → HTML document)
//!
//! Pipeline: Notebook → per-cell fragments → complete document with embedded CSS.

use super::{HtmlOptions, BASELINE_CSS, DEFAULT_TITLE};
use crate::error::ConvertError;
use crate::escape::escape_html;
use crate::formats::ipynb::{Cell, MimeBundle, MimeContent, Notebook, Output};
use crate::formats::markdown;

/// Serialize a notebook to a complete HTML document
pub fn serialize_to_html(notebook: &Notebook, options: &HtmlOptions) -> Result<String, ConvertError> {
    let title = options
        .title
        .as_deref()
        .or(notebook.metadata.title.as_deref())
        .unwrap_or(DEFAULT_TITLE);

    let mut body = String::new();
    for (index, cell) in notebook.cells.iter().enumerate() {
        log::debug!("rendering {} cell {index}", cell.kind());
        render_cell(cell, options, &mut body)?;
    }

    Ok(wrap_in_document(&body, title, options))
}

/// Append the HTML for one cell to `out`
pub fn render_cell(cell: &Cell, options: &HtmlOptions, out: &mut String) -> Result<(), ConvertError> {
    match cell {
        Cell::Markdown { source } => {
            let fragment = markdown::convert_with_options(source.as_str(), &options.markdown)?;
            out.push_str("<div class=\"cell markdown-cell\">\n");
            out.push_str(&fragment);
            out.push_str("</div>\n");
        }
        Cell::Code {
            source, outputs, ..
        } => {
            out.push_str("<div class=\"cell code-cell\">\n");
            out.push_str("<span class=\"code-label\">Code:</span>\n");
            out.push_str(&format!(
                "<pre><code>{}</code></pre>\n",
                escape_html(source.as_str())
            ));

            if !outputs.is_empty() {
                out.push_str("<div class=\"output-cell\">\n<strong>Output:</strong>\n");
                for output in outputs {
                    render_output(output, out);
                }
                out.push_str("</div>\n");
            }

            out.push_str("</div>\n");
        }
        Cell::Raw { .. } => {}
    }

    Ok(())
}

/// Append the HTML for one code cell output to `out`
pub fn render_output(output: &Output, out: &mut String) {
    match output {
        Output::Stream { text, .. } => push_text_block(out, text.as_str()),
        Output::ExecuteResult { data, .. } | Output::DisplayData { data } => {
            render_rich(data, out)
        }
        Output::Error { ename, evalue, .. } => {
            out.push_str(&format!(
                "<pre class=\"output-error\"><strong>{}:</strong> {}</pre>\n",
                escape_html(ename),
                escape_html(evalue.as_str())
            ));
        }
        Output::Unknown => log::debug!("skipping output of unknown type"),
    }
}

fn render_rich(data: &MimeBundle, out: &mut String) {
    match data.preferred() {
        Some(MimeContent::Html(html)) => {
            out.push_str("<div class=\"output-html\">");
            out.push_str(&html);
            out.push_str("</div>\n");
        }
        Some(MimeContent::Plain(text)) => push_text_block(out, &text),
        None => log::debug!(
            "no text/html or text/plain payload among [{}]; skipping",
            data.mime_types().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn push_text_block(out: &mut String, text: &str) {
    out.push_str(&format!(
        "<pre class=\"output-text\">{}</pre>\n",
        escape_html(text)
    ));
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let theme_css = options.theme.css();
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="nbhtml">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<div class="container">
{body_html}</div>
</body>
</html>
"#
    )
}
