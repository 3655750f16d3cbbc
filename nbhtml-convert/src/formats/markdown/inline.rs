//! Inline markup (single line → HTML)
//!
//! A line is HTML-escaped once, then run through a fixed table of substitution rules. The
//! order of the table is part of the contract:
//!
//! 1. bold `**x**` runs before italic `*x*`, since both use `*`
//! 2. italic refuses to start after a `*` or end before one
//! 3. inline code `` `x` ``
//! 4. link `[text](url)`, refused when the `[` follows a `!`
//! 5. image `![alt](url)`
//!
//! The `regex` crate has no look-around, so the adjacency conditions are expressed as a
//! [`Guard`] checked against the text surrounding each candidate match. A refused candidate
//! resumes the search one character later, the way a backtracking engine would.

use crate::escape::escape_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Adjacency condition checked around a candidate match
#[derive(Debug, Clone, Copy)]
enum Guard {
    None,
    /// The character before the match must not be this one
    NotPrecededBy(char),
    /// Neither the character before nor the one after the match may be this one
    NotAdjacentTo(char),
}

impl Guard {
    fn accepts(self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        match self {
            Guard::None => true,
            Guard::NotPrecededBy(c) => before != Some(c),
            Guard::NotAdjacentTo(c) => before != Some(c) && after != Some(c),
        }
    }
}

struct InlineRule {
    name: &'static str,
    pattern: Regex,
    guard: Guard,
    render: fn(&Captures) -> String,
}

impl InlineRule {
    fn new(
        name: &'static str,
        pattern: &str,
        guard: Guard,
        render: fn(&Captures) -> String,
    ) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("inline rule pattern is valid"),
            guard,
            render,
        }
    }

    /// Replace every accepted, non-overlapping match from left to right.
    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search = 0;

        while search < text.len() {
            let Some(caps) = self.pattern.captures_at(text, search) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if self.guard.accepts(text, whole.start(), whole.end()) {
                out.push_str(&text[copied..whole.start()]);
                out.push_str(&(self.render)(&caps));
                copied = whole.end();
                search = whole.end();
            } else {
                search = next_char_boundary(text, whole.start());
            }
        }

        out.push_str(&text[copied..]);
        out
    }
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len(), |c| at + c.len_utf8())
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

static RULES: Lazy<Vec<InlineRule>> = Lazy::new(|| {
    vec![
        InlineRule::new("bold", r"\*\*(.+?)\*\*", Guard::None, |caps| {
            format!("<strong>{}</strong>", group(caps, 1))
        }),
        InlineRule::new("italic", r"\*([^*]+?)\*", Guard::NotAdjacentTo('*'), |caps| {
            format!("<em>{}</em>", group(caps, 1))
        }),
        InlineRule::new("code", r"`([^`]+)`", Guard::None, |caps| {
            format!("<code>{}</code>", group(caps, 1))
        }),
        InlineRule::new(
            "link",
            r"\[([^\]]+)\]\(([^)]+)\)",
            Guard::NotPrecededBy('!'),
            |caps| format!("<a href=\"{}\">{}</a>", group(caps, 2), group(caps, 1)),
        ),
        InlineRule::new("image", r"!\[([^\]]*)\]\(([^)]+)\)", Guard::None, |caps| {
            format!("<img src=\"{}\" alt=\"{}\">", group(caps, 2), group(caps, 1))
        }),
    ]
});

/// Names of the inline rules in the order they are applied.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Run the substitution table over text that has already been escaped.
pub fn apply_rules(escaped: &str) -> String {
    RULES
        .iter()
        .fold(escaped.to_string(), |text, rule| rule.apply(&text))
}

/// Convert one line of markdown inline markup to HTML.
pub fn process(line: &str) -> String {
    apply_rules(&escape_html(line))
}
