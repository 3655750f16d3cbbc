//! Inline markup tests, including properties that pin escaping and rule order

use nbhtml_convert::escape_html;
use nbhtml_convert::formats::markdown::convert;
use nbhtml_convert::formats::markdown::inline::{apply_rules, process, rule_names};
use proptest::prelude::*;

#[test]
fn test_bold_italic_code_in_order() {
    let html = convert("**a** *b* `c`");

    assert_eq!(html.matches("<strong>a</strong>").count(), 1);
    assert_eq!(html.matches("<em>b</em>").count(), 1);
    assert_eq!(html.matches("<code>c</code>").count(), 1);

    let strong = html.find("<strong>").unwrap();
    let em = html.find("<em>").unwrap();
    let code = html.find("<code>").unwrap();
    assert!(strong < em && em < code);

    assert_eq!(
        html,
        "<p><strong>a</strong> <em>b</em> <code>c</code></p>"
    );
}

#[test]
fn test_rule_order_bold_before_italic() {
    assert_eq!(rule_names(), ["bold", "italic", "code", "link", "image"]);
    assert_eq!(
        process("**bold** and *it*"),
        "<strong>bold</strong> and <em>it</em>"
    );
}

#[test]
fn test_image_only_produces_image_element() {
    let html = apply_rules("![alt](img.png)");

    assert_eq!(html, "<img src=\"img.png\" alt=\"alt\">");
    assert!(!html.contains("<a "));
}

#[test]
fn test_link_text_keeps_inner_markup() {
    assert_eq!(
        process("[**docs**](https://docs.rs)"),
        "<a href=\"https://docs.rs\"><strong>docs</strong></a>"
    );
}

#[test]
fn test_link_url_is_escaped() {
    assert_eq!(
        process("[q](https://x.org/?a=1&b=2)"),
        "<a href=\"https://x.org/?a=1&amp;b=2\">q</a>"
    );
}

#[test]
fn test_markup_inside_inline_code_follows_rule_order() {
    // Emphasis runs before code spans, so it is applied inside them too.
    assert_eq!(process("`a*b*c`"), "<code>a<em>b</em>c</code>");
}

#[test]
fn test_quotes_are_escaped() {
    assert_eq!(
        process(r#"say "hi" it's"#),
        "say &quot;hi&quot; it&#x27;s"
    );
}

#[test]
fn test_unbalanced_markers_are_left_alone() {
    assert_eq!(process("**open"), "**open");
    assert_eq!(process("`open"), "`open");
    assert_eq!(process("[text](no-close"), "[text](no-close");
}

proptest! {
    #[test]
    fn prop_plain_text_is_idempotent(text in "[A-Za-z0-9 ,.;:?=+-]{0,60}") {
        let once = process(&text);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(process(&once), once);
    }

    #[test]
    fn prop_markup_free_text_is_escaped_exactly_once(text in "[a-z<>&\"' ]{0,60}") {
        prop_assert_eq!(process(&text), escape_html(&text));
    }

    #[test]
    fn prop_no_raw_angle_brackets_from_text(text in "[a-z<>& ]{0,60}") {
        let html = process(&text);
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
    }
}
