//! End-to-end parser tests: text in, node tree or HTML out.


use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::parsing::{Marky, Options};
use crate::render::{HtmlOptions, HtmlRenderer};

fn marky() -> Marky {
    Marky::new(Options::default()).unwrap()
}

fn html(text: &str) -> String {
    marky()
        .render(text, &HtmlRenderer::new(HtmlOptions::default()))
        .unwrap()
}

fn tree(text: &str) -> Value {
    serde_json::to_value(marky().parse(text)).unwrap()
}

#[test]
fn empty_input_has_no_nodes() {
    assert!(marky().parse(None).is_empty());
    assert!(marky().parse("").is_empty());
    assert_eq!(html(""), "");
}

#[test]
fn heading_tree() {
    assert_eq!(
        tree("# Heading 1"),
        json!([{
            "type": "heading",
            "props": { "level": 1 },
            "children": [{ "type": "text", "props": { "value": "Heading 1" } }]
        }])
    );
}

#[test]
fn plain_text_is_one_paragraph() {
    let text = "Just some words, nothing else";
    let nodes = marky().parse(text);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name(), "paragraph");
    assert_eq!(nodes[0].text_content(), text);
}

#[test]
fn nested_emphasis_tree() {
    assert_eq!(
        tree("_a **b** c_"),
        json!([{
            "type": "paragraph",
            "children": [{
                "type": "italic",
                "children": [
                    { "type": "text", "props": { "value": "a " } },
                    { "type": "bold", "children": [{ "type": "text", "props": { "value": "b" } }] },
                    { "type": "text", "props": { "value": " c" } }
                ]
            }]
        }])
    );
}

#[test]
fn list_tree_props() {
    assert_eq!(
        tree("3. a"),
        json!([{
            "type": "list",
            "props": { "ordered": true, "bullet": "3.", "start": 3 },
            "children": [{
                "type": "list_item",
                "props": { "ordered": true, "bullet": "3.", "indent": 0, "start": 3 },
                "children": [{ "type": "text", "props": { "value": "a" } }]
            }]
        }])
    );
}

#[test]
fn code_block_text_is_verbatim() {
    assert_eq!(
        tree("```\n**not bold** \\*\n```"),
        json!([{
            "type": "code_block",
            "props": { "syntax": null },
            "children": [{ "type": "text", "props": { "value": "**not bold** \\*\n" } }]
        }])
    );
}

#[rstest]
#[case::h1("# Heading 1", "<h1>Heading 1</h1>")]
#[case::indented(" # Heading 1", "<h1>Heading 1</h1>")]
#[case::h2("## Heading 2", "<h2>Heading 2</h2>")]
#[case::h6("###### Heading 6", "<h6>Heading 6</h6>")]
#[case::single_char("# H", "<h1>H</h1>")]
#[case::setext_1("Heading 1\n==", "<h1>Heading 1</h1>")]
#[case::setext_2("Heading 2\n--", "<h2>Heading 2</h2>")]
#[case::short_underline("Heading 1\n-", "<p>Heading 1<br>-</p>")]
#[case::seven_hashes("####### Heading 7", "<p>####### Heading 7</p>")]
#[case::bare_hash("# ", "<p>#</p>")]
#[case::no_space("#Heading 1", "<p>#Heading 1</p>")]
#[case::with_bold("# hello **bold** world", "<h1>hello <strong>bold</strong> world</h1>")]
#[case::with_link(
    "# book <http://example.com> now",
    r#"<h1>book <a href="http://example.com">http://example.com</a> now</h1>"#
)]
#[case::then_h2("# Heading 1\n## Heading 2", "<h1>Heading 1</h1><h2>Heading 2</h2>")]
#[case::then_rule("# Heading 1\n---", "<h1>Heading 1</h1><hr>")]
#[case::then_paragraph("# Heading 1\nParagraph", "<h1>Heading 1</h1><p>Paragraph</p>")]
#[case::setext_then_paragraph("Heading 1\n==\nParagraph", "<h1>Heading 1</h1><p>Paragraph</p>")]
#[case::then_list("# Heading 1\n- Item 1", "<h1>Heading 1</h1><ul><li>Item 1</li></ul>")]
#[case::then_quote(
    "# Heading 1\n> Block Quote",
    "<h1>Heading 1</h1><blockquote><p>Block Quote</p></blockquote>"
)]
fn headings(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case::dashes("---", "<hr>")]
#[case::underscores("___", "<hr>")]
#[case::indented(" ---", "<hr>")]
#[case::four_dashes("----", "<p>----</p>")]
#[case::trailing_word("---word", "<p>---word</p>")]
#[case::italic_dash("_-_", "<p><em>-</em></p>")]
#[case::then_heading("---\n# Heading 1", "<hr><h1>Heading 1</h1>")]
#[case::mixed_rules("---\n___", "<hr><hr>")]
#[case::two_rules("---\n---", "<hr><hr>")]
#[case::then_paragraph("---\nParagraph", "<hr><p>Paragraph</p>")]
#[case::then_list("---\n- Item 1", "<hr><ul><li>Item 1</li></ul>")]
fn rules(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case::bold("hello **bold** world", "<p>hello <strong>bold</strong> world</p>")]
#[case::extra_star("hello ***bold** world", "<p>hello <strong>*bold</strong> world</p>")]
#[case::underscores("I just love __bold text__.", "<p>I just love <strong>bold text</strong>.</p>")]
#[case::intraword("Love**is**bold", "<p>Love<strong>is</strong>bold</p>")]
#[case::unclosed_bold("hello **bold world", "<p>hello **bold world</p>")]
#[case::mismatched_bold("hello **bold__ world", "<p>hello **bold__ world</p>")]
#[case::escaped_bold(r"hello **bold\*\* world", "<p>hello **bold** world</p>")]
#[case::multiline_bold("I just love **bold\ntext**.", "<p>I just love <strong>bold<br>text</strong>.</p>")]
#[case::italic("hello *italic* world", "<p>hello <em>italic</em> world</p>")]
#[case::extra_star_italic("hello **italic* world", "<p>hello <em>*italic</em> world</p>")]
#[case::apostrophe("Italicized text is the _cat's meow_.", "<p>Italicized text is the <em>cat's meow</em>.</p>")]
#[case::intraword_italic("A*cat*meow", "<p>A<em>cat</em>meow</p>")]
#[case::unclosed_italic("hello *italic world", "<p>hello *italic world</p>")]
#[case::escaped_italic(r"hello *italic\* world", "<p>hello *italic* world</p>")]
#[case::bold_italic("***bold italic***", "<p><strong><em>bold italic</em></strong></p>")]
#[case::extra_bold_italic(
    "hello ****bold italic*** world",
    "<p>hello <strong><em>*bold italic</em></strong> world</p>"
)]
#[case::underscore_bold_italic(
    "This text is ___really important___.",
    "<p>This text is <strong><em>really important</em></strong>.</p>"
)]
#[case::mixed_bold_italic(
    "This text is __*really important*__.",
    "<p>This text is <strong><em>really important</em></strong>.</p>"
)]
#[case::intraword_bold_italic(
    "This is really***very***important text.",
    "<p>This is really<strong><em>very</em></strong>important text.</p>"
)]
#[case::strike("hello ~~strikethrough~~ world", "<p>hello <del>strikethrough</del> world</p>")]
#[case::extra_tilde("hello ~~~strikethrough~~ world", "<p>hello <del>~strikethrough</del> world</p>")]
#[case::intraword_strike("A~~not~~relevant", "<p>A<del>not</del>relevant</p>")]
#[case::unclosed_strike("hello ~~strikethrough~ world", "<p>hello ~~strikethrough~ world</p>")]
#[case::escaped_strike(r"hello ~~strikethrough\~\~ world", "<p>hello ~~strikethrough~~ world</p>")]
#[case::two_bolds(
    "Hi! **strong**, you can **read** me.",
    "<p>Hi! <strong>strong</strong>, you can <strong>read</strong> me.</p>"
)]
#[case::bold_link(
    "**<http://example.com>**",
    r#"<p><strong><a href="http://example.com">http://example.com</a></strong></p>"#
)]
#[case::break_newline("line 1\nline 2", "<p>line 1<br>line 2</p>")]
#[case::break_spaces("line 1  \nline 2", "<p>line 1<br>line 2</p>")]
#[case::break_tag("line 1<br>line 2", "<p>line 1<br>line 2</p>")]
#[case::two_paragraphs("paragraph 1\n\nparagraph 2", "<p>paragraph 1</p><p>paragraph 2</p>")]
#[case::then_quote(
    "paragraph\n> Block Quote",
    "<p>paragraph</p><blockquote><p>Block Quote</p></blockquote>"
)]
fn paragraphs(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case::web("<http://example.com>", r#"<p><a href="http://example.com">http://example.com</a></p>"#)]
#[case::mail("<doug@example.com>", r#"<p><a href="mailto:doug@example.com">doug@example.com</a></p>"#)]
#[case::named("[View Page](http://example.com)", r#"<p><a href="http://example.com">View Page</a></p>"#)]
#[case::titled(
    r#"[View Page](http://example.com "Example Site")"#,
    r#"<p><a href="http://example.com" title="Example Site">View Page</a></p>"#
)]
#[case::no_auto_link("http://example.com", "<p>http://example.com</p>")]
#[case::image(
    "![Alt Text](http://example.com/image.jpg)",
    r#"<p><img src="http://example.com/image.jpg" alt="Alt Text"></p>"#
)]
#[case::titled_image(
    r#"![Alt Text](http://example.com/image.jpg "Example Image")"#,
    r#"<p><img src="http://example.com/image.jpg" alt="Alt Text" title="Example Image"></p>"#
)]
fn links(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[test]
fn auto_link_when_enabled() {
    let marky = Marky::new(Options::default().auto_link(true)).unwrap();
    let renderer = HtmlRenderer::default();
    assert_eq!(
        marky.render("see http://example.com", &renderer).unwrap(),
        r#"<p>see <a href="http://example.com">http://example.com</a></p>"#
    );
    assert_eq!(
        marky.render("<http://example.com>", &renderer).unwrap(),
        r#"<p><a href="http://example.com">http://example.com</a></p>"#
    );
}

#[rstest]
#[case::single("`code`", "<p><code>code</code></p>")]
#[case::double("hello ``code`` world", "<p>hello <code>code</code> world</p>")]
#[case::triple("hello ```code``` world", "<p>hello <code>code</code> world</p>")]
#[case::shields_link("`<http://example.com>`", "<p><code>&lt;http://example.com&gt;</code></p>")]
#[case::fence("```\ncode block\n```", "<pre><code>code block\n</code></pre>")]
#[case::fence_with_syntax(
    "```json\n{ \"code\": \"block\" }\n```",
    "<pre><code>{ \"code\": \"block\" }\n</code></pre>"
)]
fn code(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case::dash("- Item 1", "<ul><li>Item 1</li></ul>")]
#[case::star("* Item 1", "<ul><li>Item 1</li></ul>")]
#[case::ordered("1. Item 1", "<ol><li>Item 1</li></ol>")]
#[case::start("3. Item 1", r#"<ol start="3"><li>Item 1</li></ol>"#)]
#[case::oversized_start(
    "99999999999999999999999. big",
    r#"<ol start="18446744073709551615"><li>big</li></ol>"#
)]
#[case::heading_item("- # Heading 1", "<ul><li><h1>Heading 1</h1></li></ul>")]
#[case::bold_item("- **bold**", "<ul><li><strong>bold</strong></li></ul>")]
#[case::list_in_item("- - Item 1 1", "<ul><li><ul><li>Item 1 1</li></ul></li></ul>")]
#[case::ordered_in_item("- 1. Item 1 1", "<ul><li><ol><li>Item 1 1</li></ol></li></ul>")]
#[case::quote_item("- > Block Quote", "<ul><li><blockquote><p>Block Quote</p></blockquote></li></ul>")]
#[case::tab_quote(
    "- Welcome to the future!\n\t> The future is now!",
    "<ul><li>Welcome to the future!<blockquote><p>The future is now!</p></blockquote></li></ul>"
)]
#[case::two_items("- Item 1\n- Item 2", "<ul><li>Item 1</li><li>Item 2</li></ul>")]
#[case::two_ordered("1. Item 1\n2. Item 2", "<ol><li>Item 1</li><li>Item 2</li></ol>")]
#[case::loose("- Item 1\n\n- Item 2", "<ul><li><p>Item 1</p></li><li><p>Item 2</p></li></ul>")]
#[case::loose_three(
    "- Item 1\n\n- Item 2\n\n- Item 3",
    "<ul><li><p>Item 1</p></li><li><p>Item 2</p></li><li><p>Item 3</p></li></ul>"
)]
#[case::loose_first_gap(
    "- Item 1\n\n- Item 2\n- Item 3",
    "<ul><li><p>Item 1</p></li><li><p>Item 2</p></li><li><p>Item 3</p></li></ul>"
)]
#[case::loose_last_gap(
    "- Item 1\n- Item 2\n\n- Item 3",
    "<ul><li><p>Item 1</p></li><li><p>Item 2</p></li><li><p>Item 3</p></li></ul>"
)]
#[case::two_blank_lines("- Item 1\n\n\n- Item 2", "<ul><li>Item 1</li></ul><ul><li>Item 2</li></ul>")]
#[case::mismatched_bullets(
    "- Item 1 1\n* Item 2 1",
    "<ul><li>Item 1 1</li></ul><ul><li>Item 2 1</li></ul>"
)]
#[case::mixed_kinds(
    "- Item 1 1\n1. Item 2 1",
    "<ul><li>Item 1 1</li></ul><ol><li>Item 2 1</li></ol>"
)]
#[case::nested("- Item 1\n  - Item 1 1", "<ul><li>Item 1<ul><li>Item 1 1</li></ul></li></ul>")]
#[case::nested_twice(
    "- Item 1\n  - Item 1 1\n- Item 2\n  - Item 2 1",
    "<ul><li>Item 1<ul><li>Item 1 1</li></ul></li><li>Item 2<ul><li>Item 2 1</li></ul></li></ul>"
)]
#[case::continuation("- Item 1\nMore Text", "<ul><li>Item 1<br>More Text</li></ul>")]
// A blank line closes the open item; the indented item that follows joins
// the outer list as a loose sibling.
#[case::blank_line_inside_nested(
    "- a\n  - b\n\n  - c",
    "<ul><li><p>a</p><ul><li>b</li></ul></li><li><p>c</p></li></ul>"
)]
#[case::blank_line_before_nested(
    "- a\n\n  - b",
    "<ul><li><p>a</p></li><li><p>b</p></li></ul>"
)]
fn lists(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case::paragraph("> Block Quote", "<blockquote><p>Block Quote</p></blockquote>")]
#[case::indented(" > Block Quote", "<blockquote><p>Block Quote</p></blockquote>")]
#[case::heading("> # Heading 1", "<blockquote><h1>Heading 1</h1></blockquote>")]
#[case::list("> * Item 1", "<blockquote><ul><li>Item 1</li></ul></blockquote>")]
#[case::spaced_nesting(
    "> > Block Quote",
    "<blockquote><blockquote><p>Block Quote</p></blockquote></blockquote>"
)]
#[case::marker_nesting(
    ">> Block Quote",
    "<blockquote><blockquote><p>Block Quote</p></blockquote></blockquote>"
)]
#[case::bold("> **bold**", "<blockquote><p><strong>bold</strong></p></blockquote>")]
#[case::continued(
    "> Block Quote Start\n> Block Quote Cont",
    "<blockquote><p>Block Quote Start<br>Block Quote Cont</p></blockquote>"
)]
#[case::two_paragraphs(
    "> Block Quote Start\n>\n> Block Quote Cont",
    "<blockquote><p>Block Quote Start</p><p>Block Quote Cont</p></blockquote>"
)]
#[case::blank_marker_with_space(
    "> Block Quote 1\n> \n> Block Quote 2",
    "<blockquote><p>Block Quote 1</p><p>Block Quote 2</p></blockquote>"
)]
#[case::deeper_line(
    "> Block Quote Start\n>> Block Quote Cont",
    "<blockquote><p>Block Quote Start</p><blockquote><p>Block Quote Cont</p></blockquote></blockquote>"
)]
#[case::then_paragraph(
    "> Block Quote\n\nParagraph",
    "<blockquote><p>Block Quote</p></blockquote><p>Paragraph</p>"
)]
fn block_quotes(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(html(text), expected);
}

#[rstest]
#[case('*')]
#[case('_')]
#[case('#')]
#[case('[')]
#[case('`')]
#[case('~')]
#[case('!')]
fn escaped_punctuation_is_literal(#[case] c: char) {
    assert_eq!(html(&format!("a \\{c}")), format!("<p>a {c}</p>"));
}

#[rstest]
#[case('<', "&lt;")]
#[case('>', "&gt;")]
fn escaped_markup_chars_are_encoded(#[case] c: char, #[case] encoded: &str) {
    assert_eq!(html(&format!("a \\{c}")), format!("<p>a {encoded}</p>"));
}

#[test]
fn parser_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Marky>();
}
