//! Integration tests for the public render contract.

use litemark::{render, render_with_options, RenderOptions};

fn html(markdown: &str) -> String {
    render(Some(markdown))
}

// ==================== Empty Input ====================

#[test]
fn test_absent_input_is_empty() {
    assert_eq!(render(None), "");
}

#[test]
fn test_empty_input_is_empty() {
    assert_eq!(html(""), "");
}

#[test]
fn test_whitespace_input_is_empty() {
    assert_eq!(html("   \n\t\n"), "");
}

// ==================== Paragraphs ====================

#[test]
fn test_plain_single_line() {
    for text in ["hello", "hello world", "Numbers 123 and words", "한국어 문장"] {
        assert_eq!(html(text), format!("<p>{}</p>", text));
    }
}

#[test]
fn test_consecutive_lines_join_with_space() {
    assert_eq!(html("first line\n  second line  "), "<p>first line second line</p>");
}

#[test]
fn test_blank_line_splits_paragraphs() {
    assert_eq!(html("a\n\n\nb"), "<p>a</p>\n<p>b</p>");
}

// ==================== Headings ====================

#[test]
fn test_each_heading_level() {
    assert_eq!(html("# T"), "<h1>T</h1>");
    assert_eq!(html("## T"), "<h2>T</h2>");
    assert_eq!(html("### T"), "<h3>T</h3>");
    assert_eq!(html("#### T"), "<h4>T</h4>");
}

#[test]
fn test_h4_never_partial_h1() {
    let out = html("#### T");
    assert!(out.contains("<h4>T</h4>"));
    assert!(!out.contains("<h1>"));
    assert!(!out.contains('#'));
}

#[test]
fn test_mixed_adjacent_headings() {
    assert_eq!(
        html("#### d\n# a\n### c\n## b"),
        "<h4>d</h4>\n<h1>a</h1>\n<h3>c</h3>\n<h2>b</h2>"
    );
}

#[test]
fn test_five_hashes_is_paragraph() {
    assert_eq!(html("##### deep"), "<p>##### deep</p>");
}

#[test]
fn test_heading_ends_paragraph() {
    assert_eq!(html("text\n# T\nmore"), "<p>text</p>\n<h1>T</h1>\n<p>more</p>");
}

// ==================== Rules & Blockquotes ====================

#[test]
fn test_horizontal_rules() {
    assert_eq!(html("---"), "<hr />");
    assert_eq!(html("***"), "<hr />");
    assert_eq!(html("a\n---\nb"), "<p>a</p>\n<hr />\n<p>b</p>");
}

#[test]
fn test_blockquote_lines_not_merged() {
    assert_eq!(
        html("> one\n> two"),
        "<blockquote><p>one</p></blockquote>\n<blockquote><p>two</p></blockquote>"
    );
}

#[test]
fn test_blockquote_inline_content() {
    assert_eq!(
        html("> **bold** quote"),
        "<blockquote><p><strong>bold</strong> quote</p></blockquote>"
    );
}

// ==================== Emphasis ====================

#[test]
fn test_emphasis_variants() {
    assert_eq!(
        html("***a*** **b** __c__ *d* _e_"),
        "<p><strong><em>a</em></strong> <strong>b</strong> <strong>c</strong> <em>d</em> <em>e</em></p>"
    );
}

#[test]
fn test_mismatched_emphasis_literal() {
    assert_eq!(html("**unclosed"), "<p>**unclosed</p>");
}

// ==================== Code ====================

#[test]
fn test_code_block_content_not_transformed() {
    let out = html("```\n**x**\n```");
    assert!(out.contains("<code class=\"language-plaintext\">**x**</code>"));
    assert!(!out.contains("<strong>"));
}

#[test]
fn test_code_block_escapes_specials() {
    let out = html("```html\n<a href=\"x\">&</a>\n```");
    assert_eq!(
        out,
        "<pre><code class=\"language-html\">&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;</code></pre>"
    );
}

#[test]
fn test_specials_outside_code_pass_through() {
    assert_eq!(html("a < b & c"), "<p>a < b & c</p>");
}

#[test]
fn test_literal_html_pass_through() {
    assert_eq!(
        html("<script>alert(1)</script>"),
        "<p><script>alert(1)</script></p>"
    );
}

#[test]
fn test_inline_code_escaped_and_protected() {
    assert_eq!(
        html("run `a < *b*` now"),
        "<p>run <code>a &lt; *b*</code> now</p>"
    );
}

#[test]
fn test_code_block_lines_never_classified() {
    let out = html("```\n# h\n- item\n> q\n---\n```");
    assert!(!out.contains("<h1>"));
    assert!(!out.contains("<ul>"));
    assert!(!out.contains("<blockquote>"));
    assert!(!out.contains("<hr />"));
    assert!(!out.contains("<p>"));
}

#[test]
fn test_inline_code_across_line_break() {
    assert_eq!(html("`a\nb`"), "<p><code>a b</code></p>");
    assert_eq!(
        html("run `x <\n  y` now"),
        "<p>run <code>x &lt; y</code> now</p>"
    );
}

#[test]
fn test_inline_code_never_crosses_blank_line() {
    assert_eq!(html("`a\n\nb`"), "<p>`a</p>\n<p>b`</p>");
}

#[test]
fn test_unterminated_fence_is_literal() {
    assert_eq!(html("```rust\nlet x = 1;"), "<p>```rust let x = 1;</p>");
}

// ==================== Images & Links ====================

#[test]
fn test_image_markup() {
    assert_eq!(
        html("![a](b.png)"),
        r#"<img src="b.png" alt="a" loading="lazy" />"#
    );
}

#[test]
fn test_image_no_stray_bang() {
    let out = html("![a](b.png)");
    assert!(out.contains(r#"<img src="b.png" alt="a""#));
    assert!(!out.contains('!'));
    assert!(!out.contains("<a "));
}

#[test]
fn test_link_markup() {
    assert_eq!(
        html("see [docs](https://example.com/docs)"),
        r#"<p>see <a href="https://example.com/docs" target="_blank" rel="noopener noreferrer">docs</a></p>"#
    );
}

#[test]
fn test_link_options() {
    let options = RenderOptions::new()
        .with_new_tab_links(false)
        .with_lazy_images(false);
    assert_eq!(
        render_with_options(Some("[a](b) ![c](d)"), &options),
        r#"<p><a href="b">a</a> <img src="d" alt="c" /></p>"#
    );
}

#[test]
fn test_link_across_line_break() {
    assert_eq!(
        html("[a\nb](c)"),
        r#"<p><a href="c" target="_blank" rel="noopener noreferrer">a b</a></p>"#
    );
    assert_eq!(
        html("see [the\ndocs](/d) here\nand more"),
        r#"<p>see <a href="/d" target="_blank" rel="noopener noreferrer">the docs</a> here and more</p>"#
    );
}

#[test]
fn test_image_across_line_break() {
    assert_eq!(
        html("![a\nb](c.png)"),
        r#"<img src="c.png" alt="a b" loading="lazy" />"#
    );
}

#[test]
fn test_url_not_validated() {
    assert_eq!(
        html("[x](javascript:void)"),
        r#"<p><a href="javascript:void" target="_blank" rel="noopener noreferrer">x</a></p>"#
    );
}

// ==================== Lists ====================

#[test]
fn test_single_unordered_list() {
    let out = html("- a\n- b");
    assert_eq!(out, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    assert_eq!(out.matches("<ul>").count(), 1);
    assert_eq!(out.matches("<li>").count(), 2);
}

#[test]
fn test_list_closed_before_blank_then_paragraph() {
    assert_eq!(html("- a\n\ntext"), "<ul>\n<li>a</li>\n</ul>\n<p>text</p>");
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        html("1. one\n2. two\n10. ten"),
        "<ol>\n<li>one</li>\n<li>two</li>\n<li>ten</li>\n</ol>"
    );
}

#[test]
fn test_list_kind_change() {
    assert_eq!(
        html("- a\n1. b"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
    );
}

#[test]
fn test_list_then_text_without_blank() {
    assert_eq!(html("- a\nafter"), "<ul>\n<li>a</li>\n</ul>\n<p>after</p>");
}

#[test]
fn test_list_item_not_rescanned() {
    assert_eq!(html("- - nested"), "<ul>\n<li>- nested</li>\n</ul>");
    assert_eq!(html("- 1. x"), "<ul>\n<li>1. x</li>\n</ul>");
}

#[test]
fn test_list_item_inline_content() {
    assert_eq!(
        html("- **b** [l](u)"),
        "<ul>\n<li><strong>b</strong> <a href=\"u\" target=\"_blank\" rel=\"noopener noreferrer\">l</a></li>\n</ul>"
    );
}

#[test]
fn test_indented_marker_is_text() {
    assert_eq!(html("  - a"), "<p>- a</p>");
}

// ==================== Control Characters ====================

#[test]
fn test_nul_passes_through() {
    assert_eq!(html("a\u{0}b"), "<p>a\u{0}b</p>");
    assert_eq!(
        html("`\u{0}` \u{0}C0\u{0}"),
        "<p><code>\u{0}</code> \u{0}C0\u{0}</p>"
    );
}

#[test]
fn test_lone_carriage_return_breaks_line() {
    assert_eq!(html("# T\rnext"), "<h1>T</h1>\n<p>next</p>");
}

// ==================== Determinism ====================

#[test]
fn test_deterministic_output() {
    let doc = "# Title\n\nSome *text* with `code`.\n\n- a\n- b\n\n```rust\nfn main() {}\n```\n\n![i](p.png)";
    let first = html(doc);
    for _ in 0..10 {
        assert_eq!(html(doc), first);
    }
}

// ==================== Full Document ====================

#[test]
fn test_full_document() {
    let doc = "\
# Project

Intro line one
intro line two.

## Features

- **Fast** rendering
- Safe `code`

1. first
2. second

> Note: single line

---

```rust
let x = &y;
```

![shot](s.png)
[more](https://example.com)";

    let expected = "\
<h1>Project</h1>
<p>Intro line one intro line two.</p>
<h2>Features</h2>
<ul>
<li><strong>Fast</strong> rendering</li>
<li>Safe <code>code</code></li>
</ul>
<ol>
<li>first</li>
<li>second</li>
</ol>
<blockquote><p>Note: single line</p></blockquote>
<hr />
<pre><code class=\"language-rust\">let x = &amp;y;</code></pre>
<img src=\"s.png\" alt=\"shot\" loading=\"lazy\" />
<p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">more</a></p>";

    assert_eq!(html(doc), expected);
}
