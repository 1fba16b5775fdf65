//! Inline span rules: emphasis, images and links.
//!
//! Rules run in [`InlineRule::ORDER`]. Each rule rewrites the whole line
//! before the next one starts, so earlier output is later input:
//!
//! - `***x***` runs before `**x**`, which runs before `*x*`, so the longest
//!   delimiter wins.
//! - Images run before links. Link syntax is image syntax minus the `!`, so
//!   the reverse order would leave a stray `!` in front of an anchor.
//!
//! Rules never see inside code: code was swapped for tokens earlier.
//!
//! Span rules run one line at a time. An image or link whose brackets wrap
//! over single line breaks is first joined onto one line by
//! [`join_wrapped_spans`], so it still matches. Neither crosses a blank line.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{RenderOptions, RenderStats};

/// A named inline rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineRule {
    /// `***x***` to `<strong><em>x</em></strong>`
    BoldItalic,
    /// `**x**` to `<strong>x</strong>`
    BoldStar,
    /// `__x__` to `<strong>x</strong>`
    BoldUnderscore,
    /// `*x*` to `<em>x</em>`
    ItalicStar,
    /// `_x_` to `<em>x</em>`
    ItalicUnderscore,
    /// `![alt](url)` to `<img>`
    Image,
    /// `[text](url)` to `<a>`
    Link,
}

impl InlineRule {
    /// Application order.
    pub const ORDER: [InlineRule; 7] = [
        InlineRule::BoldItalic,
        InlineRule::BoldStar,
        InlineRule::BoldUnderscore,
        InlineRule::ItalicStar,
        InlineRule::ItalicUnderscore,
        InlineRule::Image,
        InlineRule::Link,
    ];

    /// Stable rule name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            InlineRule::BoldItalic => "bold-italic",
            InlineRule::BoldStar => "bold-star",
            InlineRule::BoldUnderscore => "bold-underscore",
            InlineRule::ItalicStar => "italic-star",
            InlineRule::ItalicUnderscore => "italic-underscore",
            InlineRule::Image => "image",
            InlineRule::Link => "link",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            InlineRule::BoldItalic => r"\*\*\*(.+?)\*\*\*",
            InlineRule::BoldStar => r"\*\*(.+?)\*\*",
            InlineRule::BoldUnderscore => r"__(.+?)__",
            InlineRule::ItalicStar => r"\*(.+?)\*",
            InlineRule::ItalicUnderscore => r"_(.+?)_",
            InlineRule::Image => r"!\[([^\]]*)\]\(([^)]+)\)",
            InlineRule::Link => r"\[([^\]]+)\]\(([^)]+)\)",
        }
    }

    fn regex(self) -> &'static Regex {
        static RES: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = RES.get_or_init(|| {
            InlineRule::ORDER
                .iter()
                .map(|rule| Regex::new(rule.pattern()).expect("valid regex"))
                .collect()
        });
        &compiled[self as usize]
    }

    fn template(self, options: &RenderOptions) -> Cow<'static, str> {
        match self {
            InlineRule::BoldItalic => Cow::Borrowed("<strong><em>${1}</em></strong>"),
            InlineRule::BoldStar | InlineRule::BoldUnderscore => {
                Cow::Borrowed("<strong>${1}</strong>")
            }
            InlineRule::ItalicStar | InlineRule::ItalicUnderscore => Cow::Borrowed("<em>${1}</em>"),
            InlineRule::Image => {
                if options.lazy_images {
                    Cow::Borrowed(r#"<img src="${2}" alt="${1}" loading="lazy" />"#)
                } else {
                    Cow::Borrowed(r#"<img src="${2}" alt="${1}" />"#)
                }
            }
            InlineRule::Link => {
                if options.open_links_in_new_tab {
                    Cow::Borrowed(
                        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
                    )
                } else {
                    Cow::Borrowed(r#"<a href="${2}">${1}</a>"#)
                }
            }
        }
    }

    /// Apply this rule alone to a line.
    pub fn apply(self, text: &str, options: &RenderOptions) -> String {
        self.regex()
            .replace_all(text, self.template(options).as_ref())
            .into_owned()
    }
}

fn re_line_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\S\n]*\n[^\S\n]*").expect("valid regex"))
}

fn re_wrapped_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"!?\[(?:[^\]\n]|\n[^\S\n]*[^\]\s])*\]\((?:[^)\n]|\n[^\S\n]*[^)\s])+\)",
        )
        .expect("valid regex")
    })
}

/// Replace each line break, with the whitespace around it, by one space.
pub(crate) fn join_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        re_line_break().replace_all(text, " ")
    } else {
        Cow::Borrowed(text)
    }
}

/// Join image and link markup that wraps over line breaks onto one line.
pub fn join_wrapped_spans(text: &str) -> Cow<'_, str> {
    if !text.contains('[') || !text.contains('\n') {
        return Cow::Borrowed(text);
    }
    re_wrapped_span().replace_all(text, |caps: &Captures| {
        join_line_breaks(&caps[0]).into_owned()
    })
}

/// Apply every inline rule, in order, to one line of text.
pub fn render_spans(text: &str, options: &RenderOptions, stats: &mut RenderStats) -> String {
    if !text.contains(['*', '_', '[']) {
        return text.to_string();
    }

    let mut current = text.to_string();
    for rule in InlineRule::ORDER {
        let matches = rule.regex().find_iter(&current).count();
        if matches == 0 {
            continue;
        }
        match rule {
            InlineRule::Image => stats.image_count += matches as u32,
            InlineRule::Link => stats.link_count += matches as u32,
            _ => {}
        }
        log::trace!("rule {} matched {} times", rule.name(), matches);
        current = rule.apply(&current, options);
    }
    current
}
