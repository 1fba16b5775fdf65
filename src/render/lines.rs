//! Line pass: classify each line and render its inline content.
//!
//! Headings, rules and blockquotes are decided here, per line, before any
//! span rule runs. A text line that already begins with block markup (an
//! image, a protected fenced block, or literal HTML such as `<ul>`) becomes
//! [`Segment::Markup`] so the paragraph pass never wraps it.

use crate::model::{LineKind, Segment};

use super::code::starts_with_block_token;
use super::inline::render_spans;
use super::{RenderOptions, RenderStats};

/// Opening substrings that mark a line as block-level HTML.
pub const BLOCK_TAG_PREFIXES: [&str; 16] = [
    "<h1>",
    "<h2>",
    "<h3>",
    "<h4>",
    "<ul>",
    "</ul>",
    "<ol>",
    "</ol>",
    "<li>",
    "</li>",
    "<pre>",
    "</pre>",
    "<blockquote>",
    "</blockquote>",
    "<hr",
    "<img",
];

/// Check if a rendered line starts with block-level markup.
pub fn is_block_markup(line: &str) -> bool {
    let trimmed = line.trim();
    starts_with_block_token(trimmed)
        || BLOCK_TAG_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
}

/// Turn protected source text into one segment per line.
pub fn render_lines(text: &str, options: &RenderOptions, stats: &mut RenderStats) -> Vec<Segment> {
    let segments: Vec<Segment> = text
        .split('\n')
        .map(|line| render_line(LineKind::classify(line), options, stats))
        .collect();

    log::debug!("classified {} lines", segments.len());
    segments
}

fn render_line(kind: LineKind<'_>, options: &RenderOptions, stats: &mut RenderStats) -> Segment {
    match kind {
        LineKind::Heading { level, text } => {
            stats.heading_count += 1;
            let inner = render_spans(text, options, stats);
            Segment::Markup(format!("<h{level}>{inner}</h{level}>"))
        }
        LineKind::Rule => {
            stats.horizontal_rule_count += 1;
            Segment::markup("<hr />")
        }
        LineKind::Blockquote(text) => {
            stats.blockquote_count += 1;
            let inner = render_spans(text, options, stats);
            Segment::Markup(format!("<blockquote><p>{inner}</p></blockquote>"))
        }
        LineKind::ListItem { kind, text } => Segment::Item {
            kind,
            html: render_spans(text, options, stats),
        },
        LineKind::Blank => Segment::Blank,
        LineKind::Text(text) => {
            let html = render_spans(text, options, stats);
            if is_block_markup(&html) {
                Segment::Markup(html)
            } else {
                Segment::Text(html)
            }
        }
    }
}
