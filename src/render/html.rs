//! Markdown to HTML rendering pipeline.
//!
//! Stages run in [`PIPELINE`] order, each consuming the whole output of the
//! previous one:
//!
//! 1. normalize: CRLF and lone CR to LF, optional NFC
//! 2. protect-code: fenced blocks then inline spans become tokens
//! 3. join-spans: images and links wrapped over line breaks move onto one line
//! 4. lines: classify lines and apply inline rules
//! 5. lists: group list items into containers
//! 6. paragraphs: wrap text runs in `<p>`
//! 7. restore-code: tokens become escaped code HTML

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use super::code;
use super::inline::join_wrapped_spans;
use super::lines::render_lines;
use super::lists::group_lists;
use super::paragraph::wrap_paragraphs;
use super::{RenderOptions, RenderResult, RenderStats};

/// A named pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Line endings, optional NFC
    Normalize,
    /// Fenced blocks and inline spans swapped for tokens
    ProtectCode,
    /// Wrapped images and links joined onto one line
    JoinSpans,
    /// Line classification and inline rules
    Lines,
    /// List grouping
    Lists,
    /// Paragraph wrapping
    Paragraphs,
    /// Tokens swapped back for code HTML
    RestoreCode,
}

impl Stage {
    /// Stable stage name.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Normalize => "normalize",
            Stage::ProtectCode => "protect-code",
            Stage::JoinSpans => "join-spans",
            Stage::Lines => "lines",
            Stage::Lists => "lists",
            Stage::Paragraphs => "paragraphs",
            Stage::RestoreCode => "restore-code",
        }
    }
}

/// Stage execution order.
pub const PIPELINE: [Stage; 7] = [
    Stage::Normalize,
    Stage::ProtectCode,
    Stage::JoinSpans,
    Stage::Lines,
    Stage::Lists,
    Stage::Paragraphs,
    Stage::RestoreCode,
];

/// Render Markdown to an HTML fragment.
pub fn to_html(markdown: Option<&str>, options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(markdown)
}

/// Render Markdown to an HTML fragment with statistics.
pub fn to_html_with_stats(markdown: Option<&str>, options: &RenderOptions) -> RenderResult {
    MarkdownRenderer::new(options.clone()).render_with_stats(markdown)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render Markdown to HTML. Absent or empty input yields an empty string.
    pub fn render(mut self, markdown: Option<&str>) -> String {
        self.render_internal(markdown.unwrap_or_default())
    }

    /// Render Markdown to HTML with statistics.
    pub fn render_with_stats(mut self, markdown: Option<&str>) -> RenderResult {
        let source = markdown.unwrap_or_default();
        let html = self.render_internal(source);

        self.stats.count_text(source);

        RenderResult::new(html, self.stats)
    }

    fn render_internal(&mut self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let source = normalize(markdown, &self.options);

        let protected = code::extract(&source, &self.options.default_code_language);
        self.stats.code_block_count += protected.store.block_count() as u32;
        self.stats.inline_code_count += protected.store.span_count() as u32;

        let joined = join_wrapped_spans(&protected.text);
        let segments = render_lines(&joined, &self.options, &mut self.stats);
        let blocks = group_lists(segments, &mut self.stats);
        let html = wrap_paragraphs(blocks, &mut self.stats);

        code::restore(&html, &protected.store)
    }
}

fn normalize<'a>(markdown: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(markdown);

    if text.contains('\r') {
        text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    if options.normalize_unicode {
        text = Cow::Owned(text.nfc().collect());
    }

    text
}
