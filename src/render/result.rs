//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including the HTML and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML fragment
    pub html: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(html: String, stats: RenderStats) -> Self {
        Self { html, stats }
    }
}

/// Counts collected while rendering one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headings (h1-h4)
    pub heading_count: u32,

    /// Number of paragraphs emitted
    pub paragraph_count: u32,

    /// Number of list containers (ul and ol)
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of single-line blockquotes
    pub blockquote_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of inline code spans
    pub inline_code_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of links
    pub link_count: u32,

    /// Approximate word count of the source (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of the source (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
