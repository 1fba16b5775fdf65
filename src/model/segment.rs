//! Intermediate output lines passed between the line, list and paragraph
//! passes.

use super::ListKind;

/// A rendered line tagged with its block role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text that may be gathered into a paragraph.
    Text(String),

    /// Block-level markup that is emitted as-is.
    Markup(String),

    /// Rendered content of a list item, not yet inside a container.
    Item {
        /// Container the item belongs to
        kind: ListKind,
        /// Item content after inline rules
        html: String,
    },

    /// A blank line; ends the current paragraph and is dropped.
    Blank,
}

impl Segment {
    /// Create a markup segment.
    pub fn markup(html: impl Into<String>) -> Self {
        Segment::Markup(html.into())
    }
}

/// A line after list grouping. Items now live inside container markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Plain text that may be gathered into a paragraph.
    Text(String),

    /// Block-level markup that is emitted as-is.
    Markup(String),

    /// A blank line.
    Blank,
}

impl Block {
    /// Create a markup block.
    pub fn markup(html: impl Into<String>) -> Self {
        Block::Markup(html.into())
    }
}
