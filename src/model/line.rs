//! Line-level classification of Markdown source.

/// Heading prefixes, longest first.
///
/// A `#### ` line must never be read as an `<h1>` holding a literal `###`.
pub const HEADING_PREFIXES: [(&str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

/// Kind of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `- item` lines, rendered as `<ul>`.
    Unordered,
    /// `1. item` lines, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    /// Opening container tag.
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    /// Closing container tag.
    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// Block-level classification of a single source line.
///
/// Variants borrow their text from the line so classification never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ` through `#### ` followed by content.
    Heading {
        /// Heading level (1-4)
        level: u8,
        /// Text after the marker
        text: &'a str,
    },

    /// A line that is exactly `---` or `***`.
    Rule,

    /// `> ` followed by content.
    Blockquote(&'a str),

    /// `- text` or `N. text`.
    ListItem {
        /// Which container the item belongs to
        kind: ListKind,
        /// Text after the marker
        text: &'a str,
    },

    /// Empty or whitespace-only line.
    Blank,

    /// Anything else.
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a line in precedence order: heading, rule, blockquote,
    /// unordered item, ordered item, blank, text.
    pub fn classify(line: &'a str) -> Self {
        for (prefix, level) in HEADING_PREFIXES {
            if let Some(text) = non_empty_after(line, prefix) {
                return LineKind::Heading { level, text };
            }
        }

        if line == "---" || line == "***" {
            return LineKind::Rule;
        }

        if let Some(text) = non_empty_after(line, "> ") {
            return LineKind::Blockquote(text);
        }

        if let Some(text) = non_empty_after(line, "- ") {
            return LineKind::ListItem {
                kind: ListKind::Unordered,
                text,
            };
        }

        if let Some(text) = ordered_item_text(line) {
            return LineKind::ListItem {
                kind: ListKind::Ordered,
                text,
            };
        }

        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        LineKind::Text(line)
    }
}

fn non_empty_after<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

/// Text of an `N. text` line, where N is one or more ASCII digits.
fn ordered_item_text(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    non_empty_after(&line[digits..], ". ")
}
