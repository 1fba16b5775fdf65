//! Code protection: the first pass of the pipeline.
//!
//! Fenced blocks and inline spans are escaped and swapped for opaque
//! placeholder tokens so that no later rule can match inside them. The
//! tokens are swapped back for the escaped HTML after paragraph wrapping.
//!
//! A token is `\0B<n>\0` for a fenced block and `\0C<n>\0` for an inline
//! span. A NUL already in the source is escaped to `\0N\0` before any token
//! is written and restored with the code, so every bare NUL seen between the
//! two belongs to a token.
//!
//! An inline span may wrap over single line breaks but never over a blank
//! line. The break and the whitespace around it become one space, as the
//! paragraph pass would join those lines.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::escape::escape_html;
use super::inline::join_line_breaks;

const MARK: char = '\u{0000}';
const BLOCK_TAG: char = 'B';
const SPAN_TAG: char = 'C';
const NUL_TOKEN: &str = "\u{0000}N\u{0000}";

fn re_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```([A-Za-z0-9_+#.-]*)\n(.*?)```").expect("valid regex"))
}

fn re_inline_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"`((?:[^`\n]|\n[^\S\n]*[^`\s])+)`").expect("valid regex")
    })
}

fn re_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x00(?:([BC])([0-9]+)|N)\x00").expect("valid regex"))
}

/// Escaped HTML for every protected code fragment of one document.
#[derive(Debug, Clone, Default)]
pub struct CodeStore {
    blocks: Vec<String>,
    spans: Vec<String>,
}

impl CodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fenced blocks held.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of inline spans held.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    fn push_block(&mut self, html: String) -> String {
        self.blocks.push(html);
        token(BLOCK_TAG, self.blocks.len() - 1)
    }

    fn push_span(&mut self, html: String) -> String {
        self.spans.push(html);
        token(SPAN_TAG, self.spans.len() - 1)
    }

    fn lookup(&self, tag: &str, index: usize) -> Option<&str> {
        match tag {
            "B" => self.blocks.get(index).map(String::as_str),
            "C" => self.spans.get(index).map(String::as_str),
            _ => None,
        }
    }
}

/// Source text with its code fragments replaced by tokens.
#[derive(Debug, Clone)]
pub struct ProtectedText {
    /// Text holding tokens in place of code
    pub text: String,
    /// The escaped fragments the tokens refer to
    pub store: CodeStore,
}

fn token(tag: char, index: usize) -> String {
    format!("{MARK}{tag}{index}{MARK}")
}

/// Check if a line starts with a fenced-block token.
pub fn starts_with_block_token(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(MARK) && chars.next() == Some(BLOCK_TAG)
}

fn escape_nul(text: &str) -> Cow<'_, str> {
    if text.contains(MARK) {
        Cow::Owned(text.replace(MARK, NUL_TOKEN))
    } else {
        Cow::Borrowed(text)
    }
}

fn unescape_nul(text: &str) -> Cow<'_, str> {
    if text.contains(NUL_TOKEN) {
        Cow::Owned(text.replace(NUL_TOKEN, "\u{0000}"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Protect fenced blocks, then inline spans.
pub fn extract(text: &str, default_language: &str) -> ProtectedText {
    let mut store = CodeStore::new();
    let text = escape_nul(text);

    let fenced = re_fence().replace_all(&text, |caps: &Captures| {
        let lang = match &caps[1] {
            "" => default_language,
            tag => tag,
        };
        let html = format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(unescape_nul(&caps[2]).trim())
        );
        store.push_block(html)
    });

    let spanned = re_inline_code().replace_all(&fenced, |caps: &Captures| {
        let content = unescape_nul(&caps[1]);
        let content = join_line_breaks(&content);
        store.push_span(format!("<code>{}</code>", escape_html(&content)))
    });

    log::debug!(
        "protected {} fenced blocks and {} inline spans",
        store.block_count(),
        store.span_count()
    );

    ProtectedText {
        text: spanned.into_owned(),
        store,
    }
}

/// Swap tokens back for their escaped HTML and escaped NULs back for NUL.
///
/// Tokens with no matching fragment are left untouched.
pub fn restore(html: &str, store: &CodeStore) -> String {
    if !html.contains(MARK) {
        return html.to_string();
    }
    re_placeholder()
        .replace_all(html, |caps: &Captures| {
            let (Some(tag), Some(index)) = (caps.get(1), caps.get(2)) else {
                return MARK.to_string();
            };
            let index = index.as_str().parse::<usize>().ok();
            match index.and_then(|i| store.lookup(tag.as_str(), i)) {
                Some(fragment) => fragment.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
