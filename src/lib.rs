//! # litemark
//!
//! Restricted Markdown to HTML fragment renderer.
//!
//! litemark turns a small Markdown dialect into an HTML fragment that can be
//! inserted directly into a container element. The same renderer serves a
//! live editor preview and a public content page, so both always show the
//! same output.
//!
//! ## Quick Start
//!
//! ```
//! let html = litemark::render(Some("# Hello\n\n**Bold** text"));
//! assert_eq!(html, "<h1>Hello</h1>\n<p><strong>Bold</strong> text</p>");
//! ```
//!
//! ## Dialect
//!
//! - Fenced code blocks with an optional language tag, and inline code
//! - Headings `#` to `####`, horizontal rules `---` / `***`
//! - Single-line blockquotes `> text`
//! - Emphasis `***x***`, `**x**`, `__x__`, `*x*`, `_x_`
//! - Images `![alt](url)` and links `[text](url)`
//! - Flat unordered `- item` and ordered `1. item` lists
//!
//! Only code is escaped. Any other literal HTML in the source is passed
//! through unchanged, so the source must come from a trusted author.

pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{Block, LineKind, ListKind, Segment};
pub use render::{
    InlineRule, JsonFormat, MarkdownRenderer, RenderOptions, RenderResult, RenderStats, Stage,
    PIPELINE,
};

use std::path::Path;

use rayon::prelude::*;

/// Render Markdown to an HTML fragment with default options.
///
/// Absent or empty input yields an empty string. Rendering never fails.
///
/// # Example
///
/// ```
/// assert_eq!(litemark::render(None), "");
/// assert_eq!(litemark::render(Some("- a\n- b")), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
/// ```
pub fn render(markdown: Option<&str>) -> String {
    render::to_html(markdown, &RenderOptions::default())
}

/// Render Markdown to an HTML fragment with custom options.
///
/// # Example
///
/// ```
/// use litemark::{render_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_new_tab_links(false);
/// let html = render_with_options(Some("[home](/)"), &options);
/// assert_eq!(html, r#"<p><a href="/">home</a></p>"#);
/// ```
pub fn render_with_options(markdown: Option<&str>, options: &RenderOptions) -> String {
    render::to_html(markdown, options)
}

/// Render Markdown and collect statistics about the output.
///
/// # Example
///
/// ```
/// use litemark::{render_with_stats, RenderOptions};
///
/// let result = render_with_stats(Some("# T\n\ntext"), &RenderOptions::default());
/// assert_eq!(result.stats.heading_count, 1);
/// assert_eq!(result.stats.paragraph_count, 1);
/// ```
pub fn render_with_stats(markdown: Option<&str>, options: &RenderOptions) -> RenderResult {
    render::to_html_with_stats(markdown, options)
}

/// Render many documents in parallel.
///
/// Output order matches input order.
pub fn render_many<S: AsRef<str> + Sync>(documents: &[S], options: &RenderOptions) -> Vec<String> {
    log::debug!("rendering {} documents", documents.len());
    documents
        .par_iter()
        .map(|doc| render::to_html(Some(doc.as_ref()), options))
        .collect()
}

/// Read a UTF-8 Markdown file and render it.
///
/// # Example
///
/// ```no_run
/// use litemark::{render_file, RenderOptions};
///
/// let html = render_file("post.md", &RenderOptions::default())?;
/// std::fs::write("post.html", html)?;
/// # Ok::<(), litemark::Error>(())
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let markdown = String::from_utf8(bytes).map_err(|e| {
        log::warn!("{} is not valid UTF-8: {}", path.display(), e);
        Error::from(e)
    })?;
    Ok(render::to_html(Some(&markdown), options))
}
