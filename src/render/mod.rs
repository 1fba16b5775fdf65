//! Rendering module for converting restricted Markdown to HTML fragments.

mod code;
mod escape;
mod html;
pub mod inline;
mod json;
mod lines;
mod lists;
mod options;
mod paragraph;
mod result;

pub use escape::escape_html;
pub use html::{to_html, to_html_with_stats, MarkdownRenderer, Stage, PIPELINE};
pub use inline::InlineRule;
pub use json::{to_json, JsonFormat};
pub use lines::{is_block_markup, BLOCK_TAG_PREFIXES};
pub use options::{RenderOptions, DEFAULT_CODE_LANGUAGE};
pub use result::{RenderResult, RenderStats};
