//! Paragraph pass: gather runs of text lines into `<p>` elements.

use crate::model::Block;

use super::RenderStats;

/// Join blocks into the output fragment.
///
/// Consecutive text blocks are trimmed, joined with single spaces and
/// wrapped once in `<p>`. Blank blocks end a run and are dropped. Markup
/// ends a run and is emitted unchanged.
pub fn wrap_paragraphs(blocks: Vec<Block>, stats: &mut RenderStats) -> String {
    let mut output: Vec<String> = Vec::with_capacity(blocks.len());
    let mut pending: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            Block::Text(text) => pending.push(text.trim().to_string()),
            Block::Blank => flush(&mut pending, &mut output, stats),
            Block::Markup(html) => {
                flush(&mut pending, &mut output, stats);
                output.push(html);
            }
        }
    }
    flush(&mut pending, &mut output, stats);

    log::debug!("wrapped {} paragraphs", stats.paragraph_count);
    output.join("\n")
}

fn flush(pending: &mut Vec<String>, output: &mut Vec<String>, stats: &mut RenderStats) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join(" ");
    let text = text.trim();
    if !text.is_empty() {
        stats.paragraph_count += 1;
        output.push(format!("<p>{text}</p>"));
    }
    pending.clear();
}
