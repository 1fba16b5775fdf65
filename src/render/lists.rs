//! List pass: group consecutive items into `<ul>` / `<ol>` containers.
//!
//! A two-state machine. Outside a list, an item opens a container of its
//! kind. Inside, an item of the same kind stays; anything else (blank line,
//! other block, text, or an item of the other kind) closes the container
//! before passing through. End of input closes an open container.

use crate::model::{Block, ListKind, Segment};

use super::RenderStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside(ListKind),
}

struct ListGrouper<'a> {
    state: ListState,
    out: Vec<Block>,
    stats: &'a mut RenderStats,
}

impl<'a> ListGrouper<'a> {
    fn new(capacity: usize, stats: &'a mut RenderStats) -> Self {
        Self {
            state: ListState::Outside,
            out: Vec::with_capacity(capacity),
            stats,
        }
    }

    fn open(&mut self, kind: ListKind) {
        self.stats.list_count += 1;
        self.out.push(Block::markup(kind.open_tag()));
        self.state = ListState::Inside(kind);
    }

    fn close(&mut self) {
        if let ListState::Inside(kind) = self.state {
            self.out.push(Block::markup(kind.close_tag()));
            self.state = ListState::Outside;
        }
    }

    fn feed(&mut self, segment: Segment) {
        match (self.state, segment) {
            (ListState::Inside(open), Segment::Item { kind, html }) if open == kind => {
                self.push_item(html);
            }
            (_, Segment::Item { kind, html }) => {
                self.close();
                self.open(kind);
                self.push_item(html);
            }
            (_, Segment::Text(text)) => {
                self.close();
                self.out.push(Block::Text(text));
            }
            (_, Segment::Markup(html)) => {
                self.close();
                self.out.push(Block::Markup(html));
            }
            (_, Segment::Blank) => {
                self.close();
                self.out.push(Block::Blank);
            }
        }
    }

    fn push_item(&mut self, html: String) {
        self.stats.list_item_count += 1;
        self.out.push(Block::Markup(format!("<li>{html}</li>")));
    }

    fn finish(mut self) -> Vec<Block> {
        self.close();
        self.out
    }
}

/// Wrap runs of list items in containers.
pub fn group_lists(segments: Vec<Segment>, stats: &mut RenderStats) -> Vec<Block> {
    let before = stats.list_count;
    let mut grouper = ListGrouper::new(segments.len(), stats);
    for segment in segments {
        grouper.feed(segment);
    }
    let out = grouper.finish();
    log::debug!("grouped {} lists", stats.list_count - before);
    out
}
