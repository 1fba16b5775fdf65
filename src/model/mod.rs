//! Transient model types used inside a single render call.
//!
//! Source lines are classified into [`LineKind`] values and rendered into
//! [`Segment`]s. The list pass folds items into containers and hands
//! [`Block`]s to the paragraph pass.

mod line;
mod segment;

pub use line::{LineKind, ListKind, HEADING_PREFIXES};
pub use segment::{Block, Segment};
