//! Overlap detection between a candidate event and already-stored events.

mod detector;
mod summary;

pub use detector::{conflicts_with, find_conflicts};
pub use summary::ConflictSummary;
