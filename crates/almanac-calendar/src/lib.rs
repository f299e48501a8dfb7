//! Recurrence expansion and overlap detection for calendar events.
//!
//! Everything here is a pure function over explicit inputs: no clocks, no
//! configuration, no shared state.

pub mod calendar;
pub mod error;

pub use calendar::core::{Event, EventId, EventSpan, RepeatInfo, SeriesId};
pub use calendar::expand::expand;
pub use calendar::overlap::{ConflictSummary, find_conflicts};
