//! Event value types and the date/time primitives they are built on.

mod datetime;
mod event;
mod repeat;
mod span;

pub use datetime::{format_date, format_time, parse_date, parse_time, serde_opt_date};
pub use event::{Event, EventId, SeriesId};
pub use repeat::RepeatInfo;
pub use span::EventSpan;

pub(crate) use datetime::{serde_date, serde_time};
