//! Recurrence expansion.
//!
//! Turns a recurring anchor event into its concrete dated instances, bounded
//! by the rule's end date and a caller-supplied hard cutoff.

mod expander;

pub use expander::{expand, expand_dates, frequency_for};
