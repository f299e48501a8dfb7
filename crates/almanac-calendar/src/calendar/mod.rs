//! Calendar event model, recurrence expansion and overlap detection.

pub mod core;
pub mod expand;
pub mod overlap;

#[cfg(test)]
mod tests;
