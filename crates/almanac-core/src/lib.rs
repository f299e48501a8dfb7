//! Shared building blocks for the almanac workspace.
//!
//! Closed enumerations for categories and recurrence kinds, the core error
//! type, and settings loading. Nothing in here performs date arithmetic.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
