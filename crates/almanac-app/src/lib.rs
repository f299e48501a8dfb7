//! Command line front end over the calendar service.

pub mod command;
pub mod error;
