//! Event planning on top of the calendar core.
//!
//! Decides which instances a create or edit produces and which stored events
//! they collide with. Callers hand in every stored event they want checked;
//! applying the resulting plan is the storage layer's job.

pub mod error;
pub mod event;
