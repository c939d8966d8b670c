//! Input storage for event records.

pub mod json;

pub use json::load_events;
