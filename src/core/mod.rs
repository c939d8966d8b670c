//! Core event types for ai-timeline.
//!
//! `RawEvent` is what the input file carries; `Event` is the processed,
//! date-typed form the renderer consumes.

pub mod dates;
pub mod process;
pub mod schema;

pub use dates::{format_date, parse_date};
pub use process::process_events;
pub use schema::{Event, RawEvent};
