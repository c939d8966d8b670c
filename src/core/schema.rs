//! Event record schema.

use serde::{Deserialize, Serialize};
use time::Date;

use super::dates::format_date;

/// One entry of the input JSON array, before date parsing.
///
/// Fields other than these four are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEvent {
    /// `YYYY-MM-DD`
    pub date: String,
    pub event_name: String,
    pub authors: Vec<String>,
    pub summary: String,
}

/// Event with a parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: Date,
    pub event_name: String,
    pub authors: Vec<String>,
    pub summary: String,
}

impl Event {
    /// Date rendered as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    /// Authors joined with `", "` for display.
    pub fn joined_authors(&self) -> String {
        self.authors.join(", ")
    }
}
