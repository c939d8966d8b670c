//! Date parsing and chronological ordering of loaded records.

use tracing::debug;

use crate::{TimelineError, TimelineResult};

use super::dates::parse_date;
use super::schema::{Event, RawEvent};

/// Convert raw records into dated events sorted ascending by date.
///
/// The sort is stable: records sharing a date keep their input order.
/// The index in `DateFormat` errors is the record's position in the input.
pub fn process_events(raw: Vec<RawEvent>) -> TimelineResult<Vec<Event>> {
    let mut events = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        let date = parse_date(&record.date).ok_or_else(|| {
            debug!(index, value = %record.date, "date parse failed");
            TimelineError::DateFormat {
                index,
                value: record.date.clone(),
            }
        })?;
        events.push(Event {
            date,
            event_name: record.event_name,
            authors: record.authors,
            summary: record.summary,
        });
    }

    // `sort_by_key` is stable
    events.sort_by_key(|e| e.date);
    Ok(events)
}
