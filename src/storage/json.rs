//! JSON array loader for event records.

use std::path::Path;

use tracing::debug;

use crate::core::schema::RawEvent;
use crate::{TimelineError, TimelineResult};

/// Read a JSON array of event objects from `path`.
///
/// # Errors
/// Returns an error if:
/// - The file doesn't exist (`MissingFile`, checked before any read)
/// - The file cannot be read (`Io`)
/// - The contents are not a JSON array of event objects (`Parse`)
pub fn load_events(path: &Path) -> TimelineResult<Vec<RawEvent>> {
    if !path.exists() {
        return Err(TimelineError::MissingFile(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| TimelineError::io(path, e))?;
    debug!(bytes = contents.len(), path = %path.display(), "read input");

    let records: Vec<RawEvent> =
        serde_json::from_str(&contents).map_err(|source| TimelineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records)
}
