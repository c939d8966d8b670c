//! Pipeline behind the `ai-timeline` command.
//!
//! Loads events from JSON, sorts them by date, builds the figure and writes
//! the HTML page.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::TimelineResult;
use crate::config::TimelineConfig;
use crate::core::process_events;
use crate::storage::load_events;
use crate::timeline::{build_figure, write_timeline_html};

/// Run the whole pipeline and return the path that was written.
///
/// Nothing is written unless every stage succeeds.
///
/// # Arguments
/// * `json_path` - Path to the input JSON array of events
/// * `output_path` - Destination HTML file (parent directory is created)
/// * `config` - Layout settings
pub fn generate(
    json_path: &Path,
    output_path: &Path,
    config: &TimelineConfig,
) -> TimelineResult<PathBuf> {
    info!(input = %json_path.display(), "loading events");
    let raw = load_events(json_path)?;
    info!(count = raw.len(), "loaded event record(s)");

    let events = process_events(raw)?;
    let figure = build_figure(&events, config)?;

    write_timeline_html(&figure, output_path)?;
    info!(output = %output_path.display(), markers = figure.markers.len(), "timeline written");
    Ok(output_path.to_path_buf())
}
