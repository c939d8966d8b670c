//! Derive the chart figure from sorted events.

use tracing::debug;

use crate::config::TimelineConfig;
use crate::core::format_date;
use crate::core::schema::Event;
use crate::{TimelineError, TimelineResult};

use super::schema::{AxisLine, Figure, Layout, Marker, TextPosition, XAxis, YAxis};
use super::wrap::{LINE_BREAK, split_text};

/// Vertical offset for the marker at `index`: even above the axis, odd below.
pub fn marker_offset(index: usize) -> i8 {
    if index % 2 == 0 { 1 } else { -1 }
}

/// Compose the tooltip markup for one event.
///
/// Field order: date, wrapped name, authors, summary.
pub fn hover_text(event: &Event, wrapped_name: &str) -> String {
    format!(
        "<b>Date:</b> {date}{br}{br}<b>{wrapped_name}</b>{br}{br}<b>Authors:</b> {authors}{br}<b>Summary:</b> {summary}",
        date = event.date_string(),
        authors = event.joined_authors(),
        summary = event.summary,
        br = LINE_BREAK,
    )
}

fn make_marker(index: usize, event: &Event, config: &TimelineConfig) -> Marker {
    let y = marker_offset(index);
    let label = split_text(&event.event_name, config.wrap_threshold);
    let hover_text = hover_text(event, &label);
    Marker {
        x: event.date_string(),
        y,
        label,
        hover_text,
        text_position: if y == 1 {
            TextPosition::TopCenter
        } else {
            TextPosition::BottomCenter
        },
        color: config.marker_color.clone(),
        size: config.marker_size,
    }
}

fn make_layout(config: &TimelineConfig) -> Layout {
    Layout {
        title: config.title.clone(),
        show_legend: false,
        x_axis: XAxis {
            title: "Date".to_string(),
            show_grid: true,
            zero_line: false,
            tick_format: "%Y-%m-%d".to_string(),
        },
        y_axis: YAxis {
            visible: false,
            range: [-2, 2],
        },
        margin: config.margin,
        height: config.height,
    }
}

/// Build the figure for events already sorted by date.
///
/// Marker offsets follow position in `events`, so callers must pass the
/// processed (sorted) sequence.
pub fn build_figure(events: &[Event], config: &TimelineConfig) -> TimelineResult<Figure> {
    let (Some(min), Some(max)) = (
        events.iter().map(|e| e.date).min(),
        events.iter().map(|e| e.date).max(),
    ) else {
        return Err(TimelineError::EmptyTimeline);
    };

    let markers: Vec<Marker> = events
        .iter()
        .enumerate()
        .map(|(i, e)| make_marker(i, e, config))
        .collect();
    let (x0, x1) = (format_date(min), format_date(max));
    debug!(markers = markers.len(), %x0, %x1, "built figure");

    Ok(Figure {
        markers,
        axis_line: AxisLine {
            x0,
            x1,
            y: 0,
            color: config.line_color.clone(),
            width: config.line_width,
        },
        layout: make_layout(config),
    })
}
