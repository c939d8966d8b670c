//! Figure model embedded into the HTML page as JSON.
//!
//! The page script reads this structure and draws the chart; nothing here
//! depends on the inline script beyond field names.

use serde::{Deserialize, Serialize};

use crate::config::Margin;

/// Where a marker's persistent label sits relative to the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextPosition {
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "bottom center")]
    BottomCenter,
}

/// One event point on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// `YYYY-MM-DD`
    pub x: String,
    /// `1` above the axis, `-1` below.
    pub y: i8,
    /// Wrapped event name, `<br>` separated.
    pub label: String,
    /// Tooltip markup, shown on hover only.
    pub hover_text: String,
    pub text_position: TextPosition,
    pub color: String,
    pub size: u32,
}

/// Horizontal axis line at `y = 0` spanning the date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub x0: String,
    pub x1: String,
    pub y: i8,
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub title: String,
    pub show_grid: bool,
    pub zero_line: bool,
    /// strftime-style pattern for tick labels
    pub tick_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    pub visible: bool,
    pub range: [i8; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub show_legend: bool,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub margin: Margin,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub markers: Vec<Marker>,
    pub axis_line: AxisLine,
    pub layout: Layout,
}
