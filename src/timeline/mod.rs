//! Timeline figure construction and HTML output.
//!
//! `build_figure` turns sorted events into a `Figure` (markers, axis line,
//! layout); `write_timeline_html` serializes it into a single HTML page.

pub mod build;
pub mod html;
pub mod schema;
pub mod wrap;

pub use build::{build_figure, hover_text, marker_offset};
pub use html::{html_escape, render_timeline_html, write_timeline_html};
pub use schema::{AxisLine, Figure, Layout, Marker, TextPosition, XAxis, YAxis};
pub use wrap::{DEFAULT_WRAP_THRESHOLD, LINE_BREAK, split_text};
