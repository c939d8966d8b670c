#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod storage;
pub mod timeline;
pub mod timeline_cmd;

use std::path::PathBuf;
use thiserror::Error;

pub use config::{TimelineConfig, load_config};
pub use timeline_cmd::generate;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("File {} does not exist.", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("record {index}: invalid date {value:?} (expected YYYY-MM-DD)")]
    DateFormat { index: usize, value: String },
    #[error("no events to render: timeline bounds are undefined for an empty list")]
    EmptyTimeline,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TimelineError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            TimelineError::MissingFile(_) => 1,
            TimelineError::Parse { .. } => 2,
            TimelineError::DateFormat { .. } => 3,
            TimelineError::EmptyTimeline => 4,
            TimelineError::Config(_) => 5,
            TimelineError::Io { .. } => 6,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TimelineError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type TimelineResult<T> = Result<T, TimelineError>;
