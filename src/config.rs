use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::timeline::wrap::DEFAULT_WRAP_THRESHOLD;
use crate::{TimelineError, TimelineResult};

pub const DEFAULT_TITLE: &str = "Interactive AI History Timeline";
pub const DEFAULT_OUTPUT_DIR: &str = "timelines";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            l: 40,
            r: 40,
            t: 40,
            b: 40,
        }
    }
}

/// Layout and output settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub title: String,
    pub wrap_threshold: usize,
    pub height: u32,
    pub margin: Margin,
    pub marker_color: String,
    pub marker_size: u32,
    pub line_color: String,
    pub line_width: u32,
    pub output_dir: PathBuf,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            title: DEFAULT_TITLE.to_string(),
            wrap_threshold: DEFAULT_WRAP_THRESHOLD,
            height: 600,
            margin: Margin::default(),
            marker_color: "blue".to_string(),
            marker_size: 10,
            line_color: "black".to_string(),
            line_width: 2,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl TimelineConfig {
    /// Where an output file named `file_name` is written.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    fn validate(&self) -> TimelineResult<()> {
        if self.wrap_threshold == 0 {
            return Err(TimelineError::Config(
                "wrap_threshold must be at least 1".to_string(),
            ));
        }
        if self.height == 0 {
            return Err(TimelineError::Config("height must be at least 1".to_string()));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> TimelineResult<TimelineConfig> {
    let s = std::fs::read_to_string(path).map_err(|e| TimelineError::io(path, e))?;
    let cfg: TimelineConfig = toml::from_str(&s)
        .map_err(|e| TimelineError::Config(format!("{}: {e}", path.display())))?;
    cfg.validate()?;
    Ok(cfg)
}
