use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{GridSize, Resolution};

/// Parsed collage configuration, handed by value to the renderer.
///
/// `grid` and `resolution` are `None` when their flag was not supplied (or every
/// occurrence was rejected); the flat accessors report 0 in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Explicit files from `-i` and folder listings from `-f`, in flag order
    pub input_files: Vec<String>,
    pub grid: Option<GridSize>,
    pub resolution: Option<Resolution>,
}

impl Config {
    pub fn grid_set(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid_rows(&self) -> u32 {
        self.grid.map_or(0, |g| g.rows)
    }

    pub fn grid_cols(&self) -> u32 {
        self.grid.map_or(0, |g| g.cols)
    }

    pub fn output_width(&self) -> u32 {
        self.resolution.map_or(0, |r| r.width)
    }

    pub fn output_height(&self) -> u32 {
        self.resolution.map_or(0, |r| r.height)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
