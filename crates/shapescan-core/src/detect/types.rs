//! Parameter and result records for shape detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default minimum pixel count for a component to count as a shape.
pub const DEFAULT_MIN_COMPONENT_AREA: usize = 20;

/// Which side of the luma threshold is treated as foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForegroundMode {
    /// Pick the smaller of the dark and light pixel sets (dark wins ties).
    #[default]
    Auto,
    /// Pixels with luma below 128 are foreground.
    Black,
    /// Pixels with luma of 128 or more are foreground.
    White,
}

impl FromStr for ForegroundMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ForegroundMode::Auto),
            "black" => Ok(ForegroundMode::Black),
            "white" => Ok(ForegroundMode::White),
            other => Err(Error::invalid_parameter(format!(
                "foreground must be 'auto', 'black', or 'white', got '{}'",
                other
            ))),
        }
    }
}

/// Options controlling a detection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Components smaller than this are treated as noise.
    pub min_component_area: usize,
    /// Foreground polarity.
    pub foreground: ForegroundMode,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            min_component_area: DEFAULT_MIN_COMPONENT_AREA,
            foreground: ForegroundMode::Auto,
        }
    }
}

impl DetectionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }
}

/// Label assigned to the dominant foreground blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Rectangle,
    None,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::None => "none",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a detection call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Classified shape.
    pub shape: ShapeKind,
    /// Raw pixel count of the largest component.
    pub area_px: usize,
    /// Shoelace area of the simplified hull polygon.
    pub area_geom: f64,
}

impl DetectionResult {
    /// A `none` result carrying the given pixel area.
    pub fn none(area_px: usize) -> Self {
        Self {
            shape: ShapeKind::None,
            area_px,
            area_geom: 0.0,
        }
    }
}
