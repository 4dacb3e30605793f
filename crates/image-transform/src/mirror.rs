//! Axis mirroring.

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;

use crate::error::TransformError;

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Reverses column order (left ↔ right).
    Horizontal,
    /// Reverses row order (top ↔ bottom).
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            other => Err(TransformError::UnsupportedDirection(other.to_string())),
        }
    }
}

/// Mirrors `img` along `direction`.
pub fn mirror(img: &DynamicImage, direction: Direction) -> DynamicImage {
    match direction {
        Direction::Horizontal => img.fliph(),
        Direction::Vertical => img.flipv(),
    }
}
