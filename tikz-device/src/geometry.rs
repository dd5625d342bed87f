//! Parameter structs for drawing operations.
//!
//! All coordinates are in points, already converted from device units.

use crate::error::{TikzError, TikzResult};

/// A point in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Pair up separate x and y coordinate arrays, as hosts pass them.
pub fn points_from_xy(x: &[f64], y: &[f64]) -> TikzResult<Vec<Point>> {
    if x.len() != y.len() {
        return Err(TikzError::InvalidGeometry(format!(
            "coordinate length mismatch: {} x values, {} y values",
            x.len(),
            y.len()
        )));
    }
    Ok(x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect())
}

/// Parameters for a straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Parameters for a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    /// X coordinate of the center.
    pub x: f64,
    /// Y coordinate of the center.
    pub y: f64,
    /// Radius.
    pub radius: f64,
}

/// Parameters for an axis-aligned rectangle given by opposite corners.
///
/// Also used for clip regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl RectParams {
    pub fn is_finite(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Parameters for a text placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextParams<'a> {
    /// X coordinate of the anchor.
    pub x: f64,
    /// Y coordinate of the anchor (baseline).
    pub y: f64,
    /// Text to place.
    pub text: &'a str,
    /// Rotation in degrees, counterclockwise.
    pub rot: f64,
    /// Horizontal adjustment: 0 left, 0.5 centered, 1 right.
    pub hadj: f64,
}
