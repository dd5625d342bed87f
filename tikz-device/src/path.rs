//! Coordinate formatting for path statements.
//!
//! Each method renders the geometric part of a `\path` statement. Styling is
//! added by the caller through [`crate::style_emitter`].

use crate::error::{TikzError, TikzResult};
use crate::geometry::{CircleParams, LineParams, Point, RectParams};

/// Separator placed between consecutive vertices.
const SEGMENT: &str = " --\n\t";

/// Renders primitives with a fixed number of fractional digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathEmitter {
    precision: usize,
}

impl PathEmitter {
    pub(crate) fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub(crate) fn num(&self, v: f64) -> String {
        format!("{:.*}", self.precision, v)
    }

    pub(crate) fn point(&self, p: Point) -> String {
        format!("({:.*},{:.*})", self.precision, p.x, self.precision, p.y)
    }

    pub(crate) fn line(&self, line: &LineParams) -> TikzResult<String> {
        let a = Point::new(line.x1, line.y1);
        let b = Point::new(line.x2, line.y2);
        ensure_finite(&[a, b])?;
        Ok(format!("{} -- {}", self.point(a), self.point(b)))
    }

    pub(crate) fn circle(&self, circle: &CircleParams) -> TikzResult<String> {
        let center = Point::new(circle.x, circle.y);
        ensure_finite(&[center])?;
        if !circle.radius.is_finite() || circle.radius < 0.0 {
            return Err(TikzError::InvalidGeometry(format!(
                "circle radius must be finite and non-negative, got {}",
                circle.radius
            )));
        }
        Ok(format!(
            "{} circle ({})",
            self.point(center),
            self.num(circle.radius)
        ))
    }

    pub(crate) fn rectangle(&self, rect: &RectParams) -> TikzResult<String> {
        if !rect.is_finite() {
            return Err(TikzError::InvalidGeometry(
                "rectangle corners must be finite".to_string(),
            ));
        }
        Ok(format!(
            "{} rectangle {}",
            self.point(Point::new(rect.x0, rect.y0)),
            self.point(Point::new(rect.x1, rect.y1))
        ))
    }

    /// Open path through every vertex: `n - 1` segments, never closed.
    pub(crate) fn polyline(&self, points: &[Point]) -> TikzResult<String> {
        if points.len() < 2 {
            return Err(TikzError::InvalidGeometry(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            )));
        }
        ensure_finite(points)?;
        Ok(self.join(points))
    }

    /// Closed path: `n - 1` segments plus the closing `-- cycle`.
    pub(crate) fn polygon(&self, points: &[Point]) -> TikzResult<String> {
        if points.len() < 3 {
            return Err(TikzError::InvalidGeometry(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        ensure_finite(points)?;
        Ok(format!("{}{}cycle", self.join(points), SEGMENT))
    }

    /// Several closed contours in one path, for fills with holes.
    pub(crate) fn contours(&self, contours: &[Vec<Point>]) -> TikzResult<String> {
        if contours.is_empty() {
            return Err(TikzError::InvalidGeometry(
                "path needs at least one contour".to_string(),
            ));
        }
        let parts = contours
            .iter()
            .map(|contour| self.polygon(contour))
            .collect::<TikzResult<Vec<_>>>()?;
        Ok(parts.join("\n\t"))
    }

    fn join(&self, points: &[Point]) -> String {
        points
            .iter()
            .map(|p| self.point(*p))
            .collect::<Vec<_>>()
            .join(SEGMENT)
    }
}

fn ensure_finite(points: &[Point]) -> TikzResult<()> {
    match points.iter().find(|p| !p.is_finite()) {
        Some(p) => Err(TikzError::InvalidGeometry(format!(
            "non-finite coordinate ({}, {})",
            p.x, p.y
        ))),
        None => Ok(()),
    }
}

/// Assemble a complete path statement.
pub(crate) fn path_statement(attributes: &[String], body: &str) -> String {
    format!("\\path[{}] {};\n", attributes.join(","), body)
}
