//! Shape operations for TikzDevice.

use super::TikzDevice;
use crate::drawing_state::GraphicsParams;
use crate::error::TikzResult;
use crate::geometry::{CircleParams, LineParams, Point, RectParams};
use crate::path::path_statement;
use crate::style::{FillRule, PaintOp};

impl TikzDevice {
    /// Draw a straight line segment. Lines are never filled.
    pub fn line(&mut self, line: &LineParams, params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "line ({}, {}) -> ({}, {})",
            line.x1,
            line.y1,
            line.x2,
            line.y2
        );
        let body = self.path_emitter.line(line)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty).without_fill();
        self.draw_shape(op, params, &body, None)
    }

    pub fn circle(&mut self, circle: &CircleParams, params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "circle ({}, {}) r={}",
            circle.x,
            circle.y,
            circle.radius
        );
        let body = self.path_emitter.circle(circle)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty);
        self.draw_shape(op, params, &body, None)
    }

    pub fn rect(&mut self, rect: &RectParams, params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "rect ({}, {}) ({}, {})",
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y1
        );
        let body = self.path_emitter.rectangle(rect)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty);
        self.draw_shape(op, params, &body, None)
    }

    /// Draw an open path through `points`. Needs at least two points.
    pub fn polyline(&mut self, points: &[Point], params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(target: "tikz", "polyline n={}", points.len());
        let body = self.path_emitter.polyline(points)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty).without_fill();
        self.draw_shape(op, params, &body, None)
    }

    /// Draw a closed path through `points`. Needs at least three points.
    pub fn polygon(&mut self, points: &[Point], params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(target: "tikz", "polygon n={}", points.len());
        let body = self.path_emitter.polygon(points)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty);
        self.draw_shape(op, params, &body, None)
    }

    /// Draw several closed contours as one path.
    pub fn path(
        &mut self,
        contours: &[Vec<Point>],
        rule: FillRule,
        params: &GraphicsParams,
    ) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "path contours={} rule={:?}",
            contours.len(),
            rule
        );
        let body = self.path_emitter.contours(contours)?;
        let op = PaintOp::classify(params.col, params.fill, &params.lty);
        let rule_attr = match rule {
            FillRule::EvenOdd if op.fills() => Some("even odd rule"),
            _ => None,
        };
        self.draw_shape(op, params, &body, rule_attr)
    }

    /// Declare changed colors, then write the styled path statement.
    fn draw_shape(
        &mut self,
        op: PaintOp,
        params: &GraphicsParams,
        body: &str,
        extra: Option<&str>,
    ) -> TikzResult<()> {
        params.validate()?;
        self.current = params.clone();
        if op == PaintOp::None {
            log::debug!(target: "tikz", "nothing to paint, skipped");
            return Ok(());
        }

        let mut out = String::new();
        self.style_emitter
            .declare_colors(&mut self.style, op, params, &mut out);
        let mut attrs = self.style_emitter.path_attributes(op, params);
        if let Some(extra) = extra {
            attrs.push(extra.to_string());
        }
        out.push_str(&path_statement(&attrs, body));

        self.scopes.mark_drawn();
        self.emit(&out)
    }
}
