//! Color declarations and inline style attributes.
//!
//! Colors are referenced by two fixed names, one per role. A shape first gets
//! `\definecolor` statements for every role whose color changed since the
//! last declaration in the current scope, then an attribute list that refers
//! to those names.

use std::fmt::Write as _;

use crate::color::Color;
use crate::drawing_state::{GraphicsParams, StyleState};
use crate::style::{LineJoin, LineType, PaintOp, DEFAULT_MITER_LIMIT};

/// Name of the stroke/text color.
pub const DRAW_COLOR: &str = "drawColor";
/// Name of the fill color.
pub const FILL_COLOR: &str = "fillColor";

/// Stroke width in points of a unit line width.
pub const UNIT_LINE_WIDTH_PT: f64 = 0.4;

const COLOR_PRECISION: usize = 2;

/// Emits color declarations and attribute lists.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StyleEmitter {
    precision: usize,
}

impl StyleEmitter {
    pub(crate) fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Write `\definecolor` statements for the active roles of `op` whose
    /// color differs from the last one declared in this scope.
    pub(crate) fn declare_colors(
        &self,
        state: &mut StyleState,
        op: PaintOp,
        params: &GraphicsParams,
        out: &mut String,
    ) {
        if op.strokes() && state.last_draw_color != Some(params.col) {
            write_definecolor(out, DRAW_COLOR, params.col);
            state.last_draw_color = Some(params.col);
        }
        if op.fills() && state.last_fill_color != Some(params.fill) {
            write_definecolor(out, FILL_COLOR, params.fill);
            state.last_fill_color = Some(params.fill);
        }
    }

    /// Attributes for a path statement.
    pub(crate) fn path_attributes(&self, op: PaintOp, params: &GraphicsParams) -> Vec<String> {
        let mut attrs = Vec::new();

        if op.strokes() {
            attrs.push(format!("draw={}", DRAW_COLOR));
            self.push_line_style(&mut attrs, params);
            if params.col.is_translucent() {
                attrs.push(format!(
                    "draw opacity={:.*}",
                    COLOR_PRECISION,
                    params.col.opacity()
                ));
            }
        }

        if op.fills() {
            attrs.push(format!("fill={}", FILL_COLOR));
            if params.fill.is_translucent() {
                attrs.push(format!(
                    "fill opacity={:.*}",
                    COLOR_PRECISION,
                    params.fill.opacity()
                ));
            }
        }

        attrs
    }

    /// Attributes for a text node. Text uses the stroke color.
    pub(crate) fn text_attributes(&self, params: &GraphicsParams) -> Vec<String> {
        let mut attrs = vec![format!("text={}", DRAW_COLOR)];
        if params.col.is_translucent() {
            attrs.push(format!(
                "text opacity={:.*}",
                COLOR_PRECISION,
                params.col.opacity()
            ));
        }
        attrs
    }

    fn push_line_style(&self, attrs: &mut Vec<String>, params: &GraphicsParams) {
        let style = params.line_style();
        let p = self.precision;

        if style.width != 1.0 {
            attrs.push(format!(
                "line width={:.*}pt",
                p,
                style.width * UNIT_LINE_WIDTH_PT
            ));
        }

        if let LineType::Dashed(runs) = &style.line_type {
            if style.width > 0.0 {
                let mut pattern = String::from("dash pattern=");
                for (i, run) in runs.iter().enumerate() {
                    if i > 0 {
                        pattern.push(' ');
                    }
                    let kind = if i % 2 == 0 { "on" } else { "off" };
                    let _ = write!(pattern, "{} {:.*}pt", kind, p, f64::from(*run) * style.width);
                }
                attrs.push(pattern);
            }
        }

        match style.join {
            LineJoin::Round => attrs.push("line join=round".to_string()),
            LineJoin::Bevel => attrs.push("line join=bevel".to_string()),
            LineJoin::Miter => {
                if style.miter_limit != DEFAULT_MITER_LIMIT {
                    attrs.push(format!("miter limit={:.*}", p, style.miter_limit));
                }
            }
        }

        if let Some(cap) = style.cap.tikz_name() {
            attrs.push(format!("line cap={}", cap));
        }
    }
}

fn write_definecolor(out: &mut String, name: &str, color: Color) {
    let (r, g, b, _) = color.decompose();
    let _ = writeln!(
        out,
        "\\definecolor{{{}}}{{rgb}}{{{:.*},{:.*},{:.*}}}",
        name, COLOR_PRECISION, r, COLOR_PRECISION, g, COLOR_PRECISION, b
    );
}
