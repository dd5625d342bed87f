//! Graphics parameters supplied with each drawing call, and the style state
//! tracked across calls.

use crate::color::Color;
use crate::error::{TikzError, TikzResult};
use crate::style::{FontFace, LineCap, LineJoin, LineType};

/// Graphics parameters the host passes with every drawing call.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsParams {
    /// Stroke (and text) color.
    pub col: Color,
    /// Fill color.
    pub fill: Color,
    /// Line width as a multiple of the unit width.
    pub lwd: f64,
    /// Line type (dash pattern).
    pub lty: LineType,
    /// Line cap style.
    pub lend: LineCap,
    /// Line join style.
    pub ljoin: LineJoin,
    /// Miter limit, used with `LineJoin::Miter`.
    pub lmitre: f64,
    /// Character expansion.
    pub cex: f64,
    /// Point size.
    pub ps: f64,
    /// Font face.
    pub fontface: FontFace,
}

impl Default for GraphicsParams {
    fn default() -> Self {
        Self {
            col: Color::BLACK,
            fill: Color::TRANSPARENT,
            lwd: 1.0,
            lty: LineType::Solid,
            lend: LineCap::default(),
            ljoin: LineJoin::default(),
            lmitre: 10.0,
            cex: 1.0,
            ps: 10.0,
            fontface: FontFace::Plain,
        }
    }
}

impl GraphicsParams {
    /// The line style part of the parameters.
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            line_type: self.lty.clone(),
            width: self.lwd,
            join: self.ljoin,
            cap: self.lend,
            miter_limit: self.lmitre,
        }
    }

    /// Reject numbers that cannot be written as valid markup.
    ///
    /// Widths must be finite and not negative, the miter limit finite and at
    /// least 1, and the font sizes finite and positive.
    pub fn validate(&self) -> TikzResult<()> {
        if !(self.lwd.is_finite() && self.lwd >= 0.0) {
            return Err(TikzError::InvalidGeometry(format!(
                "invalid line width {}",
                self.lwd
            )));
        }
        if !(self.lmitre.is_finite() && self.lmitre >= 1.0) {
            return Err(TikzError::InvalidGeometry(format!(
                "invalid miter limit {}",
                self.lmitre
            )));
        }
        if !(self.cex.is_finite() && self.cex > 0.0 && self.ps.is_finite() && self.ps > 0.0) {
            return Err(TikzError::InvalidGeometry(format!(
                "invalid font size cex={} ps={}",
                self.cex, self.ps
            )));
        }
        Ok(())
    }

    /// Effective font scale relative to the document base size.
    pub fn font_scale(&self, base_size: f64) -> f64 {
        self.cex * self.ps / base_size
    }
}

/// Stroke styling derived from a [`GraphicsParams`] snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub line_type: LineType,
    pub width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
    pub miter_limit: f64,
}

/// Colors declared so far in the current scope.
///
/// `None` means nothing has been declared for that role since the scope
/// opened. Declarations do not survive a scope boundary in the output, so the
/// state is reset on every page or clip transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    pub last_draw_color: Option<Color>,
    pub last_fill_color: Option<Color>,
}

impl StyleState {
    /// Forget every declaration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_reset(&self) -> bool {
        self.last_draw_color.is_none() && self.last_fill_color.is_none()
    }
}
