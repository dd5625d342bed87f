//! Page and clip operations for TikzDevice.

use super::TikzDevice;
use crate::drawing_state::GraphicsParams;
use crate::error::{TikzError, TikzResult};
use crate::geometry::RectParams;
use crate::path::path_statement;
use crate::style::{LineType, PaintOp};

impl TikzDevice {
    /// Start a new page.
    ///
    /// Closes any open clip and page scopes, opens a fresh page, declares the
    /// page's initial colors and writes the bounding box, painted with the
    /// background when `params.fill` is visible.
    pub fn new_page(&mut self, params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        params.validate()?;
        self.current = params.clone();

        let writer = self.writer.as_mut().ok_or(TikzError::DeviceNotOpen)?;
        let transition = self.scopes.new_page(writer, &mut self.style);
        let transition = self.check_io(transition)?;
        log::debug!(target: "tikz", "new page ({:?})", transition);

        let op = PaintOp::classify(params.col, params.fill, &LineType::Solid);
        let mut out = String::new();
        self.style_emitter
            .declare_colors(&mut self.style, op, params, &mut out);

        let mut attrs = vec!["use as bounding box".to_string()];
        if op.fills() {
            attrs.extend(self.style_emitter.path_attributes(PaintOp::Fill, params));
        }
        let body = self.path_emitter.rectangle(&RectParams {
            x0: 0.0,
            y0: 0.0,
            x1: self.width_pt,
            y1: self.height_pt,
        })?;
        out.push_str(&path_statement(&attrs, &body));
        self.emit(&out)
    }

    /// Restrict further drawing to a rectangle, replacing any previous clip.
    pub fn clip(&mut self, rect: &RectParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "clip ({}, {}) ({}, {})",
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y1
        );
        let body = self.path_emitter.rectangle(rect)?;
        let statement = path_statement(&["clip".to_string()], &body);

        let writer = self.writer.as_mut().ok_or(TikzError::DeviceNotOpen)?;
        let opened = self.scopes.clip(writer, &mut self.style, &statement);
        self.check_io(opened)?;

        // Colors declared before the clip are out of scope now
        let params = self.current.clone();
        let op = PaintOp::classify(params.col, params.fill, &LineType::Solid);
        let mut out = String::new();
        self.style_emitter
            .declare_colors(&mut self.style, op, &params, &mut out);
        self.emit(&out)
    }
}
