//! Text placement and measurement for TikzDevice.

use std::borrow::Cow;

use super::TikzDevice;
use crate::config::Engine;
use crate::drawing_state::GraphicsParams;
use crate::error::{TikzError, TikzResult};
use crate::geometry::{Point, TextParams};
use crate::style::PaintOp;
use crate::text::{anchor_for_hadj, contains_multibyte_chars, sanitize, TextMetrics};

impl TikzDevice {
    /// Place a text node with its baseline anchor at `(x, y)`.
    ///
    /// Text in a fully transparent color is dropped.
    pub fn text(&mut self, text: &TextParams<'_>, params: &GraphicsParams) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(
            target: "tikz",
            "text \"{}\" at ({}, {}) rot={} hadj={}",
            text.text,
            text.x,
            text.y,
            text.rot,
            text.hadj
        );
        params.validate()?;
        self.current = params.clone();
        let anchor = Point::new(text.x, text.y);
        if !anchor.is_finite() || !text.rot.is_finite() || !text.hadj.is_finite() {
            return Err(TikzError::InvalidGeometry(format!(
                "non-finite text placement ({}, {}) rot={} hadj={}",
                text.x, text.y, text.rot, text.hadj
            )));
        }
        if params.col.is_transparent() {
            log::debug!(target: "tikz", "transparent text, skipped");
            return Ok(());
        }

        let content = self.prepare_text(text.text);
        let p = self.options.precision;

        let mut out = String::new();
        self.style_emitter
            .declare_colors(&mut self.style, PaintOp::Stroke, params, &mut out);

        let mut attrs = self.style_emitter.text_attributes(params);
        attrs.push(format!("anchor={}", anchor_for_hadj(text.hadj)));
        attrs.push("inner sep=0pt".to_string());
        attrs.push("outer sep=0pt".to_string());
        attrs.push(format!(
            "scale={:.*}",
            p,
            params.font_scale(self.options.base_size)
        ));
        if text.rot != 0.0 {
            attrs.push(format!("rotate={:.*}", p, text.rot));
        }

        out.push_str(&format!(
            "\\node[{}] at {} {{{}{}}};\n",
            attrs.join(","),
            self.path_emitter.point(anchor),
            params.fontface.latex_switch(),
            content
        ));

        self.scopes.mark_drawn();
        self.emit(&out)
    }

    /// Ascent, descent and width of `text` as it would be placed by
    /// [`TikzDevice::text`].
    ///
    /// Fails with [`TikzError::MetricsUnavailable`] when the typesetter cannot
    /// produce a measurement; the device stays open.
    pub fn measure_text(&mut self, text: &str, params: &GraphicsParams) -> TikzResult<TextMetrics> {
        self.ensure_open()?;
        params.validate()?;
        let content = self.prepare_text(text).into_owned();
        let scale = params.font_scale(self.options.base_size);
        self.metrics.measure(&content, scale, params.fontface)
    }

    /// Width of `text`, or zero when it cannot be measured.
    pub fn str_width(&mut self, text: &str, params: &GraphicsParams) -> TikzResult<f64> {
        match self.measure_text(text, params) {
            Ok(metrics) => Ok(metrics.width),
            Err(err) if err.is_recoverable() => {
                log::warn!(target: "tikz", "cannot measure \"{}\": {}", text, err);
                Ok(0.0)
            }
            Err(err) => Err(err),
        }
    }

    /// Metrics of a single character, or zeros when it cannot be measured.
    pub fn metric_info(&mut self, ch: char, params: &GraphicsParams) -> TikzResult<TextMetrics> {
        let mut buf = [0u8; 4];
        match self.measure_text(ch.encode_utf8(&mut buf), params) {
            Ok(metrics) => Ok(metrics),
            Err(err) if err.is_recoverable() => {
                log::warn!(target: "tikz", "cannot measure '{}': {}", ch, err);
                Ok(TextMetrics::ZERO)
            }
            Err(err) => Err(err),
        }
    }

    /// Text as it goes into the markup.
    fn prepare_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.engine == Engine::PdfTex && contains_multibyte_chars(text) {
            log::warn!(
                target: "tikz",
                "\"{}\" contains multibyte characters, which pdfTeX may not typeset",
                text
            );
        }
        if self.options.sanitize {
            Cow::Owned(sanitize(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}
