//! TikZ device implementation.

mod drawing;
mod page;
mod text_rendering;

use crate::color::Color;
use crate::config::DeviceOptions;
use crate::drawing_state::{GraphicsParams, StyleState};
use crate::error::{TikzError, TikzResult};
use crate::metrics::{LatexTypesetter, TextMetricsResolver, Typesetter};
use crate::path::PathEmitter;
use crate::scope::ScopeManager;
use crate::style_emitter::StyleEmitter;
use crate::writer::DocumentWriter;

/// Points per inch as TeX counts them.
pub const POINTS_PER_INCH: f64 = 72.27;

/// Lifecycle of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Closed,
    Open,
}

/// Counters for a device session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Pages opened so far.
    pub pages: usize,
    /// Typesetter runs made for text metrics.
    pub string_width_calls: usize,
}

/// Device extent in points as `(left, right, bottom, top)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSize {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Graphics device that turns drawing calls into TikZ markup.
///
/// Calls are turned into statements and written immediately, in call order.
/// Colors are declared by name before the statements that use them, and
/// only when they changed since the last declaration in the current scope.
pub struct TikzDevice {
    pub(crate) options: DeviceOptions,
    state: DeviceState,
    pub(crate) writer: Option<DocumentWriter>,
    pub(crate) scopes: ScopeManager,
    pub(crate) style: StyleState,
    /// Parameters of the most recent call.
    pub(crate) current: GraphicsParams,
    pub(crate) style_emitter: StyleEmitter,
    pub(crate) path_emitter: PathEmitter,
    pub(crate) metrics: TextMetricsResolver,
    pub(crate) width_pt: f64,
    pub(crate) height_pt: f64,
    fg: Color,
    bg: Color,
    output: Option<String>,
}

impl TikzDevice {
    /// Create a device that measures text with the configured LaTeX program.
    pub fn new(options: DeviceOptions) -> TikzResult<Self> {
        let typesetter = LatexTypesetter::new(&options.metrics, options.engine);
        Self::with_typesetter(options, Box::new(typesetter))
    }

    /// Create a device with a custom typesetter for text metrics.
    pub fn with_typesetter(
        options: DeviceOptions,
        typesetter: Box<dyn Typesetter>,
    ) -> TikzResult<Self> {
        let (width, height) = (options.width, options.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(TikzError::InvalidDimensions { width, height });
        }
        if !(options.base_size.is_finite() && options.base_size > 0.0) {
            return Err(TikzError::OptionsError(format!(
                "base_size must be positive, got {}",
                options.base_size
            )));
        }

        let fg = Color::parse(&options.fg)?;
        let bg = Color::parse(&options.bg)?;
        let preamble = format!("{}{}", options.document_declaration, options.packages);

        Ok(Self {
            state: DeviceState::Closed,
            writer: None,
            scopes: ScopeManager::new(options.bare_bones),
            style: StyleState::default(),
            current: GraphicsParams {
                col: fg,
                fill: bg,
                ps: options.base_size,
                ..Default::default()
            },
            style_emitter: StyleEmitter::new(options.precision),
            path_emitter: PathEmitter::new(options.precision),
            metrics: TextMetricsResolver::new(typesetter, preamble),
            width_pt: width * POINTS_PER_INCH,
            height_pt: height * POINTS_PER_INCH,
            fg,
            bg,
            output: None,
            options,
        })
    }

    /// Open the output stream, write the preamble, and open the first page.
    ///
    /// If anything fails, the output file is removed and the device stays
    /// closed.
    pub fn open(&mut self) -> TikzResult<()> {
        if self.state == DeviceState::Open {
            return Err(TikzError::AlreadyOpen);
        }
        log::debug!(
            target: "tikz",
            "open {:?} ({} x {} pt)",
            self.options.output,
            self.width_pt,
            self.height_pt
        );

        let mut writer = DocumentWriter::create(&self.options.output)?;
        self.scopes = ScopeManager::new(self.options.bare_bones);
        self.style.reset();
        self.metrics.reset_invocations();
        self.output = None;

        let started = writer
            .begin_document(&self.options)
            .and_then(|_| self.scopes.open_initial_page(&mut writer, &mut self.style));
        if let Err(err) = started {
            writer.discard();
            return Err(err);
        }

        self.writer = Some(writer);
        self.state = DeviceState::Open;
        Ok(())
    }

    /// Close open scopes, write the footer, and release the output stream.
    pub fn close(&mut self) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(target: "tikz", "close");
        let mut writer = self.writer.take().ok_or(TikzError::DeviceNotOpen)?;
        self.state = DeviceState::Closed;

        let result = self
            .scopes
            .close(&mut writer, &mut self.style)
            .and_then(|_| writer.end_document(&self.options));
        let finished = writer.finish();
        self.output = writer.take_memory();
        result.and(finished)
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DeviceState::Open
    }

    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    /// Device extent in points.
    pub fn size(&self) -> DeviceSize {
        DeviceSize {
            left: 0.0,
            right: self.width_pt,
            bottom: 0.0,
            top: self.height_pt,
        }
    }

    /// Default parameters for a fresh page: foreground stroke on the
    /// background fill.
    pub fn default_params(&self) -> GraphicsParams {
        GraphicsParams {
            col: self.fg,
            fill: self.bg,
            ps: self.options.base_size,
            ..Default::default()
        }
    }

    /// Parameters of the most recent drawing call.
    pub fn current_params(&self) -> &GraphicsParams {
        &self.current
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            pages: self.scopes.pages_opened(),
            string_width_calls: self.metrics.invocations(),
        }
    }

    /// Take the document written to an in-memory target after `close`.
    pub fn take_output(&mut self) -> Option<String> {
        self.output.take()
    }

    /// Insert raw lines into the output at the current position.
    pub fn annotate<S: AsRef<str>>(&mut self, lines: &[S]) -> TikzResult<()> {
        self.ensure_open()?;
        log::debug!(target: "tikz", "annotate {} line(s)", lines.len());
        let mut out = String::new();
        for line in lines {
            out.push_str(line.as_ref());
            out.push('\n');
        }
        self.scopes.mark_drawn();
        self.emit(&out)
    }

    pub(crate) fn ensure_open(&self) -> TikzResult<()> {
        match self.state {
            DeviceState::Open => Ok(()),
            DeviceState::Closed => Err(TikzError::DeviceNotOpen),
        }
    }

    /// Write `text` to the output, aborting the session on I/O failure.
    pub(crate) fn emit(&mut self, text: &str) -> TikzResult<()> {
        let result = match self.writer.as_mut() {
            Some(writer) => writer.write(text),
            None => Err(TikzError::DeviceNotOpen),
        };
        self.check_io(result)
    }

    /// Abort the session when `result` is an output failure.
    pub(crate) fn check_io<T>(&mut self, result: TikzResult<T>) -> TikzResult<T> {
        if let Err(TikzError::Io(err)) = &result {
            log::error!(target: "tikz", "output failed, closing device: {}", err);
            if let Some(mut writer) = self.writer.take() {
                let _ = writer.finish();
                self.output = writer.take_memory();
            }
            self.state = DeviceState::Closed;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LineParams;
    use crate::text::TextMetrics;

    /// Typesetter that is never expected to run.
    struct NoTypesetter;

    impl Typesetter for NoTypesetter {
        fn typeset(&mut self, _source: &str) -> TikzResult<String> {
            Err(TikzError::MetricsUnavailable("no typesetter".to_string()))
        }
    }

    fn device(options: DeviceOptions) -> TikzDevice {
        TikzDevice::with_typesetter(options, Box::new(NoTypesetter)).unwrap()
    }

    #[test]
    fn test_new_device_defaults() {
        let dev = device(DeviceOptions::in_memory());
        assert_eq!(dev.state(), DeviceState::Closed);
        assert_eq!(dev.default_params().col, Color::BLACK);
        assert_eq!(dev.default_params().fill, Color::WHITE);
        assert_eq!(dev.stats(), DocumentStats::default());
    }

    #[test]
    fn test_size_in_points() {
        let dev = device(DeviceOptions {
            width: 2.0,
            height: 1.0,
            ..DeviceOptions::in_memory()
        });
        let size = dev.size();
        assert_eq!(size.left, 0.0);
        assert_eq!(size.bottom, 0.0);
        assert!((size.right - 144.54).abs() < 1e-9);
        assert!((size.top - 72.27).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_dimensions() {
        for (width, height) in [(0.0, 1.0), (1.0, -2.0), (f64::NAN, 1.0)] {
            let result = TikzDevice::with_typesetter(
                DeviceOptions {
                    width,
                    height,
                    ..DeviceOptions::in_memory()
                },
                Box::new(NoTypesetter),
            );
            assert!(matches!(result, Err(TikzError::InvalidDimensions { .. })));
        }
    }

    #[test]
    fn test_invalid_base_size() {
        for base_size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = TikzDevice::with_typesetter(
                DeviceOptions {
                    base_size,
                    ..DeviceOptions::in_memory()
                },
                Box::new(NoTypesetter),
            );
            assert!(matches!(result, Err(TikzError::OptionsError(_))));
        }
    }

    #[test]
    fn test_invalid_color() {
        let result = TikzDevice::with_typesetter(
            DeviceOptions {
                bg: "not-a-color".to_string(),
                ..DeviceOptions::in_memory()
            },
            Box::new(NoTypesetter),
        );
        assert!(matches!(result, Err(TikzError::ColorParseError(_))));
    }

    #[test]
    fn test_lifecycle() {
        let mut dev = device(DeviceOptions::in_memory());
        assert!(matches!(dev.close(), Err(TikzError::DeviceNotOpen)));

        dev.open().unwrap();
        assert!(dev.is_open());
        assert!(matches!(dev.open(), Err(TikzError::AlreadyOpen)));

        dev.close().unwrap();
        assert!(!dev.is_open());
        let out = dev.take_output().unwrap();
        assert!(out.starts_with("% Created by tikz-device"));
        assert!(out.contains("\\begin{tikzpicture}[x=1pt,y=1pt]\n\\end{tikzpicture}\n"));
        assert_eq!(dev.stats().pages, 1);
    }

    #[test]
    fn test_annotate() {
        let mut dev = device(DeviceOptions::in_memory());
        assert!(matches!(
            dev.annotate(&["% x"]),
            Err(TikzError::DeviceNotOpen)
        ));
        dev.open().unwrap();
        dev.annotate(&["\\coordinate (a) at (1,1);", "% note"]).unwrap();
        dev.close().unwrap();
        let out = dev.take_output().unwrap();
        assert!(out.contains("\\coordinate (a) at (1,1);\n% note\n\\end{tikzpicture}"));
    }

    #[test]
    fn test_metrics_failure_is_recoverable() {
        let mut dev = device(DeviceOptions::in_memory());
        dev.open().unwrap();
        let params = dev.default_params();
        let err = dev.measure_text("abc", &params).unwrap_err();
        assert!(err.is_recoverable());
        assert!(dev.is_open());
        assert_eq!(dev.str_width("abc", &params).unwrap(), 0.0);
        assert_eq!(dev.metric_info('M', &params).unwrap(), TextMetrics::ZERO);
    }

    #[test]
    fn test_output_failure_closes_device() {
        let mut dev = device(DeviceOptions::in_memory());
        dev.open().unwrap();
        dev.writer = Some(DocumentWriter::failing(0));

        let line = LineParams {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        let params = dev.default_params();
        assert!(matches!(dev.line(&line, &params), Err(TikzError::Io(_))));
        assert!(!dev.is_open());
        assert!(matches!(
            dev.line(&line, &params),
            Err(TikzError::DeviceNotOpen)
        ));
        assert!(matches!(dev.close(), Err(TikzError::DeviceNotOpen)));
    }

    #[test]
    fn test_failed_close_reports_error() {
        let mut dev = device(DeviceOptions::in_memory());
        dev.open().unwrap();
        dev.writer = Some(DocumentWriter::failing(0));

        assert!(matches!(dev.close(), Err(TikzError::Io(_))));
        assert!(!dev.is_open());
        assert!(matches!(dev.close(), Err(TikzError::DeviceNotOpen)));
        dev.open().unwrap();
        assert!(dev.is_open());
    }

    #[test]
    fn test_reopen_resets_stats() {
        let mut dev = device(DeviceOptions::in_memory());
        dev.open().unwrap();
        let params = dev.default_params();
        dev.str_width("abc", &params).unwrap();
        assert_eq!(dev.stats().string_width_calls, 1);
        dev.close().unwrap();

        dev.open().unwrap();
        assert_eq!(
            dev.stats(),
            DocumentStats {
                pages: 1,
                string_width_calls: 0,
            }
        );
    }
}
