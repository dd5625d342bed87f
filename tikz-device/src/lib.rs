//! TikZ graphics device.
//!
//! Turns a stream of drawing calls (lines, circles, rectangles, polylines,
//! polygons, multi-contour paths, text, clipping and pages) into TikZ
//! markup. The generated statements are written straight to the output in
//! call order, so the device keeps very little state:
//! - the page and clip scopes currently open
//! - the last color declared for stroke and for fill in the current scope
//! - a cache of text measurements
//!
//! Text cannot be measured without typesetting it, so width queries run an
//! external LaTeX program through a [`Typesetter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tikz_device::{DeviceOptions, LineParams, TikzDevice};
//!
//! let mut dev = TikzDevice::new(DeviceOptions::in_memory())?;
//! dev.open()?;
//! let params = dev.default_params();
//! dev.new_page(&params)?;
//! dev.line(&LineParams { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0 }, &params)?;
//! dev.close()?;
//! let tex = dev.take_output();
//! ```

mod color;
mod config;
mod device;
mod drawing_state;
mod error;
mod geometry;
mod metrics;
mod path;
mod scope;
mod style;
mod style_emitter;
mod text;
mod writer;

// Re-export public API
pub use color::Color;
pub use config::{
    DeviceOptions, Engine, MetricsConfig, OutputTarget, DEFAULT_DOCUMENT_DECLARATION,
    DEFAULT_FOOTER, DEFAULT_PACKAGES,
};
pub use device::{DeviceSize, DeviceState, DocumentStats, TikzDevice, POINTS_PER_INCH};
pub use drawing_state::{GraphicsParams, LineStyle, StyleState};
pub use error::{TikzError, TikzResult};
pub use geometry::{points_from_xy, CircleParams, LineParams, Point, RectParams, TextParams};
pub use metrics::{parse_log, LatexTypesetter, TextMetricsResolver, Typesetter};
pub use style::{FillRule, FontFace, LineCap, LineJoin, LineType, PaintOp};
pub use style_emitter::{DRAW_COLOR, FILL_COLOR, UNIT_LINE_WIDTH_PT};
pub use text::{sanitize, TextMetrics};
