//! Error types for tikz-device.

use thiserror::Error;

/// Result type alias using TikzError.
pub type TikzResult<T> = Result<T, TikzError>;

/// Errors that can occur while generating TikZ output.
#[derive(Debug, Error)]
pub enum TikzError {
    /// A drawing call arrived while the device was not open.
    #[error("Device is not open")]
    DeviceNotOpen,

    /// `open` was called on a device that is already open.
    #[error("Device is already open")]
    AlreadyOpen,

    /// Degenerate or malformed path data.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The external typesetter failed or produced an unusable log.
    #[error("Text metrics unavailable: {0}")]
    MetricsUnavailable(String),

    /// Output stream failure. Aborts the device session.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid device dimensions (must be positive and finite).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// Failed to parse device options.
    #[error("Invalid device options: {0}")]
    OptionsError(String),
}

impl TikzError {
    /// Whether the error only affects the current call.
    ///
    /// Geometry and metrics failures leave the device usable; everything else
    /// ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TikzError::InvalidGeometry(_) | TikzError::MetricsUnavailable(_)
        )
    }
}

impl From<serde_json::Error> for TikzError {
    fn from(err: serde_json::Error) -> Self {
        TikzError::OptionsError(err.to_string())
    }
}
