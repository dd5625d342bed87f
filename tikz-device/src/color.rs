//! Packed RGBA colors and their decomposition into TikZ color values.

use crate::error::{TikzError, TikzResult};

/// A color packed into 32 bits as `0xAABBGGRR`.
///
/// Red lives in the low byte and alpha in the high byte, the layout host
/// plotting systems hand to graphics devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0);

    /// Create a color from a packed `0xAABBGGRR` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// Create a color from explicit channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse a CSS color string (`"white"`, `"#ff000080"`, `"rgb(0 0 255)"`, ...).
    pub fn parse(s: &str) -> TikzResult<Self> {
        let parsed = csscolorparser::parse(s)
            .map_err(|e| TikzError::ColorParseError(format!("{}: {}", s, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::rgba(r, g, b, a))
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Split into normalized `(r, g, b, alpha)`, each in `[0, 1]`.
    pub fn decompose(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
            f64::from(self.alpha()) / 255.0,
        )
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        f64::from(self.alpha()) / 255.0
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Partially transparent: needs an explicit opacity attribute.
    pub const fn is_translucent(self) -> bool {
        !self.is_opaque() && !self.is_transparent()
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::from_packed(packed)
    }
}
