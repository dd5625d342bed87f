//! Style types and enums for drawing calls.

use crate::color::Color;

/// Line cap style for stroke operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Rounded edge extending past the endpoint.
    #[default]
    Round,
    /// Flat edge at the endpoint.
    Butt,
    /// Square edge extending past the endpoint.
    Square,
}

impl LineCap {
    /// TikZ name, or `None` for the markup default (butt).
    pub(crate) fn tikz_name(self) -> Option<&'static str> {
        match self {
            LineCap::Round => Some("round"),
            LineCap::Butt => None,
            LineCap::Square => Some("rect"),
        }
    }
}

/// Line join style for stroke operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Rounded corner.
    #[default]
    Round,
    /// Sharp corner, limited by the miter limit.
    Miter,
    /// Beveled corner.
    Bevel,
}

/// Miter limit TikZ assumes when none is given.
pub(crate) const DEFAULT_MITER_LIMIT: f64 = 10.0;

/// Most runs a packed dash code can hold.
const MAX_DASH_RUNS: usize = 8;

/// Line type decoded from a packed dash code.
///
/// The code stores one run length per nibble, least significant first, and
/// ends at the first zero nibble. Runs alternate on/off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LineType {
    /// Continuous line (code 0).
    #[default]
    Solid,
    /// No line at all (code -1).
    Blank,
    /// Dash pattern with run lengths in `1..=15`.
    Dashed(Vec<u8>),
}

impl LineType {
    /// Decode a packed dash code.
    pub fn from_code(code: i32) -> Self {
        if code == -1 {
            return LineType::Blank;
        }
        if code == 0 {
            return LineType::Solid;
        }

        let mut bits = code as u32;
        let mut runs = Vec::with_capacity(MAX_DASH_RUNS);
        while runs.len() < MAX_DASH_RUNS && bits & 0xF != 0 {
            runs.push((bits & 0xF) as u8);
            bits >>= 4;
        }

        if runs.is_empty() {
            LineType::Solid
        } else {
            LineType::Dashed(runs)
        }
    }

    /// Re-encode into a packed dash code.
    pub fn code(&self) -> i32 {
        match self {
            LineType::Solid => 0,
            LineType::Blank => -1,
            LineType::Dashed(runs) => runs
                .iter()
                .take(MAX_DASH_RUNS)
                .enumerate()
                .fold(0u32, |acc, (i, run)| acc | (u32::from(run & 0xF) << (4 * i)))
                as i32,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, LineType::Blank)
    }
}

impl From<i32> for LineType {
    fn from(code: i32) -> Self {
        LineType::from_code(code)
    }
}

/// Font face index as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
    /// Symbol font. Emitted without a font switch.
    Symbol,
}

impl FontFace {
    /// Map the host's 1-based face index; unknown indices fall back to plain.
    pub fn from_index(index: i32) -> Self {
        match index {
            2 => FontFace::Bold,
            3 => FontFace::Italic,
            4 => FontFace::BoldItalic,
            5 => FontFace::Symbol,
            _ => FontFace::Plain,
        }
    }

    /// LaTeX font switch placed before the text.
    pub(crate) fn latex_switch(self) -> &'static str {
        match self {
            FontFace::Plain | FontFace::Symbol => "",
            FontFace::Bold => "\\bfseries ",
            FontFace::Italic => "\\itshape ",
            FontFace::BoldItalic => "\\bfseries\\itshape ",
        }
    }
}

/// Fill rule for multi-contour paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Non-zero winding rule (default).
    #[default]
    NonZero,
    /// Even-odd rule.
    EvenOdd,
}

/// Which paint components an upcoming shape uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    None,
    Stroke,
    Fill,
    Both,
}

impl PaintOp {
    /// Classify from the stroke and fill colors.
    ///
    /// A transparent color contributes nothing; a blank line type disables
    /// the stroke regardless of its color.
    pub fn classify(stroke: Color, fill: Color, line_type: &LineType) -> Self {
        let stroke_active = !stroke.is_transparent() && !line_type.is_blank();
        let fill_active = !fill.is_transparent();
        match (stroke_active, fill_active) {
            (false, false) => PaintOp::None,
            (true, false) => PaintOp::Stroke,
            (false, true) => PaintOp::Fill,
            (true, true) => PaintOp::Both,
        }
    }

    pub fn strokes(self) -> bool {
        matches!(self, PaintOp::Stroke | PaintOp::Both)
    }

    pub fn fills(self) -> bool {
        matches!(self, PaintOp::Fill | PaintOp::Both)
    }

    /// Drop the fill component, for open paths.
    pub fn without_fill(self) -> Self {
        match self {
            PaintOp::Both | PaintOp::Stroke => PaintOp::Stroke,
            PaintOp::Fill | PaintOp::None => PaintOp::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_line_type_special_codes() {
        assert_eq!(LineType::from_code(0), LineType::Solid);
        assert_eq!(LineType::from_code(-1), LineType::Blank);
    }

    #[rstest]
    #[case(0x44, vec![4, 4])]
    #[case(0x13, vec![3, 1])]
    #[case(0x1343, vec![3, 4, 3, 1])]
    #[case(0x37, vec![7, 3])]
    #[case(0x2262, vec![2, 6, 2, 2])]
    fn test_line_type_dash_decoding(#[case] code: i32, #[case] runs: Vec<u8>) {
        assert_eq!(LineType::from_code(code), LineType::Dashed(runs));
        assert_eq!(LineType::from_code(code).code(), code);
    }

    #[test]
    fn test_line_type_stops_at_zero_nibble() {
        // Nibbles above the first zero are ignored
        assert_eq!(LineType::from_code(0x4044), LineType::Dashed(vec![4, 4]));
    }

    #[test]
    fn test_line_type_at_most_eight_runs() {
        let code = 0x1111_1111_u32 as i32;
        match LineType::from_code(code) {
            LineType::Dashed(runs) => assert_eq!(runs.len(), 8),
            other => panic!("expected dash pattern, got {:?}", other),
        }
    }

    #[rstest]
    #[case(Color::BLACK, Color::TRANSPARENT, LineType::Solid, PaintOp::Stroke)]
    #[case(Color::TRANSPARENT, Color::WHITE, LineType::Solid, PaintOp::Fill)]
    #[case(Color::BLACK, Color::WHITE, LineType::Solid, PaintOp::Both)]
    #[case(Color::TRANSPARENT, Color::TRANSPARENT, LineType::Solid, PaintOp::None)]
    #[case(Color::BLACK, Color::WHITE, LineType::Blank, PaintOp::Fill)]
    #[case(Color::BLACK, Color::TRANSPARENT, LineType::Blank, PaintOp::None)]
    #[case(Color::rgba(0, 0, 0, 1), Color::rgba(0, 0, 0, 1), LineType::Solid, PaintOp::Both)]
    fn test_paint_op_classification(
        #[case] stroke: Color,
        #[case] fill: Color,
        #[case] line_type: LineType,
        #[case] expected: PaintOp,
    ) {
        assert_eq!(PaintOp::classify(stroke, fill, &line_type), expected);
    }

    #[test]
    fn test_paint_op_without_fill() {
        assert_eq!(PaintOp::Both.without_fill(), PaintOp::Stroke);
        assert_eq!(PaintOp::Fill.without_fill(), PaintOp::None);
        assert_eq!(PaintOp::Stroke.without_fill(), PaintOp::Stroke);
        assert_eq!(PaintOp::None.without_fill(), PaintOp::None);
    }

    #[test]
    fn test_font_face_index() {
        assert_eq!(FontFace::from_index(1), FontFace::Plain);
        assert_eq!(FontFace::from_index(2), FontFace::Bold);
        assert_eq!(FontFace::from_index(4), FontFace::BoldItalic);
        assert_eq!(FontFace::from_index(42), FontFace::Plain);
    }
}
