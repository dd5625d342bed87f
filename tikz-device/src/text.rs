//! Text metrics and text markup helpers.

/// Metrics of a typeset text run, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Height above the baseline.
    pub ascent: f64,
    /// Depth below the baseline.
    pub descent: f64,
    /// Advance width.
    pub width: f64,
}

impl TextMetrics {
    pub const ZERO: TextMetrics = TextMetrics {
        ascent: 0.0,
        descent: 0.0,
        width: 0.0,
    };
}

/// Node anchor for a horizontal adjustment.
///
/// Only left, centered and right placements exist in the markup; other
/// adjustments snap to the nearest of the three.
pub(crate) fn anchor_for_hadj(hadj: f64) -> &'static str {
    if hadj < 0.25 {
        "base west"
    } else if hadj < 0.75 {
        "base"
    } else {
        "base east"
    }
}

/// Escape characters that have a special meaning in TeX.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn contains_multibyte_chars(text: &str) -> bool {
    !text.is_ascii()
}
