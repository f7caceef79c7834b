//! Style types for canvas operations.

use crate::error::{Canvas2dError, Canvas2dResult};

/// Text baseline for text rendering.
///
/// The anchor point passed to `fill_text` sits on this line of the em box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Top of the em square.
    Top,
    /// Middle of the em square.
    Middle,
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Bottom of the em square.
    Bottom,
}

impl TextBaseline {
    /// Vertical offset from the anchor point to the alphabetic baseline.
    pub(crate) fn y_offset(self, ascent: f32, descent: f32) -> f32 {
        match self {
            TextBaseline::Top => ascent,
            TextBaseline::Middle => ascent / 2.0 - descent / 2.0,
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Bottom => -descent,
        }
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
///
/// Accepts anything `csscolorparser` understands: hex, `rgb()`, named colors
/// and `transparent`.
pub fn parse_color(s: &str) -> Canvas2dResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| Canvas2dError::ColorParseError(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    tiny_skia::Color::from_rgba(r, g, b, a)
        .ok_or_else(|| Canvas2dError::ColorParseError(format!("{}: out of range", s)))
}
