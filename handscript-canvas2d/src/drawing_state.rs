//! Drawing state that can be saved and restored.

use crate::font_parser::ParsedFont;
use crate::style::TextBaseline;
use tiny_skia::Color;

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Current fill color.
    pub fill_style: Color,
    /// Current stroke color.
    pub stroke_style: Color,
    /// Current line width.
    pub line_width: f32,
    /// Current font specification.
    pub font: ParsedFont,
    /// Current text baseline.
    pub text_baseline: TextBaseline,
    /// Current global alpha.
    pub global_alpha: f32,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: Color::BLACK,
            stroke_style: Color::BLACK,
            line_width: 1.0,
            font: ParsedFont::default(),
            text_baseline: TextBaseline::default(),
            global_alpha: 1.0,
        }
    }
}
