//! Text rendering operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::Canvas2dResult;
use crate::font_parser::parse_font;
use crate::style::TextBaseline;
use crate::text::{line_metrics, resolve_family, shape_line, TextMetrics};
use cosmic_text::Command;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Set the font from a CSS font string.
    ///
    /// A non-positive or non-finite size leaves the current font unchanged.
    pub fn set_font(&mut self, font: &str) -> Canvas2dResult<()> {
        let parsed = parse_font(font)?;
        if parsed.size_px.is_finite() && parsed.size_px > 0.0 {
            self.state.font = parsed;
        } else {
            log::debug!(target: "canvas", "ignoring font with degenerate size: {}", font);
        }
        Ok(())
    }

    /// Whether any font face is loaded. Without one nothing can be shaped, so
    /// text measures as zero width and draws no ink.
    pub fn has_fonts(&self) -> bool {
        self.font_system.db().faces().next().is_some()
    }

    /// Set the text baseline.
    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    /// Measure text with the current font.
    pub fn measure_text(&mut self, text: &str) -> Canvas2dResult<TextMetrics> {
        if !self.has_fonts() {
            return Ok(TextMetrics {
                width: 0.0,
                ascent: self.state.font.size_px * 0.8,
                descent: self.state.font.size_px * 0.2,
            });
        }
        let family = resolve_family(&self.font_system, &self.state.font.families);
        let buffer = shape_line(&mut self.font_system, text, &self.state.font, &family);
        Ok(line_metrics(&buffer, &self.state.font))
    }

    /// Fill text with its anchor at (x, y).
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        self.fill_text_with_transform(text, Transform::from_translate(x, y));
    }

    /// Fill text with its anchor at the local origin of `transform`.
    ///
    /// The transform applies to this call only; the drawing state is not
    /// touched, so consecutive calls never compound.
    pub fn fill_text_with_transform(&mut self, text: &str, transform: Transform) {
        if text.is_empty() || !self.has_fonts() {
            return;
        }
        let font = self.state.font.clone();
        let family = resolve_family(&self.font_system, &font.families);
        let buffer = shape_line(&mut self.font_system, text, &font, &family);
        let metrics = line_metrics(&buffer, &font);
        let base_y = self
            .state
            .text_baseline
            .y_offset(metrics.ascent, metrics.descent);

        let paint = self.paint(self.state.fill_style);

        // Render each glyph as a vector path
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((0.0, base_y), 1.0);

                let glyph_x = glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines have Y pointing up, screen has Y pointing down
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    let glyph_transform =
                        Transform::from_translate(glyph_x, glyph_y).post_concat(transform);
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        tiny_skia::FillRule::Winding,
                        glyph_transform,
                        None,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Canvas2dContext, FontConfig, TextBaseline};

    fn fontless(width: u32, height: u32) -> Canvas2dContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        Canvas2dContext::with_config(width, height, config).unwrap()
    }

    #[test]
    fn test_set_font_ignores_degenerate_size() {
        let mut ctx = fontless(10, 10);
        ctx.set_font("24px \"Caveat\", cursive").unwrap();
        ctx.set_font("0px Caveat").unwrap();
        assert_eq!(ctx.state().font.size_px, 24.0);
        assert!(ctx.set_font("Caveat").is_err());
        assert_eq!(ctx.state().font.families, vec!["Caveat", "cursive"]);
    }

    #[test]
    fn test_measure_without_fonts() {
        let mut ctx = fontless(10, 10);
        ctx.set_font("20px sans-serif").unwrap();
        assert!(!ctx.has_fonts());
        let metrics = ctx.measure_text("hello").unwrap();
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.ascent, 16.0);
    }

    #[test]
    fn test_text_without_fonts_draws_nothing() {
        let mut ctx = fontless(50, 50);
        ctx.set_font("20px sans-serif").unwrap();
        ctx.set_text_baseline(TextBaseline::Bottom);
        ctx.fill_text("abc", 5.0, 30.0);
        assert!(ctx.pixels().iter().all(|&b| b == 0));
    }
}
