//! Per-character jitter and drawing.

use crate::error::HandscriptResult;
use crate::layout::Placement;
use crate::random::RandomSource;
use handscript_canvas2d::{Canvas2dContext, Transform};

/// Random perturbation of a single character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphJitter {
    /// Rotation in radians.
    pub angle: f32,
    /// Vertical shift in pixels, positive is down.
    pub offset_y: f32,
    pub scale: f32,
}

impl GlyphJitter {
    pub const NONE: GlyphJitter = GlyphJitter {
        angle: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Draw a jitter from `rng`. Each component spans `messiness` times
    /// 0.4 rad, 10 px and 0.1 respectively, centred on no change.
    pub fn sample(rng: &mut dyn RandomSource, messiness: f32) -> Self {
        if messiness == 0.0 {
            return Self::NONE;
        }
        let m = messiness as f64;
        let angle = (rng.next_unit() - 0.5) * m * 0.4;
        let offset_y = (rng.next_unit() - 0.5) * m * 10.0;
        let scale = 1.0 + (rng.next_unit() - 0.5) * m * 0.1;
        Self {
            angle: angle as f32,
            offset_y: offset_y as f32,
            scale: scale as f32,
        }
    }

    /// Transform placing a glyph drawn at the origin onto `(x, baseline_y)`:
    /// translate, then rotate, then scale.
    pub fn transform(&self, x: f32, baseline_y: f32) -> Transform {
        let translate = Transform::from_translate(x, baseline_y + self.offset_y);
        if *self == Self::NONE {
            return translate;
        }
        let (sin, cos) = self.angle.sin_cos();
        translate
            .pre_concat(Transform::from_row(cos, sin, -sin, cos, 0.0, 0.0))
            .pre_scale(self.scale, self.scale)
    }
}

/// One character as drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f32,
    /// Baseline before jitter.
    pub y: f32,
    pub jitter: GlyphJitter,
}

/// Draw `placement` one character at a time, each with its own jitter.
///
/// The canvas fill color and font must already be set. Whitespace advances
/// the pen without drawing.
pub fn draw_placement(
    canvas: &mut Canvas2dContext,
    placement: &Placement<'_>,
    messiness: f32,
    rng: &mut dyn RandomSource,
    glyphs: &mut Vec<PlacedGlyph>,
) -> HandscriptResult<()> {
    let mut x = placement.x;
    let mut buf = [0u8; 4];
    for ch in placement.text.chars() {
        let text = ch.encode_utf8(&mut buf);
        let advance = canvas.measure_text(text)?.width;
        if !ch.is_whitespace() {
            let jitter = GlyphJitter::sample(rng, messiness);
            canvas.fill_text_with_transform(text, jitter.transform(x, placement.y));
            glyphs.push(PlacedGlyph {
                ch,
                x,
                y: placement.y,
                jitter,
            });
        }
        x += advance;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use handscript_canvas2d::FontConfig;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_zero_messiness_is_pure_translation() {
        let mut rng = SeededRandom::new(11);
        for _ in 0..10 {
            let jitter = GlyphJitter::sample(&mut rng, 0.0);
            assert_eq!(jitter, GlyphJitter::NONE);
            assert_eq!(
                jitter.transform(12.0, 30.0),
                Transform::from_translate(12.0, 30.0)
            );
        }
    }

    #[test]
    fn test_bounds_scale_with_messiness() {
        let mut rng = SeededRandom::new(5);
        for messiness in [0.1f32, 0.5, 1.0] {
            for _ in 0..500 {
                let j = GlyphJitter::sample(&mut rng, messiness);
                assert!(j.angle.abs() <= 0.2 * messiness + 1e-6);
                assert!(j.offset_y.abs() <= 5.0 * messiness + 1e-6);
                assert!((j.scale - 1.0).abs() <= 0.05 * messiness + 1e-6);
            }
        }
    }

    #[test]
    fn test_midpoint_draw_is_no_change() {
        let jitter = GlyphJitter::sample(&mut Constant(0.5), 1.0);
        assert_eq!(jitter, GlyphJitter::NONE);
    }

    #[test]
    fn test_extreme_draws() {
        let low = GlyphJitter::sample(&mut Constant(0.0), 1.0);
        assert!((low.angle + 0.2).abs() < 1e-6);
        assert!((low.offset_y + 5.0).abs() < 1e-6);
        assert!((low.scale - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_transform_order() {
        let jitter = GlyphJitter {
            angle: std::f32::consts::FRAC_PI_2,
            offset_y: 3.0,
            scale: 2.0,
        };
        let ts = jitter.transform(10.0, 20.0);
        // Local (1, 0) scales to (2, 0), rotates to (0, 2), then moves
        let mut points = [tiny_skia::Point::from_xy(1.0, 0.0)];
        ts.map_points(&mut points);
        assert!((points[0].x - 10.0).abs() < 1e-4);
        assert!((points[0].y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_whitespace_is_not_drawn() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        let mut canvas = Canvas2dContext::with_config(100, 100, config).unwrap();
        let placement = Placement {
            text: "a b",
            x: 10.0,
            y: 30.0,
            line: 0,
        };
        let mut glyphs = Vec::new();
        draw_placement(
            &mut canvas,
            &placement,
            0.5,
            &mut SeededRandom::new(1),
            &mut glyphs,
        )
        .unwrap();
        let chars: Vec<char> = glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, vec!['a', 'b']);
        assert!(glyphs.iter().all(|g| g.y == 30.0));
    }
}
