//! Path, fill and stroke operations for Canvas2dContext.

use super::Canvas2dContext;
use tiny_skia::{Color, Transform};

impl Canvas2dContext {
    // --- Path building ---

    /// Start a new path, discarding the current one.
    pub fn begin_path(&mut self) {
        self.path_builder = tiny_skia::PathBuilder::new();
    }

    /// Begin a new subpath at the given point.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.path_builder.move_to(x, y);
    }

    /// Add a straight line to the current subpath.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.path_builder.line_to(x, y);
    }

    /// Add a full circle as a closed subpath.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32) {
        if radius.is_finite() && radius > 0.0 {
            self.path_builder.push_circle(cx, cy, radius);
        }
    }

    // --- Drawing operations ---

    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        // Clone the path builder so we don't consume it - stroke() may follow
        if let Some(path) = self.path_builder.clone().finish() {
            let paint = self.paint(self.state.fill_style);
            self.pixmap.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Stroke the current path with the current line width.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        if let Some(path) = self.path_builder.clone().finish() {
            let stroke = tiny_skia::Stroke {
                width: self.state.line_width,
                ..Default::default()
            };
            let paint = self.paint(self.state.stroke_style);
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", x, y, width, height);
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) {
            let paint = self.paint(self.state.fill_style);
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Build an anti-aliased paint for `color` with global alpha applied.
    pub(crate) fn paint(&self, color: Color) -> tiny_skia::Paint<'static> {
        let mut color = color;
        if self.state.global_alpha < 1.0 {
            color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
        }
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(color);
        paint
    }
}

#[cfg(test)]
mod tests {
    use crate::{Canvas2dContext, FontConfig};

    fn blank(width: u32, height: u32) -> Canvas2dContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        Canvas2dContext::with_config(width, height, config).unwrap()
    }

    #[test]
    fn test_fill_rect_pixels() {
        let mut ctx = blank(100, 100);
        ctx.set_fill_style("#ff0000").unwrap();
        ctx.fill_rect(10.0, 10.0, 50.0, 50.0);

        assert_eq!(ctx.pixel(30, 30), Some([255, 0, 0, 255]));
        assert_eq!(ctx.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_line() {
        let mut ctx = blank(100, 100);
        ctx.set_stroke_style("#0000ff").unwrap();
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(10.0, 50.0);
        ctx.line_to(90.0, 50.0);
        ctx.stroke();

        let [r, g, b, a] = ctx.pixel(50, 50).unwrap();
        assert_eq!((r, g), (0, 0));
        assert!(b > 200 && a > 200);
        assert_eq!(ctx.pixel(50, 10).unwrap()[3], 0);
    }

    #[test]
    fn test_fill_circle_with_global_alpha() {
        let mut ctx = blank(100, 100);
        ctx.set_fill_style("#ffffff").unwrap();
        ctx.fill_rect(0.0, 0.0, 100.0, 100.0);

        ctx.save();
        ctx.set_global_alpha(0.5);
        ctx.set_fill_style("#000000").unwrap();
        ctx.begin_path();
        ctx.circle(50.0, 50.0, 20.0);
        ctx.fill();
        ctx.restore();

        // Half-transparent black over white is mid grey, still opaque
        let [r, _, _, a] = ctx.pixel(50, 50).unwrap();
        assert!((120..=135).contains(&r), "got {r}");
        assert_eq!(a, 255);
        // Outside the disk stays white
        assert_eq!(ctx.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_degenerate_shapes_are_ignored() {
        let mut ctx = blank(20, 20);
        ctx.fill_rect(0.0, 0.0, 0.0, 10.0);
        ctx.begin_path();
        ctx.circle(10.0, 10.0, -3.0);
        ctx.fill();
        ctx.stroke();
        assert!(ctx.pixels().iter().all(|&b| b == 0));
    }
}
