//! Pixel readback and PNG export for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::Canvas2dResult;

impl Canvas2dContext {
    /// Raw premultiplied RGBA bytes of the whole canvas.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA value of a single pixel, or None when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Get straight-alpha image data for the whole canvas.
    pub fn get_image_data(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect()
    }

    /// Encode the canvas as PNG, tagging it with `ppi` pixels per inch (default 72).
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.get_image_data())?;
        }
        log::debug!(target: "canvas", "encoded {}x{} PNG ({} bytes)", self.width, self.height, buf.len());
        Ok(buf)
    }
}
