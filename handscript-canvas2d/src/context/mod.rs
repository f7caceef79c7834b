//! Canvas 2D rendering context implementation.

mod drawing;
mod image_ops;
mod text_rendering;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::font_config::{font_config_to_fontdb, FontConfig, ResolvedFontConfig};
use crate::style::parse_color;
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::{Color, Pixmap};

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// Canvas 2D rendering context.
///
/// Owns its pixmap and font system, so distinct contexts can be drawn on from
/// different threads.
pub struct Canvas2dContext {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer.
    pub(crate) pixmap: Pixmap,
    /// Font system for text rendering.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph outlines.
    pub(crate) swash_cache: SwashCache,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<DrawingState>,
    /// Current path builder.
    pub(crate) path_builder: tiny_skia::PathBuilder,
}

impl Canvas2dContext {
    /// Create a new Canvas2dContext with the specified dimensions.
    ///
    /// Uses `FontConfig::default()` which loads system fonts.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        Self::with_config(width, height, FontConfig::default())
    }

    /// Create a new Canvas2dContext with the specified dimensions and font configuration.
    pub fn with_config(width: u32, height: u32, config: FontConfig) -> Canvas2dResult<Self> {
        Self::check_dimensions(width, height)?;
        Self::new_internal(width, height, font_config_to_fontdb(&config))
    }

    /// Create a new Canvas2dContext using a pre-resolved font configuration.
    ///
    /// Clones the cached font database instead of scanning fonts again.
    pub fn with_resolved(
        width: u32,
        height: u32,
        resolved: &ResolvedFontConfig,
    ) -> Canvas2dResult<Self> {
        Self::check_dimensions(width, height)?;
        Self::new_internal(width, height, resolved.fontdb.clone())
    }

    fn check_dimensions(width: u32, height: u32) -> Canvas2dResult<()> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Canvas2dError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    fn new_internal(width: u32, height: u32, font_db: fontdb::Database) -> Canvas2dResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(Canvas2dError::InvalidDimensions { width, height })?;
        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), font_db);

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path_builder: tiny_skia::PathBuilder::new(),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current drawing state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the previously saved drawing state.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    // --- Style setters ---

    /// Set the fill style from a CSS color string.
    pub fn set_fill_style(&mut self, style: &str) -> Canvas2dResult<()> {
        self.state.fill_style = parse_color(style)?;
        Ok(())
    }

    /// Set the fill style from an already parsed color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill_style = color;
    }

    /// Set the stroke style from a CSS color string.
    pub fn set_stroke_style(&mut self, style: &str) -> Canvas2dResult<()> {
        self.state.stroke_style = parse_color(style)?;
        Ok(())
    }

    /// Set the line width. Non-finite or non-positive values are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    /// Set the global alpha. Non-finite values or values outside [0.0, 1.0] are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }
}
