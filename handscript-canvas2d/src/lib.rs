//! Canvas 2D style raster target using tiny-skia and cosmic-text.
//!
//! This crate provides the drawing surface the handwriting engine paints into:
//! a fixed-size RGBA pixmap with a small subset of the Canvas 2D API. It uses:
//! - `tiny-skia` for fills, strokes and alpha blending
//! - `cosmic-text` for text shaping, measurement and glyph outlines
//! - `fontdb` for the font database (system fonts, font directories, raw font data)
//!
//! # Example
//!
//! ```rust,ignore
//! use handscript_canvas2d::Canvas2dContext;
//!
//! let mut ctx = Canvas2dContext::new(400, 300)?;
//! ctx.set_fill_style("#fdfbf7")?;
//! ctx.fill_rect(0.0, 0.0, 400.0, 300.0);
//! ctx.set_font("24px \"Caveat\", cursive")?;
//! ctx.fill_text("hello", 40.0, 64.0);
//! let png_data = ctx.to_png(None)?;
//! ```

mod context;
mod drawing_state;
mod error;
mod font_config;
mod font_parser;
mod style;
mod text;

// Re-export public API
pub use context::Canvas2dContext;
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use font_config::{CustomFont, FontConfig, GenericFamilyMap, ResolvedFontConfig};
pub use font_parser::{parse_font, ParsedFont};
pub use style::{parse_color, TextBaseline};
pub use text::TextMetrics;

// Callers build per-glyph transforms and colors with the same types the canvas uses.
pub use tiny_skia::{Color, Transform};
