#![allow(clippy::uninlined_format_args)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod export;
pub mod glyph;
pub mod layout;
pub mod paper;
pub mod random;
pub mod render;
pub mod tokenize;

pub use config::{FontPreset, InkPreset, RenderConfig, FONT_PRESETS};
pub use error::{HandscriptError, HandscriptResult};
pub use export::{encode_png, export_image, DEFAULT_EXPORT_NAME};
pub use glyph::{GlyphJitter, PlacedGlyph};
pub use paper::{PaperStyle, PaperStyles, PaperType};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use render::{new_target, new_target_with_fonts, render, RenderSummary, Renderer};

// Targets and font configuration come from the canvas crate.
pub use handscript_canvas2d;
