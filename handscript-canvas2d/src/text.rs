//! Text measurement and font resolution using cosmic-text.

use crate::font_config::has_family;
use crate::font_parser::ParsedFont;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Text metrics returned by measure_text().
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
    /// Distance from the alphabetic baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from the alphabetic baseline to the bottom of the line box.
    pub descent: f32,
}

/// A family selection that borrows nothing from the canvas state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedFamily {
    Named(String),
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl ResolvedFamily {
    pub(crate) fn as_family(&self) -> Family<'_> {
        match self {
            ResolvedFamily::Named(name) => Family::Name(name),
            ResolvedFamily::Serif => Family::Serif,
            ResolvedFamily::SansSerif => Family::SansSerif,
            ResolvedFamily::Monospace => Family::Monospace,
            ResolvedFamily::Cursive => Family::Cursive,
            ResolvedFamily::Fantasy => Family::Fantasy,
        }
    }
}

/// Pick the first family in the list the font database can serve.
///
/// Generic keywords always resolve. A list of only unknown names falls back to
/// sans-serif, the way a browser silently substitutes its default font.
pub(crate) fn resolve_family(font_system: &FontSystem, families: &[String]) -> ResolvedFamily {
    for family in families {
        let generic = match family.to_ascii_lowercase().as_str() {
            "serif" => Some(ResolvedFamily::Serif),
            "sans-serif" => Some(ResolvedFamily::SansSerif),
            "monospace" => Some(ResolvedFamily::Monospace),
            "cursive" => Some(ResolvedFamily::Cursive),
            "fantasy" => Some(ResolvedFamily::Fantasy),
            _ => None,
        };
        if let Some(generic) = generic {
            return generic;
        }
        if has_family(font_system.db(), family) {
            return ResolvedFamily::Named(family.clone());
        }
        log::debug!(target: "canvas", "font family {:?} not available", family);
    }
    ResolvedFamily::SansSerif
}

/// Shape `text` into a single unwrapped line.
pub(crate) fn shape_line(
    font_system: &mut FontSystem,
    text: &str,
    font: &ParsedFont,
    family: &ResolvedFamily,
) -> Buffer {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let attrs = Attrs::new()
        .family(family.as_family())
        .weight(font.weight)
        .style(font.style)
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Measure the extent of a shaped line.
pub(crate) fn line_metrics(buffer: &Buffer, font: &ParsedFont) -> TextMetrics {
    let mut width: f32 = 0.0;
    let mut ascent: f32 = 0.0;
    let mut descent: f32 = 0.0;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        ascent = ascent.max(run.line_y - run.line_top);
        descent = descent.max((run.line_top + run.line_height) - run.line_y);
    }
    if ascent == 0.0 && descent == 0.0 {
        ascent = font.size_px * 0.8;
        descent = font.size_px * 0.2;
    }
    TextMetrics {
        width,
        ascent,
        descent,
    }
}
