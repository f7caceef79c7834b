//! The render entry point: paper, then text.

use crate::config::RenderConfig;
use crate::error::{HandscriptError, HandscriptResult};
use crate::glyph::{draw_placement, PlacedGlyph};
use crate::layout::{layout_tokens, PageGeometry};
use crate::paper::{paint_background, PaperStyles, Ruling};
use crate::random::{RandomSource, ThreadRandom};
use crate::tokenize::tokenize;
use handscript_canvas2d::{
    parse_font, Canvas2dContext, Canvas2dError, Color, ResolvedFontConfig, TextBaseline,
};

/// What a render call drew.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Every visible character in drawing order.
    pub glyphs: Vec<PlacedGlyph>,
    pub lines: usize,
    /// Text ran past the bottom of the page and was dropped.
    pub truncated: bool,
    /// The ink actually used, after the blueprint override.
    pub ink: Color,
}

/// Renders pages using a fixed paper style table.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    styles: PaperStyles,
}

impl Renderer {
    pub fn new(styles: PaperStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &PaperStyles {
        &self.styles
    }

    /// Render with the thread-local random generator.
    pub fn render(
        &self,
        target: &mut Canvas2dContext,
        text: &str,
        config: &RenderConfig,
    ) -> HandscriptResult<RenderSummary> {
        self.render_with(target, text, config, &mut ThreadRandom)
    }

    /// Paint the paper, then write `text` onto it.
    ///
    /// Colors are validated before anything is drawn, so a failed call leaves
    /// the target untouched.
    pub fn render_with(
        &self,
        target: &mut Canvas2dContext,
        text: &str,
        config: &RenderConfig,
        rng: &mut dyn RandomSource,
    ) -> HandscriptResult<RenderSummary> {
        let style = self.styles.get(config.paper_type);
        for color in [&style.background, &style.line_color] {
            handscript_canvas2d::parse_color(color)
                .map_err(|_| HandscriptError::InvalidColor(color.clone()))?;
        }
        let ink = if config.paper_type.forces_white_ink() {
            Color::WHITE
        } else {
            config.ink()?
        };
        let font_css = config.font_css();
        parse_font(&font_css)?;

        log::info!(
            target: "handscript",
            "rendering {} chars on {} paper ({}x{})",
            text.chars().count(),
            config.paper_type,
            target.width(),
            target.height()
        );

        let line_spacing = config.line_spacing();
        paint_background(
            target,
            config.paper_type,
            style,
            &Ruling {
                margins: config.margins,
                font_size: config.font_size,
                line_spacing,
            },
            rng,
        )?;

        let mut summary = RenderSummary {
            glyphs: Vec::new(),
            lines: 0,
            truncated: false,
            ink,
        };

        if !(config.font_size.is_finite() && config.font_size > 0.0) {
            log::warn!(
                target: "handscript",
                "font size {} cannot be drawn, leaving page blank",
                config.font_size
            );
            return Ok(summary);
        }
        if !target.has_fonts() {
            log::warn!(target: "handscript", "no fonts loaded, text will not be visible");
        }

        target.save();
        if let Err(err) = target.set_font(&font_css) {
            target.restore();
            return Err(err.into());
        }
        target.set_fill_color(ink);
        target.set_global_alpha(1.0);
        target.set_text_baseline(TextBaseline::Bottom);

        let geometry = PageGeometry {
            width: target.width() as f32,
            height: target.height() as f32,
            margins: config.margins,
            font_size: config.font_size,
            line_spacing,
        };
        let tokens = tokenize(text);
        // Measurement errors only come from bad font strings, which set_font already rejected
        let layout = layout_tokens(&tokens, &geometry, |piece| {
            target.measure_text(piece).map(|m| m.width).unwrap_or(0.0)
        });

        let messiness = if config.messiness.is_finite() {
            config.messiness
        } else {
            0.0
        };
        let mut result = Ok(());
        for placement in &layout.placements {
            result = draw_placement(target, placement, messiness, rng, &mut summary.glyphs);
            if result.is_err() {
                break;
            }
        }
        target.restore();
        result?;

        summary.lines = layout.lines;
        summary.truncated = layout.truncated;
        log::debug!(
            target: "handscript",
            "drew {} glyphs on {} lines",
            summary.glyphs.len(),
            summary.lines
        );
        Ok(summary)
    }
}

/// Render with the default paper styles and the thread-local random generator.
pub fn render(
    target: &mut Canvas2dContext,
    text: &str,
    config: &RenderConfig,
) -> HandscriptResult<RenderSummary> {
    Renderer::default().render(target, text, config)
}

/// Allocate a target, loading system fonts.
pub fn new_target(width: u32, height: u32) -> HandscriptResult<Canvas2dContext> {
    Canvas2dContext::new(width, height).map_err(map_target_error)
}

/// Allocate a target backed by an already resolved font database.
pub fn new_target_with_fonts(
    width: u32,
    height: u32,
    fonts: &ResolvedFontConfig,
) -> HandscriptResult<Canvas2dContext> {
    Canvas2dContext::with_resolved(width, height, fonts).map_err(map_target_error)
}

fn map_target_error(err: Canvas2dError) -> HandscriptError {
    match err {
        Canvas2dError::InvalidDimensions { width, height } => {
            HandscriptError::InvalidTarget { width, height }
        }
        other => HandscriptError::Canvas(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::{PaperStyle, PaperType};
    use crate::random::SeededRandom;
    use handscript_canvas2d::{FontConfig, ParsedFont};

    fn fontless(width: u32, height: u32) -> Canvas2dContext {
        let fonts = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        }
        .resolve();
        new_target_with_fonts(width, height, &fonts).unwrap()
    }

    #[test]
    fn test_zero_dimension_is_invalid_target() {
        let fonts = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        }
        .resolve();
        assert!(matches!(
            new_target_with_fonts(0, 100, &fonts),
            Err(HandscriptError::InvalidTarget {
                width: 0,
                height: 100
            })
        ));
    }

    #[test]
    fn test_blueprint_overrides_ink() {
        let mut target = fontless(100, 100);
        let config = RenderConfig {
            paper_type: PaperType::Blueprint,
            ink_color: "red".to_string(),
            ..RenderConfig::default()
        };
        let summary = Renderer::default()
            .render_with(&mut target, "hi", &config, &mut SeededRandom::new(1))
            .unwrap();
        assert_eq!(summary.ink, Color::WHITE);
    }

    #[test]
    fn test_bad_ink_leaves_target_untouched() {
        let mut target = fontless(40, 40);
        let before = target.pixels().to_vec();
        let config = RenderConfig {
            ink_color: "not a color".to_string(),
            ..RenderConfig::default()
        };
        let err = render(&mut target, "hi", &config).unwrap_err();
        assert!(matches!(err, HandscriptError::InvalidColor(_)));
        assert_eq!(target.pixels(), before.as_slice());
    }

    #[test]
    fn test_custom_style_table() {
        let styles = PaperStyles::from_entries(PaperType::ALL.into_iter().map(|paper| {
            (paper, PaperStyle::new("Mint", "#00ff00", "transparent"))
        }))
        .unwrap();
        let mut target = fontless(20, 20);
        let config = RenderConfig {
            paper_type: PaperType::Plain,
            ..RenderConfig::default()
        };
        Renderer::new(styles)
            .render_with(&mut target, "", &config, &mut SeededRandom::new(1))
            .unwrap();
        assert_eq!(target.pixel(10, 10), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_bad_style_color_is_rejected() {
        let styles = PaperStyles::from_entries(PaperType::ALL.into_iter().map(|paper| {
            (paper, PaperStyle::new("Broken", "chartreuse-ish", "transparent"))
        }))
        .unwrap();
        let mut target = fontless(20, 20);
        let err = Renderer::new(styles)
            .render_with(
                &mut target,
                "x",
                &RenderConfig::default(),
                &mut SeededRandom::new(1),
            )
            .unwrap_err();
        assert!(matches!(err, HandscriptError::InvalidColor(c) if c == "chartreuse-ish"));
    }

    #[test]
    fn test_render_leaves_drawing_state_balanced() {
        let mut target = fontless(80, 80);
        let config = RenderConfig {
            paper_type: PaperType::Vintage,
            ..RenderConfig::default()
        };
        render(&mut target, "some words\nand more", &config).unwrap();

        let state = target.state();
        assert_eq!(state.font, ParsedFont::default());
        assert_eq!(state.fill_style, Color::BLACK);
        assert_eq!(state.global_alpha, 1.0);
        assert_eq!(state.text_baseline, TextBaseline::default());

        // A restore past the render's own save must be a no-op
        target.restore();
        assert_eq!(target.state().font, ParsedFont::default());
    }

    #[test]
    fn test_degenerate_font_size_draws_paper_only() {
        let mut target = fontless(60, 60);
        let config = RenderConfig {
            font_size: 0.0,
            ..RenderConfig::default()
        };
        let summary = render(&mut target, "hello", &config).unwrap();
        assert!(summary.glyphs.is_empty());
        assert!(target.pixels().chunks(4).all(|px| px[3] == 255));
    }
}
