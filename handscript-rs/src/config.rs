//! Render configuration and the built-in ink and font presets.

use crate::error::{HandscriptError, HandscriptResult};
use crate::paper::PaperType;
use handscript_canvas2d::{parse_color, Color};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one render call.
///
/// Field names serialize in camelCase, and any missing field takes its
/// default, so partial JSON documents load fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// CSS family list, e.g. `"Caveat", cursive`.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f32,
    pub paper_type: PaperType,
    /// A preset name such as `fountain-blue`, or any CSS color.
    pub ink_color: String,
    /// Multiplier on `font_size` giving the distance between baselines.
    pub line_height: f32,
    /// Accepted for compatibility. Layout ignores it.
    pub letter_spacing: f32,
    /// Jitter magnitude, 0 for perfectly regular glyphs.
    pub messiness: f32,
    /// Uniform page margin in pixels.
    pub margins: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "\"Caveat\", cursive".to_string(),
            font_size: 24.0,
            paper_type: PaperType::Lined,
            ink_color: InkPreset::Blue.hex().to_string(),
            line_height: 1.5,
            letter_spacing: 0.0,
            messiness: 0.3,
            margins: 40.0,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> HandscriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> HandscriptResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn line_spacing(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// CSS font shorthand for the canvas, e.g. `24px "Caveat", cursive`.
    pub fn font_css(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }

    /// Parse `ink_color`, accepting preset names as well as CSS colors.
    pub fn ink(&self) -> HandscriptResult<Color> {
        let value = self.ink_color.trim();
        let css = InkPreset::from_name(value)
            .map(|preset| preset.hex())
            .unwrap_or(value);
        parse_color(css).map_err(|_| HandscriptError::InvalidColor(self.ink_color.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InkPreset {
    Black,
    Blue,
    Red,
    Pencil,
    FountainBlue,
}

impl InkPreset {
    pub const ALL: [InkPreset; 5] = [
        InkPreset::Black,
        InkPreset::Blue,
        InkPreset::Red,
        InkPreset::Pencil,
        InkPreset::FountainBlue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InkPreset::Black => "black",
            InkPreset::Blue => "blue",
            InkPreset::Red => "red",
            InkPreset::Pencil => "pencil",
            InkPreset::FountainBlue => "fountain-blue",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            InkPreset::Black => "#1a1a1a",
            InkPreset::Blue => "#1e3a8a",
            InkPreset::Red => "#991b1b",
            InkPreset::Pencil => "#525252",
            InkPreset::FountainBlue => "#004aad",
        }
    }

    /// Look up a preset by name. `fountain_blue` and `FOUNTAIN-BLUE` both match.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(&normalized))
    }
}

/// A handwriting family offered by the font picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub name: &'static str,
    pub family: &'static str,
}

pub const FONT_PRESETS: [FontPreset; 13] = [
    FontPreset { name: "Caveat", family: "\"Caveat\", cursive" },
    FontPreset { name: "Patrick Hand", family: "\"Patrick Hand\", cursive" },
    FontPreset { name: "Indie Flower", family: "\"Indie Flower\", cursive" },
    FontPreset { name: "Shadows Into Light", family: "\"Shadows Into Light\", cursive" },
    FontPreset { name: "Homemade Apple", family: "\"Homemade Apple\", cursive" },
    FontPreset { name: "Reenie Beanie", family: "\"Reenie Beanie\", cursive" },
    FontPreset { name: "Zeyada", family: "\"Zeyada\", cursive" },
    FontPreset { name: "Dancing Script", family: "\"Dancing Script\", cursive" },
    FontPreset { name: "Gloria Hallelujah", family: "\"Gloria Hallelujah\", cursive" },
    FontPreset { name: "Zhi Mang Xing (中文)", family: "\"Zhi Mang Xing\", cursive" },
    FontPreset { name: "Long Cang (中文)", family: "\"Long Cang\", cursive" },
    FontPreset { name: "Ma Shan Zheng (中文)", family: "\"Ma Shan Zheng\", cursive" },
    FontPreset { name: "Liu Jian Mao Cao (中文)", family: "\"Liu Jian Mao Cao\", cursive" },
];
