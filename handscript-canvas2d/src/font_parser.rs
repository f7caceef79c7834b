//! CSS font string parsing.
//!
//! Parses strings like `24px "Caveat", cursive` or `italic 16pt 'Long Cang'`
//! into a size and an ordered family list usable with cosmic-text.

use crate::error::{Canvas2dError, Canvas2dResult};
use cosmic_text::{Style, Weight};

/// Parsed font specification from a CSS font string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    /// Font style (normal, italic, oblique).
    pub style: Style,
    /// Font weight.
    pub weight: Weight,
    /// Font size in pixels.
    pub size_px: f32,
    /// Font families in order of preference.
    pub families: Vec<String>,
}

impl Default for ParsedFont {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            weight: Weight::NORMAL,
            size_px: 10.0,
            families: vec!["sans-serif".to_string()],
        }
    }
}

/// Parse a CSS font string into components.
///
/// Supports `[style] [weight] size[/line-height] family[, family]*`. Only the
/// keyword weights `bold` and `normal` are recognized.
pub fn parse_font(font_str: &str) -> Canvas2dResult<ParsedFont> {
    let mut result = ParsedFont::default();
    let mut remaining = font_str.trim();
    if remaining.is_empty() {
        return Ok(result);
    }

    while let Some((keyword, rest)) = split_keyword(remaining) {
        match keyword {
            "italic" => result.style = Style::Italic,
            "oblique" => result.style = Style::Oblique,
            "bold" => result.weight = Weight::BOLD,
            "normal" => {}
            _ => break,
        }
        remaining = rest.trim_start();
    }

    let (size, rest) = parse_font_size(remaining)?;
    result.size_px = size;
    remaining = rest;

    if let Some(rest) = remaining.strip_prefix('/') {
        remaining = rest.trim_start_matches(|c: char| !c.is_whitespace());
    }

    let families = parse_font_families(remaining);
    if !families.is_empty() {
        result.families = families;
    }

    Ok(result)
}

/// Split off a leading alphabetic keyword followed by whitespace.
fn split_keyword(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    let word = &s[..end];
    word.chars()
        .all(|c| c.is_ascii_alphabetic())
        .then_some((word, &s[end..]))
}

/// Parse font size from string.
fn parse_font_size(s: &str) -> Canvas2dResult<(f32, &str)> {
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());

    if num_end == 0 {
        return Err(Canvas2dError::FontParseError(format!(
            "Expected font size, got: {}",
            s
        )));
    }

    let (num_str, rest) = s.split_at(num_end);
    let size: f32 = num_str.parse().map_err(|_| {
        Canvas2dError::FontParseError(format!("Invalid font size number: {}", num_str))
    })?;

    let (multiplier, rest) = if let Some(rest) = rest.strip_prefix("px") {
        (1.0, rest)
    } else if let Some(rest) = rest.strip_prefix("pt") {
        (4.0 / 3.0, rest)
    } else if let Some(rest) = rest.strip_prefix("rem") {
        (16.0, rest)
    } else if let Some(rest) = rest.strip_prefix("em") {
        (16.0, rest)
    } else {
        (1.0, rest)
    };

    Ok((size * multiplier, rest))
}

/// Parse a comma separated font family list, unquoting quoted names.
fn parse_font_families(s: &str) -> Vec<String> {
    s.split(',')
        .map(|family| {
            family
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string()
        })
        .filter(|family| !family.is_empty())
        .collect()
}
