//! Paper styles and background painting.

use crate::error::{HandscriptError, HandscriptResult};
use crate::random::RandomSource;
use handscript_canvas2d::Canvas2dContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Red of the notebook margin rule, independent of the paper's line color.
const MARGIN_RULE_COLOR: &str = "#f87171";
/// The margin rule sits this far left of the text margin.
const MARGIN_RULE_INSET: f32 = 10.0;

const STAIN_COLOR: &str = "#5c4033";
const STAIN_ALPHA: f32 = 0.05;
const STAIN_COUNT: usize = 20;
const STAIN_MIN_RADIUS: f64 = 50.0;
const STAIN_MAX_RADIUS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaperType {
    Plain,
    #[default]
    Lined,
    Grid,
    Vintage,
    Blueprint,
}

impl PaperType {
    pub const ALL: [PaperType; 5] = [
        PaperType::Plain,
        PaperType::Lined,
        PaperType::Grid,
        PaperType::Vintage,
        PaperType::Blueprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Plain => "PLAIN",
            PaperType::Lined => "LINED",
            PaperType::Grid => "GRID",
            PaperType::Vintage => "VINTAGE",
            PaperType::Blueprint => "BLUEPRINT",
        }
    }

    /// Blueprint paper always takes white ink.
    pub fn forces_white_ink(&self) -> bool {
        matches!(self, PaperType::Blueprint)
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperType {
    type Err = HandscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperType::ALL
            .into_iter()
            .find(|paper| paper.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HandscriptError::UnknownPaperType(s.to_string()))
    }
}

impl TryFrom<String> for PaperType {
    type Error = HandscriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaperType> for String {
    fn from(value: PaperType) -> Self {
        value.as_str().to_string()
    }
}

/// Colors and name of one paper preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperStyle {
    pub display_name: String,
    pub background: String,
    pub line_color: String,
}

impl PaperStyle {
    pub fn new(display_name: &str, background: &str, line_color: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            background: background.to_string(),
            line_color: line_color.to_string(),
        }
    }
}

/// One style per paper type.
///
/// The table has a slot for every [`PaperType`], so lookups cannot miss.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperStyles {
    plain: PaperStyle,
    lined: PaperStyle,
    grid: PaperStyle,
    vintage: PaperStyle,
    blueprint: PaperStyle,
}

impl Default for PaperStyles {
    fn default() -> Self {
        Self {
            plain: PaperStyle::new("Plain White", "#ffffff", "transparent"),
            lined: PaperStyle::new("Notebook Lined", "#fdfbf7", "#a5b4fc"),
            grid: PaperStyle::new("Graph Paper", "#ffffff", "#e2e8f0"),
            vintage: PaperStyle::new("Vintage Parchment", "#f5e6d3", "#d6c0a6"),
            blueprint: PaperStyle::new("Blueprint", "#1e3a8a", "#60a5fa"),
        }
    }
}

impl PaperStyles {
    /// Build a table from explicit entries.
    ///
    /// Fails unless every paper type appears exactly once.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PaperType, PaperStyle)>,
    ) -> HandscriptResult<Self> {
        let mut slots: [Option<PaperStyle>; 5] = Default::default();
        for (paper, style) in entries {
            let slot = &mut slots[Self::index(paper)];
            if slot.is_some() {
                return Err(HandscriptError::DuplicatePaperStyle(paper));
            }
            *slot = Some(style);
        }

        let [plain, lined, grid, vintage, blueprint] = slots;
        let take = |slot: Option<PaperStyle>, paper| {
            slot.ok_or(HandscriptError::MissingPaperStyle(paper))
        };
        Ok(Self {
            plain: take(plain, PaperType::Plain)?,
            lined: take(lined, PaperType::Lined)?,
            grid: take(grid, PaperType::Grid)?,
            vintage: take(vintage, PaperType::Vintage)?,
            blueprint: take(blueprint, PaperType::Blueprint)?,
        })
    }

    fn index(paper: PaperType) -> usize {
        match paper {
            PaperType::Plain => 0,
            PaperType::Lined => 1,
            PaperType::Grid => 2,
            PaperType::Vintage => 3,
            PaperType::Blueprint => 4,
        }
    }

    pub fn get(&self, paper: PaperType) -> &PaperStyle {
        match paper {
            PaperType::Plain => &self.plain,
            PaperType::Lined => &self.lined,
            PaperType::Grid => &self.grid,
            PaperType::Vintage => &self.vintage,
            PaperType::Blueprint => &self.blueprint,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaperType, &PaperStyle)> {
        PaperType::ALL.into_iter().map(|paper| (paper, self.get(paper)))
    }
}

/// Page measurements the background needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruling {
    pub margins: f32,
    pub font_size: f32,
    pub line_spacing: f32,
}

impl Ruling {
    fn has_spacing(&self) -> bool {
        self.line_spacing.is_finite() && self.line_spacing > 0.0
    }
}

/// Paint the full canvas for `paper`. Never looks at the text.
pub fn paint_background(
    canvas: &mut Canvas2dContext,
    paper: PaperType,
    style: &PaperStyle,
    ruling: &Ruling,
    rng: &mut dyn RandomSource,
) -> HandscriptResult<()> {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    log::debug!(target: "handscript", "painting {} paper {}x{}", paper, width, height);

    canvas.save();
    canvas.set_global_alpha(1.0);
    canvas.set_fill_style(&style.background)?;
    canvas.fill_rect(0.0, 0.0, width, height);
    canvas.set_line_width(1.0);

    let result = match paper {
        PaperType::Plain | PaperType::Blueprint => Ok(()),
        PaperType::Lined => rule_lines(canvas, style, ruling, width, height),
        PaperType::Grid => rule_grid(canvas, style, ruling, width, height),
        PaperType::Vintage => stain(canvas, width, height, rng),
    };
    canvas.restore();
    result
}

fn rule_lines(
    canvas: &mut Canvas2dContext,
    style: &PaperStyle,
    ruling: &Ruling,
    width: f32,
    height: f32,
) -> HandscriptResult<()> {
    let margin_x = ruling.margins - MARGIN_RULE_INSET;
    canvas.set_stroke_style(MARGIN_RULE_COLOR)?;
    canvas.begin_path();
    canvas.move_to(margin_x, 0.0);
    canvas.line_to(margin_x, height);
    canvas.stroke();

    if !ruling.has_spacing() {
        return Ok(());
    }
    canvas.set_stroke_style(&style.line_color)?;
    canvas.begin_path();
    let mut y = ruling.margins + ruling.font_size;
    while y < height {
        canvas.move_to(0.0, y);
        canvas.line_to(width, y);
        y += ruling.line_spacing;
    }
    canvas.stroke();
    Ok(())
}

fn rule_grid(
    canvas: &mut Canvas2dContext,
    style: &PaperStyle,
    ruling: &Ruling,
    width: f32,
    height: f32,
) -> HandscriptResult<()> {
    if !ruling.has_spacing() {
        return Ok(());
    }
    canvas.set_stroke_style(&style.line_color)?;
    canvas.begin_path();
    let mut x = 0.0;
    while x < width {
        canvas.move_to(x, 0.0);
        canvas.line_to(x, height);
        x += ruling.line_spacing;
    }
    let mut y = 0.0;
    while y < height {
        canvas.move_to(0.0, y);
        canvas.line_to(width, y);
        y += ruling.line_spacing;
    }
    canvas.stroke();
    Ok(())
}

fn stain(
    canvas: &mut Canvas2dContext,
    width: f32,
    height: f32,
    rng: &mut dyn RandomSource,
) -> HandscriptResult<()> {
    canvas.set_global_alpha(STAIN_ALPHA);
    canvas.set_fill_style(STAIN_COLOR)?;
    for _ in 0..STAIN_COUNT {
        let radius = rng.next_range(STAIN_MIN_RADIUS, STAIN_MAX_RADIUS) as f32;
        let cx = rng.next_unit() as f32 * width;
        let cy = rng.next_unit() as f32 * height;
        canvas.begin_path();
        canvas.circle(cx, cy, radius);
        canvas.fill();
    }
    Ok(())
}
