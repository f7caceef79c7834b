#![allow(clippy::uninlined_format_args)]

use anyhow::{bail, Context};
use clap::Parser;
use handscript_rs::handscript_canvas2d::{parse_font, CustomFont, FontConfig};
use handscript_rs::{
    export_image, new_target_with_fonts, InkPreset, PaperType, RenderConfig, Renderer,
    SeededRandom, FONT_PRESETS,
};
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// handscript: Render text as handwriting on simulated paper and save it as PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the PNG file to create
    #[clap(
        short,
        long,
        required_unless_present_any = ["list_fonts", "list_papers", "list_inks", "print_config"]
    )]
    pub output: Option<String>,

    /// Path to a text file to render. Reads stdin when neither --input nor --text is given
    #[clap(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Text to render
    #[clap(short, long)]
    pub text: Option<String>,

    /// JSON render configuration. Flags override its values
    #[clap(short, long)]
    pub config: Option<String>,

    /// Paper type. One of plain, lined, grid, vintage, blueprint
    #[clap(long)]
    pub paper: Option<String>,

    /// CSS font family list, e.g. '"Caveat", cursive'
    #[clap(long)]
    pub font: Option<String>,

    /// Font size in pixels
    #[clap(long)]
    pub font_size: Option<f32>,

    /// Ink preset name (see --list-inks) or any CSS color
    #[clap(long)]
    pub ink: Option<String>,

    /// Line height as a multiple of the font size
    #[clap(long)]
    pub line_height: Option<f32>,

    /// Jitter strength between 0 (regular) and 1 (very messy)
    #[clap(long)]
    pub messiness: Option<f32>,

    /// Page margin in pixels
    #[clap(long)]
    pub margins: Option<f32>,

    /// Page width in pixels
    #[clap(long, default_value_t = 800)]
    pub width: u32,

    /// Page height in pixels
    #[clap(long, default_value_t = 1000)]
    pub height: u32,

    /// Seed for reproducible jitter and paper texture
    #[clap(long)]
    pub seed: Option<u64>,

    /// Additional directory to search for fonts. May be repeated
    #[clap(long = "font-dir")]
    pub font_dirs: Vec<String>,

    /// Font file (TTF/OTF) to register. May be repeated
    #[clap(long = "font-file")]
    pub font_files: Vec<String>,

    /// Do not load system fonts
    #[clap(long)]
    pub no_system_fonts: bool,

    /// Print the handwriting font presets and exit
    #[clap(long)]
    pub list_fonts: bool,

    /// Print the paper types and exit
    #[clap(long)]
    pub list_papers: bool,

    /// Print the ink presets and exit
    #[clap(long)]
    pub list_inks: bool,

    /// Print the effective configuration as JSON and exit
    #[clap(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    init_logging(args.verbose);

    if args.list_fonts {
        for preset in FONT_PRESETS {
            println!("{}\t{}", preset.name, preset.family);
        }
        return Ok(());
    }
    if args.list_papers {
        let renderer = Renderer::default();
        for (paper, style) in renderer.styles().iter() {
            println!("{}\t{}", paper.as_str().to_lowercase(), style.display_name);
        }
        return Ok(());
    }
    if args.list_inks {
        for preset in InkPreset::ALL {
            println!("{}\t{}", preset.name(), preset.hex());
        }
        return Ok(());
    }

    let config = build_config(&args)?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // clap only lets --output be absent together with one of the early-exit flags
    let Some(output) = args.output.as_deref().map(expand) else {
        bail!("--output is required");
    };
    let text = read_text(&args)?;
    let fonts = build_font_config(&args)?.resolve();
    warn_missing_families(&config, |family| fonts.has_family(family));

    let mut target = new_target_with_fonts(args.width, args.height, &fonts)?;
    let renderer = Renderer::default();
    let summary = match args.seed {
        Some(seed) => {
            renderer.render_with(&mut target, &text, &config, &mut SeededRandom::new(seed))?
        }
        None => renderer.render(&mut target, &text, &config)?,
    };
    if summary.truncated {
        log::warn!(
            "Text did not fit on a {}x{} page and was cut off after {} lines",
            args.width,
            args.height,
            summary.lines
        );
    }

    export_image(&target, &output)
        .with_context(|| format!("Failed to write output to {}", output.display()))?;
    log::info!("Drew {} glyphs to {}", summary.glyphs.len(), output.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn build_config(args: &Args) -> anyhow::Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let path = expand(path);
            RenderConfig::from_path(&path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(paper) = &args.paper {
        config.paper_type = PaperType::from_str(paper)?;
    }
    if let Some(font) = &args.font {
        config.font_family = font.clone();
    }
    if let Some(ink) = &args.ink {
        config.ink_color = ink.clone();
    }
    if let Some(font_size) = args.font_size {
        config.font_size = font_size;
    }
    if let Some(line_height) = args.line_height {
        config.line_height = line_height;
    }
    if let Some(messiness) = args.messiness {
        config.messiness = messiness;
    }
    if let Some(margins) = args.margins {
        config.margins = margins;
    }
    Ok(config)
}

fn read_text(args: &Args) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(input) = &args.input {
        let path = expand(input);
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

fn build_font_config(args: &Args) -> anyhow::Result<FontConfig> {
    let mut custom_fonts = Vec::new();
    for file in &args.font_files {
        let path = expand(file);
        if !path.is_file() {
            bail!("Font file not found: {}", path.display());
        }
        let data = std::fs::read(&path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        custom_fonts.push(CustomFont {
            data: Arc::new(data),
        });
    }

    let mut font_dirs = Vec::new();
    for dir in &args.font_dirs {
        let path = expand(dir);
        if !path.is_dir() {
            bail!("Font directory not found: {}", path.display());
        }
        font_dirs.push(path);
    }

    Ok(FontConfig {
        custom_fonts,
        font_dirs,
        load_system_fonts: !args.no_system_fonts,
        ..FontConfig::default()
    })
}

/// Generic families always resolve to something, so only named ones are checked.
fn warn_missing_families(config: &RenderConfig, has_family: impl Fn(&str) -> bool) {
    let Ok(font) = parse_font(&config.font_css()) else {
        return;
    };
    for family in &font.families {
        let generic = matches!(
            family.to_ascii_lowercase().as_str(),
            "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" | "system-ui"
        );
        if !generic && !has_family(family.as_str()) {
            log::warn!("Font family '{}' is not installed, falling back", family);
        }
    }
}
