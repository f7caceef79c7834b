use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Font configuration for a canvas.
///
/// Describes where fonts come from (system, directories, raw data) and how the
/// CSS generic families map onto concrete families. Resolving it into a font
/// database is the expensive part, so resolve once and share the result via
/// [`ResolvedFontConfig`].
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Custom font data to register.
    pub custom_fonts: Vec<CustomFont>,
    /// Mappings from generic CSS family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Raw font file data (TTF/OTF) to register with the database.
#[derive(Clone, Debug)]
pub struct CustomFont {
    /// Raw font file data. Arc-wrapped for cheap cloning.
    pub data: Arc<Vec<u8>>,
}

/// Concrete families for each CSS generic family, in priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    pub serif: Vec<String>,
    pub sans_serif: Vec<String>,
    pub monospace: Vec<String>,
    /// Handwriting fonts come first here since `cursive` is the fallback of
    /// every handwriting family list.
    pub cursive: Vec<String>,
}

impl GenericFamilyMap {
    /// Returns the default generic family mappings.
    pub fn defaults() -> Self {
        Self {
            sans_serif: to_strings(&["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans"]),
            monospace: to_strings(&["Courier New", "Courier", "Liberation Mono", "DejaVu Sans Mono"]),
            serif: to_strings(&["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif"]),
            cursive: to_strings(&[
                "Caveat",
                "Patrick Hand",
                "Indie Flower",
                "Comic Sans MS",
                "Apple Chancery",
                "URW Chancery L",
            ]),
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl FontConfig {
    /// Resolve this configuration into a concrete font database.
    pub fn resolve(&self) -> ResolvedFontConfig {
        ResolvedFontConfig::new(self)
    }
}

/// A [`FontConfig`] that has been resolved into a font database.
///
/// Cloning clones the in-memory database (no filesystem scan), so one resolved
/// config can back many canvases.
#[derive(Clone)]
pub struct ResolvedFontConfig {
    pub(crate) fontdb: fontdb::Database,
}

impl ResolvedFontConfig {
    pub fn new(config: &FontConfig) -> Self {
        Self {
            fontdb: font_config_to_fontdb(config),
        }
    }

    /// Number of font faces available to canvases created from this config.
    pub fn face_count(&self) -> usize {
        self.fontdb.faces().count()
    }

    /// Whether a family with this exact name (case-insensitive) is loaded.
    pub fn has_family(&self, name: &str) -> bool {
        has_family(&self.fontdb, name)
    }
}

pub(crate) fn has_family(db: &fontdb::Database, name: &str) -> bool {
    db.faces().any(|face| {
        face.families
            .iter()
            .any(|(family, _lang)| family.eq_ignore_ascii_case(name))
    })
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
pub(crate) fn font_config_to_fontdb(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        log::debug!(target: "canvas", "loading fonts from {}", dir.display());
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        db.load_font_data(Vec::from(font.data.as_slice()));
    }

    apply_generic_families(&mut db, &config.generic_families);
    log::debug!(target: "canvas", "font database holds {} faces", db.faces().count());

    db
}

/// Point each generic family at the first available concrete family.
fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(family, _lang)| family.clone()))
        .collect();
    let first_available =
        |candidates: &[String]| candidates.iter().find(|f| available.contains(*f)).cloned();

    if let Some(family) = first_available(&families.sans_serif) {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = first_available(&families.monospace) {
        db.set_monospace_family(family);
    }
    if let Some(family) = first_available(&families.serif) {
        db.set_serif_family(family);
    }
    if let Some(family) = first_available(&families.cursive) {
        db.set_cursive_family(family);
    }
}
