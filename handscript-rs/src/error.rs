use crate::paper::PaperType;
use handscript_canvas2d::Canvas2dError;

pub type HandscriptResult<T> = Result<T, HandscriptError>;

#[derive(Debug, thiserror::Error)]
pub enum HandscriptError {
    /// The raster target cannot be allocated with these dimensions.
    #[error("Invalid raster target: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    #[error("Unknown paper type: `{0}`")]
    UnknownPaperType(String),

    #[error("Invalid color: `{0}`")]
    InvalidColor(String),

    #[error("No paper style defined for {0:?}")]
    MissingPaperStyle(PaperType),

    #[error("Paper style for {0:?} defined more than once")]
    DuplicatePaperStyle(PaperType),

    #[error("Canvas error: {0}")]
    Canvas(#[from] Canvas2dError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
