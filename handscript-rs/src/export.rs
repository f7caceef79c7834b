//! PNG export.

use crate::error::HandscriptResult;
use handscript_canvas2d::Canvas2dContext;
use std::path::Path;

/// File name used when the caller does not pick one.
pub const DEFAULT_EXPORT_NAME: &str = "handwriting.png";

/// Encode the target as PNG bytes.
pub fn encode_png(target: &Canvas2dContext) -> HandscriptResult<Vec<u8>> {
    Ok(target.to_png(None)?)
}

/// Write the target to `path` as a PNG file.
pub fn export_image(target: &Canvas2dContext, path: impl AsRef<Path>) -> HandscriptResult<()> {
    let path = path.as_ref();
    let bytes = encode_png(target)?;
    std::fs::write(path, bytes)?;
    log::info!(target: "handscript", "wrote {}", path.display());
    Ok(())
}
