//! PNG export of composed levels with transparent blank cells

use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::spatial::symbol::Symbol;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Export a composed level as a PNG image
///
/// Every level cell becomes a `scale × scale` square in the symbol's colour;
/// `Blank` cells stay transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The scale is zero or the level is empty
/// - The image would exceed `u32` pixel dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_as_png(composite: &Array2<Symbol>, scale: u32, output_path: &Path) -> Result<()> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }
    if composite.is_empty() {
        return Err(invalid_parameter(
            "level",
            &format!("{}x{}", composite.ncols(), composite.nrows()),
            &"nothing to export",
        ));
    }

    let pixels = |cells: usize, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(|| invalid_parameter(parameter, &cells, &"image too large"))
    };
    let width = pixels(composite.ncols(), "width")?;
    let height = pixels(composite.nrows(), "height")?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let symbol = composite.get((row, col)).copied().unwrap_or_default();
        Rgba(symbol.color())
    });

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LevelError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| LevelError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
