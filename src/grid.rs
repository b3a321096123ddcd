//! Character-grid geometry and luminance downsampling

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

/// Default character-grid width in columns.
pub const DEFAULT_WIDTH: u32 = 100;

/// Monospace glyphs are roughly twice as tall as they are wide, so one
/// character cell covers two source rows for every column it covers.
const GLYPH_ASPECT: f64 = 2.0;

/// Dimensions of the output character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Columns (characters per row)
    pub width: u32,
    /// Rows
    pub height: u32,
}

/// Compute the character-grid dimensions for a source image.
///
/// The grid is `width * detail` columns wide. The row count preserves the
/// source aspect ratio after halving for glyph height, and is clamped to at
/// least one row so extremely wide sources still render.
pub fn grid_size(src_width: u32, src_height: u32, width: u32, detail: u32) -> GridSize {
    let columns = width * detail;
    let aspect = src_height as f64 / (src_width as f64 * GLYPH_ASPECT);
    let rows = (aspect * columns as f64).round() as u32;
    GridSize {
        width: columns,
        height: rows.max(1),
    }
}

/// Downsample an image onto the character grid and reduce it to luminance.
///
/// Resizes to exactly `grid.width x grid.height` (Catmull-Rom; the grid is
/// already aspect-corrected, so no further ratio preservation happens here),
/// then collapses color to 8-bit luminance.
pub fn downsample(image: &DynamicImage, grid: GridSize) -> GrayImage {
    let resized = image.resize_exact(grid.width, grid.height, FilterType::CatmullRom);
    resized.to_luma8()
}
