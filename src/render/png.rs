//! PNG output for the icon canvas.
//!
//! Every size is resampled from the original canvas with a Lanczos filter,
//! never from an already-resized copy.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::{IconError, Result};

/// Resampling filter used for every derived size.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize a square canvas to `size`x`size`.
///
/// Requesting the canvas's own size returns an untouched copy.
pub fn resize(source: &RgbaImage, size: u32) -> RgbaImage {
    if source.dimensions() == (size, size) {
        return source.clone();
    }
    imageops::resize(source, size, size, RESIZE_FILTER)
}

/// Resize the canvas and write it to a PNG file.
///
/// # Arguments
///
/// * `source` - The finished icon canvas
/// * `size` - Output width and height in pixels
/// * `path` - Output file path (overwritten if present)
pub fn write_png(source: &RgbaImage, size: u32, path: &Path) -> Result<()> {
    let img = resize(source, size);

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IconError::Encode {
            path: path.to_path_buf(),
            message: format!("Failed to encode PNG: {}", e),
        })?;

    write_file(path, &bytes)
}

/// Write encoded bytes to disk, surfacing every IO error including a short write.
pub(super) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
