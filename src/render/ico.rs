//! ICO output.
//!
//! Writes a Windows icon container with one PNG-compressed entry per size,
//! and reads back the entry directory for verification.

use std::fs::File;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use super::png::{resize, write_file};
use crate::error::{IconError, Result};

/// Resize the canvas to each size and write them all into one ICO file.
pub fn write_ico(source: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let encode_err = |e: image::ImageError| IconError::Encode {
        path: path.to_path_buf(),
        message: format!("Failed to encode ICO: {}", e),
    };

    let images: Vec<RgbaImage> = sizes.iter().map(|&size| resize(source, size)).collect();
    let frames = images
        .iter()
        .map(|img| IcoFrame::as_png(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(encode_err)?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .map_err(encode_err)?;

    write_file(path, &bytes)
}

/// List the (width, height) of every entry in an ICO file, in directory order.
pub fn read_ico_sizes(path: &Path) -> Result<Vec<(u32, u32)>> {
    let file = File::open(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open file: {}", e),
    })?;

    let dir = ico::IconDir::read(file).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Not a valid ICO file: {}", e),
    })?;

    Ok(dir.entries().iter().map(|e| (e.width(), e.height())).collect())
}
