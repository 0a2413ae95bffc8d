//! Raster acquisition from encoded bytes and image files.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::Raster;
use crate::error::{Error, Result};

/// Decode an encoded image (PNG or JPEG) into a raster.
///
/// The decoded channel layout is kept, so a grayscale PNG yields a
/// `Luma` raster and an RGBA PNG yields an `Rgba` raster.
///
/// # Errors
///
/// Returns `Error::InvalidFormat` if the bytes are not a decodable image.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::InvalidFormat(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| Error::InvalidFormat(e.to_string()))?;

    let raster = Raster::from_dynamic_image(img);
    debug!(
        width = raster.width,
        height = raster.height,
        layout = ?raster.layout,
        "decoded raster"
    );
    Ok(raster)
}

/// Load and decode a raster from an image file.
///
/// # Errors
///
/// Returns `Error::NotFound` if the path does not exist, `Error::Io` if it
/// cannot be read, and `Error::InvalidFormat` if its content is not an image.
pub fn load_raster(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    decode_raster(&bytes)
}
