//! Raster encoding.
//!
//! Quantizes a normalized magnitude grid into 8-bit grayscale pixel
//! bytes, and converts the resulting [`Raster`] into an [`image`]
//! buffer for persistence. This is the final pipeline stage.

use image::GrayImage;

use crate::error::{FftVisError, Result};
use crate::types::{MagnitudeGrid, Raster};

/// Quantize a magnitude grid into a single-channel 8-bit raster.
///
/// Each output byte is `floor(v * 255.0)` — truncation toward zero, not
/// rounding. Values are clamped so floating-point overshoot at `v ==
/// 1.0` can never truncate past 255.
///
/// # Errors
///
/// Returns [`FftVisError::Encoding`] if a raster of the requested size
/// cannot be constructed (zero dimensions).
pub fn encode_grayscale(grid: MagnitudeGrid) -> Result<Raster> {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 {
        return Err(FftVisError::Encoding(format!(
            "cannot allocate a {}x{} raster",
            width, height
        )));
    }

    let bytes: Vec<u8> = grid
        .values()
        .iter()
        .map(|&v| (v * 255.0).floor().clamp(0.0, 255.0) as u8)
        .collect();

    Ok(Raster::new(width, height, bytes))
}

/// Convert a raster into an [`image::GrayImage`] for saving.
///
/// # Errors
///
/// Returns [`FftVisError::Encoding`] if the pixel buffer cannot back an
/// image of the raster's dimensions.
pub fn raster_to_image(raster: Raster) -> Result<GrayImage> {
    let width = raster.width() as u32;
    let height = raster.height() as u32;
    GrayImage::from_raw(width, height, raster.into_bytes()).ok_or_else(|| {
        FftVisError::Encoding(format!("cannot back a {}x{} gray image", width, height))
    })
}
