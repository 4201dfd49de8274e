//! Image-to-spectrum processing pipeline.
//!
//! Data flows through four stages, each consuming its input by value:
//!
//! ```text
//! [extract_grayscale] ──► [transform_2d] ──► [normalize_magnitude] ──► [encode_grayscale]
//!      SampleGrid            ComplexGrid          MagnitudeGrid              Raster
//! ```
//!
//! # Design
//!
//! - **Pure functions** — every stage returns its result; nothing is
//!   pushed into shared state.
//! - **Per-image scope** — all grids are created and dropped inside one
//!   [`process_image`] call.
//! - **Best-effort batches** — [`process_batch`] runs strictly
//!   sequentially in input order and skips failed images, so one bad
//!   input never aborts the rest.

pub mod encode;
pub mod grayscale;

pub use encode::{encode_grayscale, raster_to_image};
pub use grayscale::extract_grayscale;

use image::DynamicImage;
use std::path::Path;

use crate::analysis::{normalize_magnitude, transform_2d};
use crate::error::Result;
use crate::types::Raster;

/// Decode an input image from disk.
///
/// Accepts whatever container format the `image` crate can decode
/// (PNG, JPEG, TIFF, BMP, ...); the pipeline itself only ever sees the
/// decoded pixels.
///
/// # Errors
///
/// Returns [`FftVisError::Image`] when the file cannot be read or
/// decoded.
///
/// [`FftVisError::Image`]: crate::error::FftVisError::Image
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Run the full pipeline on one image.
///
/// Chains grayscale extraction, the 2D transform, magnitude
/// normalization, and raster encoding. On any stage failure the whole
/// image is abandoned with no partial output.
///
/// # Errors
///
/// Propagates the failing stage's error: [`FftVisError::EmptyInput`],
/// [`FftVisError::RenderContext`], [`FftVisError::UnsupportedSize`], or
/// [`FftVisError::Encoding`].
///
/// [`FftVisError::EmptyInput`]: crate::error::FftVisError::EmptyInput
/// [`FftVisError::RenderContext`]: crate::error::FftVisError::RenderContext
/// [`FftVisError::UnsupportedSize`]: crate::error::FftVisError::UnsupportedSize
/// [`FftVisError::Encoding`]: crate::error::FftVisError::Encoding
pub fn process_image(image: &DynamicImage) -> Result<Raster> {
    let samples = extract_grayscale(image)?;
    let spectrum = transform_2d(samples)?;
    let magnitude = normalize_magnitude(spectrum);
    encode_grayscale(magnitude)
}

/// Run the pipeline over a batch of images, best-effort.
///
/// Images are processed strictly sequentially in input order. A failed
/// image is logged at WARN and skipped; it produces no entry in the
/// returned collection, so the output holds one raster per successful
/// input with relative order preserved.
pub fn process_batch(images: &[DynamicImage]) -> Vec<Raster> {
    let mut rasters = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        match process_image(image) {
            Ok(raster) => rasters.push(raster),
            Err(e) => {
                tracing::warn!("Skipping image {}: {}", index, e);
            }
        }
    }
    rasters
}
