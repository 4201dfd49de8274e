//! Grayscale extraction.
//!
//! Reduces a decoded image to a single-channel sample grid using the
//! standard luminance-weighted reduction of the source channels. This
//! is the first pipeline stage: decoded image in, [`SampleGrid`] out.

use image::{DynamicImage, GenericImageView};

use crate::error::{FftVisError, Result};
use crate::types::SampleGrid;

/// Extract a row-major grid of grayscale intensity samples.
///
/// RGB sources are reduced with the standard luminance weights, where
/// green contributes the most and blue the least; already-gray sources
/// pass through. Output sample values lie in [0, 255] as real numbers.
///
/// # Errors
///
/// Returns [`FftVisError::EmptyInput`] if the image has zero width or
/// height, and [`FftVisError::RenderContext`] if the gray backing
/// buffer does not cover the requested dimensions.
pub fn extract_grayscale(image: &DynamicImage) -> Result<SampleGrid> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FftVisError::EmptyInput);
    }

    let gray = image.to_luma8();
    let width = width as usize;
    let height = height as usize;

    let raw = gray.into_raw();
    if raw.len() != width * height {
        return Err(FftVisError::RenderContext(format!(
            "gray buffer of {} bytes does not cover {}x{}",
            raw.len(),
            width,
            height
        )));
    }

    tracing::debug!("Extracted {}x{} grayscale samples", width, height);

    let samples = raw.into_iter().map(f64::from).collect();
    Ok(SampleGrid::new(width, height, samples))
}
