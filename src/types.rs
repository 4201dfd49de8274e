//! Core data types for fftvis-rs
//!
//! This module contains the fundamental data structures passed between
//! pipeline stages. Every grid carries its own dimensions and is
//! row-major; grids are created by one stage and consumed by value in
//! the next, so no grid outlives a single `process_image` call.
//!
//! # Main Types
//!
//! - [`SampleGrid`] - Real-valued intensity samples in [0, 255]
//! - [`ComplexGrid`] - Complex spectrum produced by the 2D transform
//! - [`MagnitudeGrid`] - Normalized real-valued magnitudes in [0, 1]
//! - [`Raster`] - Single-channel 8-bit output image

use num_complex::Complex;

/// Row-major grid of real-valued intensity samples.
///
/// Produced by grayscale extraction; sample values lie in [0, 255].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl SampleGrid {
    /// Create a grid from row-major samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<f64>) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "sample buffer does not cover {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Grid width in samples
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples (width * height)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The row-major sample values
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the grid, returning the raw sample buffer
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Row-major grid of complex spectral coefficients.
///
/// Produced by the 2D transform with the same dimensions as its source
/// [`SampleGrid`]. Coefficient (0, 0) holds the unnormalized DC term;
/// no spectral shift is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    width: usize,
    height: usize,
    data: Vec<Complex<f64>>,
}

impl ComplexGrid {
    /// Create a grid from row-major coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<Complex<f64>>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "coefficient buffer does not cover {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Grid width in coefficients
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in coefficients
    pub fn height(&self) -> usize {
        self.height
    }

    /// The row-major coefficients
    pub fn data(&self) -> &[Complex<f64>] {
        &self.data
    }

    /// Coefficient at column `x`, row `y`
    pub fn coefficient(&self, x: usize, y: usize) -> Complex<f64> {
        self.data[y * self.width + x]
    }

    /// The zero-frequency (DC) coefficient at (0, 0), equal to the sum
    /// of all input samples
    pub fn dc(&self) -> Complex<f64> {
        self.data[0]
    }

    /// Consume the grid, returning the raw coefficient buffer
    pub fn into_data(self) -> Vec<Complex<f64>> {
        self.data
    }
}

/// Row-major grid of normalized magnitude values in [0, 1].
///
/// For every non-degenerate spectrum the peak value is exactly 1.0; an
/// all-zero spectrum produces an all-zero grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl MagnitudeGrid {
    /// Create a grid from row-major values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            width * height,
            "value buffer does not cover {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            values,
        }
    }

    /// Grid width in values
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in values
    pub fn height(&self) -> usize {
        self.height
    }

    /// The row-major magnitude values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The largest value in the grid, or 0.0 for an empty grid
    pub fn max_value(&self) -> f64 {
        self.values.iter().fold(0.0f64, |acc, &v| acc.max(v))
    }
}

/// Single-channel 8-bit output raster, no alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl Raster {
    /// Create a raster from row-major bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != width * height`.
    pub fn new(width: usize, height: usize, bytes: Vec<u8>) -> Self {
        assert_eq!(
            bytes.len(),
            width * height,
            "byte buffer does not cover {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            bytes,
        }
    }

    /// Raster width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// The row-major pixel bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the raster, returning the raw pixel bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_grid_accessors() {
        let grid = SampleGrid::new(2, 3, vec![0.0; 6]);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not cover")]
    fn test_sample_grid_length_mismatch_panics() {
        let _ = SampleGrid::new(2, 2, vec![0.0; 3]);
    }

    #[test]
    fn test_complex_grid_coefficient_indexing() {
        let data: Vec<Complex<f64>> = (0..6).map(|i| Complex::new(i as f64, 0.0)).collect();
        let grid = ComplexGrid::new(3, 2, data);
        assert_eq!(grid.coefficient(0, 0), grid.dc());
        assert_eq!(grid.coefficient(2, 1), Complex::new(5.0, 0.0));
    }

    #[test]
    fn test_magnitude_grid_max_value() {
        let grid = MagnitudeGrid::new(2, 2, vec![0.25, 1.0, 0.5, 0.0]);
        assert_eq!(grid.max_value(), 1.0);

        let empty = MagnitudeGrid::new(0, 0, Vec::new());
        assert_eq!(empty.max_value(), 0.0);
    }

    #[test]
    fn test_raster_round_trip() {
        let raster = Raster::new(2, 2, vec![0, 64, 128, 255]);
        assert_eq!(raster.bytes(), &[0, 64, 128, 255]);
        assert_eq!(raster.into_bytes(), vec![0, 64, 128, 255]);
    }
}
