//! Magnitude reduction and peak normalization of a complex spectrum.

use crate::types::{ComplexGrid, MagnitudeGrid};

/// Reduce a spectrum to normalized per-coefficient magnitudes.
///
/// The value stored for each coefficient is the squared magnitude
/// `re² + im²`; no square root is taken. The grid is then divided by
/// its peak so the largest value is exactly 1.0. An all-zero spectrum
/// has no peak to normalize against and maps to an all-zero grid.
pub fn normalize_magnitude(spectrum: ComplexGrid) -> MagnitudeGrid {
    let width = spectrum.width();
    let height = spectrum.height();

    let mut values: Vec<f64> = spectrum
        .into_data()
        .into_iter()
        .map(|c| c.norm_sqr())
        .collect();

    let max = values.iter().fold(0.0f64, |acc, &v| acc.max(v));
    if max > 0.0 {
        for v in &mut values {
            *v /= max;
        }
    }

    MagnitudeGrid::new(width, height, values)
}
