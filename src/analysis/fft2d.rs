//! 2D radix-2 FFT over power-of-two sample grids.
//!
//! The transform is separable: a 1D decimation-in-time pass over every
//! row, then over every column. Column passes gather into a single
//! reusable column buffer instead of transposing the whole grid. The
//! direction is forward and unnormalized, so coefficient (0, 0) holds
//! the raw sum of all input samples.
//!
//! Power-of-two dimensions are a hard precondition of the radix-2
//! algorithm; other sizes are rejected outright rather than padded or
//! routed through a mixed-radix fallback.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::error::{FftVisError, Result};
use crate::types::{ComplexGrid, SampleGrid};

/// Precomputed transform plan for one power-of-two length.
///
/// Holds the forward twiddle factors `e^(-2πik/n)` for `k < n/2`. A plan
/// is built per transform call and dropped when the call returns;
/// callers running many same-size 1D passes directly may hold one
/// themselves.
pub struct FftPlan {
    len: usize,
    twiddles: Vec<Complex<f64>>,
}

impl FftPlan {
    /// Build a plan for transforms of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a power of two. [`transform_2d`] validates
    /// dimensions before any plan is built.
    pub fn new(len: usize) -> Self {
        assert!(
            len.is_power_of_two(),
            "plan length {} is not a power of two",
            len
        );
        let twiddles = (0..len / 2)
            .map(|k| {
                let angle = -2.0 * PI * k as f64 / len as f64;
                Complex::new(angle.cos(), angle.sin())
            })
            .collect();
        Self { len, twiddles }
    }

    /// Transform length this plan was built for
    pub fn len(&self) -> usize {
        self.len
    }

    /// In-place forward FFT of one row or column.
    ///
    /// Bit-reversal permutation followed by `log2(n)` butterfly stages
    /// using the precomputed twiddles.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` differs from the plan length.
    pub fn process(&self, data: &mut [Complex<f64>]) {
        let n = self.len;
        assert_eq!(data.len(), n, "buffer length does not match plan");
        if n <= 1 {
            return;
        }

        // Bit-reversal permutation
        let mut j = 0usize;
        for i in 1..n {
            let mut bit = n >> 1;
            while j & bit != 0 {
                j ^= bit;
                bit >>= 1;
            }
            j ^= bit;
            if i < j {
                data.swap(i, j);
            }
        }

        // Butterfly stages; a stage of length `len` reads twiddles at
        // stride n / len.
        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let w = self.twiddles[k * stride];
                    let u = data[start + k];
                    let v = data[start + k + half] * w;
                    data[start + k] = u + v;
                    data[start + k + half] = u - v;
                }
            }
            len <<= 1;
        }
    }
}

/// Compute the forward 2D FFT of a real-valued sample grid.
///
/// The imaginary component of every input sample starts at zero. All
/// row passes complete before the first column pass begins; the column
/// passes read values written by every row pass. Plans and the column
/// scratch buffer live only for the duration of this call.
///
/// # Errors
///
/// Returns [`FftVisError::EmptyInput`] if either dimension is zero, and
/// [`FftVisError::UnsupportedSize`] if either dimension is not a power
/// of two. No padding or truncation is ever applied.
pub fn transform_2d(grid: SampleGrid) -> Result<ComplexGrid> {
    let width = grid.width();
    let height = grid.height();

    if grid.is_empty() {
        return Err(FftVisError::EmptyInput);
    }
    if !width.is_power_of_two() || !height.is_power_of_two() {
        return Err(FftVisError::UnsupportedSize { width, height });
    }

    tracing::debug!("Transforming {}x{} sample grid", width, height);

    let mut data: Vec<Complex<f64>> = grid
        .into_samples()
        .into_iter()
        .map(|s| Complex::new(s, 0.0))
        .collect();

    let row_plan = FftPlan::new(width);
    for row in data.chunks_exact_mut(width) {
        row_plan.process(row);
    }

    let col_plan = FftPlan::new(height);
    let mut col_buf = vec![Complex::new(0.0, 0.0); height];
    for col in 0..width {
        for r in 0..height {
            col_buf[r] = data[r * width + col];
        }
        col_plan.process(&mut col_buf);
        for r in 0..height {
            data[r * width + col] = col_buf[r];
        }
    }

    Ok(ComplexGrid::new(width, height, data))
}
