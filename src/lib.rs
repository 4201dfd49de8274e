//! # fftvis-rs: FFT Magnitude Spectrum Visualizer
//!
//! Converts raster images into visualized frequency-domain magnitude
//! spectra: grayscale extraction, a two-dimensional radix-2 FFT, peak
//! normalization of the squared magnitudes, and quantization back into
//! an 8-bit grayscale raster.
//!
//! ## Architecture
//!
//! - **Pipeline**: pure stage functions chained by [`process_image`];
//!   batches run best-effort via [`process_batch`]
//! - **Analysis**: hand-written radix-2 decimation-in-time transform
//!   requiring power-of-two dimensions, plus magnitude normalization
//! - **I/O**: image decode/encode through the `image` crate at the
//!   edges; the numeric core only sees owned grids
//!
//! The transform applies no spectral shift and the normalizer applies
//! no logarithmic compression, so for natural images most energy lands
//! in the corner DC coefficient and the spectrum renders mostly black.
//!
//! ## Example
//!
//! ```
//! use fftvis_rs::process_image;
//!
//! // An all-black image has an all-zero (degenerate) spectrum.
//! let image = image::DynamicImage::new_luma8(8, 8);
//! let raster = process_image(&image)?;
//!
//! assert_eq!(raster.bytes().len(), 64);
//! assert!(raster.bytes().iter().all(|&b| b == 0));
//! # Ok::<(), fftvis_rs::FftVisError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use analysis::{normalize_magnitude, transform_2d, FftPlan};
pub use config::AppConfig;
pub use error::{FftVisError, Result};
pub use pipeline::{process_batch, process_image};
pub use types::{ComplexGrid, MagnitudeGrid, Raster, SampleGrid};
