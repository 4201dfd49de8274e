//! Error handling for fftvis-rs
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate. Every pipeline error is scoped to a single
//! image: batch processing drops the failed image and continues.

use thiserror::Error;

/// Main error type for fftvis-rs operations
#[derive(Error, Debug)]
pub enum FftVisError {
    /// The input image has zero width or height
    #[error("Empty input: image has zero width or height")]
    EmptyInput,

    /// A grayscale backing buffer could not be produced for the
    /// requested dimensions
    #[error("Render context error: {0}")]
    RenderContext(String),

    /// The grid dimensions are not powers of two, which the radix-2
    /// transform requires
    #[error("Unsupported size {width}x{height}: dimensions must be powers of two")]
    UnsupportedSize { width: usize, height: usize },

    /// The output raster could not be constructed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Errors from decoding or re-encoding image files
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FftVisError>,
    },
}

impl FftVisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FftVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for fftvis-rs operations
pub type Result<T> = std::result::Result<T, FftVisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
