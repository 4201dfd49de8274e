//! Configuration module for fftvis-rs
//!
//! This module handles the small amount of configuration the tool has:
//! where spectrum images are written and how their filenames are
//! derived. Configuration never changes the numeric pipeline — the
//! transform, normalization, and quantization have no knobs.
//!
//! # File format
//!
//! Plain TOML, loaded from a path given on the command line or from
//! `fftvis.toml` in the working directory:
//!
//! ```toml
//! [output]
//! directory = "spectra"
//! suffix = "_fft"
//! ```

use crate::error::{FftVisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration filename looked up in the working directory
pub const CONFIG_FILE: &str = "fftvis.toml";

/// Default suffix appended to an input's file stem
pub const DEFAULT_SUFFIX: &str = "_fft";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output location and naming
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and under what names spectrum images are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory spectrum images are written to; `None` writes next to
    /// each input
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Suffix appended to the input file stem
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            suffix: default_suffix(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FftVisError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            FftVisError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load configuration from `path`, falling back to defaults when
    /// the file is absent. A file that exists but fails to parse is
    /// reported at WARN and replaced with defaults rather than aborting
    /// the run.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            FftVisError::Config(format!("Failed to serialize configuration: {}", e))
        })?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Compute the output path for one input image.
    ///
    /// The output lands in `output.directory` when set, otherwise next
    /// to the input; the filename is the input's stem plus
    /// `output.suffix`, always with a `.png` extension.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let directory = match &self.output.directory {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        directory.join(format!("{}{}.png", stem, self.output.suffix))
    }
}
