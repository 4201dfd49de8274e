//! FFT Spectrum Visualizer - Main Entry Point
//!
//! Decodes each input image, runs the spectrum pipeline, and writes
//! one grayscale PNG per successful input. The batch is best-effort:
//! a failed image is logged and skipped, never aborting the rest.

use anyhow::Context;
use clap::Parser;
use fftvis_rs::config::{AppConfig, CONFIG_FILE};
use fftvis_rs::pipeline;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fftvis")]
#[command(about = "Render the FFT magnitude spectrum of raster images as grayscale PNGs")]
#[command(version)]
struct Cli {
    /// Input image files (PNG, JPEG, TIFF, BMP); dimensions must be
    /// powers of two
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory to write spectrum images to (defaults to each input's
    /// directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Suffix appended to each input's file stem
    #[arg(long)]
    suffix: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fftvis_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AppConfig::load_or_default(Path::new(CONFIG_FILE)),
    };

    // CLI flags override file values.
    if let Some(dir) = cli.out_dir {
        config.output.directory = Some(dir);
    }
    if let Some(suffix) = cli.suffix {
        config.output.suffix = suffix;
    }

    if let Some(dir) = &config.output.directory {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    tracing::info!("Processing {} image(s)", cli.inputs.len());

    let mut produced = 0usize;
    for input in &cli.inputs {
        match process_one(input, &config) {
            Ok(output) => {
                produced += 1;
                tracing::info!("{} -> {}", input.display(), output.display());
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", input.display(), e);
            }
        }
    }

    tracing::info!("Wrote {}/{} spectrum image(s)", produced, cli.inputs.len());
    if produced == 0 {
        anyhow::bail!("no input image could be processed");
    }
    Ok(())
}

/// Decode one input, run the pipeline, and save the spectrum PNG.
fn process_one(input: &Path, config: &AppConfig) -> anyhow::Result<PathBuf> {
    let image =
        pipeline::load_image(input).with_context(|| format!("decoding {}", input.display()))?;
    let raster = pipeline::process_image(&image)?;
    let gray = pipeline::raster_to_image(raster)?;

    let output = config.output_path(input);
    gray.save(&output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(output)
}
