use clap::Parser;
use std::path::PathBuf;

use ratiocrop::{AspectRatio, ResampleFilter};

#[derive(Parser)]
#[command(name = "ratiocrop", version, about = "Center-crop an image to an aspect ratio and save it as WEBP")]
pub struct CliArgs {
    /// Source image (WEBP, PNG, JPEG, ...)
    pub input: PathBuf,

    /// Destination WEBP file; its directory must already exist
    pub output: PathBuf,

    /// Target aspect ratio as W:H [default: 9:16]
    #[arg(short, long)]
    pub ratio: Option<AspectRatio>,

    /// Lossy WEBP quality, 0-100 [default: 90]
    #[arg(short, long)]
    pub quality: Option<f32>,

    /// Long side of the output after cropping. Options:
    /// - Custom: any positive integer (e.g., 1080)
    /// - Original: "original" (no scaling) [default]
    #[arg(long)]
    pub size: Option<String>,

    /// Resampling filter used when --size scales the crop [default: lanczos3]
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Write a JSON sidecar next to the output
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// JSON preset with crop parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
