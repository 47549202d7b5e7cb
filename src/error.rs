//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Decoding, encoding and writing failures are kept apart so callers can tell a bad
//! source from a bad destination; argument validation and crop geometry get their own
//! variants.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::AspectRatio;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot encode WEBP: {reason}")]
    Encode { reason: String },

    #[error("Cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Crop of {width}x{height} to {ratio} leaves no pixels")]
    DegenerateCrop {
        width: u32,
        height: u32,
        ratio: AspectRatio,
    },

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
