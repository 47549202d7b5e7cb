//! I/O layer: decoding source rasters and the `writers` for lossy WEBP output
//! and JSON sidecars.
pub mod reader;
pub use reader::decode_image;

pub mod writers;
