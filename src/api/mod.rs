//! High-level, ergonomic library API: crop an in-memory image, crop a file to an
//! encoded buffer, or run the whole decode → crop → encode → write sequence.
//! Prefer these entrypoints over the low-level processing modules.
use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::CropParams;
use crate::core::processing::crop::{CropBox, crop_to_ratio};
use crate::core::processing::resize::resize_to_long_side;
use crate::error::{Error, Result};
use crate::io::reader::decode_image;
use crate::io::writers::metadata::{create_crop_metadata_sidecar, sidecar_path};
use crate::io::writers::webp::{encode_webp, write_webp};
use crate::types::AspectRatio;

/// Result of in-memory cropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub image: DynamicImage,
    pub source_width: u32,
    pub source_height: u32,
    pub crop_box: CropBox,
}

/// What `crop_file_to_path` did, suitable for logging or a sidecar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReport {
    pub source: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub crop_box: CropBox,
    pub output: PathBuf,
    pub output_width: u32,
    pub output_height: u32,
    pub ratio: AspectRatio,
    pub quality: f32,
    pub size: Option<u32>,
}

/// Center-crop `image` to `params.ratio`, then downscale if `params.size` is set.
pub fn crop_image(image: &DynamicImage, params: &CropParams) -> Result<CroppedImage> {
    params.validate()?;
    crop_validated(image, params)
}

fn crop_validated(image: &DynamicImage, params: &CropParams) -> Result<CroppedImage> {
    let (cropped, crop_box) = crop_to_ratio(image, params.ratio)?;
    let cropped = resize_to_long_side(cropped, params.size, params.filter)?;

    Ok(CroppedImage {
        image: cropped,
        source_width: image.width(),
        source_height: image.height(),
        crop_box,
    })
}

/// Decode, crop and encode `input` to WEBP bytes (no disk write)
pub fn crop_file_to_buffer(input: &Path, params: &CropParams) -> Result<(CroppedImage, Vec<u8>)> {
    params.validate()?;
    let cropped = {
        let image = decode_image(input)?;
        crop_validated(&image, params)?
    };
    let bytes = encode_webp(&cropped.image, params.quality)?;
    Ok((cropped, bytes))
}

/// Decode `input`, crop it, and write the result to `output` as WEBP.
///
/// Nothing is written to `output` unless decoding and cropping succeed. The parent
/// directory of `output` must already exist. With `params.sidecar`, the JSON sidecar is
/// written after the image, so a sidecar failure returns an error while `output` is
/// already saved. An `output` ending in `.json` is refused up front in that mode, since
/// the sidecar would overwrite it.
pub fn crop_file_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<CropReport> {
    params.validate()?;
    if params.sidecar && sidecar_collides(output) {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        });
    }
    info!("Processing: {:?} -> {:?}", input, output);

    // the decoded source is released before encoding starts
    let cropped = {
        let image = decode_image(input)?;
        crop_validated(&image, params)?
    };

    write_webp(output, &cropped.image, params.quality)?;

    let report = CropReport {
        source: input.to_path_buf(),
        source_width: cropped.source_width,
        source_height: cropped.source_height,
        crop_box: cropped.crop_box,
        output: output.to_path_buf(),
        output_width: cropped.image.width(),
        output_height: cropped.image.height(),
        ratio: params.ratio,
        quality: params.quality,
        size: params.size,
    };

    if params.sidecar {
        create_crop_metadata_sidecar(&report)?;
    }

    info!(
        "Successfully processed: {:?} -> {:?} ({}x{})",
        input, output, report.output_width, report.output_height
    );
    Ok(report)
}

fn sidecar_collides(output: &Path) -> bool {
    let same_ext = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    same_ext || sidecar_path(output) == output
}
