use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::AspectRatio;

/// Rectangle retained by a crop, in source pixel coordinates (right/bottom exclusive).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Compute the largest centered box of `width x height` matching `ratio`.
///
/// Wider-than-target images lose columns on both sides and keep their full height.
/// Everything else, including an exact ratio match, loses rows top and bottom and keeps
/// the full width. Sizes are floored, so the result may be up to one pixel off the exact
/// ratio in the reduced dimension.
pub fn compute_crop_box(width: u32, height: u32, ratio: AspectRatio) -> Result<CropBox> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let (w, h) = (width as u64, height as u64);
    let (rw, rh) = (ratio.width() as u64, ratio.height() as u64);

    let (new_width, new_height) = if w * rh > h * rw {
        // new_width < width here, so it always fits in u32
        ((h * rw / rh) as u32, height)
    } else {
        (width, (w * rh / rw) as u32)
    };

    if new_width == 0 || new_height == 0 {
        return Err(Error::DegenerateCrop {
            width,
            height,
            ratio,
        });
    }

    let left = (width - new_width) / 2;
    let top = (height - new_height) / 2;

    debug!(
        "Crop box for {}x{} at {}: left={}, top={}, size={}x{}",
        width, height, ratio, left, top, new_width, new_height
    );

    Ok(CropBox {
        left,
        top,
        right: left + new_width,
        bottom: top + new_height,
    })
}

/// Center-crop `image` to `ratio`. The source image is left untouched.
pub fn crop_to_ratio(image: &DynamicImage, ratio: AspectRatio) -> Result<(DynamicImage, CropBox)> {
    let crop_box = compute_crop_box(image.width(), image.height(), ratio)?;
    info!(
        "Cropping {}x{} to {}x{}",
        image.width(),
        image.height(),
        crop_box.width(),
        crop_box.height()
    );
    let cropped = image.crop_imm(
        crop_box.left,
        crop_box.top,
        crop_box.width(),
        crop_box.height(),
    );
    Ok((cropped, crop_box))
}
