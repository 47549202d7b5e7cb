use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Scale `(cols, rows)` so the long side equals `target_size`, keeping the aspect.
/// Upscaling is refused: a target above the long side keeps the original dimensions.
pub fn calculate_resize_dimensions(
    original_cols: u32,
    original_rows: u32,
    target_size: u32,
) -> (u32, u32) {
    let short_side = original_rows.min(original_cols);
    let long_side = original_rows.max(original_cols);

    if target_size >= long_side {
        if target_size > long_side {
            warn!(
                "Target size {} is larger than original long side {}. Keeping original dimensions {}x{}",
                target_size, long_side, original_cols, original_rows
            );
        }
        return (original_cols, original_rows);
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as u32).max(1);

    if original_cols > original_rows {
        (target_size, new_short_side)
    } else {
        (new_short_side, target_size)
    }
}

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resize a packed 8-bit buffer of `pixel_type` pixels, taking ownership of `data`.
pub fn resize_u8_buffer(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    pixel_type: PixelType,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, pixel_type)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

/// Downscale `image` so its long side is `target_size`; `None` returns it unchanged.
/// Images without alpha are resized as RGB8, everything else as RGBA8.
pub fn resize_to_long_side(
    image: DynamicImage,
    target_size: Option<u32>,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    let Some(size) = target_size else {
        return Ok(image);
    };

    let (cols, rows) = (image.width(), image.height());
    let (target_cols, target_rows) = calculate_resize_dimensions(cols, rows, size);
    if (target_cols, target_rows) == (cols, rows) {
        return Ok(image);
    }

    info!(
        "Resizing {}x{} to {}x{} ({})",
        cols, rows, target_cols, target_rows, filter
    );
    let bad_len = || Error::Resize("resized buffer has unexpected length".to_string());

    if image.color().has_alpha() {
        let data = image.into_rgba8().into_raw();
        let out = resize_u8_buffer(
            data,
            cols,
            rows,
            target_cols,
            target_rows,
            PixelType::U8x4,
            filter,
        )?;
        let resized = RgbaImage::from_raw(target_cols, target_rows, out).ok_or_else(bad_len)?;
        Ok(DynamicImage::ImageRgba8(resized))
    } else {
        let data = image.into_rgb8().into_raw();
        let out = resize_u8_buffer(
            data,
            cols,
            rows,
            target_cols,
            target_rows,
            PixelType::U8x3,
            filter,
        )?;
        let resized = RgbImage::from_raw(target_cols, target_rows, out).ok_or_else(bad_len)?;
        Ok(DynamicImage::ImageRgb8(resized))
    }
}
