use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use tracing::info;
use webp::Encoder;

use crate::error::{Error, Result};

/// Encode `image` as lossy WEBP through libwebp so `quality` is honored.
pub fn encode_webp(image: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    if !(0.0..=100.0).contains(&quality) {
        return Err(Error::InvalidArgument {
            arg: "quality",
            value: quality.to_string(),
        });
    }

    let (width, height) = (image.width(), image.height());
    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };

    let encoded = encoded.map_err(|e| Error::Encode {
        reason: format!("{e:?}"),
    })?;
    Ok(encoded.to_vec())
}

/// Encode fully in memory, then write `output`. A failed encode never creates `output`.
pub fn write_webp(output: &Path, image: &DynamicImage, quality: f32) -> Result<()> {
    let bytes = encode_webp(image, quality)?;

    let write_err = |source: std::io::Error| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(
        "Wrote WEBP {:?}: {}x{}, quality {}, {:.1} KB",
        output,
        image.width(),
        image.height(),
        quality,
        bytes.len() as f64 / 1024.0
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn produces_riff_webp() {
        let data = encode_webp(&gradient(45, 80), 90.0).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn alpha_images_encode() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(9, 16, Rgba([1, 2, 3, 128])));
        let data = encode_webp(&img, 90.0).unwrap();
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn quality_controls_size() {
        let img = gradient(180, 320);
        let low = encode_webp(&img, 10.0).unwrap();
        let high = encode_webp(&img, 95.0).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        assert!(encode_webp(&gradient(9, 16), 120.0).is_err());
        assert!(encode_webp(&gradient(9, 16), -1.0).is_err());

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.webp");
        assert!(write_webp(&out, &gradient(9, 16), 120.0).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn missing_parent_dir_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.webp");
        let err = write_webp(&out, &gradient(9, 16), 90.0).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!out.exists());
    }
}
