use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Decode the raster at `path`. The format is sniffed from the content, so a WEBP
/// saved with a misleading extension still decodes.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    let format = reader.format();
    let image = reader.decode().map_err(decode_err)?;

    info!(
        "Decoded {:?} ({:?}): {}x{} {:?}",
        path,
        format,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_image(&dir.path().join("nope.webp")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().starts_with("Cannot decode"));
        assert!(err.to_string().contains("nope.webp"));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.webp");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(decode_image(&path), Err(Error::Decode { .. })));
    }
}
