use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{AspectRatio, ResampleFilter};

/// WEBP quality used when none is given.
pub const DEFAULT_QUALITY: f32 = 90.0;

/// Crop parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    pub ratio: AspectRatio,
    /// Lossy WEBP quality in [0, 100]
    pub quality: f32,
    /// Target long side in pixels after cropping; None means keep the crop size
    pub size: Option<u32>,
    pub filter: ResampleFilter,
    /// If true, write a JSON sidecar next to the output
    pub sidecar: bool,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            ratio: AspectRatio::PORTRAIT_9_16,
            quality: DEFAULT_QUALITY,
            size: None,
            filter: ResampleFilter::Lanczos3,
            sidecar: false,
        }
    }
}

impl CropParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading crop params from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        let params: CropParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(Error::InvalidArgument {
                arg: "quality",
                value: self.quality.to_string(),
            });
        }
        if self.size == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_operating_point() {
        let p = CropParams::default();
        assert_eq!(p.ratio, AspectRatio::PORTRAIT_9_16);
        assert_eq!(p.quality, 90.0);
        assert_eq!(p.size, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let p: CropParams = serde_json::from_str(r#"{ "ratio": "4:5", "size": 1080 }"#).unwrap();
        assert_eq!(p.ratio, AspectRatio::new(4, 5).unwrap());
        assert_eq!(p.size, Some(1080));
        assert_eq!(p.quality, DEFAULT_QUALITY);
        assert_eq!(p.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        std::fs::write(&path, r#"{ "quality": 75, "filter": "catmull-rom", "sidecar": true }"#)
            .unwrap();
        let p = CropParams::from_json_file(&path).unwrap();
        assert_eq!(p.quality, 75.0);
        assert_eq!(p.filter, ResampleFilter::CatmullRom);
        assert!(p.sidecar);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let p = CropParams {
            quality: 101.0,
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let p = CropParams {
            size: Some(0),
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }
}
