use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::api::CropReport;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    report: &'a CropReport,
    created_at: String,
}

/// Sidecar path for `output`: same stem, `.json` extension.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("json")
}

/// Write a JSON sidecar describing how `report.output` was produced
pub fn create_crop_metadata_sidecar(report: &CropReport) -> Result<PathBuf> {
    let sidecar = Sidecar {
        report,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    let path = sidecar_path(&report.output);
    let json_string = serde_json::to_string_pretty(&sidecar)?;
    std::fs::write(&path, json_string)?;

    info!("Created crop metadata sidecar: {:?}", path);
    Ok(path)
}
