use tracing::debug;
use tracing_subscriber::EnvFilter;

use ratiocrop::{CropParams, CropReport, crop_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_size(size: &str) -> Result<Option<u32>, AppError> {
    let size = size.trim();
    if size.eq_ignore_ascii_case("original") {
        return Ok(None);
    }

    let parsed_size = size.parse::<u32>().map_err(|_| AppError::InvalidSize {
        size: size.to_string(),
    })?;

    if parsed_size == 0 {
        return Err(AppError::ZeroSize { size: parsed_size });
    }

    Ok(Some(parsed_size))
}

/// Flags override the preset, the preset overrides the defaults.
fn resolve_params(args: &CliArgs) -> Result<CropParams, AppError> {
    let mut params = match &args.config {
        Some(path) => CropParams::from_json_file(path)?,
        None => CropParams::default(),
    };

    if let Some(ratio) = args.ratio {
        params.ratio = ratio;
    }
    if let Some(quality) = args.quality {
        params.quality = quality;
    }
    if let Some(size) = &args.size {
        params.size = parse_size(size)?;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if args.sidecar {
        params.sidecar = true;
    }

    params.validate()?;
    debug!("Resolved crop params: {:?}", params);
    Ok(params)
}

fn process(args: &CliArgs) -> Result<CropReport, AppError> {
    let params = resolve_params(args)?;
    Ok(crop_file_to_path(&args.input, &args.output, &params)?)
}

fn print_report(report: &CropReport) {
    println!(
        "Original dimensions: ({}, {})",
        report.source_width, report.source_height
    );
    println!(
        "Cropping to: {}x{}",
        report.crop_box.width(),
        report.crop_box.height()
    );
    if (report.output_width, report.output_height)
        != (report.crop_box.width(), report.crop_box.height())
    {
        println!(
            "Resized to: {}x{}",
            report.output_width, report.output_height
        );
    }
    println!("Saved to {}", report.output.display());
}

/// Run one crop. Every failure is printed to stdout as `Error: ...` and swallowed,
/// so the process exits with status 0 either way.
pub fn run(args: CliArgs) {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match process(&args) {
        Ok(report) => print_report(&report),
        Err(e) => println!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ratiocrop::{AspectRatio, ResampleFilter};

    #[test]
    fn size_accepts_original_and_positive_integers() {
        assert_eq!(parse_size("original").unwrap(), None);
        assert_eq!(parse_size(" Original ").unwrap(), None);
        assert_eq!(parse_size("1080").unwrap(), Some(1080));
        assert_eq!(parse_size(" 1080 ").unwrap(), Some(1080));
        assert!(matches!(parse_size("0"), Err(AppError::ZeroSize { .. })));
        assert!(matches!(parse_size("big"), Err(AppError::InvalidSize { .. })));
    }

    #[test]
    fn defaults_without_flags() {
        let args = CliArgs::parse_from(["ratiocrop", "in.webp", "out.webp"]);
        assert_eq!(resolve_params(&args).unwrap(), CropParams::default());
    }

    #[test]
    fn flags_override_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("preset.json");
        std::fs::write(&preset, r#"{ "ratio": "4:5", "quality": 70, "size": 512 }"#).unwrap();

        let args = CliArgs::parse_from([
            "ratiocrop",
            "in.webp",
            "out.webp",
            "--config",
            preset.to_str().unwrap(),
            "--quality",
            "85",
            "--filter",
            "nearest",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.ratio, AspectRatio::new(4, 5).unwrap());
        assert_eq!(params.quality, 85.0);
        assert_eq!(params.size, Some(512));
        assert_eq!(params.filter, ResampleFilter::Nearest);
    }

    #[test]
    fn bad_quality_is_rejected() {
        let args = CliArgs::parse_from(["ratiocrop", "in.webp", "out.webp", "-q", "150"]);
        assert!(resolve_params(&args).is_err());
    }
}
