use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

fn ratiocrop(input: &Path, output: &Path) -> Output {
    let exe = std::env::var_os("CARGO_BIN_EXE_ratiocrop")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target").join("debug").join("ratiocrop"));
    Command::new(exe).arg(input).arg(output).output().unwrap()
}

#[test]
fn cli_crops_and_reports_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("hero.png");
    let dst = dir.path().join("hero-mobile.webp");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(1920, 1080, Rgb([200, 120, 40])))
        .save_with_format(&src, ImageFormat::Png)
        .unwrap();

    let out = ratiocrop(&src, &dst);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Original dimensions: (1920, 1080)");
    assert_eq!(lines[1], "Cropping to: 607x1080");
    assert_eq!(lines[2], format!("Saved to {}", dst.display()));

    let decoded = image::open(&dst).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (607, 1080));
}

#[test]
fn cli_prints_error_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("nope.webp");
    let dst = dir.path().join("out.webp");

    let out = ratiocrop(&src, &dst);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Error: "), "stdout was: {stdout}");
    assert!(stdout.contains("nope.webp"));
    assert!(!dst.exists());
}
