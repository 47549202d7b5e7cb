#![doc = r#"
ratiocrop — center-crop images to a fixed aspect ratio and re-encode them as WEBP.

The crate takes one decoded raster, computes the largest centered rectangle matching a
target aspect ratio (portrait 9:16 unless told otherwise), extracts it, and writes the
result as lossy WEBP (quality 90 by default). It powers the `ratiocrop` CLI and can be
embedded in your own Rust applications.

Cropping rule
-------------
- Image wider than the target: full height is kept, width becomes
  `floor(height * ratio)`, and the crop is centered horizontally.
- Otherwise (taller, or exactly on ratio): full width is kept, height becomes
  `floor(width / ratio)`, and the crop is centered vertically.

Quick start: crop a file to a file
----------------------------------
```rust,no_run
use std::path::Path;
use ratiocrop::{crop_file_to_path, CropParams};

fn main() -> ratiocrop::Result<()> {
    let report = crop_file_to_path(
        Path::new("/site/public/images/hero/heroimage.webp"),
        Path::new("/site/public/images/hero/hero-mobile.webp"),
        &CropParams::default(),
    )?;
    println!("{}x{}", report.output_width, report.output_height);
    Ok(())
}
```

Crop geometry only
------------------
```rust
use ratiocrop::{compute_crop_box, AspectRatio};

let b = compute_crop_box(1920, 1080, AspectRatio::PORTRAIT_9_16).unwrap();
assert_eq!((b.left, b.top, b.width(), b.height()), (656, 0, 607, 1080));
```

Error handling
--------------
All public functions return `ratiocrop::Result<T>`; match on `ratiocrop::Error` to tell a
source that cannot be decoded from a destination that cannot be written.

```rust,no_run
use std::path::Path;
use ratiocrop::{crop_file_to_path, CropParams, Error};

match crop_file_to_path(Path::new("/missing.webp"), Path::new("/out.webp"), &CropParams::default()) {
    Ok(_) => {}
    Err(Error::Decode { path, source }) => eprintln!("bad source {path:?}: {source}"),
    Err(Error::Write { path, source }) => eprintln!("bad destination {path:?}: {source}"),
    Err(other) => eprintln!("other error: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop geometry, downscale, and `CropParams`.
- [`types`] — `AspectRatio` and `ResampleFilter`.
- [`io`] — decoding and the WEBP/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::CropParams;
pub use crate::core::processing::crop::{CropBox, compute_crop_box, crop_to_ratio};
pub use crate::error::{Error, Result};
pub use crate::types::{AspectRatio, ResampleFilter};

// Codec helpers
pub use crate::io::reader::decode_image;
pub use crate::io::writers::webp::{encode_webp, write_webp};

// High-level API re-exports
pub use crate::api::{CropReport, CroppedImage, crop_file_to_buffer, crop_file_to_path, crop_image};
