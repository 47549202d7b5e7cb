//! Core processing building blocks: the center-crop geometry, the optional
//! long-side downscale, and the parameter set tying them together. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
