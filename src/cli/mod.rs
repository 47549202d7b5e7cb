//! Command Line Interface (CLI) layer for ratiocrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags and an optional
//! preset into `CropParams` and runs a single crop.
//!
//! If you are embedding ratiocrop into another application, prefer using
//! the high-level `ratiocrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
