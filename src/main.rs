//! ratiocrop CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args and run one crop.
//! Failures are reported on stdout and the process still exits successfully.
//! For programmatic use, prefer the library API (`ratiocrop::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
