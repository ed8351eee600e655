//! GRIDPRO CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse the binary's switches,
//! run the collage argument parser on the rest, and exit with appropriate status.
//! For programmatic use, prefer the library API (`gridpro::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
