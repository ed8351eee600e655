//! Command Line Interface (CLI) layer for GRIDPRO.
//!
//! This module defines the binary's own switches (`args`), its error type
//! (`errors`), and the orchestration logic (`runner`) that feeds the remaining
//! tokens to the library parser and reports the outcome.
//!
//! If you are embedding GRIDPRO into another application, prefer the
//! high-level `gridpro::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
