//! Core parsing building blocks: flag discovery (`locate`), per-flag argument
//! validation (`build`, `dims`), the resulting `Config` record and the per-flag
//! `ParseError`. The high-level `api` module wires these together.
pub mod build;
pub mod config;
pub mod dims;
pub mod error;
pub mod locate;
