//! Crate-level error type and `Result` alias for the library API.
//! Wraps the accumulated per-flag `ParseError`s when a caller wants a single
//! pass/fail answer, and serialization failures of the `Config` record.
use thiserror::Error;

use crate::core::error::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments:\n{}", join_errors(.errors))]
    InvalidArguments { errors: Vec<ParseError> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
