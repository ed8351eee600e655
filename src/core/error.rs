//! Per-flag validation errors. `make_config` collects one of these for every flag
//! whose arguments were rejected and keeps going with the remaining flags.
use thiserror::Error;

use crate::types::Flag;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("wrong grid format: {value:?}, expected RxC or R*C with positive integers")]
    GridFormat { value: String },

    #[error("wrong resolution format: {value:?}, expected WxH or W*H with positive integers")]
    ResolutionFormat { value: String },

    #[error("folder flag -f expects exactly one directory, got {count} argument(s)")]
    FolderArgs { count: usize },

    #[error("cannot list folder {path}: {source}")]
    ReadFolder {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// The flag whose arguments produced this error
    pub fn flag(&self) -> Flag {
        match self {
            ParseError::GridFormat { .. } => Flag::Grid,
            ParseError::ResolutionFormat { .. } => Flag::Resolution,
            ParseError::FolderArgs { .. } | ParseError::ReadFolder { .. } => Flag::InputFolder,
        }
    }
}
