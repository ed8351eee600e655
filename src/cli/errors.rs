use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{count} collage argument(s) were rejected")]
    InvalidArguments { count: usize },

    #[error("No input images: pass files with -i or a folder with -f")]
    NoInputs,

    #[error(transparent)]
    Gridpro(#[from] gridpro::Error),
}
