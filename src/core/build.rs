//! Second parsing stage: walk the located flags in token order, hand each one the
//! tokens up to the next flag, and fill a `Config`. Bad arguments are collected,
//! never fatal.
use std::path::Path;

use tracing::debug;

use crate::core::config::Config;
use crate::core::dims::parse_dimensions;
use crate::core::error::ParseError;
use crate::io::folder::{DirLister, FsDirLister};
use crate::types::{Flag, FlagPositions, GridSize, Resolution};

/// Build a `Config` from `tokens`, listing `-f` folders on the real filesystem.
///
/// `positions` must come from `find_all_flags` over the same tokens.
pub fn make_config<S: AsRef<str>>(
    tokens: &[S],
    positions: &FlagPositions,
) -> (Config, Vec<ParseError>) {
    make_config_with(tokens, positions, &FsDirLister)
}

/// Same as [`make_config`] with an explicit directory lister.
pub fn make_config_with<S: AsRef<str>>(
    tokens: &[S],
    positions: &FlagPositions,
    lister: &dyn DirLister,
) -> (Config, Vec<ParseError>) {
    let mut config = Config::default();
    let mut errors = Vec::new();

    let leading = positions
        .keys()
        .next()
        .copied()
        .unwrap_or(tokens.len())
        .min(tokens.len());
    if leading > 0 {
        debug!("Ignoring {} token(s) not following any flag", leading);
    }

    let mut flags = positions.iter().peekable();
    while let Some((&index, &flag)) = flags.next() {
        let end = flags
            .peek()
            .map_or(tokens.len(), |&(&next, _)| next)
            .min(tokens.len());
        let start = index.saturating_add(1).min(end);
        let span = &tokens[start..end];

        debug!("Flag {} at position {} has {} argument(s)", flag, index, span.len());
        if let Err(e) = apply_flag(&mut config, flag, span, lister) {
            debug!("Rejected {} at position {}: {}", flag, index, e);
            errors.push(e);
        }
    }

    (config, errors)
}

fn apply_flag<S: AsRef<str>>(
    config: &mut Config,
    flag: Flag,
    span: &[S],
    lister: &dyn DirLister,
) -> Result<(), ParseError> {
    match flag {
        Flag::InputFiles => {
            config
                .input_files
                .extend(span.iter().map(|token| token.as_ref().to_string()));
        }
        Flag::InputFolder => {
            let dir = single(span).ok_or(ParseError::FolderArgs { count: span.len() })?;
            let files = lister
                .list_files(Path::new(dir))
                .map_err(|source| ParseError::ReadFolder {
                    path: dir.to_string(),
                    source,
                })?;
            config
                .input_files
                .extend(files.iter().map(|p| p.to_string_lossy().into_owned()));
        }
        Flag::Grid => {
            let (rows, cols) = single(span)
                .and_then(parse_dimensions)
                .ok_or_else(|| ParseError::GridFormat {
                    value: join_span(span),
                })?;
            config.grid = Some(GridSize { rows, cols });
        }
        Flag::Resolution => {
            let (width, height) = single(span)
                .and_then(parse_dimensions)
                .ok_or_else(|| ParseError::ResolutionFormat {
                    value: join_span(span),
                })?;
            config.resolution = Some(Resolution { width, height });
        }
    }
    Ok(())
}

fn single<S: AsRef<str>>(span: &[S]) -> Option<&str> {
    match span {
        [only] => Some(only.as_ref()),
        _ => None,
    }
}

fn join_span<S: AsRef<str>>(span: &[S]) -> String {
    span.iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
