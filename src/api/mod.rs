//! High-level, ergonomic library API: run both parsing stages over a token list
//! and get back a `ParseReport`. Prefer these entrypoints over calling
//! `core::locate` and `core::build` directly.
use tracing::debug;

use crate::core::build::make_config_with;
use crate::core::config::Config;
use crate::core::error::ParseError;
use crate::core::locate::find_all_flags;
use crate::error::{Error, Result};
use crate::io::folder::{DirLister, FsDirLister};

/// Outcome of one parse: the (possibly partial) config and every rejected flag
#[derive(Debug, Default)]
pub struct ParseReport {
    pub config: Config,
    pub errors: Vec<ParseError>,
}

impl ParseReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The config if no flag was rejected, otherwise all errors at once.
    pub fn into_result(self) -> Result<Config> {
        if self.errors.is_empty() {
            Ok(self.config)
        } else {
            Err(Error::InvalidArguments {
                errors: self.errors,
            })
        }
    }
}

/// Parse command-line tokens (program name excluded), listing `-f` folders on disk.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> ParseReport {
    parse_args_with(tokens, &FsDirLister)
}

/// Parse command-line tokens with a caller-supplied directory lister.
pub fn parse_args_with<S: AsRef<str>>(tokens: &[S], lister: &dyn DirLister) -> ParseReport {
    let positions = find_all_flags(tokens);
    debug!("Located {} flag(s) in {} token(s)", positions.len(), tokens.len());
    let (config, errors) = make_config_with(tokens, &positions, lister);
    ParseReport { config, errors }
}

/// Parse the current process arguments, skipping the program name.
///
/// ```rust,no_run
/// let report = gridpro::parse_env_args();
/// for e in &report.errors {
///     eprintln!("{e}");
/// }
/// let config = report.into_result()?;
/// println!("{} input(s)", config.input_files.len());
/// # Ok::<(), gridpro::Error>(())
/// ```
pub fn parse_env_args() -> ParseReport {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&tokens)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::types::{GridSize, Resolution};

    fn two_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(vec![dir.join("a.jpg"), dir.join("b.jpg")])
    }

    #[test]
    fn clean_parse_converts_to_config() {
        let report = parse_args(&["-i", "input1.jpg", "-g", "8x8", "-r", "1024*768"]);
        assert!(report.is_ok());
        let cfg = report.into_result().unwrap();
        assert_eq!(cfg.grid, Some(GridSize { rows: 8, cols: 8 }));
        assert_eq!(
            cfg.resolution,
            Some(Resolution {
                width: 1024,
                height: 768
            })
        );
    }

    #[test]
    fn rejected_flags_become_invalid_arguments() {
        let report = parse_args(&["-i", "-g", "25i25", "-r", "x"]);
        assert!(!report.is_ok());
        match report.into_result() {
            Err(Error::InvalidArguments { errors }) => assert_eq!(errors.len(), 2),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[test]
    fn custom_lister_feeds_folder_flag() {
        let report = parse_args_with(&["-f", "shots", "-g", "1*2"], &two_images);
        assert!(report.is_ok());
        assert_eq!(report.config.input_files.len(), 2);
    }

    #[test]
    fn empty_tokens_give_default_report() {
        let tokens: Vec<String> = Vec::new();
        let report = parse_args(&tokens);
        assert!(report.is_ok());
        assert_eq!(report.config, Config::default());
    }
}
