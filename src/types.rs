//! Shared types used across GRIDPRO.
//! Includes the recognized command-line `Flag`s, the flag-position map, and the
//! two dimension records (`GridSize`, `Resolution`) produced by the parser.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recognized command-line flag. Matching is exact and case-sensitive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Flag {
    /// `-i`: explicit list of image files
    InputFiles,
    /// `-f`: directory whose files become the inputs
    InputFolder,
    /// `-g`: grid dimensions, `RxC` or `R*C`
    Grid,
    /// `-r`: output resolution, `WxH` or `W*H`
    Resolution,
}

impl Flag {
    pub const ALL: [Flag; 4] = [
        Flag::InputFiles,
        Flag::InputFolder,
        Flag::Grid,
        Flag::Resolution,
    ];

    /// The literal token that introduces this flag on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Flag::InputFiles => "-i",
            Flag::InputFolder => "-f",
            Flag::Grid => "-g",
            Flag::Resolution => "-r",
        }
    }

    pub fn from_token(token: &str) -> Option<Flag> {
        Flag::ALL.into_iter().find(|flag| flag.token() == token)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Token index -> flag found at that index. Iterates in ascending index order.
pub type FlagPositions = BTreeMap<usize, Flag>;

/// Row/column partition of the collage
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Target pixel size of the rendered output
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tokens_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_token(flag.token()), Some(flag));
        }
    }

    #[test]
    fn flag_matching_is_exact() {
        assert_eq!(Flag::from_token("-I"), None);
        assert_eq!(Flag::from_token("--i"), None);
        assert_eq!(Flag::from_token("-i "), None);
        assert_eq!(Flag::from_token("-x"), None);
        assert_eq!(Flag::from_token(""), None);
    }

    #[test]
    fn dimensions_display_with_x_separator() {
        assert_eq!(GridSize { rows: 3, cols: 4 }.to_string(), "3x4");
        assert_eq!(
            Resolution {
                width: 1024,
                height: 768
            }
            .to_string(),
            "1024x768"
        );
    }
}
