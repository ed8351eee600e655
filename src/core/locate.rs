use tracing::debug;

use crate::types::{Flag, FlagPositions};

/// Record the index of every token that is a recognized flag.
///
/// Values and unknown dash-prefixed tokens are skipped; this never fails.
pub fn find_all_flags<S: AsRef<str>>(tokens: &[S]) -> FlagPositions {
    let mut positions = FlagPositions::new();
    for (index, token) in tokens.iter().enumerate() {
        if let Some(flag) = Flag::from_token(token.as_ref()) {
            debug!("Found flag {} at position {}", flag, index);
            positions.insert(index, flag);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_have_no_flags() {
        let args: Vec<String> = Vec::new();
        assert_eq!(find_all_flags(&args), FlagPositions::new());
    }

    #[test]
    fn single_input_flag() {
        let got = find_all_flags(&tokens(&["-i", "input.jpg"]));
        let want = FlagPositions::from([(0, Flag::InputFiles)]);
        assert_eq!(got, want);
    }

    #[test]
    fn multiple_flags_keep_their_indices() {
        let got = find_all_flags(&tokens(&["-i", "input1.jpg", "input2.jpg", "-g", "25*25"]));
        let want = FlagPositions::from([(0, Flag::InputFiles), (3, Flag::Grid)]);
        assert_eq!(got, want);
    }

    #[test]
    fn all_four_flags_are_recognized() {
        let got = find_all_flags(&["-f", "dir", "-r", "1x1", "-i", "a", "-g", "2x2"]);
        let want = FlagPositions::from([
            (0, Flag::InputFolder),
            (2, Flag::Resolution),
            (4, Flag::InputFiles),
            (6, Flag::Grid),
        ]);
        assert_eq!(got, want);
    }

    #[test]
    fn unknown_and_mis_cased_flags_are_skipped() {
        let got = find_all_flags(&["-x", "-I", "--input", "-g", "-", "--", "-G"]);
        assert_eq!(got, FlagPositions::from([(3, Flag::Grid)]));
    }

    #[test]
    fn keys_are_exactly_the_flag_indices() {
        let args = ["a", "-i", "b", "-i", "-r", "c", "-q", "-f"];
        let got = find_all_flags(&args);
        for (index, token) in args.iter().enumerate() {
            match Flag::from_token(token) {
                Some(flag) => assert_eq!(got.get(&index), Some(&flag)),
                None => assert!(!got.contains_key(&index)),
            }
        }
        assert_eq!(got.len(), 4);
    }
}
