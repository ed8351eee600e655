//! `RxC` / `R*C` dimension strings shared by the grid and resolution flags.

const SEPARATORS: [char; 2] = ['x', '*'];

/// Parse `AxB` or `A*B` into two positive integers.
///
/// Both parts must be plain ASCII digits (no sign, no whitespace) and fit in `u32`.
/// Only the first separator splits, so `2x3x4` is rejected on its second part.
pub fn parse_dimensions(value: &str) -> Option<(u32, u32)> {
    let (first, second) = value.split_once(SEPARATORS)?;
    Some((parse_positive(first)?, parse_positive(second)?))
}

fn parse_positive(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_separators() {
        assert_eq!(parse_dimensions("8x8"), Some((8, 8)));
        assert_eq!(parse_dimensions("25*25"), Some((25, 25)));
        assert_eq!(parse_dimensions("1024*768"), Some((1024, 768)));
        assert_eq!(parse_dimensions("3x12"), Some((3, 12)));
    }

    #[test]
    fn rejects_other_separators() {
        assert_eq!(parse_dimensions("25i25"), None);
        assert_eq!(parse_dimensions("25X25"), None);
        assert_eq!(parse_dimensions("25,25"), None);
        assert_eq!(parse_dimensions("25 25"), None);
        assert_eq!(parse_dimensions("2525"), None);
    }

    #[test]
    fn rejects_missing_or_non_numeric_parts() {
        assert_eq!(parse_dimensions("x8"), None);
        assert_eq!(parse_dimensions("8x"), None);
        assert_eq!(parse_dimensions("ax8"), None);
        assert_eq!(parse_dimensions("+8x8"), None);
        assert_eq!(parse_dimensions("-8x8"), None);
        assert_eq!(parse_dimensions(" 8x8"), None);
        assert_eq!(parse_dimensions("2x3x4"), None);
        assert_eq!(parse_dimensions(""), None);
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert_eq!(parse_dimensions("0x0"), None);
        assert_eq!(parse_dimensions("0x5"), None);
        assert_eq!(parse_dimensions("5*0"), None);
        assert_eq!(parse_dimensions("4294967296x1"), None);
        assert_eq!(parse_dimensions("4294967295x1"), Some((u32::MAX, 1)));
    }

    #[test]
    fn leading_zeros_are_plain_digits() {
        assert_eq!(parse_dimensions("08x010"), Some((8, 10)));
    }
}
