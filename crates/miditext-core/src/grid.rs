//! Grid calculation: how many token slots one bar holds.

/// Subdivisions of the default 4/4 grid.
pub const DEFAULT_SUBDIVISIONS: usize = 16;

/// Calculate the expected token count per bar for a time signature.
///
/// The grid is sixteenth-note based: `numerator * (16 / denominator)`, so
/// `4/4` gives 16, `3/4` gives 12, `6/8` gives 12 and `12/8` gives 24.
/// An absent, unparseable, or degenerate signature falls back to 16.
pub fn subdivisions(time_sig: &str) -> usize {
    match parse_time_sig(time_sig) {
        Some((numerator, denominator)) => numerator * 16 / denominator,
        None => DEFAULT_SUBDIVISIONS,
    }
}

/// Split an `N/D` time signature into numerator and denominator.
/// Zero on either side counts as unparseable.
pub fn parse_time_sig(time_sig: &str) -> Option<(usize, usize)> {
    let (numerator, denominator) = time_sig.trim().split_once('/')?;
    let numerator: usize = numerator.trim().parse().ok()?;
    let denominator: usize = denominator.trim().parse().ok()?;
    if numerator == 0 || denominator == 0 {
        return None;
    }
    Some((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_signatures() {
        assert_eq!(subdivisions("4/4"), 16);
        assert_eq!(subdivisions("3/4"), 12);
        assert_eq!(subdivisions("2/4"), 8);
        assert_eq!(subdivisions("6/8"), 12);
        assert_eq!(subdivisions("5/8"), 10);
    }

    #[test]
    fn test_compound_signature_uses_formula() {
        // 12 * (16 / 8), applied uniformly
        assert_eq!(subdivisions("12/8"), 24);
    }

    #[test]
    fn test_unparseable_defaults_to_sixteen() {
        assert_eq!(subdivisions(""), 16);
        assert_eq!(subdivisions("waltz"), 16);
        assert_eq!(subdivisions("4-4"), 16);
        assert_eq!(subdivisions("4/0"), 16);
        assert_eq!(subdivisions("0/4"), 16);
    }

    #[test]
    fn test_parse_time_sig() {
        assert_eq!(parse_time_sig(" 3/4 "), Some((3, 4)));
        assert_eq!(parse_time_sig("3/four"), None);
    }
}
