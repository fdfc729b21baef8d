//! Lenient ≥ comparison over dotted version strings
//!
//! Not full semver: pre-release suffixes are stripped, not ordered, and
//! malformed segments degrade to 0 instead of failing. Used where a cheap
//! "is this edition at least that one" check suffices.

/// Coerce a single version segment to an integer, treating anything that
/// does not parse as 0.
pub fn segment_or_zero(segment: &str) -> u64 {
    segment.trim().parse().unwrap_or(0)
}

/// Drop a `-prerelease` suffix, keeping only the dotted core
fn strip_prerelease(version: &str) -> &str {
    version.split_once('-').map_or(version, |(core, _)| core)
}

/// Returns whether `v1` is at least `v2` under lenient dotted comparison.
///
/// Segments are compared most-significant first; tuples of unequal length
/// are zero-padded on the right, so `"2.24"` and `"2.24.0"` are equal. An
/// empty `v1` is never at least anything. Equal versions compare as `true`.
pub fn version_ge(v1: &str, v2: &str) -> bool {
    if v1.is_empty() {
        return false;
    }

    let left: Vec<u64> = strip_prerelease(v1).split('.').map(segment_or_zero).collect();
    let right: Vec<u64> = strip_prerelease(v2).split('.').map(segment_or_zero).collect();

    for i in 0..left.len().max(right.len()) {
        let a = left.get(i).copied().unwrap_or(0);
        let b = right.get(i).copied().unwrap_or(0);
        if a != b {
            return a > b;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    #[case("", 0)]
    #[case("beta", 0)]
    #[case("1a", 0)]
    #[case("-3", 0)] // negative segments are not version numbers
    fn segment_or_zero_coerces_leniently(#[case] segment: &str, #[case] expected: u64) {
        assert_eq!(segment_or_zero(segment), expected);
    }

    #[rstest]
    #[case("2.24.1", "2.24.0", true)]
    #[case("2.23.9", "2.24.0", false)]
    #[case("2.24", "2.24.0", true)] // missing segment treated as 0
    #[case("2.24.0", "2.24", true)]
    #[case("2.24.0", "2.24.0", true)] // equal is "at least"
    #[case("3.0.0", "2.99.99", true)]
    #[case("2.99.99", "3.0.0", false)]
    #[case("2.24.0.1", "2.24.0", true)] // extra trailing segment
    #[case("2.24.0", "2.24.0.1", false)]
    fn version_ge_orders_dotted_versions(
        #[case] v1: &str,
        #[case] v2: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(version_ge(v1, v2), expected);
    }

    #[rstest]
    #[case("", "1.0.0")]
    #[case("", "")]
    #[case("", "0.0.0")]
    fn version_ge_is_false_for_empty_v1(#[case] v1: &str, #[case] v2: &str) {
        assert!(!version_ge(v1, v2));
    }

    #[rstest]
    #[case("2.24.1-beta", "2.24.1", true)] // prerelease suffix ignored
    #[case("2.24.1", "2.24.2-rc1", false)]
    #[case("2.x.1", "2.0.1", true)] // malformed segment degrades to 0
    #[case("2.x.1", "2.1.0", false)]
    #[case("garbage", "0.0.0", true)] // fully malformed degrades to 0
    #[case("garbage", "0.0.1", false)]
    fn version_ge_degrades_malformed_input(
        #[case] v1: &str,
        #[case] v2: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(version_ge(v1, v2), expected);
    }
}
