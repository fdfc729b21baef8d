//! Coercion of loose version strings and the import compatibility gate

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// First numeric version core in a loose string, with optional minor/patch
static VERSION_CORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid version regex"));

/// Coerce a loose version string into a semver [`Version`], normalizing
/// partial versions.
///
/// Leading non-numeric prefixes (like `v`) and anything after the numeric
/// core (pre-release, build metadata) are discarded; missing minor/patch
/// segments are padded with zeros.
///
/// Examples:
/// - "v2.1" -> Version(2, 1, 0)
/// - "2.1.3-beta" -> Version(2, 1, 3)
/// - "nightly" -> None
pub fn coerce_version(input: &str) -> Option<Version> {
    let caps = VERSION_CORE.captures(input)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

/// Coerce a loose version string to its normalized `major.minor.patch` form.
///
/// Returns `None` when no numeric version core can be recognized; callers
/// treat that as "unknown version". Idempotent on its own output.
pub fn normalize_version(input: &str) -> Option<String> {
    coerce_version(input).map(|v| v.to_string())
}

/// Returns whether data exported by `importing` may be imported into a
/// system running `running`.
///
/// True iff the coerced `running` version is at least the coerced
/// `importing` version under semver precedence. A version that cannot be
/// coerced on either side gates the import closed.
pub fn is_compatible(running: &str, importing: &str) -> bool {
    match (coerce_version(running), coerce_version(importing)) {
        (Some(running), Some(importing)) => running >= importing,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.1.3", Some("2.1.3"))]
    #[case("v2.1", Some("2.1.0"))]
    #[case("2", Some("2.0.0"))]
    #[case("2.1.3-beta", Some("2.1.3"))]
    #[case("2.1.3+build.5", Some("2.1.3"))]
    #[case("release-4", Some("4.0.0"))]
    #[case("nightly", None)]
    #[case("", None)]
    fn normalize_version_coerces_loose_input(
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(normalize_version(input).as_deref(), expected);
    }

    #[rstest]
    #[case("v2.1.3-beta")]
    #[case("v0.5")]
    #[case("10.20.30")]
    fn normalize_version_is_idempotent(#[case] input: &str) {
        let once = normalize_version(input).unwrap();
        assert_eq!(normalize_version(&once), Some(once.clone()));
    }

    #[rstest]
    #[case("2.25.0", "2.24.1", true)]
    #[case("2.24.0", "2.24.1", false)]
    #[case("2.24.1", "2.24.1", true)] // same edition round-trips
    #[case("3.0.0", "2.99.0", true)]
    #[case("v2.25", "2.24.1", true)] // loose running version coerced first
    #[case("2.25.0", "2.25.0-beta", true)] // prerelease discarded by coercion
    fn is_compatible_gates_on_version_order(
        #[case] running: &str,
        #[case] importing: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_compatible(running, importing), expected);
    }

    #[rstest]
    #[case("nightly", "2.24.1")]
    #[case("2.25.0", "unknown")]
    #[case("", "")]
    fn is_compatible_is_false_when_coercion_fails(
        #[case] running: &str,
        #[case] importing: &str,
    ) {
        assert!(!is_compatible(running, importing));
    }
}
