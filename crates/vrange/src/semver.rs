//! Semver facade providing high-level version operations

use crate::error::{ParseError, SemverError};
use crate::spec::Spec;
use crate::version::{Part, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version string parses under the version grammar.
    pub fn valid(version: &str) -> bool {
        Version::parse(version).is_ok()
    }

    /// Canonicalize a version string, stripping any leading `=`/`v`.
    pub fn clean(version: &str) -> Result<String, ParseError> {
        Ok(Version::parse(version)?.to_string())
    }

    /// Bump the named part of a version and re-render it.
    pub fn inc(version: &str, part: &str) -> Result<String, SemverError> {
        let part: Part = part.parse()?;
        let version = Version::parse(version)?;
        Ok(version.increment(part).to_string())
    }

    /// Check if a version satisfies a range specification.
    ///
    /// Malformed versions or specifications simply do not match.
    pub fn satisfies(version: &str, spec: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(version) => version,
            Err(_) => return false,
        };
        let spec = match Spec::parse(spec) {
            Ok(spec) => spec,
            Err(_) => return false,
        };
        spec.test(&version)
    }

    /// Parse a specification once for repeated matching.
    pub fn parse_spec(spec: &str) -> Result<Spec, ParseError> {
        Spec::parse(spec)
    }

    /// Check a version against a pre-parsed specification.
    pub fn satisfies_parsed(version: &str, spec: &Spec) -> bool {
        match Version::parse(version) {
            Ok(version) => spec.test(&version),
            Err(_) => false,
        }
    }

    /// The canonical expanded form of a specification.
    pub fn valid_spec(spec: &str) -> Result<String, ParseError> {
        Ok(Spec::parse(spec)?.to_string())
    }

    /// Return all versions that satisfy the given specification.
    ///
    /// Versions that fail to parse are skipped.
    pub fn satisfied_by(versions: &[&str], spec: &str) -> Vec<String> {
        let spec = match Spec::parse(spec) {
            Ok(spec) => spec,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|text| {
                let version = Version::parse(text).ok()?;
                spec.test(&version).then(|| text.to_string())
            })
            .collect()
    }

    /// Sort versions in ascending precedence order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Keep the original index so equal versions stay in input order
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, text)| Version::parse(text).ok().map(|version| (version, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let ordering = a.cmp_precedence(b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidPartError;

    #[test]
    fn test_valid() {
        assert!(Semver::valid("1.2.3"));
        assert!(Semver::valid("v1.2.3-beta.1+build"));
        assert!(!Semver::valid("not-a-version"));
        assert!(!Semver::valid("1.2"));
        assert!(!Semver::valid(""));
    }

    #[test]
    fn test_clean() {
        assert_eq!(Semver::clean("v1.2.3").unwrap(), "1.2.3");
        assert_eq!(Semver::clean(" =1.2.3-beta.01 ").unwrap(), "1.2.3-beta.1");
        assert!(Semver::clean("nope").is_err());
    }

    #[test]
    fn test_inc() {
        assert_eq!(Semver::inc("1.2.3", "major").unwrap(), "2.0.0");
        assert_eq!(Semver::inc("1.2.3-beta.1", "minor").unwrap(), "1.3.0");
        assert_eq!(Semver::inc("1.2.3", "patch").unwrap(), "1.2.4");
        assert_eq!(Semver::inc("1.2.3", "prerelease").unwrap(), "1.2.3-0");
        assert_eq!(
            Semver::inc("1.2.3-beta.1", "prerelease").unwrap(),
            "1.2.3-beta.2"
        );
    }

    #[test]
    fn test_inc_errors() {
        assert_eq!(
            Semver::inc("1.2.3", "premajor"),
            Err(SemverError::InvalidPart(InvalidPartError(
                "premajor".to_string()
            )))
        );
        assert!(matches!(
            Semver::inc("junk", "major"),
            Err(SemverError::Parse(_))
        ));
    }

    #[test]
    fn test_satisfies_swallows_errors() {
        assert!(Semver::satisfies("1.2.3", "^1.2.0"));
        assert!(!Semver::satisfies("not-a-version", "^1.2.0"));
        assert!(!Semver::satisfies("1.2.3", "not a valid @@@ spec"));
    }

    #[test]
    fn test_valid_spec() {
        assert_eq!(Semver::valid_spec("^1.2.3").unwrap(), ">=1.2.3-0 <2.0.0-0");
        assert_eq!(Semver::valid_spec("latest").unwrap(), "*");
        assert!(Semver::valid_spec("@@@").is_err());
    }

    #[test]
    fn test_satisfied_by() {
        let versions = ["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "^1.0");
        assert_eq!(result, vec!["1.0.0", "1.2.0", "1.9999.9999"]);

        let versions = ["1.0.0", "1.1.0", "2.9999.9999", "3.0.0", "4.0.0", "4.1.0"];
        let result = Semver::satisfied_by(&versions, ">1.0.0 <3.0.0 || >=4.0.0");
        assert_eq!(result, vec!["1.1.0", "2.9999.9999", "4.0.0", "4.1.0"]);

        let versions = ["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0"];
        let result = Semver::satisfied_by(&versions, "^0.2.0");
        assert_eq!(result, vec!["0.2.0", "0.2.1"]);

        // Unparseable entries are skipped, not matched
        let versions = ["1.2.3", "garbage"];
        assert_eq!(Semver::satisfied_by(&versions, "*"), vec!["1.2.3"]);
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(
            rsorted,
            vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]
        );
    }

    #[test]
    fn test_sort_drops_unparseable() {
        let versions = ["1.0.0", "dev-main", "0.9.0"];
        assert_eq!(Semver::sort(&versions), vec!["0.9.0", "1.0.0"]);
    }

    #[test]
    fn test_parsed_spec_reuse() {
        let parsed = Semver::parse_spec("^1.2").unwrap();
        assert!(Semver::satisfies_parsed("1.2.3", &parsed));
        assert!(Semver::satisfies_parsed("1.9.0", &parsed));
        assert!(!Semver::satisfies_parsed("2.0.0", &parsed));
        assert!(!Semver::satisfies_parsed("garbage", &parsed));
    }
}
