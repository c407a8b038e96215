//! Partial-version AST and the range-branch tokenizer

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;
use crate::requirement::Operator;
use crate::version::{split_identifiers, Identifier, Version};

lazy_static! {
    /// Partial version accepted inside range tokens: every core segment
    /// may be a number or a wildcard, and minor/patch may be omitted.
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^=?[vV]?(?P<major>[0-9]+|[xX*])(?:\.(?P<minor>[0-9]+|[xX*]))?(?:\.(?P<patch>[0-9]+|[xX*]))?(?:-?(?P<prerelease>[0-9A-Za-z_.-]+))?(?:\+(?P<build>[0-9A-Za-z_.-]+))?$"
    )
    .unwrap();
}

/// One core segment of a partial version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Number(u64),
    Wildcard,
    Absent,
}

impl Segment {
    fn number(self) -> Option<u64> {
        match self {
            Segment::Number(value) => Some(value),
            _ => None,
        }
    }
}

/// A version pattern as written in a range token, before rewriting.
#[derive(Debug, Clone)]
pub(crate) struct Partial {
    pub(crate) major: Segment,
    pub(crate) minor: Segment,
    pub(crate) patch: Segment,
    pub(crate) prerelease: Vec<Identifier>,
    pub(crate) build: Option<String>,
}

impl Partial {
    pub(crate) fn parse(token: &str) -> Option<Partial> {
        let caps = PARTIAL_RE.captures(token)?;

        let segment = |name: &str| -> Option<Segment> {
            match caps.name(name) {
                None => Some(Segment::Absent),
                Some(m) if matches!(m.as_str(), "x" | "X" | "*") => Some(Segment::Wildcard),
                Some(m) => m.as_str().parse().ok().map(Segment::Number),
            }
        };

        let prerelease = match caps.name("prerelease") {
            Some(section) => split_identifiers(section.as_str()),
            None => Vec::new(),
        };

        Some(Partial {
            major: segment("major")?,
            minor: segment("minor")?,
            patch: segment("patch")?,
            prerelease,
            build: caps.name("build").map(|m| m.as_str().to_string()),
        })
    }

    /// A partial with no wildcard or omitted segments converts directly
    /// into a version. Wildcards and omissions both mean "any value
    /// here" and force the token through the rewrite tables instead.
    pub(crate) fn to_version(&self) -> Option<Version> {
        Some(Version::new(
            self.major.number()?,
            self.minor.number()?,
            self.patch.number()?,
            self.prerelease.clone(),
            self.build.clone(),
        ))
    }
}

/// One shorthand unit of a range branch.
#[derive(Debug)]
pub(crate) enum RangeUnit {
    Tilde(Partial),
    Caret(Partial),
    Hyphen(Partial, Partial),
    Primitive(Option<Operator>, Partial),
}

enum UnitPrefix {
    Tilde,
    Caret,
    Cmp(Operator),
    Bare,
}

fn split_unit_prefix(word: &str) -> (UnitPrefix, &str) {
    if let Some(rest) = word.strip_prefix("~>") {
        return (UnitPrefix::Tilde, rest);
    }
    if let Some(rest) = word.strip_prefix('~') {
        return (UnitPrefix::Tilde, rest);
    }
    if let Some(rest) = word.strip_prefix('^') {
        return (UnitPrefix::Caret, rest);
    }
    for len in [2, 1] {
        if word.len() >= len && word.is_char_boundary(len) {
            if let Ok(op) = Operator::from_str(&word[..len]) {
                return (UnitPrefix::Cmp(op), &word[len..]);
            }
        }
    }
    (UnitPrefix::Bare, word)
}

fn invalid_token(branch: &str, token: &str) -> ParseError {
    ParseError::InvalidSpec {
        spec: branch.to_string(),
        reason: format!("invalid requirement token \"{}\"", token),
    }
}

/// Split one OR-branch into shorthand units.
///
/// An operator followed by whitespace binds to the next word, and
/// `A - B` joins three words into a hyphen range.
pub(crate) fn tokenize_branch(branch: &str) -> Result<Vec<RangeUnit>, ParseError> {
    let words: Vec<&str> = branch.split_whitespace().collect();
    let mut units = Vec::new();
    let mut i = 0;

    while i < words.len() {
        if i + 2 < words.len() && words[i + 1] == "-" {
            let lower =
                Partial::parse(words[i]).ok_or_else(|| invalid_token(branch, words[i]))?;
            let upper =
                Partial::parse(words[i + 2]).ok_or_else(|| invalid_token(branch, words[i + 2]))?;
            units.push(RangeUnit::Hyphen(lower, upper));
            i += 3;
            continue;
        }

        let word = words[i];
        let (prefix, rest) = split_unit_prefix(word);

        let version_text = if rest.is_empty() && !matches!(prefix, UnitPrefix::Bare) {
            i += 1;
            *words.get(i).ok_or_else(|| invalid_token(branch, word))?
        } else {
            rest
        };

        let partial =
            Partial::parse(version_text).ok_or_else(|| invalid_token(branch, word))?;
        units.push(match prefix {
            UnitPrefix::Tilde => RangeUnit::Tilde(partial),
            UnitPrefix::Caret => RangeUnit::Caret(partial),
            UnitPrefix::Cmp(op) => RangeUnit::Primitive(Some(op), partial),
            UnitPrefix::Bare => RangeUnit::Primitive(None, partial),
        });
        i += 1;
    }

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_segments() {
        let partial = Partial::parse("1.2.3").unwrap();
        assert_eq!(partial.major, Segment::Number(1));
        assert_eq!(partial.minor, Segment::Number(2));
        assert_eq!(partial.patch, Segment::Number(3));
        assert!(partial.to_version().is_some());

        let partial = Partial::parse("1.x").unwrap();
        assert_eq!(partial.minor, Segment::Wildcard);
        assert_eq!(partial.patch, Segment::Absent);
        assert!(partial.to_version().is_none());

        let partial = Partial::parse("*").unwrap();
        assert_eq!(partial.major, Segment::Wildcard);
    }

    #[test]
    fn test_partial_prefix_and_prerelease() {
        let partial = Partial::parse("v1.2.3-beta.1").unwrap();
        assert_eq!(partial.patch, Segment::Number(3));
        assert_eq!(partial.prerelease.len(), 2);

        assert!(Partial::parse("=1.2").is_some());
        assert!(Partial::parse("foo").is_none());
        assert!(Partial::parse("-").is_none());
    }

    #[test]
    fn test_tokenize_glues_spaced_operators() {
        let units = tokenize_branch(">= 1.2.3").unwrap();
        assert_eq!(units.len(), 1);
        assert!(matches!(
            units[0],
            RangeUnit::Primitive(Some(Operator::GreaterThanOrEqual), _)
        ));

        let units = tokenize_branch("~ 1.2").unwrap();
        assert!(matches!(units[0], RangeUnit::Tilde(_)));

        let units = tokenize_branch("^   1.2.3").unwrap();
        assert!(matches!(units[0], RangeUnit::Caret(_)));
    }

    #[test]
    fn test_tokenize_hyphen_range() {
        let units = tokenize_branch("1.2.3 - 2.3.4").unwrap();
        assert_eq!(units.len(), 1);
        assert!(matches!(units[0], RangeUnit::Hyphen(_, _)));

        // A prerelease hyphen stays inside its token
        let units = tokenize_branch("1.2.3-beta.2 - 2.0.0").unwrap();
        assert!(matches!(units[0], RangeUnit::Hyphen(_, _)));
    }

    #[test]
    fn test_tokenize_mixed_units() {
        let units = tokenize_branch("~1.2.1 >=1.2.3").unwrap();
        assert_eq!(units.len(), 2);
        assert!(matches!(units[0], RangeUnit::Tilde(_)));
        assert!(matches!(
            units[1],
            RangeUnit::Primitive(Some(Operator::GreaterThanOrEqual), _)
        ));
    }

    #[test]
    fn test_tokenize_rejects_garbage() {
        assert!(tokenize_branch("not a valid @@@ spec").is_err());
        assert!(tokenize_branch(">=").is_err());
        assert!(tokenize_branch("1.2.3 -").is_err());
    }
}
