//! Version parsing, precedence ordering, and increment operations

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{InvalidPartError, ParseError};

lazy_static! {
    /// Full version grammar: optional leading `=`/`v`, the dotted core
    /// triple, an optional prerelease joined by `-` or nothing, and an
    /// optional `+build` suffix. Anchored, surrounding whitespace allowed.
    static ref VERSION_RE: Regex = Regex::new(
        r"^\s*=?[vV]?\s*(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-?(?P<prerelease>[0-9A-Za-z_.-]+))?(?:\+(?P<build>[0-9A-Za-z_.-]+))?\s*$"
    )
    .unwrap();
}

/// A single prerelease identifier.
///
/// Identifiers made up entirely of digits are numeric and compare by
/// value; any other identifier compares lexically and outranks every
/// numeric one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Numeric(u64),
    Alpha(String),
}

impl Identifier {
    fn from_token(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = token.parse() {
                return Identifier::Numeric(value);
            }
        }
        Identifier::Alpha(token.to_string())
    }

    fn precedence(&self, other: &Identifier) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Alpha(a), Identifier::Alpha(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alpha(_)) => Ordering::Less,
            (Identifier::Alpha(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::Alpha(token) => write!(f, "{}", token),
        }
    }
}

/// Split a prerelease section into identifiers on `.` and `-`.
pub(crate) fn split_identifiers(text: &str) -> Vec<Identifier> {
    text.split(|c| c == '.' || c == '-')
        .map(Identifier::from_token)
        .collect()
}

/// A parsed semantic version.
///
/// Immutable after construction. Build metadata is carried for
/// round-trip formatting only and never participates in comparison or
/// equality.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) prerelease: Vec<Identifier>,
    pub(crate) build: Option<String>,
}

impl Version {
    pub(crate) fn new(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<Identifier>,
        build: Option<String>,
    ) -> Version {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Parse a version string.
    pub fn parse(text: &str) -> Result<Version, ParseError> {
        let caps = VERSION_RE
            .captures(text)
            .ok_or_else(|| ParseError::InvalidVersion(text.to_string()))?;

        let core = |name: &str| -> Result<u64, ParseError> {
            caps[name]
                .parse()
                .map_err(|_| ParseError::InvalidVersion(text.to_string()))
        };

        let prerelease = match caps.name("prerelease") {
            Some(section) => split_identifiers(section.as_str()),
            None => Vec::new(),
        };

        Ok(Version {
            major: core("major")?,
            minor: core("minor")?,
            patch: core("patch")?,
            prerelease,
            build: caps.name("build").map(|m| m.as_str().to_string()),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers; empty for a release version.
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Total precedence order over versions.
    ///
    /// The core triple decides first. At an equal core a release outranks
    /// any prerelease; two prereleases compare identifier by identifier,
    /// with an equal prefix resolved in favor of the longer list. Build
    /// metadata is ignored.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        let core = (self.major, self.minor, self.patch).cmp(&(
            other.major,
            other.minor,
            other.patch,
        ));
        if core != Ordering::Equal {
            return core;
        }

        match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (a, b) in self.prerelease.iter().zip(&other.prerelease) {
            match a.precedence(b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        self.prerelease.len().cmp(&other.prerelease.len())
    }

    /// Return a copy with `part` bumped.
    ///
    /// Core bumps zero the lower core fields and clear the prerelease.
    /// A prerelease bump increments the last numeric identifier, appends
    /// `0` if there is none, or starts the prerelease at `0` when absent.
    /// Build metadata is carried through unchanged.
    pub fn increment(&self, part: Part) -> Version {
        let mut next = self.clone();
        match part {
            Part::Major => {
                next.major += 1;
                next.minor = 0;
                next.patch = 0;
                next.prerelease.clear();
            }
            Part::Minor => {
                next.minor += 1;
                next.patch = 0;
                next.prerelease.clear();
            }
            Part::Patch => {
                next.patch += 1;
                next.prerelease.clear();
            }
            Part::Prerelease => {
                if next.prerelease.is_empty() {
                    next.prerelease.push(Identifier::Numeric(0));
                } else {
                    let mut bumped = false;
                    for identifier in next.prerelease.iter_mut().rev() {
                        if let Identifier::Numeric(value) = identifier {
                            *value += 1;
                            bumped = true;
                            break;
                        }
                    }
                    if !bumped {
                        next.prerelease.push(Identifier::Numeric(0));
                    }
                }
            }
        }
        next
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Version::parse(text)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            let identifiers: Vec<String> =
                self.prerelease.iter().map(ToString::to_string).collect();
            write!(f, "-{}", identifiers.join("."))?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
    }
}

/// Version part targeted by an increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Major,
    Minor,
    Patch,
    Prerelease,
}

impl Part {
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Major => "major",
            Part::Minor => "minor",
            Part::Patch => "patch",
            Part::Prerelease => "prerelease",
        }
    }
}

impl FromStr for Part {
    type Err = InvalidPartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "major" => Ok(Part::Major),
            "minor" => Ok(Part::Minor),
            "patch" => Ok(Part::Patch),
            "prerelease" => Ok(Part::Prerelease),
            _ => Err(InvalidPartError(name.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
