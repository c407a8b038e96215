//! Range specifications: an OR of AND-ed comparator requirements

mod partial;
mod rewrite;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::requirement::Requirement;
use crate::version::Version;

use self::partial::tokenize_branch;
use self::rewrite::rewrite_unit;

/// A parsed range specification.
///
/// `||`-separated branches are alternative requirement sets; the
/// requirements inside one set must all hold. Shorthand syntaxes are
/// expanded at parse time, so the stored sets contain only plain
/// comparator requirements.
#[derive(Debug, Clone)]
pub struct Spec {
    sets: Vec<Vec<Requirement>>,
}

impl Spec {
    /// Parse a range specification.
    pub fn parse(text: &str) -> Result<Spec, ParseError> {
        let text = if text == "latest" { "*" } else { text };

        let mut sets = Vec::new();
        for branch in text.split("||") {
            let branch = branch.trim();
            let mut requirements = Vec::new();
            for unit in tokenize_branch(branch)? {
                requirements.extend(rewrite_unit(unit));
            }
            // A branch that expands to nothing matches everything.
            if requirements.is_empty() {
                requirements.push(Requirement::any());
            }
            sets.push(requirements);
        }

        Ok(Spec { sets })
    }

    /// True if any requirement set is fully satisfied by `version`.
    pub fn test(&self, version: &Version) -> bool {
        self.sets
            .iter()
            .any(|set| set.iter().all(|requirement| requirement.test(version)))
    }

    /// The expanded requirement sets, one per `||`-branch.
    pub fn sets(&self) -> &[Vec<Requirement>] {
        &self.sets
    }
}

impl FromStr for Spec {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Spec::parse(text)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<String> = self
            .sets
            .iter()
            .map(|set| {
                let requirements: Vec<String> =
                    set.iter().map(ToString::to_string).collect();
                requirements.join(" ")
            })
            .collect();
        write!(f, "{}", sets.join("||"))
    }
}
