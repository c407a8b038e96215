//! Single comparator-plus-target requirements

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::version::{Identifier, Version};

/// Comparison operators accepted in requirement tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (= or ==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Not equal (!= or !)
    NotEqual,
}

#[derive(Error, Debug)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from string
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "!=" | "!" => Ok(Operator::NotEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "<", "<=", ">", ">=", "!=", "!"]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One comparator applied to one target version, or the universal
/// wildcard that every version satisfies.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// `*`
    Any,
    /// `op version`; a missing operator means exact match.
    Cmp {
        op: Option<Operator>,
        version: Version,
    },
}

impl Requirement {
    /// The wildcard requirement.
    pub fn any() -> Requirement {
        Requirement::Any
    }

    /// Build a requirement against a target version.
    ///
    /// A strict-less-than target without a prerelease gets a synthetic
    /// `0` prerelease so that `<1.2.3` also excludes prereleases of
    /// `1.2.3` itself.
    pub fn new(op: Option<Operator>, mut version: Version) -> Requirement {
        if op == Some(Operator::LessThan) && version.prerelease.is_empty() {
            version.prerelease.push(Identifier::Numeric(0));
        }
        Requirement::Cmp { op, version }
    }

    /// Evaluate the requirement against a candidate version.
    pub fn test(&self, candidate: &Version) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Cmp { op, version } => {
                let ordering = candidate.cmp_precedence(version);
                match op {
                    None | Some(Operator::Equal) => ordering == Ordering::Equal,
                    Some(Operator::GreaterThan) => ordering == Ordering::Greater,
                    Some(Operator::GreaterThanOrEqual) => ordering != Ordering::Less,
                    Some(Operator::LessThan) => ordering == Ordering::Less,
                    Some(Operator::LessThanOrEqual) => ordering != Ordering::Greater,
                    Some(Operator::NotEqual) => ordering != Ordering::Equal,
                }
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Any => write!(f, "*"),
            Requirement::Cmp { op, version } => {
                if let Some(op) = op {
                    write!(f, "{}", op)?;
                }
                write!(f, "{}", version)
            }
        }
    }
}
