//! Shorthand-to-comparator rewriting
//!
//! Each range unit expands into plain comparator requirements built
//! directly from the partial-version AST; no intermediate text is
//! produced or re-parsed.

use crate::requirement::{Operator, Requirement};
use crate::spec::partial::{Partial, RangeUnit, Segment};
use crate::version::{Identifier, Version};

/// Rewrite one unit into its comparator-chain form.
pub(crate) fn rewrite_unit(unit: RangeUnit) -> Vec<Requirement> {
    match unit {
        RangeUnit::Tilde(partial) => rewrite_tilde(partial),
        RangeUnit::Caret(partial) => rewrite_caret(partial),
        RangeUnit::Hyphen(lower, upper) => rewrite_hyphen(lower, upper),
        RangeUnit::Primitive(op, partial) => rewrite_primitive(op, partial),
    }
}

fn zero_pre() -> Vec<Identifier> {
    vec![Identifier::Numeric(0)]
}

fn bound(
    op: Operator,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
) -> Requirement {
    Requirement::new(Some(op), Version::new(major, minor, patch, prerelease, None))
}

/// The `-0` floor admits prereleases of the version itself.
fn floor_pre(prerelease: Vec<Identifier>) -> Vec<Identifier> {
    if prerelease.is_empty() {
        zero_pre()
    } else {
        prerelease
    }
}

// ~, ~x        -> *
// ~1, ~1.x     -> >=1.0.0-0 <2.0.0-0
// ~1.2, ~1.2.x -> >=1.2.0-0 <1.3.0-0
// ~1.2.3       -> >=1.2.3-0 <1.3.0-0
// ~1.2.3-pre   -> >=1.2.3-pre <1.3.0-0
fn rewrite_tilde(partial: Partial) -> Vec<Requirement> {
    let major = match partial.major {
        Segment::Number(major) => major,
        _ => return vec![Requirement::any()],
    };
    let minor = match partial.minor {
        Segment::Number(minor) => minor,
        _ => {
            return vec![
                bound(Operator::GreaterThanOrEqual, major, 0, 0, zero_pre()),
                bound(Operator::LessThan, major + 1, 0, 0, zero_pre()),
            ]
        }
    };
    let patch = match partial.patch {
        Segment::Number(patch) => patch,
        _ => {
            return vec![
                bound(Operator::GreaterThanOrEqual, major, minor, 0, zero_pre()),
                bound(Operator::LessThan, major, minor + 1, 0, zero_pre()),
            ]
        }
    };

    vec![
        bound(
            Operator::GreaterThanOrEqual,
            major,
            minor,
            patch,
            floor_pre(partial.prerelease),
        ),
        bound(Operator::LessThan, major, minor + 1, 0, zero_pre()),
    ]
}

// ^, ^x        -> *
// ^1, ^1.x     -> >=1.0.0-0 <2.0.0-0
// ^1.2, ^1.2.x -> >=1.2.0-0 <2.0.0-0
// ^0.1, ^0.1.x -> >=0.1.0-0 <0.2.0-0
// ^1.2.3       -> >=1.2.3-0 <2.0.0-0
// ^0.1.3       -> >=0.1.3-0 <0.2.0-0
// ^0.0.3       -> =0.0.3 (anything below 0.1.0 pins exactly)
fn rewrite_caret(partial: Partial) -> Vec<Requirement> {
    let major = match partial.major {
        Segment::Number(major) => major,
        _ => return vec![Requirement::any()],
    };
    let minor = match partial.minor {
        Segment::Number(minor) => minor,
        _ => {
            return vec![
                bound(Operator::GreaterThanOrEqual, major, 0, 0, zero_pre()),
                bound(Operator::LessThan, major + 1, 0, 0, zero_pre()),
            ]
        }
    };
    let patch = match partial.patch {
        Segment::Number(patch) => patch,
        _ => {
            return if major == 0 {
                vec![
                    bound(Operator::GreaterThanOrEqual, 0, minor, 0, zero_pre()),
                    bound(Operator::LessThan, 0, minor + 1, 0, zero_pre()),
                ]
            } else {
                vec![
                    bound(Operator::GreaterThanOrEqual, major, minor, 0, zero_pre()),
                    bound(Operator::LessThan, major + 1, 0, 0, zero_pre()),
                ]
            };
        }
    };

    if major == 0 && minor == 0 {
        return vec![Requirement::new(
            Some(Operator::Equal),
            Version::new(0, 0, patch, partial.prerelease, None),
        )];
    }

    let lower = floor_pre(partial.prerelease);
    if major == 0 {
        vec![
            bound(Operator::GreaterThanOrEqual, 0, minor, patch, lower),
            bound(Operator::LessThan, 0, minor + 1, 0, zero_pre()),
        ]
    } else {
        vec![
            bound(Operator::GreaterThanOrEqual, major, minor, patch, lower),
            bound(Operator::LessThan, major + 1, 0, 0, zero_pre()),
        ]
    }
}

// 1.2.3 - 2.3.4 -> >=1.2.3 <=2.3.4
// 1.2 - 2.3.4   -> >=1.2.0-0 <=2.3.4
// 1.2.3 - 2.3   -> >=1.2.3 <2.3.0-0
// 1.2.3 - 2     -> >=1.2.3 <2.0.0-0
fn rewrite_hyphen(lower: Partial, upper: Partial) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    if let Some(requirement) = hyphen_lower_bound(lower) {
        requirements.push(requirement);
    }
    if let Some(requirement) = hyphen_upper_bound(upper) {
        requirements.push(requirement);
    }
    requirements
}

fn hyphen_lower_bound(partial: Partial) -> Option<Requirement> {
    let major = match partial.major {
        Segment::Number(major) => major,
        _ => return None,
    };
    let minor = match partial.minor {
        Segment::Number(minor) => minor,
        _ => {
            return Some(bound(Operator::GreaterThanOrEqual, major, 0, 0, zero_pre()));
        }
    };
    let patch = match partial.patch {
        Segment::Number(patch) => patch,
        _ => {
            return Some(bound(
                Operator::GreaterThanOrEqual,
                major,
                minor,
                0,
                zero_pre(),
            ));
        }
    };
    Some(bound(
        Operator::GreaterThanOrEqual,
        major,
        minor,
        patch,
        partial.prerelease,
    ))
}

fn hyphen_upper_bound(partial: Partial) -> Option<Requirement> {
    let major = match partial.major {
        Segment::Number(major) => major,
        _ => return None,
    };
    let minor = match partial.minor {
        Segment::Number(minor) => minor,
        _ => return Some(bound(Operator::LessThan, major, 0, 0, zero_pre())),
    };
    let patch = match partial.patch {
        Segment::Number(patch) => patch,
        _ => return Some(bound(Operator::LessThan, major, minor, 0, zero_pre())),
    };
    Some(bound(
        Operator::LessThanOrEqual,
        major,
        minor,
        patch,
        partial.prerelease,
    ))
}

// 1.x, 1       -> >=1.0.0-0 <2.0.0-0
// 1.2.x, 1.2   -> >=1.2.0-0 <1.3.0-0
// >1.2         -> >=1.3.0-0
// <1.x         -> <1.0.0-0
// x, *         -> *
fn rewrite_primitive(op: Option<Operator>, partial: Partial) -> Vec<Requirement> {
    // Fully numeric tokens pass through as written.
    if let Some(version) = partial.to_version() {
        return vec![Requirement::new(op, version)];
    }

    // `=` on a wildcard token behaves like no operator at all.
    let op = match op {
        Some(Operator::Equal) => None,
        other => other,
    };

    match op {
        Some(Operator::GreaterThan) => {
            // `>` moves to the first version above the wildcarded span.
            let requirement = match (partial.major, partial.minor) {
                (Segment::Number(major), Segment::Number(minor)) => {
                    bound(Operator::GreaterThanOrEqual, major, minor + 1, 0, zero_pre())
                }
                (Segment::Number(major), _) => {
                    bound(Operator::GreaterThanOrEqual, major + 1, 0, 0, zero_pre())
                }
                _ => bound(Operator::GreaterThanOrEqual, 0, 0, 0, zero_pre()),
            };
            vec![requirement]
        }
        Some(op) => {
            let (major, minor, patch) = zeroed_core(&partial);
            vec![bound(op, major, minor, patch, zero_pre())]
        }
        None => {
            let major = match partial.major {
                Segment::Number(major) => major,
                _ => return vec![Requirement::any()],
            };
            let minor = match partial.minor {
                Segment::Number(minor) => minor,
                _ => {
                    return vec![
                        bound(Operator::GreaterThanOrEqual, major, 0, 0, zero_pre()),
                        bound(Operator::LessThan, major + 1, 0, 0, zero_pre()),
                    ]
                }
            };
            vec![
                bound(Operator::GreaterThanOrEqual, major, minor, 0, zero_pre()),
                bound(Operator::LessThan, major, minor + 1, 0, zero_pre()),
            ]
        }
    }
}

/// Zero the wildcarded segment and everything below it.
fn zeroed_core(partial: &Partial) -> (u64, u64, u64) {
    match (partial.major, partial.minor, partial.patch) {
        (Segment::Number(major), Segment::Number(minor), Segment::Number(patch)) => {
            (major, minor, patch)
        }
        (Segment::Number(major), Segment::Number(minor), _) => (major, minor, 0),
        (Segment::Number(major), _, _) => (major, 0, 0),
        _ => (0, 0, 0),
    }
}
