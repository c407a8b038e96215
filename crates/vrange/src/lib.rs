//! Semantic versioning library with node-style range matching
//!
//! This crate parses semantic version strings, defines their precedence
//! order, and evaluates versions against range specifications built from
//! the `~`, `^`, x-range, and hyphen-range shorthands with `||`-separated
//! alternatives.

mod comparator;
mod error;
mod requirement;
mod semver;
mod spec;
mod version;

pub use comparator::Comparator;
pub use error::{InvalidPartError, ParseError, SemverError};
pub use requirement::{InvalidOperatorError, Operator, Requirement};
pub use semver::Semver;
pub use spec::Spec;
pub use version::{Identifier, Part, Version};
