//! Error types for version and spec parsing

use thiserror::Error;

/// Grammar mismatch while parsing a version or spec string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid spec string \"{spec}\": {reason}")]
    InvalidSpec { spec: String, reason: String },
}

/// Unrecognized version part passed to an increment operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version part \"{0}\", expected one of: major, minor, patch, prerelease")]
pub struct InvalidPartError(pub String);

/// Combined error for facade operations that parse both a version and a
/// part or spec argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPart(#[from] InvalidPartError),
}
