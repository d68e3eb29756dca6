//! Typed error values at every fallible boundary.
//!
//! Internal invariant violations are deliberately *not* represented here:
//! they are bugs, not data problems, and are raised as `panic!` or
//! `debug_assert!` failures instead of `Result` variants.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario file '{path}' is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario '{path}' line {line}: malformed record")]
    MalformedRecord { path: PathBuf, line: usize },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map file '{path}' is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map '{path}' has a malformed header: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    #[error("map '{path}' row {row} has length {found}, expected {expected}")]
    RowLength {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no scenario file given and --bench not requested")]
    NoInput,

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Map(#[from] MapError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_names_path_and_line() {
        let err = ScenarioError::MalformedRecord {
            path: PathBuf::from("foo.scen"),
            line: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("foo.scen"));
        assert!(msg.contains('3'));
    }
}
