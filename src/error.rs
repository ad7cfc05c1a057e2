//! Error types for loading graphs and dictionaries

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read an input file at all
///
/// Malformed content never produces this error; bad lines are skipped with a
/// diagnostic instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Reason a single line of a graph file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Line did not have exactly three fields
    #[error("expected `source destination weight`, found {0} field(s)")]
    FieldCount(usize),

    /// Field was not a non-negative integer
    #[error("invalid {field} `{value}`: expected a non-negative integer")]
    InvalidNumber {
        /// Which field failed (`source`, `destination`, `weight`, `vertex count`)
        field: &'static str,
        /// Raw text of the field
        value: String,
    },

    /// Edge endpoint lies outside the declared vertex range
    #[error("vertex {vertex} outside declared range 0..{num_vertices}")]
    OutOfRange {
        /// Offending vertex id
        vertex: u32,
        /// Declared vertex count
        num_vertices: usize,
    },
}
