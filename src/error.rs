//! Defines the error type returned by this crate.
use std::io;

use polars::prelude::PolarsError;
use thiserror::Error;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, BoostError>;


/// Errors that occur while building a [`Sample`](crate::Sample)
/// or training a boosting algorithm.
///
/// Numerical corner cases such as a weak hypothesis with zero error
/// are not reported here.
/// They propagate as non-finite `f64` values.
#[derive(Error, Debug)]
pub enum BoostError {
    /// The number of labels differs from the number of examples.
    #[error(
        "the number of examples must equal to the number of targets. \
         got {n_sample} examples and {n_target} targets"
    )]
    TargetLengthMismatch {
        /// Number of rows in the sample.
        n_sample: usize,
        /// Number of labels.
        n_target: usize,
    },

    /// The number of sample weights differs from the number of examples.
    #[error(
        "the number of examples must equal to the number of weights. \
         got {n_sample} examples and {n_weight} weights"
    )]
    WeightLengthMismatch {
        /// Number of rows in the sample.
        n_sample: usize,
        /// Number of sample weights.
        n_weight: usize,
    },

    /// The sample has no example.
    #[error("the sample has no example")]
    EmptySample,

    /// The sample has no feature.
    #[error("the sample has no feature")]
    NoFeature,

    /// A label takes a value other than `+1` or `-1`.
    #[error("labels must be +1 or -1. got {value} at index {index}")]
    InvalidLabel {
        /// Position of the label.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A row has a different number of features from the first row.
    #[error("row {row} has {found} features, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of features of the first row.
        expected: usize,
        /// Number of features of the offending row.
        found: usize,
    },

    /// A column has a different number of examples from the first column.
    #[error("column {column} has {found} examples, expected {expected}")]
    RaggedColumn {
        /// Index of the offending column.
        column: usize,
        /// Number of examples of the first column.
        expected: usize,
        /// Number of examples of the offending column.
        found: usize,
    },

    /// A value in a CSV line cannot be parsed as `f64`.
    #[error("cannot parse `{value}` as f64 at line {line}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// The raw token.
        value: String,
    },

    /// A column of a `polars::DataFrame` has a missing value.
    #[error("feature `{0}` has a missing value")]
    MissingValue(String),

    /// No feature has the given name.
    #[error("feature `{0}` does not exist")]
    UnknownFeature(String),

    /// I/O failure while reading a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure while converting a `polars::DataFrame`.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
