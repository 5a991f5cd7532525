//! Error types for scanline-dp.

use thiserror::Error;

/// Result alias for scanline-dp operations.
pub type TrellisResult<T> = std::result::Result<T, TrellisError>;

/// Errors raised while building or validating trellis inputs.
///
/// Every variant is detected before any DP table is allocated; the solvers
/// themselves cannot fail once their inputs validate.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TrellisError {
    /// A table has no labels or no positions.
    #[error("empty input: {labels} labels x {positions} positions")]
    EmptyInput { labels: usize, positions: usize },
    /// A table does not have the shape its role requires.
    #[error(
        "dimension mismatch for {context}: expected {expected_rows}x{expected_cols}, got {rows}x{cols}"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
        context: &'static str,
    },
    /// A cost entry is NaN or infinite.
    #[error("invalid {table} cost {value} at row {row}, col {col}")]
    InvalidCostValue {
        table: &'static str,
        row: usize,
        col: usize,
        value: f64,
    },
    /// The row stride is smaller than the row length.
    #[error("invalid stride {stride} for {cols} columns")]
    InvalidStride { cols: usize, stride: usize },
    /// The backing buffer is too small for the requested shape.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A penalty builder parameter is negative or non-finite.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// A labelling refers to a label outside the trellis.
    #[error("label {label} at position {position} is out of range for {labels} labels")]
    LabelOutOfRange {
        position: usize,
        label: usize,
        labels: usize,
    },
}
