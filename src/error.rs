//! StrMetric Error Types
//!
//! Centralized error handling for the matrix and distance engine.

use thiserror::Error;

/// Central error type for StrMetric
///
/// Both variants are contract violations on the [`crate::Matrix`] API.
/// The distance engine's loop bounds keep them unreachable from
/// [`crate::similarity`]; hitting one there is a bug, not a condition
/// to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("invalid matrix dimensions: {rows} x {columns} overflows usize")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("matrix index ({row}, {column}) out of bounds for {rows} x {columns}")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Result type alias for StrMetric operations
pub type MetricResult<T> = Result<T, MetricError>;
