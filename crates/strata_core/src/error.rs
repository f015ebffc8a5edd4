//! # Grid Error Types
//!
//! Usage errors raised when a grid's shape is wrong for an operation.

use thiserror::Error;

/// Errors produced while building or combining grids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no cells where at least one is required.
    #[error("grid is empty")]
    Empty,

    /// A row-of-rows input had rows of different lengths.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A flat buffer did not match `width * height`.
    #[error("cell buffer holds {found} values, expected {expected} for a {width}x{height} grid")]
    LengthMismatch {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// Two grids that must be congruent have different dimensions.
    #[error("{name} grid is {found_width}x{found_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        /// Which input was wrong.
        name: &'static str,
        /// Width of the reference grid.
        expected_width: usize,
        /// Height of the reference grid.
        expected_height: usize,
        /// Width of the offending grid.
        found_width: usize,
        /// Height of the offending grid.
        found_height: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
