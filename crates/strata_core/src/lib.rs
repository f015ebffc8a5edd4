//! # STRATA Core
//!
//! Shared data types for the terrain pipeline.
//!
//! ## Architecture Rules
//!
//! 1. **Flat storage** - Every field is a single row-major buffer plus explicit dimensions
//! 2. **Single ownership** - Stages never alias each other's buffers
//! 3. **Validated at the edge** - Ragged input is rejected when a grid is built, not mid-computation
//!
//! ## Example
//!
//! ```rust
//! use strata_core::Grid;
//!
//! let grid = Grid::from_rows(vec![vec![0.0, 0.5], vec![1.0, 0.25]]).unwrap();
//! assert_eq!(grid.dimensions(), (2, 2));
//! assert_eq!(grid[(1, 0)], 0.5);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod grid;
pub mod stats;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use stats::GridStats;
