//! # Terrain Error Types
//!
//! All errors that can occur while configuring or running terrain generation.
//!
//! Degenerate inputs (zero erosion iterations, grids too small to erode, a
//! flat noise field) are not errors. They have defined fallback outputs.

use std::path::PathBuf;

use strata_core::GridError;
use thiserror::Error;

/// Errors that can occur in terrain generation.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// An input grid was empty, ragged, or mismatched in size.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A config value is outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;
