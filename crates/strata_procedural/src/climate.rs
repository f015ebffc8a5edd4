//! # Climate Derivation
//!
//! Elevation to temperature. Water cells sit at the base temperature; land
//! cools linearly with height above sea level, reaching
//! `base_temperature - elevation_cooling` at elevation 1.

use strata_core::{Grid, GridResult};
use tracing::debug;

use crate::normalize::clamp_unit;

/// Smallest land elevation range used as a divisor.
const MIN_LAND_RANGE: f64 = 1e-6;

/// Maps elevation to temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimateDeriver {
    sea_level: f64,
    base_temperature: f64,
    elevation_cooling: f64,
}

impl Default for ClimateDeriver {
    fn default() -> Self {
        Self::new(0.35, 0.7, 0.6)
    }
}

impl ClimateDeriver {
    /// Creates a deriver.
    ///
    /// # Arguments
    ///
    /// * `sea_level` - Elevation at and below which cells count as water
    /// * `base_temperature` - Temperature at sea level (0-1)
    /// * `elevation_cooling` - Temperature drop from sea level to the highest peak (0-1)
    #[must_use]
    pub const fn new(sea_level: f64, base_temperature: f64, elevation_cooling: f64) -> Self {
        Self {
            sea_level,
            base_temperature,
            elevation_cooling,
        }
    }

    /// Sea level.
    #[inline]
    #[must_use]
    pub const fn sea_level(&self) -> f64 {
        self.sea_level
    }

    /// Temperature at sea level.
    #[inline]
    #[must_use]
    pub const fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    /// Temperature drop from sea level to elevation 1.
    #[inline]
    #[must_use]
    pub const fn elevation_cooling(&self) -> f64 {
        self.elevation_cooling
    }

    /// Temperature for one elevation, clamped to `[0, 1]`.
    ///
    /// The elevation is clamped to `[0, 1]` first; NaN counts as the peak.
    #[must_use]
    pub fn temperature(&self, elevation: f64) -> f64 {
        let elevation = clamp_unit(elevation);
        let temperature = if elevation <= self.sea_level {
            self.base_temperature
        } else {
            let land_range = MIN_LAND_RANGE.max(1.0 - self.sea_level);
            let normalized_height = (elevation - self.sea_level) / land_range;
            self.base_temperature - self.elevation_cooling * normalized_height
        };
        temperature.clamp(0.0, 1.0)
    }

    /// Applies [`temperature`](Self::temperature) to every cell.
    ///
    /// # Errors
    ///
    /// Returns [`strata_core::GridError::Empty`] for an empty heightmap.
    pub fn generate_temperature_map(&self, elevation: &Grid<f64>) -> GridResult<Grid<f64>> {
        elevation.ensure_non_empty()?;
        debug!(
            width = elevation.width(),
            height = elevation.height(),
            sea_level = self.sea_level,
            "deriving temperature map"
        );
        Ok(elevation.map(|&e| self.temperature(e)))
    }
}
