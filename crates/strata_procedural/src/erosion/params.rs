//! Erosion configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};

use super::brush::MAX_RADIUS;

/// Parameters for one hydraulic erosion run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosionParams {
    /// Number of droplets to simulate.
    pub iterations: u32,
    /// Maximum steps per droplet before it is discarded.
    pub max_lifetime: u32,
    /// How much of the previous direction persists vs. following the slope (0-1).
    pub inertia: f64,
    /// Multiplier for sediment carrying capacity.
    pub sediment_capacity_factor: f64,
    /// Floor on carrying capacity, so droplets on gentle slopes still erode.
    pub min_sediment_capacity: f64,
    /// Fraction of excess sediment dropped per step (0-1).
    pub deposit_speed: f64,
    /// Fraction of the capacity deficit eroded per step (0-1).
    pub erode_speed: f64,
    /// Fraction of water lost per step (0-1).
    pub evaporate_speed: f64,
    /// Converts height loss into speed.
    pub gravity: f64,
    /// Radius of the erosion brush in cells, at most [`MAX_RADIUS`].
    /// Zero erodes a single cell.
    pub erosion_radius: u32,
}

impl Default for ErosionParams {
    fn default() -> Self {
        Self {
            iterations: 5000,
            max_lifetime: 64,
            inertia: 0.05,
            sediment_capacity_factor: 4.0,
            min_sediment_capacity: 0.01,
            deposit_speed: 0.3,
            erode_speed: 0.3,
            evaporate_speed: 0.01,
            gravity: 4.0,
            erosion_radius: 3,
        }
    }
}

impl ErosionParams {
    /// Checks every field against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> TerrainResult<()> {
        let unit_fields = [
            ("inertia", self.inertia),
            ("deposit_speed", self.deposit_speed),
            ("erode_speed", self.erode_speed),
            ("evaporate_speed", self.evaporate_speed),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(TerrainError::InvalidConfig(format!(
                    "erosion.{name} must be in [0, 1], got {value}"
                )));
            }
        }

        let finite_fields = [
            ("sediment_capacity_factor", self.sediment_capacity_factor),
            ("min_sediment_capacity", self.min_sediment_capacity),
            ("gravity", self.gravity),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TerrainError::InvalidConfig(format!(
                    "erosion.{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.erosion_radius > MAX_RADIUS {
            return Err(TerrainError::InvalidConfig(format!(
                "erosion.erosion_radius must be at most {MAX_RADIUS}, got {}",
                self.erosion_radius
            )));
        }
        Ok(())
    }
}
