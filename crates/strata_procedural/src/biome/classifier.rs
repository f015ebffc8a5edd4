//! Cell-wise and grid-wise classification.

use strata_core::{Grid, GridResult};
use tracing::debug;

use super::rules::{first_match, BiomeRule, ClimateSample};
use super::{Biome, Rgb};

/// Classifies terrain cells into biomes.
///
/// Holds only the sea level; classification itself is a pure function.
///
/// # Example
///
/// ```rust
/// use strata_procedural::{Biome, BiomeClassifier};
///
/// let classifier = BiomeClassifier::default();
/// assert_eq!(classifier.classify(0.9, 0.1, 0.1), Biome::Snow);
/// assert_eq!(classifier.classify(0.36, 0.5, 0.5), Biome::Beach);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeClassifier {
    sea_level: f64,
}

impl Default for BiomeClassifier {
    fn default() -> Self {
        Self::new(0.35)
    }
}

impl BiomeClassifier {
    /// Creates a classifier.
    ///
    /// # Arguments
    ///
    /// * `sea_level` - Elevation threshold below which terrain is water (0-1)
    #[must_use]
    pub const fn new(sea_level: f64) -> Self {
        Self { sea_level }
    }

    /// Sea level.
    #[inline]
    #[must_use]
    pub const fn sea_level(&self) -> f64 {
        self.sea_level
    }

    /// Classifies one cell. Inputs are clamped to `[0, 1]` first, NaN to 1.
    #[must_use]
    pub fn classify(&self, elevation: f64, moisture: f64, temperature: f64) -> Biome {
        self.rule_for(elevation, moisture, temperature).biome
    }

    /// The rule that decides the cell, for inspecting the classification.
    #[must_use]
    pub fn rule_for(&self, elevation: f64, moisture: f64, temperature: f64) -> &'static BiomeRule {
        first_match(&ClimateSample::new(elevation, moisture, temperature, self.sea_level))
    }

    /// Classifies every cell.
    ///
    /// # Errors
    ///
    /// Returns [`strata_core::GridError::Empty`] for an empty elevation grid
    /// and [`strata_core::GridError::DimensionMismatch`] if moisture or
    /// temperature differ in size. Nothing is classified on error.
    pub fn classify_grid(
        &self,
        elevation: &Grid<f64>,
        moisture: &Grid<f64>,
        temperature: &Grid<f64>,
    ) -> GridResult<Grid<Biome>> {
        elevation.ensure_non_empty()?;
        elevation.ensure_same_dimensions(moisture, "moisture")?;
        elevation.ensure_same_dimensions(temperature, "temperature")?;

        debug!(
            width = elevation.width(),
            height = elevation.height(),
            sea_level = self.sea_level,
            "classifying biomes"
        );
        Ok(Grid::from_fn(elevation.width(), elevation.height(), |x, y| {
            self.classify(elevation[(x, y)], moisture[(x, y)], temperature[(x, y)])
        }))
    }

    /// Rendering colour for a biome.
    #[inline]
    #[must_use]
    pub const fn get_color(&self, biome: Biome) -> Rgb {
        biome.color()
    }

    /// Maps a biome grid to colours.
    ///
    /// # Errors
    ///
    /// Returns [`strata_core::GridError::Empty`] for an empty grid.
    pub fn colorize_grid(&self, biomes: &Grid<Biome>) -> GridResult<Grid<Rgb>> {
        biomes.ensure_non_empty()?;
        Ok(biomes.map(|&b| self.get_color(b)))
    }
}
