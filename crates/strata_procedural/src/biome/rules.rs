//! Ordered biome rules.
//!
//! Each rule only states the conditions not already excluded by the rules
//! before it. Reordering the table changes the classification.

use super::Biome;
use crate::normalize::clamp_unit;

/// Clamped inputs for one cell, plus the sea level they are judged against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimateSample {
    /// Elevation in `[0, 1]`.
    pub elevation: f64,
    /// Moisture in `[0, 1]`.
    pub moisture: f64,
    /// Temperature in `[0, 1]`.
    pub temperature: f64,
    /// Elevation below which cells are water.
    pub sea_level: f64,
}

impl ClimateSample {
    /// Builds a sample, clamping the three inputs to `[0, 1]`.
    ///
    /// A NaN input clamps to 1.
    #[must_use]
    pub fn new(elevation: f64, moisture: f64, temperature: f64, sea_level: f64) -> Self {
        Self {
            elevation: clamp_unit(elevation),
            moisture: clamp_unit(moisture),
            temperature: clamp_unit(temperature),
            sea_level,
        }
    }

    fn high(&self) -> bool {
        self.elevation > HIGH_ELEVATION
    }

    fn medium_high(&self) -> bool {
        self.elevation > MEDIUM_HIGH_ELEVATION
    }
}

/// A guarded rule: the first rule whose predicate holds decides the biome.
#[derive(Clone, Copy)]
pub struct BiomeRule {
    /// Short identifier, `band/biome`.
    pub label: &'static str,
    /// Guard over the clamped sample.
    pub matches: fn(&ClimateSample) -> bool,
    /// Result when the guard holds.
    pub biome: Biome,
}

impl std::fmt::Debug for BiomeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiomeRule")
            .field("label", &self.label)
            .field("biome", &self.biome)
            .finish_non_exhaustive()
    }
}

const BEACH_BAND: f64 = 0.05;
const HIGH_ELEVATION: f64 = 0.85;
const MEDIUM_HIGH_ELEVATION: f64 = 0.6;

/// The classification table, in priority order.
pub static RULES: [BiomeRule; 23] = [
    // Water and shore
    BiomeRule {
        label: "water/deep_ocean",
        matches: |s| s.elevation < s.sea_level && s.elevation < s.sea_level * 0.5,
        biome: Biome::DeepOcean,
    },
    BiomeRule {
        label: "water/ocean",
        matches: |s| s.elevation < s.sea_level,
        biome: Biome::Ocean,
    },
    BiomeRule {
        label: "shore/beach",
        matches: |s| s.elevation < s.sea_level + BEACH_BAND,
        biome: Biome::Beach,
    },
    // High elevation: temperature first
    BiomeRule {
        label: "high/snow",
        matches: |s| s.high() && s.temperature < 0.2,
        biome: Biome::Snow,
    },
    BiomeRule {
        label: "high/tundra",
        matches: |s| s.high() && s.temperature < 0.4,
        biome: Biome::Tundra,
    },
    BiomeRule {
        label: "high/bare",
        matches: |s| s.high() && s.moisture < 0.2,
        biome: Biome::Bare,
    },
    BiomeRule {
        label: "high/scorched",
        matches: ClimateSample::high,
        biome: Biome::Scorched,
    },
    // Medium-high elevation
    BiomeRule {
        label: "medium_high/tundra",
        matches: |s| s.medium_high() && s.temperature < 0.3 && s.moisture > 0.5,
        biome: Biome::Tundra,
    },
    BiomeRule {
        label: "medium_high/bare",
        matches: |s| s.medium_high() && s.temperature < 0.3,
        biome: Biome::Bare,
    },
    BiomeRule {
        label: "medium_high/temperate_desert",
        matches: |s| s.medium_high() && s.moisture < 0.2,
        biome: Biome::TemperateDesert,
    },
    BiomeRule {
        label: "medium_high/shrubland",
        matches: |s| s.medium_high() && s.moisture < 0.5,
        biome: Biome::Shrubland,
    },
    BiomeRule {
        label: "medium_high/temperate_forest",
        matches: ClimateSample::medium_high,
        biome: Biome::TemperateForest,
    },
    // Medium elevation, hot
    BiomeRule {
        label: "hot/subtropical_desert",
        matches: |s| s.temperature > 0.7 && s.moisture < 0.2,
        biome: Biome::SubtropicalDesert,
    },
    BiomeRule {
        label: "hot/tropical_savanna",
        matches: |s| s.temperature > 0.7 && s.moisture < 0.5,
        biome: Biome::TropicalSavanna,
    },
    BiomeRule {
        label: "hot/tropical_forest",
        matches: |s| s.temperature > 0.7 && s.moisture < 0.75,
        biome: Biome::TropicalForest,
    },
    BiomeRule {
        label: "hot/tropical_rainforest",
        matches: |s| s.temperature > 0.7,
        biome: Biome::TropicalRainforest,
    },
    // Medium elevation, warm
    BiomeRule {
        label: "warm/temperate_desert",
        matches: |s| s.temperature > 0.4 && s.moisture < 0.2,
        biome: Biome::TemperateDesert,
    },
    BiomeRule {
        label: "warm/grassland",
        matches: |s| s.temperature > 0.4 && s.moisture < 0.5,
        biome: Biome::Grassland,
    },
    BiomeRule {
        label: "warm/temperate_forest",
        matches: |s| s.temperature > 0.4 && s.moisture < 0.75,
        biome: Biome::TemperateForest,
    },
    BiomeRule {
        label: "warm/temperate_rainforest",
        matches: |s| s.temperature > 0.4,
        biome: Biome::TemperateRainforest,
    },
    // Medium elevation, cold
    BiomeRule {
        label: "cold/bare",
        matches: |s| s.moisture < 0.3,
        biome: Biome::Bare,
    },
    BiomeRule {
        label: "cold/shrubland",
        matches: |s| s.moisture < 0.6,
        biome: Biome::Shrubland,
    },
    BiomeRule {
        label: "cold/tundra",
        matches: |_| true,
        biome: Biome::Tundra,
    },
];

/// First rule matching `sample`.
pub(super) fn first_match(sample: &ClimateSample) -> &'static BiomeRule {
    let last = &RULES[RULES.len() - 1];
    RULES.iter().find(|rule| (rule.matches)(sample)).unwrap_or(last)
}
