//! # Biome Classification
//!
//! Determines terrain type from elevation, moisture and temperature.
//!
//! Classification is an ordered list of guarded [`BiomeRule`]s evaluated in
//! fixed priority order; the first matching rule wins. The last rule is a
//! catch-all, so every clamped input maps to exactly one [`Biome`].

mod classifier;
mod rules;

pub use classifier::BiomeClassifier;
pub use rules::{BiomeRule, ClimateSample, RULES};

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Biome types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Biome {
    /// Open water below half of sea level.
    DeepOcean = 0,
    /// Shallow water.
    Ocean = 1,
    /// Thin band just above sea level.
    Beach = 2,
    /// Hot, wet peaks.
    Scorched = 3,
    /// Dry rock.
    Bare = 4,
    /// Cold, treeless ground.
    Tundra = 5,
    /// Frozen peaks.
    Snow = 6,
    /// Dry temperate land.
    TemperateDesert = 7,
    /// Scrub.
    Shrubland = 8,
    /// Warm grassland.
    Grassland = 9,
    /// Temperate forest.
    TemperateForest = 10,
    /// Wet temperate forest.
    TemperateRainforest = 11,
    /// Hot, dry land.
    SubtropicalDesert = 12,
    /// Hot grassland.
    TropicalSavanna = 13,
    /// Hot forest.
    TropicalForest = 14,
    /// Hot, wet forest.
    TropicalRainforest = 15,
}

impl Biome {
    /// Every biome, in discriminant order.
    pub const ALL: [Self; 16] = [
        Self::DeepOcean,
        Self::Ocean,
        Self::Beach,
        Self::Scorched,
        Self::Bare,
        Self::Tundra,
        Self::Snow,
        Self::TemperateDesert,
        Self::Shrubland,
        Self::Grassland,
        Self::TemperateForest,
        Self::TemperateRainforest,
        Self::SubtropicalDesert,
        Self::TropicalSavanna,
        Self::TropicalForest,
        Self::TropicalRainforest,
    ];

    /// Stable snake_case label, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepOcean => "deep_ocean",
            Self::Ocean => "ocean",
            Self::Beach => "beach",
            Self::Scorched => "scorched",
            Self::Bare => "bare",
            Self::Tundra => "tundra",
            Self::Snow => "snow",
            Self::TemperateDesert => "temperate_desert",
            Self::Shrubland => "shrubland",
            Self::Grassland => "grassland",
            Self::TemperateForest => "temperate_forest",
            Self::TemperateRainforest => "temperate_rainforest",
            Self::SubtropicalDesert => "subtropical_desert",
            Self::TropicalSavanna => "tropical_savanna",
            Self::TropicalForest => "tropical_forest",
            Self::TropicalRainforest => "tropical_rainforest",
        }
    }

    /// Rendering colour.
    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::DeepOcean => Rgb::new(30, 50, 100),
            Self::Ocean => Rgb::new(50, 80, 140),
            Self::Beach => Rgb::new(210, 200, 150),
            Self::Scorched => Rgb::new(100, 90, 80),
            Self::Bare => Rgb::new(140, 135, 125),
            Self::Tundra => Rgb::new(180, 190, 185),
            Self::Snow => Rgb::new(240, 245, 250),
            Self::TemperateDesert => Rgb::new(200, 190, 130),
            Self::Shrubland => Rgb::new(140, 165, 110),
            Self::Grassland => Rgb::new(120, 170, 70),
            Self::TemperateForest => Rgb::new(70, 130, 50),
            Self::TemperateRainforest => Rgb::new(40, 100, 50),
            Self::SubtropicalDesert => Rgb::new(215, 185, 110),
            Self::TropicalSavanna => Rgb::new(170, 180, 60),
            Self::TropicalForest => Rgb::new(50, 120, 40),
            Self::TropicalRainforest => Rgb::new(30, 90, 45),
        }
    }

    /// True for the two ocean biomes.
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::DeepOcean | Self::Ocean)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_complete_and_ordered() {
        for (i, biome) in Biome::ALL.iter().enumerate() {
            assert_eq!(*biome as usize, i, "{biome} out of order");
        }
        let names: HashSet<_> = Biome::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_colors_distinct() {
        let colors: HashSet<_> = Biome::ALL.iter().map(|b| b.color()).collect();
        assert_eq!(colors.len(), 16, "every biome should render distinctly");
        assert_eq!(<(u8, u8, u8)>::from(Biome::Snow.color()), (240, 245, 250));
    }

    #[test]
    fn test_serde_uses_labels() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            biome: Biome,
        }
        for biome in Biome::ALL {
            let text = toml::to_string(&Wrapper { biome }).unwrap();
            assert_eq!(text.trim(), format!("biome = \"{}\"", biome.name()));
            let back: Wrapper = toml::from_str(&text).unwrap();
            assert_eq!(back.biome, biome);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Biome::TropicalRainforest.to_string(), "tropical_rainforest");
        assert!(Biome::DeepOcean.is_water());
        assert!(!Biome::Beach.is_water());
    }
}
