//! # Terrain Configuration
//!
//! All generation parameters in one TOML file, loaded once at startup.
//! Every section and field has a default, so an empty file is valid.
//!
//! ```toml
//! seed = 42
//! width = 256
//! height = 256
//!
//! [noise]
//! kernel = "simplex"
//! scale = 50.0
//! fractal = { octaves = 6, persistence = 0.5, lacunarity = 2.0 }
//!
//! [erosion]
//! enabled = true
//! iterations = 5000
//! erosion_radius = 3
//!
//! [climate]
//! sea_level = 0.35
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::biome::BiomeClassifier;
use crate::climate::ClimateDeriver;
use crate::erosion::ErosionParams;
use crate::error::{TerrainError, TerrainResult};
use crate::fractal::FractalParams;
use crate::noise::{NoiseSource, PerlinNoise, Seed, SimplexNoise};

/// Which noise kernel generates the heightmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKernel {
    /// Perlin-style gradient noise.
    Gradient,
    /// Simplex noise.
    #[default]
    Simplex,
}

impl NoiseKernel {
    /// Builds the kernel for `seed`.
    #[must_use]
    pub fn build(self, seed: Seed) -> Box<dyn NoiseSource> {
        match self {
            Self::Gradient => Box::new(PerlinNoise::new(seed)),
            Self::Simplex => Box::new(SimplexNoise::new(seed)),
        }
    }
}

/// Heightmap noise settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Kernel to sample.
    pub kernel: NoiseKernel,
    /// Cells per noise unit. Larger is smoother.
    pub scale: f64,
    /// Octave parameters.
    pub fractal: FractalParams,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kernel: NoiseKernel::default(),
            scale: 50.0,
            fractal: FractalParams::default(),
        }
    }
}

/// Erosion settings. The simulation parameters sit directly in `[erosion]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosionConfig {
    /// Skip erosion entirely when false.
    pub enabled: bool,
    /// Simulation parameters.
    #[serde(flatten)]
    pub params: ErosionParams,
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            params: ErosionParams::default(),
        }
    }
}

/// Climate and biome settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    /// Elevation below which terrain is water.
    pub sea_level: f64,
    /// Temperature at sea level.
    pub base_temperature: f64,
    /// Temperature drop from sea level to the highest peak.
    pub elevation_cooling: f64,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            sea_level: 0.35,
            base_temperature: 0.7,
            elevation_cooling: 0.6,
        }
    }
}

impl ClimateConfig {
    /// Temperature deriver for these settings.
    #[must_use]
    pub const fn deriver(&self) -> ClimateDeriver {
        ClimateDeriver::new(self.sea_level, self.base_temperature, self.elevation_cooling)
    }

    /// Biome classifier for these settings.
    #[must_use]
    pub const fn classifier(&self) -> BiomeClassifier {
        BiomeClassifier::new(self.sea_level)
    }
}

/// Complete generation config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Master seed. Noise uses it directly; other stages derive from it.
    pub seed: u64,
    /// Grid columns.
    pub width: usize,
    /// Grid rows.
    pub height: usize,
    /// Heightmap noise.
    pub noise: NoiseConfig,
    /// Hydraulic erosion.
    pub erosion: ErosionConfig,
    /// Temperature and biomes.
    pub climate: ClimateConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 256,
            height: 256,
            noise: NoiseConfig::default(),
            erosion: ErosionConfig::default(),
            climate: ClimateConfig::default(),
        }
    }
}

impl TerrainConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`TerrainError::Parse`] for malformed TOML or unknown value types,
    /// [`TerrainError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> TerrainResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// [`TerrainError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> TerrainResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TerrainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every value against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> TerrainResult<()> {
        let noise = &self.noise;
        if !noise.scale.is_finite() || noise.scale <= 0.0 {
            return Err(invalid(format!("noise.scale must be positive, got {}", noise.scale)));
        }
        if noise.fractal.octaves == 0 {
            return Err(invalid("noise.fractal.octaves must be at least 1".to_owned()));
        }
        for (name, value) in [
            ("persistence", noise.fractal.persistence),
            ("lacunarity", noise.fractal.lacunarity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!(
                    "noise.fractal.{name} must be positive, got {value}"
                )));
            }
        }

        self.erosion.params.validate()?;

        let climate = &self.climate;
        for (name, value) in [
            ("sea_level", climate.sea_level),
            ("base_temperature", climate.base_temperature),
            ("elevation_cooling", climate.elevation_cooling),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("climate.{name} must be in [0, 1], got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> TerrainError {
    TerrainError::InvalidConfig(message)
}
