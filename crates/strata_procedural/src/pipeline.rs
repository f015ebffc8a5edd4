//! # Terrain Pipeline
//!
//! Runs every stage in order for one config:
//!
//! ```text
//! seed -> noise kernel -> fBm -> normalized heightmap
//!      -> erosion (optional) -> temperature
//!      -> biomes (with caller moisture) -> colours
//! ```
//!
//! Each stage owns its own random stream. Erosion draws from a seed derived
//! from the master seed, so toggling erosion never shifts the noise field.

use strata_core::Grid;
use tracing::{debug, info};

use crate::biome::{Biome, Rgb};
use crate::config::TerrainConfig;
use crate::erosion::{ErosionStats, HydraulicErosion};
use crate::error::TerrainResult;
use crate::noise::Seed;

/// `Seed::derive` purpose for the erosion stream.
pub const EROSION_STREAM: u64 = 1;

/// `Seed::derive` purpose callers should use for a moisture noise field.
pub const MOISTURE_STREAM: u64 = 2;

/// Every grid produced by one pipeline run. All share the same dimensions.
#[derive(Clone, Debug)]
pub struct TerrainMaps {
    /// Normalized heightmap before erosion.
    pub heightmap: Grid<f64>,
    /// Heightmap after erosion. Equal to `heightmap` when erosion is disabled.
    pub eroded: Grid<f64>,
    /// Erosion run statistics, if erosion ran.
    pub erosion: Option<ErosionStats>,
    /// Temperature derived from the eroded heightmap.
    pub temperature: Grid<f64>,
    /// Biome per cell.
    pub biomes: Grid<Biome>,
    /// Rendering colour per cell.
    pub colors: Grid<Rgb>,
}

impl TerrainMaps {
    /// Number of cells per biome, indexed like [`Biome::ALL`].
    #[must_use]
    pub fn biome_counts(&self) -> [usize; 16] {
        let mut counts = [0; 16];
        for &biome in self.biomes.iter() {
            counts[biome as usize] += 1;
        }
        counts
    }
}

/// End-to-end terrain generation for a validated config.
///
/// # Example
///
/// ```rust
/// use strata_core::Grid;
/// use strata_procedural::{TerrainConfig, TerrainPipeline};
///
/// let mut config = TerrainConfig::default();
/// config.width = 32;
/// config.height = 32;
/// config.erosion.params.iterations = 100;
///
/// let pipeline = TerrainPipeline::new(config)?;
/// let moisture = Grid::filled(32, 32, 0.5);
/// let maps = pipeline.run(&moisture)?;
/// assert_eq!(maps.biomes.dimensions(), (32, 32));
/// # Ok::<(), strata_procedural::TerrainError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TerrainPipeline {
    config: TerrainConfig,
}

impl TerrainPipeline {
    /// Validates `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TerrainError::InvalidConfig`] for out-of-range values.
    pub fn new(config: TerrainConfig) -> TerrainResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The config this pipeline runs.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Master seed.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Seed {
        Seed::new(self.config.seed)
    }

    /// Generates the normalized heightmap only.
    #[must_use]
    pub fn heightmap(&self) -> Grid<f64> {
        let noise = &self.config.noise;
        let kernel = noise.kernel.build(self.seed());
        kernel.generate_grid(self.config.width, self.config.height, noise.scale, &noise.fractal)
    }

    /// Runs every stage.
    ///
    /// `moisture` is supplied by the caller and must match the configured
    /// `width x height`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TerrainError::Grid`] if the configured grid is empty
    /// or `moisture` has different dimensions.
    pub fn run(&self, moisture: &Grid<f64>) -> TerrainResult<TerrainMaps> {
        let config = &self.config;
        info!(
            seed = config.seed,
            width = config.width,
            height = config.height,
            kernel = ?config.noise.kernel,
            "generating terrain"
        );

        let heightmap = self.heightmap();
        heightmap.ensure_non_empty()?;
        heightmap.ensure_same_dimensions(moisture, "moisture")?;

        let (eroded, erosion) = if config.erosion.enabled {
            let mut eroder = HydraulicErosion::new(self.seed().derive(EROSION_STREAM));
            let outcome = eroder.erode_with_stats(&heightmap, &config.erosion.params);
            (outcome.heightmap, Some(outcome.stats))
        } else {
            debug!("erosion disabled");
            (heightmap.clone(), None)
        };

        let temperature = config.climate.deriver().generate_temperature_map(&eroded)?;
        let classifier = config.climate.classifier();
        let biomes = classifier.classify_grid(&eroded, moisture, &temperature)?;
        let colors = classifier.colorize_grid(&biomes)?;

        Ok(TerrainMaps {
            heightmap,
            eroded,
            erosion,
            temperature,
            biomes,
            colors,
        })
    }
}
