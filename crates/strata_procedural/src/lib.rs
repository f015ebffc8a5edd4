//! # STRATA Procedural Terrain
//!
//! Deterministic heightmap synthesis, hydraulic erosion and biome
//! classification.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and parameters, bit-identical grids
//! 2. **Explicit randomness**: Every kernel and simulator owns its own seeded stream
//! 3. **Owned buffers**: Stages read their input and return a new grid
//! 4. **Synchronous**: Single-threaded, bounded by grid size and iteration count
//!
//! ## Core Components
//!
//! - `PerlinNoise` / `SimplexNoise`: seeded 2D noise kernels
//! - `FractalParams`: octave stacking over any `NoiseSource`
//! - `HydraulicErosion`: particle-based erosion over a heightmap copy
//! - `ClimateDeriver`: elevation to temperature
//! - `BiomeClassifier`: (elevation, moisture, temperature) to biome and colour
//! - `TerrainPipeline`: all of the above, driven by a TOML `TerrainConfig`
//!
//! ## Example
//!
//! ```rust
//! use strata_procedural::{
//!     BiomeClassifier, ClimateDeriver, ErosionParams, FractalParams, HydraulicErosion,
//!     NoiseSource, Seed, SimplexNoise,
//! };
//!
//! let noise = SimplexNoise::new(Seed::new(42));
//! let heightmap = noise.generate_grid(64, 64, 20.0, &FractalParams::default());
//!
//! let params = ErosionParams { iterations: 500, ..ErosionParams::default() };
//! let eroded = HydraulicErosion::new(Seed::new(42)).erode(&heightmap, &params);
//!
//! let temperature = ClimateDeriver::default().generate_temperature_map(&eroded)?;
//! let moisture = SimplexNoise::new(Seed::new(42).derive(2))
//!     .generate_grid(64, 64, 30.0, &FractalParams::default());
//! let biomes = BiomeClassifier::default().classify_grid(&eroded, &moisture, &temperature)?;
//! assert_eq!(biomes.dimensions(), (64, 64));
//! # Ok::<(), strata_core::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod climate;
pub mod config;
pub mod erosion;
pub mod error;
pub mod fractal;
pub mod noise;
pub mod normalize;
pub mod pipeline;

pub use biome::{Biome, BiomeClassifier, BiomeRule, ClimateSample, Rgb, RULES};
pub use climate::ClimateDeriver;
pub use config::{ClimateConfig, ErosionConfig, NoiseConfig, NoiseKernel, TerrainConfig};
pub use erosion::{ErosionOutcome, ErosionParams, ErosionStats, HydraulicErosion, Termination};
pub use error::{TerrainError, TerrainResult};
pub use fractal::FractalParams;
pub use noise::{NoiseSource, PerlinNoise, PermutationTable, Seed, SimplexNoise};
pub use pipeline::{TerrainMaps, TerrainPipeline};
