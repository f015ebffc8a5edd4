//! # Noise Kernels
//!
//! Seeded, deterministic 2D scalar noise.
//!
//! ## Kernels
//!
//! - [`PerlinNoise`]: gradient noise on the square lattice. Exactly zero at
//!   integer coordinates.
//! - [`SimplexNoise`]: noise on a skewed triangular lattice. Fewer
//!   axis-aligned artifacts, not zero at integers.
//!
//! Both share a seeded [`PermutationTable`] and implement [`NoiseSource`], so
//! octave stacking and grid normalization are written once.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`Seed`], every kernel produces **exactly** the same values
//! on any platform, any time.

mod perlin;
mod permutation;
mod simplex;

pub use perlin::PerlinNoise;
pub use permutation::PermutationTable;
pub use simplex::SimplexNoise;

use strata_core::Grid;

use crate::fractal::{self, FractalParams};
use crate::normalize;

/// Seed for deterministic generation.
///
/// Every stage that needs randomness derives its own stream from a seed;
/// nothing reads ambient global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., a moisture field).
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A deterministic 2D scalar field.
///
/// Implementors supply [`noise`](NoiseSource::noise); octave stacking and
/// normalized grid generation come for free and work through trait objects.
pub trait NoiseSource {
    /// Samples the field at `(x, y)`.
    ///
    /// Returns a value approximately in `[-1, 1]`, continuous in both axes.
    fn noise(&self, x: f64, y: f64) -> f64;

    /// Fractal Brownian motion: `octaves` layers of [`noise`](NoiseSource::noise)
    /// at rising frequency and falling amplitude.
    ///
    /// The sum is not renormalized and may slightly exceed `[-1, 1]`.
    fn octave_noise(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        fractal::octave_noise(
            self,
            x,
            y,
            &FractalParams {
                octaves,
                persistence,
                lacunarity,
            },
        )
    }

    /// Evaluates octave noise over a `width x height` grid at `(x / scale, y / scale)`
    /// and rescales the result to `[0, 1]`.
    ///
    /// A numerically flat field comes back as a uniform `0.5` grid.
    /// `scale` must be positive and finite; debug builds panic otherwise.
    fn generate_grid(
        &self,
        width: usize,
        height: usize,
        scale: f64,
        fractal: &FractalParams,
    ) -> Grid<f64> {
        normalize::generate_grid(self, width, height, scale, fractal)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &N {
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    #[inline]
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}
