//! # Fractal Synthesis
//!
//! Octave stacking (fBm) over any [`NoiseSource`].
//!
//! Each octave samples the kernel at `lacunarity` times the previous
//! frequency and `persistence` times the previous amplitude. The sum is left
//! as-is: with default parameters it can reach about ±2, and callers that need
//! a bounded range normalize downstream.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseSource;

/// Octave parameters for fractal noise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Number of noise layers (typically 4-8).
    pub octaves: u32,
    /// Amplitude decay per octave (typically 0.5).
    pub persistence: f64,
    /// Frequency increase per octave (typically 2.0).
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    /// Single-octave parameters; fBm reduces to the raw kernel.
    pub const SINGLE: Self = Self {
        octaves: 1,
        persistence: 0.5,
        lacunarity: 2.0,
    };

    /// Sum of the octave amplitudes, `1 + p + p^2 + ...`.
    ///
    /// An upper bound on `|octave_noise|` when the kernel stays in `[-1, 1]`.
    #[must_use]
    pub fn amplitude_sum(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }
}

/// Generates octaved (fractal) noise.
///
/// Combines multiple layers of noise at different frequencies
/// to create more natural-looking terrain.
///
/// # Arguments
///
/// * `source` - Kernel to sample
/// * `x`, `y` - Coordinates
/// * `params` - Octave count, persistence and lacunarity
///
/// # Returns
///
/// A value roughly in the range `[-amplitude_sum, amplitude_sum]`. Zero
/// octaves yield `0.0`.
#[must_use]
pub fn octave_noise<N: NoiseSource + ?Sized>(
    source: &N,
    x: f64,
    y: f64,
    params: &FractalParams,
) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for _ in 0..params.octaves {
        total += source.noise(x * frequency, y * frequency) * amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    total
}
