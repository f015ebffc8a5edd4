//! # Grid Normalization
//!
//! Evaluates fractal noise over a rectangular grid and rescales it to `[0, 1]`.
//!
//! Two passes: the first samples every cell and tracks the running min/max,
//! the second remaps `(v - min) / (max - min)`. A range below
//! [`FLAT_RANGE_EPSILON`] is treated as flat and the grid is filled with `0.5`.

use strata_core::Grid;
use tracing::debug;

use crate::fractal::{octave_noise, FractalParams};
use crate::noise::NoiseSource;

/// Ranges narrower than this are considered numerically flat.
pub const FLAT_RANGE_EPSILON: f64 = 1e-10;

/// Value used to fill a numerically flat grid.
pub const FLAT_FILL: f64 = 0.5;

/// Evaluates `octave_noise(x / scale, y / scale)` at every cell and
/// normalizes the result to `[0, 1]`.
///
/// An empty grid (either dimension zero) is returned as-is.
///
/// `scale` must be positive and finite. Any other value makes every sample
/// NaN or identical, which would come back as a flat grid; debug builds
/// panic instead.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_grid<N: NoiseSource + ?Sized>(
    source: &N,
    width: usize,
    height: usize,
    scale: f64,
    fractal: &FractalParams,
) -> Grid<f64> {
    debug_assert!(
        scale.is_finite() && scale > 0.0,
        "noise scale must be positive and finite, got {scale}"
    );
    let raw = Grid::from_fn(width, height, |x, y| {
        octave_noise(source, x as f64 / scale, y as f64 / scale, fractal)
    });
    normalize(raw)
}

/// Linearly rescales a field to `[0, 1]`, or fills it with `0.5` if flat.
#[must_use]
pub fn normalize(mut grid: Grid<f64>) -> Grid<f64> {
    let Some((min, max)) = value_range(&grid) else {
        return grid;
    };

    let range = max - min;
    if range < FLAT_RANGE_EPSILON {
        debug!(min, max, "flat noise field, filling with {}", FLAT_FILL);
        grid.as_mut_slice().fill(FLAT_FILL);
        return grid;
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        min,
        max,
        "normalizing noise grid"
    );
    for v in grid.as_mut_slice() {
        *v = (*v - min) / range;
    }
    grid
}

/// Clamps `value` to `[0, 1]`, sending NaN to the top of the range.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Min and max over every cell, or `None` for an empty grid.
fn value_range(grid: &Grid<f64>) -> Option<(f64, f64)> {
    if grid.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in grid.iter() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}
