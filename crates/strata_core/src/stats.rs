//! # Field Statistics
//!
//! Summary numbers for scalar grids, used to compare terrain before and
//! after a stage and to pin regression baselines.

use crate::grid::Grid;

/// Min/max/mean/standard deviation of a scalar field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStats {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl GridStats {
    /// Computes statistics over a slice of values.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        let n = values.len() as f64;
        let mean = sum / n;
        let variance = values.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

impl Grid<f64> {
    /// Summary statistics over every cell, or `None` if the grid is empty.
    #[must_use]
    pub fn stats(&self) -> Option<GridStats> {
        GridStats::from_values(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_known_values() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let stats = grid.stats().unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.mean - 2.5).abs() < 1e-12);
        assert!((stats.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_stats_empty() {
        let grid: Grid<f64> = Grid::filled(0, 3, 0.0);
        assert!(grid.stats().is_none());
    }

    #[test]
    fn test_stats_constant_field() {
        let stats = Grid::filled(8, 8, 0.5).stats().unwrap();
        assert_eq!(stats.min, 0.5);
        assert_eq!(stats.max, 0.5);
        assert_eq!(stats.std_dev, 0.0);
    }
}
