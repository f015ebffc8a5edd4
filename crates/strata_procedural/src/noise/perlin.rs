//! # Gradient Noise
//!
//! Ken Perlin's improved noise, restricted to 2D.
//!
//! Each lattice corner hashes to one of 8 gradient directions. The query's
//! offset to each corner is dotted with that gradient and the four results
//! are blended with the quintic fade curve, so the field is C2-continuous
//! and vanishes on every lattice point.

use rand::Rng;

use super::{NoiseSource, PermutationTable, Seed};

/// Gradient directions indexed by the low 4 bits of a corner hash.
///
/// Axis-aligned and diagonal directions, listed twice to fill 16 slots.
const GRADIENTS: [[f64; 2]; 16] = [
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
    [1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0],
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
    [1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0],
];

/// 2D gradient (Perlin-style) noise generator.
///
/// # Example
///
/// ```rust
/// use strata_procedural::{NoiseSource, PerlinNoise, Seed};
///
/// let noise = PerlinNoise::new(Seed::new(42));
/// assert_eq!(noise.noise(3.0, 7.0), 0.0);
/// let v = noise.noise(3.5, 7.25);
/// assert!((-1.0..=1.0).contains(&v));
/// ```
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perm_table: PermutationTable,
}

impl PerlinNoise {
    /// Creates a new gradient noise generator from a seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Creates a generator whose table is shuffled by a caller-owned RNG.
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            perm_table: PermutationTable::from_rng(rng),
        }
    }

    /// The permutation table backing this kernel.
    #[must_use]
    pub fn permutation(&self) -> &PermutationTable {
        &self.perm_table
    }

    /// Fade curve `6t^5 - 15t^4 + 10t^3`.
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(t: f64, a: f64, b: f64) -> f64 {
        a + t * (b - a)
    }

    /// Dot product of the hashed gradient with the corner offset.
    #[inline]
    fn grad(hash: usize, x: f64, y: f64) -> f64 {
        let g = GRADIENTS[hash & 15];
        g[0] * x + g[1] * y
    }
}

impl NoiseSource for PerlinNoise {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn noise(&self, x: f64, y: f64) -> f64 {
        // Unit square containing the point
        let x_floor = x.floor();
        let y_floor = y.floor();

        // Relative position inside the square
        let xf = x - x_floor;
        let yf = y - y_floor;

        // Wrapped lattice coordinates
        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;

        let u = Self::fade(xf);
        let v = Self::fade(yf);

        // Hash the four corners
        let p = &self.perm_table;
        let a = p.get(xi) + yi;
        let b = p.get(xi + 1) + yi;

        Self::lerp(
            v,
            Self::lerp(
                u,
                Self::grad(p.get(a), xf, yf),
                Self::grad(p.get(b), xf - 1.0, yf),
            ),
            Self::lerp(
                u,
                Self::grad(p.get(a + 1), xf, yf - 1.0),
                Self::grad(p.get(b + 1), xf - 1.0, yf - 1.0),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let noise1 = PerlinNoise::new(Seed::new(42));
        let noise2 = PerlinNoise::new(Seed::new(42));

        for i in 0..100 {
            let x = f64::from(i) * 0.5;
            let y = f64::from(i) * 0.3;
            assert_eq!(noise1.noise(x, y), noise2.noise(x, y), "Noise should be deterministic");
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let noise1 = PerlinNoise::new(Seed::new(42));
        let noise2 = PerlinNoise::new(Seed::new(99));

        let differences = (0..100)
            .filter(|&i| {
                let (x, y) = (f64::from(i) * 0.5 + 0.25, f64::from(i) * 0.3 + 0.1);
                noise1.noise(x, y) != noise2.noise(x, y)
            })
            .count();
        assert!(differences > 80, "Only {differences}/100 values differ between seeds");
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let noise = PerlinNoise::new(Seed::new(42));
        for ix in -10..10 {
            for iy in -10..10 {
                let value = noise.noise(f64::from(ix), f64::from(iy));
                assert!(value.abs() < 1e-10, "noise({ix}, {iy}) = {value}, expected 0");
            }
        }
    }

    #[test]
    fn test_range() {
        let noise = PerlinNoise::new(Seed::new(42));

        for i in 0..10000 {
            let x = (f64::from(i) * 0.1) - 500.0;
            let y = (f64::from(i) * 0.13) - 650.0;
            let value = noise.noise(x, y);
            assert!((-1.0..=1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_uses_full_range() {
        let noise = PerlinNoise::new(Seed::new(42));
        let values: Vec<f64> = (0..1000)
            .map(|i| noise.noise(f64::from(i) * 0.1, f64::from(i) * 0.07))
            .collect();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        assert!(max > 0.3, "Max value {max} is suspiciously low");
        assert!(min < -0.3, "Min value {min} is suspiciously high");
    }

    #[test]
    fn test_no_jumps_at_cell_boundaries() {
        let noise = PerlinNoise::new(Seed::new(42));
        for boundary in 1..10 {
            let b = f64::from(boundary);
            let before = noise.noise(b - 0.001, 3.7);
            let after = noise.noise(b + 0.001, 3.7);
            assert!((after - before).abs() < 0.01, "Jump at x={boundary}");

            let before = noise.noise(2.3, b - 0.001);
            let after = noise.noise(2.3, b + 0.001);
            assert!((after - before).abs() < 0.01, "Jump at y={boundary}");
        }
    }

    #[test]
    fn test_gradient_table_covers_eight_directions() {
        let mut distinct: Vec<[f64; 2]> = Vec::new();
        for g in GRADIENTS {
            if !distinct.contains(&g) {
                distinct.push(g);
            }
        }
        assert_eq!(distinct.len(), 8);
        assert_eq!(PerlinNoise::grad(0, 0.25, 0.5), 0.75);
        assert_eq!(PerlinNoise::grad(16 + 7, 0.25, 0.5), -0.5);
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(PerlinNoise::fade(0.0), 0.0);
        assert_eq!(PerlinNoise::fade(1.0), 1.0);
        assert!((PerlinNoise::fade(0.5) - 0.5).abs() < 1e-12);
    }
}
