//! Erosion brush: weighted neighbourhood used to spread one erode event.

/// Largest brush radius in cells. Larger radii are capped to it.
pub const MAX_RADIUS: u32 = 64;

/// One cell of the brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushCell {
    /// Column offset from the centre cell.
    pub dx: i32,
    /// Row offset from the centre cell.
    pub dy: i32,
    /// Normalized weight; all weights of a brush sum to 1.
    pub weight: f64,
}

/// Precomputed, radius-dependent set of offsets with triangular falloff.
///
/// Computed once per erosion run and shared read-only by every droplet.
#[derive(Clone, Debug, PartialEq)]
pub struct ErosionBrush {
    cells: Vec<BrushCell>,
}

impl ErosionBrush {
    /// Builds the brush for `radius`.
    ///
    /// Every offset within `[-radius, radius]` on both axes is weighted
    /// `max(0, radius - distance)`; zero weights are dropped and the rest
    /// normalized. Radius zero is the single centre cell. Radii above
    /// [`MAX_RADIUS`] build the `MAX_RADIUS` brush.
    #[must_use]
    pub fn new(radius: u32) -> Self {
        let Ok(r) = i32::try_from(radius.min(MAX_RADIUS)) else {
            return Self::single();
        };
        if r == 0 {
            return Self::single();
        }

        let mut cells = Vec::new();
        let mut total = 0.0;
        for dy in -r..=r {
            for dx in -r..=r {
                let dist = f64::from(dx).hypot(f64::from(dy));
                let weight = (f64::from(r) - dist).max(0.0);
                if weight > 0.0 {
                    cells.push(BrushCell { dx, dy, weight });
                    total += weight;
                }
            }
        }

        if total == 0.0 {
            return Self::single();
        }
        for cell in &mut cells {
            cell.weight /= total;
        }
        Self { cells }
    }

    fn single() -> Self {
        Self {
            cells: vec![BrushCell {
                dx: 0,
                dy: 0,
                weight: 1.0,
            }],
        }
    }

    /// The brush cells in row-major offset order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[BrushCell] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a brush has at least its centre cell.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
