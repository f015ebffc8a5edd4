//! Hydraulic erosion simulator.
//!
//! Algorithm, per droplet:
//! 1. Spawn at a uniformly random point of the interior (last row/column excluded)
//! 2. While the droplet lives:
//!    a. Sample height and gradient at the current position
//!    b. Blend direction with the downhill gradient (inertia) and normalize
//!    c. Step one cell along the direction, stop if it leaves the interior
//!    d. Compare heights: capacity grows with drop, speed and water
//!    e. Over capacity or climbing: deposit at the current position
//!    f. Under capacity and descending: erode around the current cell
//!    g. Update speed from the height change, evaporate water, move

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::Grid;
use tracing::debug;

use super::brush::ErosionBrush;
use super::droplet::{Droplet, Termination};
use super::params::ErosionParams;
use crate::noise::Seed;

/// Keeps sample positions strictly inside the last cell so the `+1`
/// neighbours always exist.
const EDGE_MARGIN: f64 = 1.000_001;

/// Bilinearly interpolated height and slope at a continuous position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
    /// Height change per cell along +x.
    pub gradient_x: f64,
    /// Height change per cell along +y.
    pub gradient_y: f64,
    /// Interpolated height.
    pub height: f64,
}

/// Counters from one erosion run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ErosionStats {
    /// Droplets simulated.
    pub droplets: u32,
    /// Steps taken across all droplets.
    pub steps: u64,
    /// Mass removed from the grid.
    pub total_eroded: f64,
    /// Mass added back to the grid.
    pub total_deposited: f64,
    /// Droplets stopped on a flat spot.
    pub flat: u32,
    /// Droplets that ran off the interior.
    pub out_of_bounds: u32,
    /// Droplets that ran out of water.
    pub evaporated: u32,
    /// Droplets that lost all speed.
    pub stalled: u32,
    /// Droplets that hit `max_lifetime`.
    pub expired: u32,
}

impl ErosionStats {
    fn record(&mut self, termination: Termination) {
        match termination {
            Termination::Flat => self.flat += 1,
            Termination::OutOfBounds => self.out_of_bounds += 1,
            Termination::Evaporated => self.evaporated += 1,
            Termination::Stalled => self.stalled += 1,
            Termination::Expired => self.expired += 1,
        }
    }

    /// Number of droplets with the given termination reason.
    #[must_use]
    pub fn count(&self, termination: Termination) -> u32 {
        match termination {
            Termination::Flat => self.flat,
            Termination::OutOfBounds => self.out_of_bounds,
            Termination::Evaporated => self.evaporated,
            Termination::Stalled => self.stalled,
            Termination::Expired => self.expired,
        }
    }

    /// Sediment still in flight when droplets died: eroded minus deposited.
    #[must_use]
    pub fn sediment_lost(&self) -> f64 {
        self.total_eroded - self.total_deposited
    }
}

/// Eroded heightmap plus run statistics.
#[derive(Clone, Debug)]
pub struct ErosionOutcome {
    /// The new heightmap. Same dimensions as the input.
    pub heightmap: Grid<f64>,
    /// What happened during the run.
    pub stats: ErosionStats,
}

/// Particle-based hydraulic erosion over 2D heightmaps.
///
/// Owns its random stream. Consecutive runs continue the stream, so two
/// calls on one simulator differ; [`reset`](Self::reset) rewinds to the seed.
///
/// # Example
///
/// ```rust
/// use strata_core::Grid;
/// use strata_procedural::{ErosionParams, HydraulicErosion, Seed};
///
/// let terrain = Grid::from_fn(32, 32, |x, y| (x + y) as f64 / 62.0);
/// let mut eroder = HydraulicErosion::new(Seed::new(42));
/// let params = ErosionParams { iterations: 200, ..ErosionParams::default() };
///
/// let eroded = eroder.erode(&terrain, &params);
/// assert_eq!(eroded.dimensions(), terrain.dimensions());
/// ```
#[derive(Clone, Debug)]
pub struct HydraulicErosion {
    seed: Seed,
    rng: ChaCha8Rng,
}

impl HydraulicErosion {
    /// Creates a simulator with a fresh stream from `seed`.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
        }
    }

    /// The seed this simulator was created with.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Rewinds the random stream to the start.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed.value());
    }

    /// Runs erosion on a copy of `heightmap` and returns the copy.
    #[must_use]
    pub fn erode(&mut self, heightmap: &Grid<f64>, params: &ErosionParams) -> Grid<f64> {
        self.erode_with_stats(heightmap, params).heightmap
    }

    /// Runs erosion on a copy of `heightmap`, returning it with run statistics.
    ///
    /// Grids narrower or shorter than 2 cells, and zero iterations, come back
    /// as an unmodified copy.
    pub fn erode_with_stats(&mut self, heightmap: &Grid<f64>, params: &ErosionParams) -> ErosionOutcome {
        let mut map = heightmap.clone();
        let mut stats = ErosionStats::default();

        let (width, height) = map.dimensions();
        if width < 2 || height < 2 || params.iterations == 0 {
            debug!(width, height, iterations = params.iterations, "erosion skipped");
            return ErosionOutcome { heightmap: map, stats };
        }

        let brush = ErosionBrush::new(params.erosion_radius);
        #[allow(clippy::cast_precision_loss)]
        let (max_x, max_y) = (width as f64 - EDGE_MARGIN, height as f64 - EDGE_MARGIN);

        for _ in 0..params.iterations {
            let x = self.rng.gen_range(0.0..max_x);
            let y = self.rng.gen_range(0.0..max_y);
            let termination = run_droplet(&mut map, &brush, params, Droplet::spawn(x, y), &mut stats);
            stats.droplets += 1;
            stats.record(termination);
        }

        debug!(
            droplets = stats.droplets,
            steps = stats.steps,
            eroded = stats.total_eroded,
            deposited = stats.total_deposited,
            out_of_bounds = stats.out_of_bounds,
            expired = stats.expired,
            "hydraulic erosion finished"
        );
        ErosionOutcome { heightmap: map, stats }
    }
}

/// Simulates one droplet to termination, mutating `map` in place.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn run_droplet(
    map: &mut Grid<f64>,
    brush: &ErosionBrush,
    params: &ErosionParams,
    mut droplet: Droplet,
    stats: &mut ErosionStats,
) -> Termination {
    let (width, height) = map.dimensions();
    let (limit_x, limit_y) = ((width - 1) as f64, (height - 1) as f64);

    for _ in 0..params.max_lifetime {
        let cell_x = droplet.x as usize;
        let cell_y = droplet.y as usize;

        let here = sample_height_and_gradient(map, droplet.x, droplet.y);
        if !droplet.steer(here.gradient_x, here.gradient_y, params.inertia) {
            return Termination::Flat;
        }

        let new_x = droplet.x + droplet.dir_x;
        let new_y = droplet.y + droplet.dir_y;
        if new_x < 0.0 || new_x >= limit_x || new_y < 0.0 || new_y >= limit_y {
            return Termination::OutOfBounds;
        }
        stats.steps += 1;

        let new_height = sample_height_and_gradient(map, new_x, new_y).height;
        let delta_height = new_height - here.height;

        let capacity = f64::max(
            params.min_sediment_capacity,
            -delta_height * droplet.speed * droplet.water * params.sediment_capacity_factor,
        );

        if droplet.sediment > capacity || delta_height > 0.0 {
            // Climbing: fill the pit behind us, at most up to the new height.
            let amount = if delta_height > 0.0 {
                delta_height.min(droplet.sediment)
            } else {
                (droplet.sediment - capacity) * params.deposit_speed
            };
            droplet.sediment -= amount;
            stats.total_deposited += deposit_bilinear(map, droplet.x, droplet.y, amount);
        } else if delta_height < 0.0 {
            let amount = ((capacity - droplet.sediment) * params.erode_speed).min(-delta_height);
            let eroded = erode_brush(map, cell_x, cell_y, new_height, amount, brush);
            droplet.sediment += eroded;
            stats.total_eroded += eroded;
        }

        droplet.speed = (droplet.speed * droplet.speed + delta_height * params.gravity)
            .max(0.0)
            .sqrt();
        droplet.water *= 1.0 - params.evaporate_speed;
        droplet.x = new_x;
        droplet.y = new_y;

        if let Some(termination) = droplet.exhausted() {
            return termination;
        }
    }
    Termination::Expired
}

/// Interpolated gradient and height at `(x, y)`.
///
/// The position is clamped into the sampleable interior first. The gradient
/// points uphill; droplets move against it.
///
/// # Panics
///
/// Panics if the grid is smaller than 2x2.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_height_and_gradient(map: &Grid<f64>, x: f64, y: f64) -> HeightSample {
    let (width, height) = map.dimensions();
    let x = x.max(0.0).min(width as f64 - EDGE_MARGIN);
    let y = y.max(0.0).min(height as f64 - EDGE_MARGIN);

    let cell_x = x as usize;
    let cell_y = y as usize;
    let x_frac = x - cell_x as f64;
    let y_frac = y - cell_y as f64;

    let h00 = map[(cell_x, cell_y)];
    let h10 = map[(cell_x + 1, cell_y)];
    let h01 = map[(cell_x, cell_y + 1)];
    let h11 = map[(cell_x + 1, cell_y + 1)];

    let gradient_x = (h10 - h00) * (1.0 - y_frac) + (h11 - h01) * y_frac;
    let gradient_y = (h01 - h00) * (1.0 - x_frac) + (h11 - h10) * x_frac;
    let height = h00 * (1.0 - x_frac) * (1.0 - y_frac)
        + h10 * x_frac * (1.0 - y_frac)
        + h01 * (1.0 - x_frac) * y_frac
        + h11 * x_frac * y_frac;

    HeightSample {
        gradient_x,
        gradient_y,
        height,
    }
}

/// Adds `amount` at `(x, y)`, split over the four surrounding cells by their
/// bilinear weights. Returns the mass actually added.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn deposit_bilinear(map: &mut Grid<f64>, x: f64, y: f64, amount: f64) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }
    let (width, height) = map.dimensions();
    if x < 0.0 || x >= (width - 1) as f64 || y < 0.0 || y >= (height - 1) as f64 {
        return 0.0;
    }

    let cell_x = x as usize;
    let cell_y = y as usize;
    let x_frac = x - cell_x as f64;
    let y_frac = y - cell_y as f64;

    map[(cell_x, cell_y)] += amount * ((1.0 - x_frac) * (1.0 - y_frac));
    map[(cell_x + 1, cell_y)] += amount * (x_frac * (1.0 - y_frac));
    map[(cell_x, cell_y + 1)] += amount * ((1.0 - x_frac) * y_frac);
    map[(cell_x + 1, cell_y + 1)] += amount * (x_frac * y_frac);
    amount
}

/// Removes up to `amount` around `(center_x, center_y)` using the brush.
///
/// Only cells above `floor` take part, and none is lowered below it. The
/// brush weights are renormalized over the participating cells. Returns the
/// mass actually removed, which can be less than requested.
pub(crate) fn erode_brush(
    map: &mut Grid<f64>,
    center_x: usize,
    center_y: usize,
    floor: f64,
    amount: f64,
    brush: &ErosionBrush,
) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }

    let mut active: Vec<(usize, usize, f64)> = Vec::with_capacity(brush.len());
    let mut weight_sum = 0.0;
    for cell in brush.cells() {
        let (Ok(dx), Ok(dy)) = (isize::try_from(cell.dx), isize::try_from(cell.dy)) else {
            continue;
        };
        let (Some(px), Some(py)) = (center_x.checked_add_signed(dx), center_y.checked_add_signed(dy)) else {
            continue;
        };
        let Some(&h) = map.get(px, py) else {
            continue;
        };
        if h - floor > 0.0 && cell.weight > 0.0 {
            active.push((px, py, cell.weight));
            weight_sum += cell.weight;
        }
    }

    if active.is_empty() || weight_sum <= 0.0 {
        return 0.0;
    }

    let mut removed = 0.0;
    for (px, py, weight) in active {
        let cell = &mut map[(px, py)];
        let planned = amount * (weight / weight_sum);
        let taken = planned.min(*cell - floor);
        if taken > 0.0 {
            let lowered = (*cell - taken).max(floor);
            removed += *cell - lowered;
            *cell = lowered;
        }
    }
    removed
}
