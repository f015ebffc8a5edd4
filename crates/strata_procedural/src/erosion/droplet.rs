//! Droplet state for one erosion iteration.

/// Why a droplet stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The blended direction vanished (flat spot or local extremum).
    Flat,
    /// The next step would leave the sampleable interior.
    OutOfBounds,
    /// Water dropped to the evaporation floor.
    Evaporated,
    /// Speed decayed to zero.
    Stalled,
    /// `max_lifetime` steps were taken.
    Expired,
}

/// A water droplet.
///
/// Created at the start of each iteration and discarded when it terminates.
/// Never shared across iterations.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Droplet {
    /// Position (continuous, for bilinear sampling).
    pub x: f64,
    pub y: f64,
    /// Travel direction (unit length after the first step).
    pub dir_x: f64,
    pub dir_y: f64,
    /// Current speed.
    pub speed: f64,
    /// Water volume.
    pub water: f64,
    /// Carried sediment mass.
    pub sediment: f64,
}

impl Droplet {
    /// Water at or below this level counts as evaporated.
    pub const MIN_WATER: f64 = 1e-5;
    /// Speed below this counts as stalled.
    pub const MIN_SPEED: f64 = 1e-10;
    /// Direction magnitude below this counts as flat.
    pub const MIN_DIRECTION: f64 = 1e-12;

    /// Spawns a droplet at rest with one unit of water.
    pub fn spawn(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            dir_x: 0.0,
            dir_y: 0.0,
            speed: 1.0,
            water: 1.0,
            sediment: 0.0,
        }
    }

    /// Blends the previous direction with the downhill gradient and
    /// normalizes it.
    ///
    /// Returns `false` if the blend has no usable direction.
    pub fn steer(&mut self, gradient_x: f64, gradient_y: f64, inertia: f64) -> bool {
        self.dir_x = self.dir_x * inertia - gradient_x * (1.0 - inertia);
        self.dir_y = self.dir_y * inertia - gradient_y * (1.0 - inertia);

        let len = (self.dir_x * self.dir_x + self.dir_y * self.dir_y).sqrt();
        if len < Self::MIN_DIRECTION {
            return false;
        }
        self.dir_x /= len;
        self.dir_y /= len;
        true
    }

    /// Checks the post-step termination conditions.
    pub fn exhausted(&self) -> Option<Termination> {
        if self.water <= Self::MIN_WATER {
            Some(Termination::Evaporated)
        } else if self.speed < Self::MIN_SPEED {
            Some(Termination::Stalled)
        } else {
            None
        }
    }
}
