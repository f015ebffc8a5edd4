//! # Hydraulic Erosion
//!
//! Particle-based erosion: many independent water droplets run downhill over
//! a copy of the heightmap, picking up sediment where they accelerate and
//! dropping it where they slow or climb.
//!
//! ## Ownership
//!
//! [`HydraulicErosion::erode`] reads the caller's grid and returns a new one.
//! The input is never mutated.
//!
//! ## Determinism
//!
//! One seeded `ChaCha8` stream, owned by the simulator, places every droplet.
//! Droplets run strictly one after another in the order they are drawn, so
//! identical seeds and parameters give bit-identical output.

mod brush;
mod droplet;
mod hydraulic;
mod params;

pub use brush::{BrushCell, ErosionBrush, MAX_RADIUS};
pub use droplet::Termination;
pub use hydraulic::{sample_height_and_gradient, ErosionOutcome, ErosionStats, HeightSample, HydraulicErosion};
pub use params::ErosionParams;
