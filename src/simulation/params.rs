//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds every tuning constant of the force field:
//! - gravity and the two damping factors,
//! - influence radius and kernel of the repulsion field,
//! - finite-difference step and the rate that scales the gradient into a force,
//! - puller strength,
//! - whether the spatial grid is used for neighbour lookup,
//! - whether bounds clamp around the origin or around their own position
//!
//! Defaults reproduce the reference scene.

use crate::error::SimError;
use crate::simulation::kernels::Kernel;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravity: f64, // constant Y force, negative is down
    pub movement_damping: f64, // velocity multiplier applied every sub-step
    pub collision_damping: f64, // restitution when bouncing off a bound
    pub influence_radius: f64, // kernel support radius
    pub kernel: Kernel, // repulsion kernel
    pub fd_step: f64, // finite-difference step h
    pub repulsion_rate: f64, // gradient -> force scale
    pub puller_strength: f64, // force magnitude of an active puller
    pub spatial_index: bool, // false = brute force, true = uniform grid
    pub centered_bounds: bool, // false = clamp |x|, |y| around the origin
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: -20.0,
            movement_damping: 0.9,
            collision_damping: 0.9,
            influence_radius: 100.0,
            kernel: Kernel::Cubed,
            fd_step: 0.001,
            repulsion_rate: 0.001,
            puller_strength: 50.0,
            spatial_index: false,
            centered_bounds: false,
        }
    }
}

impl Parameters {
    /// Reject values that would turn the force field into NaNs
    pub fn validate(&self) -> Result<(), SimError> {
        let finite = [
            ("gravity", self.gravity),
            ("movement_damping", self.movement_damping),
            ("collision_damping", self.collision_damping),
            ("influence_radius", self.influence_radius),
            ("fd_step", self.fd_step),
            ("repulsion_rate", self.repulsion_rate),
            ("puller_strength", self.puller_strength),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidParameters(format!("{} is not finite ({})", name, value)));
            }
        }
        if self.fd_step <= 0.0 {
            return Err(SimError::InvalidParameters(format!(
                "fd_step must be positive, got {}",
                self.fd_step
            )));
        }
        if self.influence_radius < 0.0 {
            return Err(SimError::InvalidParameters(format!(
                "influence_radius must be non-negative, got {}",
                self.influence_radius
            )));
        }
        Ok(())
    }
}
