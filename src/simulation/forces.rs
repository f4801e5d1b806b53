//! Force contributors for a single point
//!
//! Every term implements [`PointForce`] and adds its contribution into the
//! target's `force` accumulator. A [`ForceSet`] zeroes the accumulator and runs
//! its terms in registration order. The engine registers:
//! - [`Gravity`]          – constant Y force
//! - [`KernelRepulsion`]  – negative finite-difference gradient of the kernel potential
//! - [`PullerAttraction`] – fixed-magnitude pull toward every active puller in range

use crate::simulation::entity::{Entity, World};
use crate::simulation::kernels::Kernel;
use crate::simulation::params::Parameters;
use crate::simulation::spatial::SpatialGrid;
use crate::simulation::states::{distance, NVec2};

/// Read-only view of the world a force term may look at
pub struct FieldContext<'a> {
    pub world: &'a World,
    pub grid: Option<&'a SpatialGrid>, // None = brute force over all points
}

/// Trait for force sources acting on one point
/// Implementations add their contribution into `target.force`
pub trait PointForce {
    fn apply(&self, target: &mut Entity, ctx: &FieldContext<'_>);
}

/// Collection of force terms summed into one force per point
pub struct ForceSet {
    terms: Vec<Box<dyn PointForce + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// The terms of the reference simulation, built from `params`
    pub fn standard(params: &Parameters) -> Self {
        Self::new()
            .with(Gravity { g: params.gravity })
            .with(KernelRepulsion {
                kernel: params.kernel,
                influence_radius: params.influence_radius,
                h: params.fd_step,
                rate: params.repulsion_rate,
            })
            .with(PullerAttraction {
                strength: params.puller_strength,
            })
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PointForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Reset `target.force` and add every term's contribution
    pub fn accumulate(&self, target: &mut Entity, ctx: &FieldContext<'_>) {
        target.force = NVec2::zeros();
        for term in &self.terms {
            term.apply(target, ctx);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Constant force along Y, independent of position (mass is 1)
pub struct Gravity {
    pub g: f64,
}

impl PointForce for Gravity {
    fn apply(&self, target: &mut Entity, _ctx: &FieldContext<'_>) {
        target.force.y += self.g;
    }
}

/// Repulsion from the summed kernel potential of all other points
///
/// The potential is probed at the target and at the target shifted by `h`
/// along X and along Y; the forward differences, scaled by `rate`, are
/// subtracted from the force so points slide down the potential.
pub struct KernelRepulsion {
    pub kernel: Kernel,
    pub influence_radius: f64,
    pub h: f64, // finite-difference step
    pub rate: f64,
}

impl KernelRepulsion {
    /// Sum of the kernel over `others`, seen from `probe`
    pub fn potential_at(&self, probe: &NVec2, others: &[&Entity]) -> f64 {
        others
            .iter()
            .map(|q| self.kernel.eval(self.influence_radius, distance(probe, &q.position)))
            .sum()
    }

    /// Every point except `target` that can fall inside the kernel support,
    /// in ascending id order
    pub fn candidates<'a>(&self, target: &Entity, ctx: &FieldContext<'a>) -> Vec<&'a Entity> {
        match ctx.grid {
            Some(grid) => grid
                .neighbours(&target.position)
                .into_iter()
                .filter(|&id| id != target.id)
                .filter_map(|id| ctx.world.points.get(&id))
                .collect(),
            None => ctx.world.points().filter(|q| q.id != target.id).collect(),
        }
    }
}

impl PointForce for KernelRepulsion {
    fn apply(&self, target: &mut Entity, ctx: &FieldContext<'_>) {
        let others = self.candidates(target, ctx);

        let p = target.position;
        let current = self.potential_at(&p, &others);
        let shifted_x = self.potential_at(&(p + NVec2::new(self.h, 0.0)), &others);
        let shifted_y = self.potential_at(&(p + NVec2::new(0.0, self.h)), &others);

        target.force.x -= ((shifted_x - current) / self.h) * self.rate;
        target.force.y -= ((shifted_y - current) / self.h) * self.rate;
        target.potential = current;
    }
}

/// Pull of fixed magnitude toward each non-phantom puller whose radius
/// reaches the target
pub struct PullerAttraction {
    pub strength: f64,
}

impl PointForce for PullerAttraction {
    fn apply(&self, target: &mut Entity, ctx: &FieldContext<'_>) {
        for puller in ctx.world.pullers() {
            if puller.phantom {
                continue;
            }
            if distance(&target.position, &puller.position) < puller.radius {
                let theta = (puller.position.y - target.position.y)
                    .atan2(puller.position.x - target.position.x);
                target.force.x += theta.cos() * self.strength;
                target.force.y += theta.sin() * self.strength;
            }
        }
    }
}
