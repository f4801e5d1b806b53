//! Physics engine
//!
//! Owns the world, hands out entity ids and advances the simulation. The
//! world is exposed read-only; the only externally writable state is a
//! puller's position and phantom flag, reached through [`PullerHandle`].

use log::{debug, trace};

use crate::error::SimError;
use crate::simulation::entity::{Entity, EntityId, EntityKind, Shape, World};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::spatial::SpatialGrid;
use crate::simulation::states::NVec2;

pub struct PhysicsEngine {
    params: Parameters,
    forces: ForceSet,
    world: World,
    grid: Option<SpatialGrid>, // only with params.spatial_index
    next_id: EntityId,
    time: f64, // simulated time, one unit per `advance`
    sub_steps: u64, // sub-steps run so far
}

impl PhysicsEngine {
    /// Engine with the standard force set built from `params`
    pub fn new(params: Parameters) -> Result<Self, SimError> {
        let forces = ForceSet::standard(&params);
        Self::with_forces(params, forces)
    }

    /// Engine with a caller-supplied force set
    ///
    /// `params` are validated the same way as in [`PhysicsEngine::new`]: the
    /// integrator and the grid read them even when `forces` does not.
    pub fn with_forces(params: Parameters, forces: ForceSet) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self::assemble(params, forces))
    }

    fn assemble(params: Parameters, forces: ForceSet) -> Self {
        let grid = params
            .spatial_index
            .then(|| SpatialGrid::new(params.influence_radius + params.fd_step));
        Self {
            params,
            forces,
            world: World::default(),
            grid,
            next_id: 0,
            time: 0.0,
            sub_steps: 0,
        }
    }

    fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an entity of `kind` built from `shape` and return its id
    pub fn insert(
        &mut self,
        shape: Shape,
        kind: EntityKind,
        keep_inside: bool,
    ) -> Result<EntityId, SimError> {
        // validate before taking an id so a failed insert does not burn one
        let entity = Entity::from_shape(self.next_id, kind, &shape, keep_inside)?;
        let id = self.next_id();

        if kind == EntityKind::Point {
            if let Some(grid) = self.grid.as_mut() {
                grid.insert(entity.id, &entity.position);
            }
        }

        debug!("insert {} #{} at ({}, {})", kind, id, shape.position.x, shape.position.y);
        self.world.collection_mut(kind).insert(id, entity);
        Ok(id)
    }

    /// Insert with a numeric kind code (0 = point, 1 = bound, 2 = puller)
    pub fn insert_coded(
        &mut self,
        shape: Shape,
        code: u32,
        keep_inside: bool,
    ) -> Result<EntityId, SimError> {
        let kind = EntityKind::try_from(code)?;
        self.insert(shape, kind, keep_inside)
    }

    /// Remove an entity of any kind. Its id is never handed out again.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.world.remove(id)?;
        if let Some(grid) = self.grid.as_mut() {
            grid.remove(id);
        }
        debug!("remove {} #{}", removed.kind, id);
        Some(removed)
    }

    /// Advance one unit of simulated time split into `sub_steps` equal steps
    pub fn advance(&mut self, sub_steps: u32) -> Result<(), SimError> {
        if sub_steps == 0 {
            return Err(SimError::InvalidSubSteps);
        }
        let dt = 1.0 / sub_steps as f64;
        for _ in 0..sub_steps {
            self.sub_step(dt);
        }
        trace!(
            "advance: {} sub-steps, t = {:.3}, {} points",
            sub_steps,
            self.time,
            self.world.point_count()
        );
        Ok(())
    }

    /// Run a single sub-step with an explicit `dt`
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        self.sub_step(dt);
        Ok(())
    }

    fn sub_step(&mut self, dt: f64) {
        euler_step(&mut self.world, self.grid.as_mut(), &self.forces, &self.params, dt);
        self.time += dt;
        self.sub_steps += 1;
    }

    /// Read-only snapshot of every entity
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn sub_steps_run(&self) -> u64 {
        self.sub_steps
    }

    /// Writable view of a puller, `None` if `id` is not a puller
    pub fn puller_mut(&mut self, id: EntityId) -> Option<PullerHandle<'_>> {
        self.world.pullers.get_mut(&id).map(|entity| PullerHandle { entity })
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        let params = Parameters::default();
        let forces = ForceSet::standard(&params);
        Self::assemble(params, forces)
    }
}

/// The externally writable part of a puller
///
/// Input handling moves the attractor and toggles it between steps; the
/// engine reads the current values when it next computes forces.
pub struct PullerHandle<'a> {
    entity: &'a mut Entity,
}

impl PullerHandle<'_> {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }

    pub fn position(&self) -> NVec2 {
        self.entity.position
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.entity.position = NVec2::new(x, y);
    }

    pub fn phantom(&self) -> bool {
        self.entity.phantom
    }

    pub fn set_phantom(&mut self, phantom: bool) {
        self.entity.phantom = phantom;
    }

    pub fn radius(&self) -> f64 {
        self.entity.radius
    }
}
