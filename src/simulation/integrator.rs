//! Fixed-step time integration
//!
//! Semi-implicit Euler with per-sub-step velocity damping. Points are updated
//! one at a time, in id order, straight into the live world: a point later in
//! the order already sees the new positions of the points before it. This
//! sequential update is part of the model and is not snapshotted away.

use crate::simulation::collisions::resolve_bounds;
use crate::simulation::entity::{Entity, EntityId, World};
use crate::simulation::forces::{FieldContext, ForceSet};
use crate::simulation::params::Parameters;
use crate::simulation::spatial::SpatialGrid;
use crate::simulation::states::NVec2;

/// Advance one point by `dt` using the force already stored in `entity.force`
///
/// v_n+1 = (v_n + dt * f) * damping
/// x_n+1 = x_n + dt * (v_n + dt * f)
pub fn semi_implicit_euler(entity: &mut Entity, dt: f64, damping: f64) {
    entity.velocity += entity.force * dt;
    entity.position += entity.velocity * dt;

    entity.velocity *= damping;
}

/// Heading from `from` to the entity's current position
pub fn update_direction(entity: &mut Entity, from: &NVec2) {
    entity.direction = (entity.position.y - from.y).atan2(entity.position.x - from.x);
}

/// Run one sub-step of length `dt` over every movable point in `world`
///
/// For each point: clamp against bounds, accumulate forces from the rest of
/// the world, integrate, write back. `grid`, when present, is kept in sync
/// with every write.
pub fn euler_step(
    world: &mut World,
    mut grid: Option<&mut SpatialGrid>,
    forces: &ForceSet,
    params: &Parameters,
    dt: f64,
) {
    if world.points.is_empty() {
        return;
    }

    let ids: Vec<EntityId> = world.points.keys().copied().collect();

    for id in ids {
        // Work on a copy so the rest of the world stays borrowable; the stale
        // entry under `id` is excluded from its own potential by id
        let mut entity = match world.points.get(&id) {
            Some(e) if !e.unmovable => e.clone(),
            _ => continue,
        };

        // direction is measured from before the bound clamp
        let previous = entity.position;

        resolve_bounds(
            &mut entity,
            world.bounds.values(),
            params.collision_damping,
            params.centered_bounds,
        );

        {
            let ctx = FieldContext {
                world: &*world,
                grid: grid.as_deref(),
            };
            forces.accumulate(&mut entity, &ctx);
        }

        semi_implicit_euler(&mut entity, dt, params.movement_damping);
        update_direction(&mut entity, &previous);

        if let Some(g) = grid.as_deref_mut() {
            g.relocate(id, &entity.position);
        }
        world.points.insert(id, entity);
    }
}
