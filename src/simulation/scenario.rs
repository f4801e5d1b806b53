//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing:
//! - a `PhysicsEngine` built from the configured parameters
//! - every configured entity, inserted in file order
//! - the scattered points, if any
//! - the id of the interactive puller and the run settings

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ParametersConfig, RunConfig, ScatterConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::entity::{EntityId, EntityKind, Shape};
use crate::simulation::params::Parameters;

/// A ready-to-run engine plus what the driver needs to know about it
pub struct Scenario {
    pub engine: PhysicsEngine,
    pub interactive_puller: Option<EntityId>,
    pub run: RunConfig,
}

impl From<ParametersConfig> for Parameters {
    fn from(p: ParametersConfig) -> Self {
        Parameters {
            gravity: p.gravity,
            movement_damping: p.movement_damping,
            collision_damping: p.collision_damping,
            influence_radius: p.influence_radius,
            kernel: p.kernel,
            fd_step: p.fd_step,
            repulsion_rate: p.repulsion_rate,
            puller_strength: p.puller_strength,
            spatial_index: p.spatial_index,
            centered_bounds: p.centered_bounds,
        }
    }
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters: Parameters = cfg.parameters.into();
        let mut engine = PhysicsEngine::new(parameters)?;
        let mut interactive_puller = None;

        // Explicit entities, in file order so ids follow the file
        for ec in &cfg.entities {
            let shape = Shape {
                position: ec.position.into(),
                radius: ec.radius,
                width: ec.width,
                height: ec.height,
            };
            let id = engine.insert(shape, ec.kind, ec.keep_inside)?;

            if ec.kind == EntityKind::Puller {
                if let Some(mut handle) = engine.puller_mut(id) {
                    handle.set_phantom(ec.phantom);
                }
                if ec.interactive {
                    if interactive_puller.is_some() {
                        warn!("more than one interactive puller, using #{}", id);
                    }
                    interactive_puller = Some(id);
                }
            }
        }

        if let Some(scatter) = &cfg.scatter {
            scatter_points(&mut engine, scatter)?;
        }

        info!(
            "scenario built: {} points, {} bounds, {} pullers",
            engine.world().points().count(),
            engine.world().bounds().count(),
            engine.world().pullers().count()
        );

        Ok(Self {
            engine,
            interactive_puller,
            run: cfg.run,
        })
    }
}

/// Insert `scatter.count` points uniformly inside the scatter rectangle
pub fn scatter_points(engine: &mut PhysicsEngine, scatter: &ScatterConfig) -> Result<Vec<EntityId>, SimError> {
    let mut rng = StdRng::seed_from_u64(scatter.seed);
    let mut ids = Vec::with_capacity(scatter.count);

    for _ in 0..scatter.count {
        let x = scatter.min[0] + rng.random::<f64>() * scatter.size[0];
        let y = scatter.min[1] + rng.random::<f64>() * scatter.size[1];
        ids.push(engine.insert(Shape::circle(x, y, scatter.radius), EntityKind::Point, false)?);
    }

    Ok(ids)
}
