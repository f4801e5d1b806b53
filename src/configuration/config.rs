//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – tuning constants of the force field
//! - [`EntityConfig`]     – explicitly placed points, bounds and pullers
//! - [`ScatterConfig`]    – optional block of randomly placed points
//! - [`RunConfig`]        – how the headless runner drives the engine
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and field has a default, so a file only lists what it changes.
//!
//! # YAML format
//! The reference scene:
//!
//! ```yaml
//! parameters:
//!   gravity: -20.0          # constant Y force
//!   movement_damping: 0.9   # velocity multiplier per sub-step
//!   collision_damping: 0.9  # bounce restitution
//!   influence_radius: 100.0 # kernel support
//!   kernel: "cubed"         # linear | cubed | power5 | smooth_top
//!   fd_step: 0.001          # finite-difference step
//!   repulsion_rate: 0.001   # gradient -> force scale
//!   puller_strength: 50.0
//!   spatial_index: false
//!   centered_bounds: false  # true = clamp around each bound's position
//!
//! entities:
//!   - kind: puller
//!     position: [0.0, 0.0]
//!     radius: 200.0
//!     phantom: true
//!     interactive: true     # the attractor input handling moves around
//!   - kind: bound
//!     position: [0.0, 0.0]
//!     width: 1000.0
//!     height: 500.0
//!     keep_inside: true
//!
//! scatter:
//!   count: 200
//!   radius: 5.0
//!   min: [-200.0, -100.0]
//!   size: [250.0, 125.0]
//!   seed: 42
//!
//! run:
//!   frames: 600
//!   sub_steps: 5
//! ```

use serde::Deserialize;

use crate::simulation::entity::EntityKind;
use crate::simulation::kernels::Kernel;
use crate::simulation::params::Parameters;

/// Tuning constants, see `Parameters` for their meaning
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: f64,
    pub movement_damping: f64,
    pub collision_damping: f64,
    pub influence_radius: f64,
    pub kernel: Kernel,
    pub fd_step: f64,
    pub repulsion_rate: f64,
    pub puller_strength: f64,
    pub spatial_index: bool,
    pub centered_bounds: bool,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
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

/// One explicitly placed entity
#[derive(Deserialize, Debug, Clone)]
pub struct EntityConfig {
    pub kind: EntityKind, // "point" | "bound" | "puller"
    #[serde(default)]
    pub position: [f64; 2], // center
    #[serde(default)]
    pub radius: f64, // points and pullers
    #[serde(default)]
    pub width: f64, // bounds
    #[serde(default)]
    pub height: f64, // bounds
    #[serde(default)]
    pub keep_inside: bool,
    #[serde(default)]
    pub phantom: bool, // pullers: start switched off
    #[serde(default)]
    pub interactive: bool, // pullers: the one the caller steers
}

/// Points spawned uniformly at random inside a rectangle
#[derive(Deserialize, Debug, Clone)]
pub struct ScatterConfig {
    pub count: usize,
    pub radius: f64,
    pub min: [f64; 2], // lower-left corner of the spawn rectangle
    pub size: [f64; 2], // width, height of the spawn rectangle
    #[serde(default)]
    pub seed: u64, // deterministic seed to make runs reproducible
}

/// How the headless runner drives the engine
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub frames: u32, // `advance` calls
    pub sub_steps: u32, // sub-steps per `advance`
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            sub_steps: 5,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
    #[serde(default)]
    pub scatter: Option<ScatterConfig>,
    #[serde(default)]
    pub run: RunConfig,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
