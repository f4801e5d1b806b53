pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{NVec2, distance, project, project_flat};
pub use simulation::kernels::{Kernel, linear, cubed, power5, smooth_top};
pub use simulation::entity::{Entity, EntityId, EntityKind, Shape, World};
pub use simulation::params::Parameters;
pub use simulation::forces::{PointForce, ForceSet, FieldContext, Gravity, KernelRepulsion, PullerAttraction};
pub use simulation::integrator::{euler_step, semi_implicit_euler};
pub use simulation::engine::{PhysicsEngine, PullerHandle};
pub use simulation::spatial::SpatialGrid;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, EntityConfig, ScatterConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_advance, bench_advance_curve};
