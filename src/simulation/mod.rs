pub mod states;
pub mod kernels;
pub mod entity;
pub mod params;
pub mod spatial;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod engine;
pub mod scenario;
