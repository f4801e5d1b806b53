//! Vector primitive for the 2D simulation.
//!
//! All positions, velocities and forces are `NVec2` (nalgebra `Vector2<f64>`),
//! so addition and subtraction come from nalgebra's operators. This module
//! adds the two operations the simulation and its renderers need on top:
//! - [`distance`] between two points
//! - [`project`] / [`project_flat`] from simulation space to display space
//!
//! The engine never projects anything itself; positions in the world are
//! always in simulation space (Y up).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Euclidean distance between `a` and `b`
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Map a simulation-space point to display coordinates
///
/// `origin` is the camera position, `scale` the number of simulation units
/// per pixel and `screen` the display size. The Y axis is flipped because
/// the simulation is Y-up and displays are Y-down.
pub fn project(point: &NVec2, origin: &NVec2, scale: f64, screen: &NVec2) -> NVec2 {
    NVec2::new(
        (point.x - origin.x) / scale + screen.x / 2.0,
        (-point.y - origin.y) / scale + screen.y / 2.0,
    )
}

/// Shift a point so the simulation origin lands in the middle of the screen
/// (no camera, no scaling, no Y flip)
pub fn project_flat(point: &NVec2, screen: &NVec2) -> NVec2 {
    NVec2::new(point.x + screen.x / 2.0, point.y + screen.y / 2.0)
}
