//! Radial kernel functions
//!
//! A kernel maps `(influence radius, distance)` to a non-negative scalar that
//! is zero at and beyond the radius. Summing a kernel over neighbours gives
//! the potential the repulsion force is derived from (see `forces`).

use serde::Deserialize;

/// `max(0, r - d)`
pub fn linear(radius: f64, dist: f64) -> f64 {
    (radius - dist).max(0.0)
}

/// `max(0, r - d)^3`
pub fn cubed(radius: f64, dist: f64) -> f64 {
    (radius - dist).max(0.0).powi(3)
}

/// `max(0, r - d)^5`
pub fn power5(radius: f64, dist: f64) -> f64 {
    (radius - dist).max(0.0).powi(5)
}

/// `max(0, r^2 - d^2)^3`, flat near the center
pub fn smooth_top(radius: f64, dist: f64) -> f64 {
    (radius * radius - dist * dist).max(0.0).powi(3)
}

/// Which kernel the repulsion term sums
/// kernel: "linear" | "cubed" | "power5" | "smooth_top"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    #[serde(rename = "linear")]
    Linear,

    #[serde(rename = "cubed")] // what the reference scenes use
    #[default]
    Cubed,

    #[serde(rename = "power5")]
    Power5,

    #[serde(rename = "smooth_top")]
    SmoothTop,
}

impl Kernel {
    /// Evaluate the selected kernel
    #[inline]
    pub fn eval(self, radius: f64, dist: f64) -> f64 {
        match self {
            Kernel::Linear => linear(radius, dist),
            Kernel::Cubed => cubed(radius, dist),
            Kernel::Power5 => power5(radius, dist),
            Kernel::SmoothTop => smooth_top(radius, dist),
        }
    }
}
