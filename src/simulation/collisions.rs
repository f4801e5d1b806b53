//! Point-vs-bound resolution
//!
//! A bound with `keep_inside` confines a point's center to a rectangle of the
//! bound's width and height shrunk by the point's radius. A point found
//! outside on an axis is put back on the edge and its velocity on that axis is
//! reflected and damped. X and Y are checked independently, so a point leaving
//! through a corner is corrected on both axes in the same call.
//!
//! The rectangle is centered on the world origin; the bound's own position is
//! only where it is drawn. With `centered_bounds` the rectangle is centered on
//! the bound's position instead.

use crate::simulation::entity::Entity;
use crate::simulation::states::NVec2;

/// Clamp `target` against every keep-inside bound, in id order
///
/// Each bound sees the point as left by the previous one, so nested bounds
/// can move and reflect it more than once in a single call.
pub fn resolve_bounds<'a>(
    target: &mut Entity,
    bounds: impl IntoIterator<Item = &'a Entity>,
    collision_damping: f64,
    centered_bounds: bool,
) {
    for bound in bounds {
        if !bound.keep_inside {
            continue;
        }
        clamp_inside(target, bound, collision_damping, centered_bounds);
    }
}

/// Clamp `target` inside a single bound
pub fn clamp_inside(target: &mut Entity, bound: &Entity, collision_damping: f64, centered: bool) {
    let half = NVec2::new(
        bound.width / 2.0 - target.radius,
        bound.height / 2.0 - target.radius,
    );

    if centered {
        let local = target.position - bound.position;
        if local.x.abs() > half.x {
            target.position.x = bound.position.x + half.x * sign(local.x);
            target.velocity.x *= -collision_damping;
        }
        if local.y.abs() > half.y {
            target.position.y = bound.position.y + half.y * sign(local.y);
            target.velocity.y *= -collision_damping;
        }
        return;
    }

    let p = target.position;
    if p.x.abs() > half.x {
        target.position.x = half.x * sign(p.x);
        target.velocity.x *= -collision_damping;
    }
    if p.y.abs() > half.y {
        target.position.y = half.y * sign(p.y);
        target.velocity.y *= -collision_damping;
    }
}

// Unlike f64::signum, zero maps to zero
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
