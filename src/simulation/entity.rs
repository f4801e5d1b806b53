//! Entity and world data model.
//!
//! An [`Entity`] is one flat record for every kind; which fields matter is
//! decided by its [`EntityKind`]:
//! - `Point`  – moves, uses `radius`, `velocity`, `force`, `direction`, `potential`
//! - `Bound`  – static rectangle of `width`/`height`, drawn at `position`
//! - `Puller` – attractor at `position` acting within `radius`, toggled by `phantom`
//!
//! The [`World`] keeps one id-keyed map per kind. Maps are `BTreeMap`s so
//! iteration is in ascending id (= insertion) order and runs are reproducible.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::states::NVec2;

/// Identifier handed out by the engine, unique across all kinds
pub type EntityId = u64;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum EntityKind {
    Point,
    Bound,
    Puller,
}

impl TryFrom<u32> for EntityKind {
    type Error = SimError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EntityKind::Point),
            1 => Ok(EntityKind::Bound),
            2 => Ok(EntityKind::Puller),
            other => Err(SimError::InvalidKind(format!("#{}", other))),
        }
    }
}

impl FromStr for EntityKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "point" => Ok(EntityKind::Point),
            "bound" => Ok(EntityKind::Bound),
            "puller" => Ok(EntityKind::Puller),
            _ => Err(SimError::InvalidKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntityKind {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Point => "point",
            EntityKind::Bound => "bound",
            EntityKind::Puller => "puller",
        };
        f.write_str(name)
    }
}

/// Geometry handed to `PhysicsEngine::insert`
///
/// Only the fields relevant to the target kind are copied: `radius` for
/// points and pullers, `width`/`height` for bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub position: NVec2,
    pub radius: f64,
    pub width: f64,
    pub height: f64,
}

impl Shape {
    /// Circle centered at `(x, y)`
    pub fn circle(x: f64, y: f64, r: f64) -> Self {
        Self {
            position: NVec2::new(x, y),
            radius: r,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Axis-aligned rectangle centered at `(x, y)`
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            position: NVec2::new(x, y),
            radius: 0.0,
            width: w,
            height: h,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: NVec2,
    pub velocity: NVec2,
    pub force: NVec2, // per-step accumulator
    pub radius: f64,
    pub width: f64,
    pub height: f64,
    pub keep_inside: bool,
    pub unmovable: bool,
    pub phantom: bool,
    pub direction: f64, // heading of the last step, radians
    pub potential: f64, // base potential from the last step
}

impl Entity {
    /// Build an entity of `kind` from `shape`, validating its dimensions
    pub fn from_shape(
        id: EntityId,
        kind: EntityKind,
        shape: &Shape,
        keep_inside: bool,
    ) -> Result<Self, SimError> {
        if !(shape.position.x.is_finite() && shape.position.y.is_finite()) {
            return Err(SimError::InvalidShape {
                kind,
                reason: format!("position {:?} is not finite", shape.position),
            });
        }

        let mut entity = Entity {
            id,
            kind,
            position: shape.position,
            velocity: NVec2::zeros(),
            force: NVec2::zeros(),
            radius: 0.0,
            width: 0.0,
            height: 0.0,
            keep_inside,
            unmovable: false,
            phantom: false,
            direction: 0.0,
            potential: 0.0,
        };

        match kind {
            EntityKind::Point | EntityKind::Puller => {
                check_extent(kind, "radius", shape.radius)?;
                entity.radius = shape.radius;
            }
            EntityKind::Bound => {
                check_extent(kind, "width", shape.width)?;
                check_extent(kind, "height", shape.height)?;
                entity.width = shape.width;
                entity.height = shape.height;
                entity.unmovable = true;
            }
        }

        Ok(entity)
    }
}

fn check_extent(kind: EntityKind, name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidShape {
            kind,
            reason: format!("{} must be finite and non-negative, got {}", name, value),
        })
    }
}

/// All entities, one map per kind
#[derive(Debug, Clone, Default)]
pub struct World {
    pub(crate) points: BTreeMap<EntityId, Entity>,
    pub(crate) bounds: BTreeMap<EntityId, Entity>,
    pub(crate) pullers: BTreeMap<EntityId, Entity>,
}

impl World {
    pub fn points(&self) -> impl Iterator<Item = &Entity> {
        self.points.values()
    }

    pub fn bounds(&self) -> impl Iterator<Item = &Entity> {
        self.bounds.values()
    }

    pub fn pullers(&self) -> impl Iterator<Item = &Entity> {
        self.pullers.values()
    }

    /// Look an entity up by id, whatever its kind
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.points
            .get(&id)
            .or_else(|| self.bounds.get(&id))
            .or_else(|| self.pullers.get(&id))
    }

    pub fn point(&self, id: EntityId) -> Option<&Entity> {
        self.points.get(&id)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Total number of entities across all kinds
    pub fn len(&self) -> usize {
        self.points.len() + self.bounds.len() + self.pullers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn collection_mut(&mut self, kind: EntityKind) -> &mut BTreeMap<EntityId, Entity> {
        match kind {
            EntityKind::Point => &mut self.points,
            EntityKind::Bound => &mut self.bounds,
            EntityKind::Puller => &mut self.pullers,
        }
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.points
            .remove(&id)
            .or_else(|| self.bounds.remove(&id))
            .or_else(|| self.pullers.remove(&id))
    }
}
