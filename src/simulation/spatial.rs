//! Uniform hash grid for neighbour lookup
//!
//! The repulsion kernel has compact support, so only points closer than
//! `influence_radius + fd_step` to a target can contribute to any of its three
//! potential probes. With the cell size set to that distance every such point
//! lies in the 3x3 block of cells around the target.
//!
//! The grid is exact, not an approximation: the engine relocates each point
//! right after it is integrated, and candidates come back sorted by id so the
//! potential is summed in the same order as the brute-force path.

use std::collections::HashMap;

use crate::simulation::entity::{Entity, EntityId};
use crate::simulation::states::NVec2;

// Keeps floor(x / cell) from rounding a neighbour two cells away
const CELL_PADDING: f64 = 1.0 + 1.0e-9;

pub type Cell = (i64, i64);

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<Cell, Vec<EntityId>>,
    homes: HashMap<EntityId, Cell>, // id -> cell it is currently filed under
}

impl SpatialGrid {
    /// Empty grid whose cells are at least `reach` wide
    pub fn new(reach: f64) -> Self {
        // a zero reach would put every point in its own cell
        let cell_size = if reach > 0.0 { reach * CELL_PADDING } else { 1.0 };
        Self {
            cell_size,
            cells: HashMap::new(),
            homes: HashMap::new(),
        }
    }

    /// Build a grid over the given points
    pub fn build<'a>(reach: f64, points: impl IntoIterator<Item = &'a Entity>) -> Self {
        let mut grid = Self::new(reach);
        for p in points {
            grid.insert(p.id, &p.position);
        }
        grid
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.homes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }

    pub fn cell_of(&self, position: &NVec2) -> Cell {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, id: EntityId, position: &NVec2) {
        if self.homes.contains_key(&id) {
            self.relocate(id, position);
            return;
        }
        let cell = self.cell_of(position);
        self.cells.entry(cell).or_default().push(id);
        self.homes.insert(id, cell);
    }

    pub fn remove(&mut self, id: EntityId) {
        if let Some(cell) = self.homes.remove(&id) {
            self.detach(id, cell);
        }
    }

    /// Move `id` to the cell containing `position` (no-op if it stays put)
    pub fn relocate(&mut self, id: EntityId, position: &NVec2) {
        let new_cell = self.cell_of(position);
        match self.homes.get(&id).copied() {
            Some(old_cell) if old_cell == new_cell => {}
            Some(old_cell) => {
                self.detach(id, old_cell);
                self.cells.entry(new_cell).or_default().push(id);
                self.homes.insert(id, new_cell);
            }
            None => self.insert(id, position),
        }
    }

    /// Ids in the 3x3 block around `position`, ascending
    pub fn neighbours(&self, position: &NVec2) -> Vec<EntityId> {
        let (cx, cy) = self.cell_of(position);
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(ids) = self.cells.get(&(cx.saturating_add(dx), cy.saturating_add(dy))) {
                    out.extend_from_slice(ids);
                }
            }
        }
        out.sort_unstable();
        out
    }

    fn detach(&mut self, id: EntityId, cell: Cell) {
        if let Some(ids) = self.cells.get_mut(&cell) {
            ids.retain(|&other| other != id);
            if ids.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_floor_down() {
        let grid = SpatialGrid::new(10.0);
        assert_eq!(grid.cell_of(&NVec2::new(-0.5, 0.5)), (-1, 0));
        assert_eq!(grid.cell_of(&NVec2::new(5.0, -15.0)), (0, -2));
    }

    #[test]
    fn relocate_moves_between_cells() {
        let mut grid = SpatialGrid::new(10.0);
        grid.insert(7, &NVec2::new(1.0, 1.0));
        grid.relocate(7, &NVec2::new(55.0, 1.0));

        assert!(grid.neighbours(&NVec2::new(1.0, 1.0)).is_empty());
        assert_eq!(grid.neighbours(&NVec2::new(50.0, 1.0)), vec![7]);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn neighbours_are_sorted_and_deduplicated_per_cell() {
        let mut grid = SpatialGrid::new(10.0);
        grid.insert(3, &NVec2::new(12.0, 0.0));
        grid.insert(1, &NVec2::new(-8.0, 0.0));
        grid.insert(2, &NVec2::new(2.0, 2.0));
        grid.insert(2, &NVec2::new(3.0, 3.0));

        assert_eq!(grid.neighbours(&NVec2::new(0.0, 0.0)), vec![1, 2, 3]);

        grid.remove(1);
        assert_eq!(grid.neighbours(&NVec2::new(0.0, 0.0)), vec![2, 3]);
    }
}
