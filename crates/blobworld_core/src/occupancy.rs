//! Authoritative registry of placed world objects.
//!
//! At most one object exists per tile coordinate; [`OccupancyGrid::place`]
//! enforces the invariant by rejecting placements on occupied tiles. The
//! grid is an explicit owned structure handed to the generator and the
//! runtime simulation, never ambient state, so tests can build one in
//! isolation. All mutation goes through `&mut self`, which makes the
//! check-and-insert of `place` atomic under Rust's aliasing rules.

use std::collections::BTreeMap;
use std::collections::HashMap;

use blobworld_data::{Coord, ObjectKind, WorldObject};

use crate::error::PlacementConflict;

#[derive(Debug, Clone, Default)]
pub struct OccupancyGrid {
    width: u16,
    height: u16,
    /// Keyed by row-major coordinate order, so iteration is deterministic.
    cells: BTreeMap<Coord, WorldObject>,
}

impl OccupancyGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Places an object, rejecting the placement if the coordinate already
    /// holds one. Rejection is a normal outcome for spawn rules, not a
    /// failure of the grid.
    pub fn place(
        &mut self,
        coord: Coord,
        object: WorldObject,
    ) -> Result<(), PlacementConflict> {
        if self.cells.contains_key(&coord) {
            return Err(PlacementConflict { coord });
        }
        self.cells.insert(coord, object);
        Ok(())
    }

    /// Removes and returns the object at a coordinate, if any. Used when a
    /// resource is destroyed outright; plants that merely change stage stay
    /// placed.
    pub fn remove(&mut self, coord: Coord) -> Option<WorldObject> {
        self.cells.remove(&coord)
    }

    pub fn get(&self, coord: Coord) -> Option<&WorldObject> {
        self.cells.get(&coord)
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut WorldObject> {
        self.cells.get_mut(&coord)
    }

    /// In-bounds coordinates of the Chebyshev box of the given radius around
    /// `coord`, excluding the center, in row-major order.
    pub fn neighbors(&self, coord: Coord, radius: i32) -> Vec<Coord> {
        let mut out = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = Coord::new(coord.x + dx, coord.y + dy);
                if self.in_bounds(n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// All placed objects in row-major coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &WorldObject)> {
        self.cells.iter().map(|(c, o)| (*c, o))
    }

    /// Mutable iteration in the same deterministic order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord, &mut WorldObject)> {
        self.cells.iter_mut().map(|(c, o)| (*c, o))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Object counts per variant, for the HUD surface.
    pub fn counts_by_kind(&self) -> HashMap<ObjectKind, usize> {
        let mut counts = HashMap::new();
        for object in self.cells.values() {
            *counts.entry(object.kind()).or_insert(0) += 1;
        }
        counts
    }
}
