//! Per-blob perception and decision-making.
//!
//! Decisions are computed for all blobs against the previous tick's
//! committed positions (the snapshot buffer) plus read-only views of the
//! terrain and occupancy grids, so the phase parallelizes cleanly and is
//! independent of blob iteration order. Nothing here mutates world state;
//! the chosen [`Decision`]s are applied sequentially afterwards.

use blobworld_data::{Blob, BlobId, Coord, TileType};
use rayon::prelude::*;

use crate::config::SimConfig;
use crate::occupancy::OccupancyGrid;
use crate::systems::reproduction;
use crate::terrain::TileGrid;

/// Committed view of one blob from the end of the previous tick. Distance
/// checks against other blobs always read these, never half-updated
/// current-tick state.
#[derive(Debug, Clone, Copy)]
pub struct BlobSnapshot {
    pub id: BlobId,
    pub x: f64,
    pub y: f64,
    pub age: f64,
    pub hunger: f64,
    pub thirst: f64,
    pub hp: f64,
    pub reproduction_cooldown: f64,
    pub alive: bool,
}

/// Captures the committed per-blob view for the next decision phase.
/// The registry is kept in ascending id order, so the buffer is too.
pub fn capture_snapshots(blobs: &[Blob], out: &mut Vec<BlobSnapshot>) {
    out.clear();
    out.extend(blobs.iter().map(|b| BlobSnapshot {
        id: b.id(),
        x: b.physics.x,
        y: b.physics.y,
        age: b.needs.age,
        hunger: b.needs.hunger,
        thirst: b.needs.thirst,
        hp: b.needs.hp,
        reproduction_cooldown: b.reproduction_cooldown,
        alive: !b.is_dead(),
    }));
}

/// What a blob wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// A committed interaction timer is running; do not move or re-decide.
    Continue,
    /// Head for a walkable tile touching shallow water and drink there.
    Drink { tile: Coord },
    /// Head for a ripe berry bush and harvest it.
    Eat { bush: Coord },
    /// Close distance with a prospective mate (previous-tick position).
    Court { mate: BlobId, x: f64, y: f64 },
    Wander,
}

/// Read-only world view for the decision phase.
pub struct PerceptionContext<'a> {
    pub tiles: &'a TileGrid,
    pub occupancy: &'a OccupancyGrid,
    pub snapshots: &'a [BlobSnapshot],
    pub config: &'a SimConfig,
}

/// Computes decisions for every blob in parallel. Output order matches the
/// registry's ascending-id order.
pub fn decide_all(blobs: &[Blob], ctx: &PerceptionContext) -> Vec<Decision> {
    blobs.par_iter().map(|blob| decide(blob, ctx)).collect()
}

/// The priority ladder: water need, then food need, then a reproduction
/// opportunity, then wandering. A need without a visible target falls
/// through to the next rung and is retried next tick.
pub fn decide(blob: &Blob, ctx: &PerceptionContext) -> Decision {
    if blob.is_dead() {
        return Decision::Continue;
    }
    if blob.state.is_interacting() && !should_interrupt(blob, ctx.config) {
        return Decision::Continue;
    }

    let needs = &blob.needs;
    let needs_config = &ctx.config.needs;

    if needs.thirst >= needs_config.thirst_seek_threshold {
        if let Some(tile) =
            find_nearest_water_tile(blob.physics.x, blob.physics.y, blob.sight, ctx.tiles)
        {
            return Decision::Drink { tile };
        }
    }

    if needs.hunger >= needs_config.hunger_seek_threshold {
        if let Some(bush) =
            find_nearest_ripe_bush(blob.physics.x, blob.physics.y, blob.sight, ctx.occupancy)
        {
            return Decision::Eat { bush };
        }
    }

    if reproduction::eligible(
        needs.age,
        needs.hunger,
        needs.thirst,
        needs.hp,
        blob.reproduction_cooldown,
        &ctx.config.reproduction,
    ) {
        if let Some((mate, x, y)) = find_nearest_mate(blob, ctx) {
            return Decision::Court { mate, x, y };
        }
    }

    Decision::Wander
}

/// Whether a running interaction may be abandoned for the other, now
/// critical, need. Committed timers are sacred unless the config opts in.
fn should_interrupt(blob: &Blob, config: &SimConfig) -> bool {
    use blobworld_data::BlobState;
    if !config.interaction.interruptible {
        return false;
    }
    match blob.state {
        BlobState::Drinking { .. } => blob.needs.hunger >= config.needs.hunger_starvation,
        BlobState::Harvesting { .. } => blob.needs.thirst >= config.needs.thirst_starvation,
        _ => false,
    }
}

/// Nearest ripe bush within sight, by straight-line distance to the tile
/// center. Row-major occupancy iteration plus a strict comparison breaks
/// ties toward the lowest grid coordinate.
pub fn find_nearest_ripe_bush(
    x: f64,
    y: f64,
    sight: f64,
    occupancy: &OccupancyGrid,
) -> Option<Coord> {
    let mut best: Option<(f64, Coord)> = None;
    for (coord, object) in occupancy.iter() {
        if !object.is_ripe_bush() {
            continue;
        }
        let dist = coord.distance_to(x, y);
        if dist > sight {
            continue;
        }
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, coord));
        }
    }
    best.map(|(_, c)| c)
}

/// Nearest walkable tile cardinally adjacent to shallow water, within sight.
/// Same distance metric and tie-break as the bush search.
pub fn find_nearest_water_tile(x: f64, y: f64, sight: f64, tiles: &TileGrid) -> Option<Coord> {
    let reach = sight.ceil() as i32;
    let tx = x.floor() as i32;
    let ty = y.floor() as i32;
    let mut best: Option<(f64, Coord)> = None;

    for cy in (ty - reach)..=(ty + reach) {
        for cx in (tx - reach)..=(tx + reach) {
            let coord = Coord::new(cx, cy);
            if !tiles.is_walkable(coord) {
                continue;
            }
            if !tiles.has_cardinal_neighbor(coord, TileType::ShallowWater) {
                continue;
            }
            let dist = coord.distance_to(x, y);
            if dist > sight {
                continue;
            }
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, coord));
            }
        }
    }
    best.map(|(_, c)| c)
}

/// Nearest eligible partner within sight, from the committed snapshots.
/// Ascending-id snapshot order breaks distance ties toward the lower id.
fn find_nearest_mate(blob: &Blob, ctx: &PerceptionContext) -> Option<(BlobId, f64, f64)> {
    let repro = &ctx.config.reproduction;
    let mut best: Option<(f64, BlobId, f64, f64)> = None;

    for other in ctx.snapshots {
        if other.id == blob.id() || !other.alive {
            continue;
        }
        if !reproduction::eligible(
            other.age,
            other.hunger,
            other.thirst,
            other.hp,
            other.reproduction_cooldown,
            repro,
        ) {
            continue;
        }
        let dist = ((other.x - blob.physics.x).powi(2) + (other.y - blob.physics.y).powi(2)).sqrt();
        if dist > blob.sight {
            continue;
        }
        if best.map_or(true, |(d, ..)| dist < d) {
            best = Some((dist, other.id, other.x, other.y));
        }
    }
    best.map(|(_, id, x, y)| (id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobworld_data::{GrowthStage, WorldObject};

    #[test]
    fn test_nearest_bush_prefers_closest_then_lowest_coord() {
        let mut occupancy = OccupancyGrid::new(20, 20);
        let ripe = WorldObject::BerryBush {
            stage: GrowthStage::Ripe,
            timer: 0.0,
        };
        occupancy.place(Coord::new(8, 5), ripe.clone()).unwrap();
        occupancy.place(Coord::new(2, 5), ripe.clone()).unwrap();
        // Equidistant from (5.5, 5.5): centers at (8.5, 5.5) and (2.5, 5.5).
        let found = find_nearest_ripe_bush(5.5, 5.5, 10.0, &occupancy).unwrap();
        assert_eq!(found, Coord::new(2, 5));
    }

    #[test]
    fn test_unripe_bushes_are_invisible() {
        let mut occupancy = OccupancyGrid::new(20, 20);
        occupancy
            .place(Coord::new(3, 3), WorldObject::new_bush())
            .unwrap();
        assert_eq!(find_nearest_ripe_bush(3.5, 3.5, 10.0, &occupancy), None);
    }

    #[test]
    fn test_sight_bounds_the_search() {
        let mut occupancy = OccupancyGrid::new(40, 40);
        occupancy
            .place(
                Coord::new(30, 30),
                WorldObject::BerryBush {
                    stage: GrowthStage::Ripe,
                    timer: 0.0,
                },
            )
            .unwrap();
        assert_eq!(find_nearest_ripe_bush(0.5, 0.5, 5.0, &occupancy), None);
        assert!(find_nearest_ripe_bush(28.5, 28.5, 5.0, &occupancy).is_some());
    }

    #[test]
    fn test_water_tile_search_requires_walkable_shore() {
        let mut tiles = TileGrid::filled(10, 10, TileType::Grass);
        tiles.set(Coord::new(5, 5), TileType::ShallowWater);
        let found = find_nearest_water_tile(4.5, 5.5, 6.0, &tiles).unwrap();
        assert_eq!(found, Coord::new(4, 5));

        // No shallow water in sight: nothing to drink from.
        let dry = TileGrid::filled(10, 10, TileType::Grass);
        assert_eq!(find_nearest_water_tile(4.5, 5.5, 6.0, &dry), None);
    }
}
