//! Read-only query surface over a world, including snapshot capture.

use std::collections::HashMap;

use blobworld_data::{Blob, BlobId, Coord, ObjectKind, TileType, WorldObject};

use crate::metrics::Metrics;
use crate::snapshot::{BlobSnapshot, ObjectSnapshot, WorldSnapshot};
use crate::world::World;

impl World {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated time elapsed, in time-units.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn population(&self) -> usize {
        self.blobs.len()
    }

    pub fn tile_at(&self, coord: Coord) -> Option<TileType> {
        self.tiles.get(coord)
    }

    /// All placed objects in row-major order.
    pub fn objects(&self) -> impl Iterator<Item = (Coord, &WorldObject)> {
        self.occupancy.iter()
    }

    pub fn blob(&self, id: BlobId) -> Option<&Blob> {
        self.blobs.iter().find(|b| b.id() == id)
    }

    pub fn tile_counts(&self) -> HashMap<TileType, usize> {
        self.tiles.counts_by_type()
    }

    pub fn object_counts(&self) -> HashMap<ObjectKind, usize> {
        self.occupancy.counts_by_kind()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Captures the full read-only view of the current state. Taken between
    /// ticks, the result is stable for as long as the caller holds it.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            seed: self.seed,
            tick: self.tick,
            time: self.time,
            width: self.width,
            height: self.height,
            tiles: self.tiles.iter().map(|(_, t)| t).collect(),
            tile_counts: self.tile_counts(),
            object_counts: self.object_counts(),
            objects: self
                .occupancy
                .iter()
                .map(|(coord, object)| ObjectSnapshot {
                    coord,
                    object: object.clone(),
                })
                .collect(),
            blobs: self
                .blobs
                .iter()
                .map(|blob| BlobSnapshot {
                    id: blob.id(),
                    lineage_id: blob.identity.lineage_id,
                    generation: blob.identity.generation,
                    x: blob.physics.x,
                    y: blob.physics.y,
                    hunger: blob.needs.hunger,
                    thirst: blob.needs.thirst,
                    hp: blob.needs.hp,
                    age: blob.needs.age,
                    genetics: blob.genetics,
                    state: blob.state,
                    reproduction_cooldown: blob.reproduction_cooldown,
                    speed: blob.speed,
                    strength: blob.strength,
                    sight: blob.sight,
                })
                .collect(),
        }
    }
}
