//! Read-only snapshots for rendering, the HUD and exporters.
//!
//! A [`WorldSnapshot`] is taken between ticks and carries everything an
//! external consumer may draw or count; consumers never touch live
//! simulation state. Debug overlays (sight circles, path lines) are a
//! rendering concern: the snapshot exposes the data, the core checks no
//! visualization flags.

use std::collections::HashMap;

use blobworld_data::{BlobId, BlobState, Coord, Genetics, ObjectKind, TileType, WorldObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One blob, fully described.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BlobSnapshot {
    pub id: BlobId,
    pub lineage_id: Uuid,
    pub generation: u32,
    pub x: f64,
    pub y: f64,
    pub hunger: f64,
    pub thirst: f64,
    pub hp: f64,
    pub age: f64,
    pub genetics: Genetics,
    pub state: BlobState,
    pub reproduction_cooldown: f64,
    /// Effective stats this tick, for the HUD's blob panel and sight
    /// visualization.
    pub speed: f64,
    pub strength: f64,
    pub sight: f64,
}

/// One placed object with its variant state (bush stage, flower kind).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ObjectSnapshot {
    pub coord: Coord,
    pub object: WorldObject,
}

/// Full read-only view of the world after a tick.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub seed: u64,
    pub tick: u64,
    pub time: f64,
    pub width: u16,
    pub height: u16,
    /// Row-major tile classification.
    pub tiles: Vec<TileType>,
    pub tile_counts: HashMap<TileType, usize>,
    pub object_counts: HashMap<ObjectKind, usize>,
    pub objects: Vec<ObjectSnapshot>,
    pub blobs: Vec<BlobSnapshot>,
}

impl WorldSnapshot {
    pub fn population(&self) -> usize {
        self.blobs.len()
    }

    pub fn tile_at(&self, coord: Coord) -> Option<TileType> {
        if coord.x < 0
            || coord.y < 0
            || coord.x >= self.width as i32
            || coord.y >= self.height as i32
        {
            return None;
        }
        self.tiles
            .get(coord.y as usize * self.width as usize + coord.x as usize)
            .copied()
    }
}
