use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::genetics::Genetics;
use crate::data::tile::Coord;

/// Sequential agent identifier.
///
/// Ids are allocated in spawn order and never reused, so ascending-id
/// iteration is the fixed, deterministic evaluation order of the simulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlobId(pub u64);

impl BlobId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: BlobId,
    /// Family line, inherited from the first parent.
    pub lineage_id: Uuid,
    pub generation: u32,
}

/// Continuous kinematic state. Position is in tile units but not grid
/// aligned; the occupied grid cell is a derived, rounded view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub x: f64,
    pub y: f64,
    pub dir_x: f64,
    pub dir_y: f64,
}

impl Physics {
    /// Grid cell currently containing this position.
    pub fn tile_coord(&self) -> Coord {
        Coord::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Survival needs and vital stats. Hunger/thirst/hp are bounded to [0, 100];
/// higher hunger/thirst is worse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub hunger: f64,
    pub thirst: f64,
    pub hp: f64,
    pub age: f64,
}

impl Needs {
    pub const MAX: f64 = 100.0;

    pub fn newborn() -> Self {
        Self {
            hunger: 0.0,
            thirst: 0.0,
            hp: Self::MAX,
            age: 0.0,
        }
    }

    /// Clamp all bounded attributes back into range. Underflow and overflow
    /// are never errors.
    pub fn clamp_to_bounds(&mut self) {
        self.hunger = self.hunger.clamp(0.0, Self::MAX);
        self.thirst = self.thirst.clamp(0.0, Self::MAX);
        self.hp = self.hp.clamp(0.0, Self::MAX);
        self.age = self.age.max(0.0);
    }
}

/// The blob decision state machine. `Dead` is terminal; dead blobs are
/// removed from the registry at the end of the tick in which they died.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BlobState {
    Wandering,
    SeekingWater { target: Coord },
    SeekingFood { target: Coord },
    SeekingMate { target: BlobId },
    Drinking { target: Coord, timer: f64 },
    Harvesting { target: Coord, timer: f64 },
    Dead,
}

impl BlobState {
    /// Whether the blob has a committed interaction timer running.
    pub fn is_interacting(&self) -> bool {
        matches!(
            self,
            BlobState::Drinking { .. } | BlobState::Harvesting { .. }
        )
    }
}

/// A single simulated agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub identity: Identity,
    pub physics: Physics,
    pub needs: Needs,
    pub genetics: Genetics,
    pub state: BlobState,
    /// Seconds until this blob may mate again.
    pub reproduction_cooldown: f64,
    /// Seconds until a wandering blob picks a new direction.
    pub retarget_cooldown: f64,
    /// Effective stats for the current tick: base genetics modulated by
    /// hunger, thirst, hp and age.
    pub speed: f64,
    pub strength: f64,
    pub sight: f64,
}

impl Blob {
    pub fn id(&self) -> BlobId {
        self.identity.id
    }

    pub fn tile_coord(&self) -> Coord {
        self.physics.tile_coord()
    }

    pub fn is_dead(&self) -> bool {
        self.state == BlobState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_coord_floors_continuous_position() {
        let physics = Physics {
            x: 3.9,
            y: 7.1,
            dir_x: 0.0,
            dir_y: 0.0,
        };
        assert_eq!(physics.tile_coord(), Coord::new(3, 7));
    }

    #[test]
    fn test_needs_clamping() {
        let mut needs = Needs {
            hunger: 140.0,
            thirst: -3.0,
            hp: 101.0,
            age: 5.0,
        };
        needs.clamp_to_bounds();
        assert_eq!(needs.hunger, 100.0);
        assert_eq!(needs.thirst, 0.0);
        assert_eq!(needs.hp, 100.0);
    }
}
