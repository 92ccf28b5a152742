use serde::{Deserialize, Serialize};

/// Growth stage of a renewable plant resource.
///
/// Stages advance strictly 0 -> 1 -> 2 over time; only a `Ripe` plant can be
/// harvested, which resets it to `Seedling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    Seedling,
    Budding,
    Ripe,
}

impl GrowthStage {
    /// Numeric stage index (0, 1, 2).
    pub fn index(self) -> u8 {
        match self {
            GrowthStage::Seedling => 0,
            GrowthStage::Budding => 1,
            GrowthStage::Ripe => 2,
        }
    }

    pub fn is_ripe(self) -> bool {
        self == GrowthStage::Ripe
    }
}

/// The two flower sprite variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowerKind {
    Pink,
    White,
}

/// A placed world object. At most one object occupies a tile coordinate.
///
/// Closed set of variants, matched exhaustively; adding an object type is a
/// compile-time-checked exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldObject {
    BerryBush { stage: GrowthStage, timer: f64 },
    Flower { kind: FlowerKind },
    Mushroom,
    SugarCane,
    Rock,
    Tree,
}

impl WorldObject {
    /// A fresh bush starts at stage 0 with its regrow timer at zero.
    pub fn new_bush() -> Self {
        WorldObject::BerryBush {
            stage: GrowthStage::Seedling,
            timer: 0.0,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            WorldObject::BerryBush { .. } => ObjectKind::BerryBush,
            WorldObject::Flower { .. } => ObjectKind::Flower,
            WorldObject::Mushroom => ObjectKind::Mushroom,
            WorldObject::SugarCane => ObjectKind::SugarCane,
            WorldObject::Rock => ObjectKind::Rock,
            WorldObject::Tree => ObjectKind::Tree,
        }
    }

    /// Whether this object is a bush ready to be harvested.
    pub fn is_ripe_bush(&self) -> bool {
        matches!(
            self,
            WorldObject::BerryBush {
                stage: GrowthStage::Ripe,
                ..
            }
        )
    }
}

/// Variant tag without payload, used for per-type counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    BerryBush,
    Flower,
    Mushroom,
    SugarCane,
    Rock,
    Tree,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::BerryBush,
        ObjectKind::Flower,
        ObjectKind::Mushroom,
        ObjectKind::SugarCane,
        ObjectKind::Rock,
        ObjectKind::Tree,
    ];
}
