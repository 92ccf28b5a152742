//! Birth and growth: blob creation and the berry-bush stage machine.

use blobworld_data::{
    Blob, BlobId, BlobState, Genetics, GrowthStage, Identity, Needs, Physics, WorldObject,
};
use rand::Rng;
use uuid::Uuid;

use crate::config::{GeneticsConfig, GrowthConfig};

/// Creates a founding blob at a position with randomly drawn genetics.
/// All randomness comes from the caller's rng, so spawn order fixes the
/// outcome for a given seed.
pub fn spawn_blob_with_rng<R: Rng>(
    id: BlobId,
    x: f64,
    y: f64,
    genetics_config: &GeneticsConfig,
    rng: &mut R,
) -> Blob {
    let genetics = Genetics {
        intelligence: genetics_config.intelligence.sample(rng),
        strength: genetics_config.strength.sample(rng),
        speed: genetics_config.speed.sample(rng),
        sight: genetics_config.sight.sample(rng),
        lifespan: genetics_config.lifespan.sample(rng),
    };
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    Blob {
        identity: Identity {
            id,
            lineage_id: Uuid::from_u128(rng.gen()),
            generation: 0,
        },
        physics: Physics {
            x,
            y,
            dir_x: angle.cos(),
            dir_y: angle.sin(),
        },
        needs: Needs::newborn(),
        genetics,
        state: BlobState::Wandering,
        reproduction_cooldown: 0.0,
        retarget_cooldown: rng.gen_range(0.5..2.0),
        speed: genetics.speed,
        strength: genetics.strength,
        sight: genetics.sight,
    }
}

/// Advances a bush's growth timer by `dt`. Stages move strictly
/// 0 -> 1 -> 2 while the bush is untouched; a ripe bush holds until
/// harvested. Non-bush objects are unaffected.
pub fn advance_growth(object: &mut WorldObject, dt: f64, growth: &GrowthConfig) {
    if let WorldObject::BerryBush { stage, timer } = object {
        if stage.is_ripe() {
            return;
        }
        *timer += dt;
        match stage {
            GrowthStage::Seedling if *timer >= growth.stage0_duration => {
                *stage = GrowthStage::Budding;
                *timer = 0.0;
            }
            GrowthStage::Budding if *timer >= growth.stage1_duration => {
                *stage = GrowthStage::Ripe;
                *timer = 0.0;
            }
            _ => {}
        }
    }
}

/// Harvests a ripe bush, resetting it to stage 0 with a fresh regrow timer.
/// Returns whether the harvest happened; stages 0 and 1 are not harvestable.
pub fn harvest_bush(object: &mut WorldObject) -> bool {
    match object {
        WorldObject::BerryBush { stage, timer } if stage.is_ripe() => {
            *stage = GrowthStage::Seedling;
            *timer = 0.0;
            true
        }
        _ => false,
    }
}
