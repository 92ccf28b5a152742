//! Passive per-tick biology: need accumulation, hp drain and regeneration,
//! aging penalties and death.

use blobworld_data::{Blob, BlobState, Needs};

use crate::config::NeedsConfig;

// Condition multipliers, straight from the tuning table: starving or parched
// blobs slow down and weaken, well-fed ones get a small edge, injury and old
// age narrow sight.
const STARVED_SPEED_FACTOR: f64 = 1.0 / 1.5;
const STARVED_STRENGTH_FACTOR: f64 = 0.5;
const SATED_SPEED_FACTOR: f64 = 1.1;
const SATED_STRENGTH_FACTOR: f64 = 2.0;
const LOW_HP_SIGHT_FACTOR: f64 = 0.5;
const TIER1_FACTORS: (f64, f64, f64) = (0.85, 0.9, 0.8);
const TIER2_FACTORS: (f64, f64, f64) = (0.6, 0.7, 0.5);
const THIRST_PENALTY_LEVEL: f64 = 70.0;
const NEED_BUFF_LEVEL: f64 = 30.0;
const LOW_HP_LEVEL: f64 = 40.0;

/// Advances needs, age and hp for one blob and recomputes its effective
/// stats. Marks the blob `Dead` when hp hits zero or its lifespan runs out;
/// removal from the registry happens at the end of the tick.
pub fn passive_update(blob: &mut Blob, dt: f64, config: &NeedsConfig) {
    if blob.is_dead() {
        return;
    }

    blob.reproduction_cooldown = (blob.reproduction_cooldown - dt).max(0.0);

    let needs = &mut blob.needs;
    needs.age += dt;
    needs.hunger += config.hunger_rate * dt;
    needs.thirst += config.thirst_rate * dt;
    needs.clamp_to_bounds();

    if needs.hunger > config.hunger_starvation {
        needs.hp -= config.starvation_hp_drain * dt;
    }
    if needs.thirst > config.thirst_starvation {
        needs.hp -= config.starvation_hp_drain * dt;
    }
    if needs.hunger < config.regen_threshold {
        needs.hp += config.regen_hp_rate * dt;
    }
    if needs.thirst < config.regen_threshold {
        needs.hp += config.regen_hp_rate * dt;
    }
    if needs.age >= config.old_age_tier2 {
        needs.hp -= config.old_age_hp_drain * dt;
    }
    needs.clamp_to_bounds();

    update_condition(blob, config);

    if blob.needs.hp <= 0.0 || blob.needs.age >= blob.genetics.lifespan {
        blob.state = BlobState::Dead;
    }
}

/// Recomputes effective speed, strength and sight from base genetics and the
/// blob's current condition.
pub fn update_condition(blob: &mut Blob, config: &NeedsConfig) {
    let needs = &blob.needs;
    let mut speed_factor = 1.0;
    let mut strength_factor = 1.0;
    let mut sight_factor = 1.0;

    if needs.hunger > config.hunger_starvation {
        speed_factor *= STARVED_SPEED_FACTOR;
        strength_factor *= STARVED_STRENGTH_FACTOR;
    }
    if needs.thirst > THIRST_PENALTY_LEVEL {
        speed_factor *= STARVED_SPEED_FACTOR;
        strength_factor *= STARVED_STRENGTH_FACTOR;
    }
    if needs.thirst < NEED_BUFF_LEVEL {
        speed_factor *= SATED_SPEED_FACTOR;
        strength_factor *= SATED_STRENGTH_FACTOR;
    }
    if needs.hunger < NEED_BUFF_LEVEL {
        speed_factor *= SATED_SPEED_FACTOR;
        strength_factor *= SATED_STRENGTH_FACTOR;
    }
    if needs.hp < LOW_HP_LEVEL {
        sight_factor *= LOW_HP_SIGHT_FACTOR;
    }

    if needs.age >= config.old_age_tier2 {
        speed_factor *= TIER2_FACTORS.0;
        strength_factor *= TIER2_FACTORS.1;
        sight_factor *= TIER2_FACTORS.2;
    } else if needs.age > config.old_age_tier1 {
        speed_factor *= TIER1_FACTORS.0;
        strength_factor *= TIER1_FACTORS.1;
        sight_factor *= TIER1_FACTORS.2;
    }

    blob.speed = blob.genetics.speed * speed_factor;
    blob.strength = blob.genetics.strength * strength_factor;
    blob.sight = blob.genetics.sight * sight_factor;
}

/// Needs are always inside their bounds after an update, whatever happened.
pub fn assert_bounds(needs: &Needs) -> bool {
    (0.0..=Needs::MAX).contains(&needs.hunger)
        && (0.0..=Needs::MAX).contains(&needs.thirst)
        && (0.0..=Needs::MAX).contains(&needs.hp)
        && needs.age >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneticsConfig;
    use crate::lifecycle::spawn_blob_with_rng;
    use blobworld_data::BlobId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_blob() -> Blob {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_blob_with_rng(BlobId(0), 5.0, 5.0, &GeneticsConfig::default(), &mut rng)
    }

    #[test]
    fn test_needs_accumulate_and_clamp() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        for _ in 0..1000 {
            passive_update(&mut blob, 0.5, &config);
            assert!(assert_bounds(&blob.needs));
        }
        assert_eq!(blob.needs.hunger, 100.0);
        assert_eq!(blob.needs.thirst, 100.0);
    }

    #[test]
    fn test_starvation_drains_hp() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        blob.needs.hunger = 95.0;
        blob.needs.thirst = 95.0;
        let hp_before = blob.needs.hp;
        passive_update(&mut blob, 1.0, &config);
        // Both needs starving: two drains, no regen.
        assert!(blob.needs.hp < hp_before);
    }

    #[test]
    fn test_satisfied_needs_regenerate_hp() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        blob.needs.hp = 50.0;
        blob.needs.hunger = 5.0;
        blob.needs.thirst = 5.0;
        passive_update(&mut blob, 1.0, &config);
        assert!(blob.needs.hp > 50.0);
    }

    #[test]
    fn test_death_at_lifespan() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        blob.needs.age = blob.genetics.lifespan - 0.05;
        passive_update(&mut blob, 0.1, &config);
        assert!(blob.is_dead());
    }

    #[test]
    fn test_death_at_zero_hp() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        blob.needs.hp = 0.5;
        blob.needs.hunger = 100.0;
        blob.needs.thirst = 100.0;
        passive_update(&mut blob, 1.0, &config);
        assert!(blob.is_dead());
    }

    #[test]
    fn test_old_age_narrows_sight() {
        let config = NeedsConfig::default();
        let mut blob = test_blob();
        blob.needs.hunger = 50.0;
        blob.needs.thirst = 50.0;
        update_condition(&mut blob, &config);
        let fresh_sight = blob.sight;

        blob.needs.age = 150.0;
        update_condition(&mut blob, &config);
        let tier1_sight = blob.sight;
        assert!(tier1_sight < fresh_sight);

        blob.needs.age = 220.0;
        update_condition(&mut blob, &config);
        assert!(blob.sight < tier1_sight);
    }
}
