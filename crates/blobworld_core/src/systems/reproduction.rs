//! Mate pairing, genetic crossover and offspring spawning.
//!
//! Candidate pairs are enumerated in ascending `(id, id)` order after the
//! movement pass. Each blob joins at most one pairing per tick; a blob
//! eligible with several partners mates with the lowest-id one and the rest
//! wait for the next tick.

use blobworld_data::{
    Blob, BlobId, BlobState, Genetics, Identity, Needs, Physics,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GeneticsConfig, ReproductionConfig, SimConfig};

/// The full eligibility gate: adult, in good condition, off cooldown.
pub fn eligible(
    age: f64,
    hunger: f64,
    thirst: f64,
    hp: f64,
    cooldown: f64,
    config: &ReproductionConfig,
) -> bool {
    age >= config.adult_age
        && hunger < config.max_hunger
        && thirst < config.max_thirst
        && hp >= config.min_hp
        && cooldown <= 0.0
}

fn blob_eligible(blob: &Blob, config: &ReproductionConfig) -> bool {
    !blob.is_dead()
        && eligible(
            blob.needs.age,
            blob.needs.hunger,
            blob.needs.thirst,
            blob.needs.hp,
            blob.reproduction_cooldown,
            config,
        )
}

/// Runs the pairing pass over the registry. Returns the offspring born this
/// tick; the caller appends them to the registry only after the tick's
/// iteration completes, so new blobs are never visible mid-tick.
pub fn evaluate_pairs(
    blobs: &mut [Blob],
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
) -> Vec<Blob> {
    let repro = &config.reproduction;
    let radius_sq = repro.mating_radius * repro.mating_radius;
    let mut paired = vec![false; blobs.len()];
    let mut offspring = Vec::new();

    for i in 0..blobs.len() {
        if paired[i] || !blob_eligible(&blobs[i], repro) {
            continue;
        }
        for j in (i + 1)..blobs.len() {
            if paired[j] || !blob_eligible(&blobs[j], repro) {
                continue;
            }
            let dx = blobs[j].physics.x - blobs[i].physics.x;
            let dy = blobs[j].physics.y - blobs[i].physics.y;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }

            let id = BlobId(*next_id);
            *next_id += 1;
            offspring.push(conceive(&blobs[i], &blobs[j], id, &config.genetics, repro, rng));

            blobs[i].reproduction_cooldown = repro.parent_cooldown;
            blobs[j].reproduction_cooldown = repro.parent_cooldown;
            paired[i] = true;
            paired[j] = true;
            break;
        }
    }

    offspring
}

/// Builds a child from two parents: averaged traits with bounded mutation,
/// spawned at the parents' midpoint with fresh needs.
fn conceive(
    a: &Blob,
    b: &Blob,
    id: BlobId,
    genetics_config: &GeneticsConfig,
    repro: &ReproductionConfig,
    rng: &mut ChaCha8Rng,
) -> Blob {
    let genetics = crossover(&a.genetics, &b.genetics, genetics_config, rng);
    let x = (a.physics.x + b.physics.x) / 2.0;
    let y = (a.physics.y + b.physics.y) / 2.0;
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);

    Blob {
        identity: Identity {
            id,
            lineage_id: a.identity.lineage_id,
            generation: a.identity.generation.max(b.identity.generation) + 1,
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
        reproduction_cooldown: repro.child_cooldown,
        retarget_cooldown: rng.gen_range(0.5..2.0),
        speed: genetics.speed,
        strength: genetics.strength,
        sight: genetics.sight,
    }
}

/// Child trait = parental average plus a uniform perturbation bounded by the
/// configured mutation magnitude, clamped back into the trait's range.
pub fn crossover<R: Rng>(
    a: &Genetics,
    b: &Genetics,
    config: &GeneticsConfig,
    rng: &mut R,
) -> Genetics {
    let mutate = |avg: f64, magnitude: f64, rng: &mut R| -> f64 {
        if magnitude > 0.0 {
            avg + rng.gen_range(-magnitude..=magnitude)
        } else {
            avg
        }
    };

    Genetics {
        intelligence: config.intelligence.clamp(mutate(
            (a.intelligence + b.intelligence) / 2.0,
            config.mutation_intelligence,
            rng,
        )),
        strength: config.strength.clamp(mutate(
            (a.strength + b.strength) / 2.0,
            config.mutation_strength,
            rng,
        )),
        speed: config
            .speed
            .clamp(mutate((a.speed + b.speed) / 2.0, config.mutation_speed, rng)),
        sight: config
            .sight
            .clamp(mutate((a.sight + b.sight) / 2.0, config.mutation_sight, rng)),
        lifespan: config.lifespan.clamp(mutate(
            (a.lifespan + b.lifespan) / 2.0,
            config.mutation_lifespan,
            rng,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::spawn_blob_with_rng;
    use rand::SeedableRng;

    fn adult_blob(id: u64, x: f64, rng: &mut ChaCha8Rng) -> Blob {
        let mut blob =
            spawn_blob_with_rng(BlobId(id), x, 5.0, &GeneticsConfig::default(), rng);
        blob.needs.age = 30.0;
        blob
    }

    #[test]
    fn test_crossover_stays_in_range() {
        let config = GeneticsConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = Genetics {
            intelligence: 100.0,
            strength: 100.0,
            speed: 3.0,
            sight: 10.0,
            lifespan: 260.0,
        };
        for _ in 0..200 {
            let child = crossover(&a, &a, &config, &mut rng);
            assert!(child.intelligence <= config.intelligence.max);
            assert!(child.strength <= config.strength.max);
            assert!(child.speed <= config.speed.max);
            assert!(child.sight <= config.sight.max);
            assert!(child.lifespan <= config.lifespan.max);
        }
    }

    #[test]
    fn test_pairing_is_at_most_once_per_tick() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        // Three mutually-in-range eligible adults: exactly one pair forms,
        // the third defers to the next tick.
        let mut blobs = vec![
            adult_blob(0, 5.0, &mut rng),
            adult_blob(1, 5.5, &mut rng),
            adult_blob(2, 6.0, &mut rng),
        ];
        let mut next_id = 3;
        let offspring = evaluate_pairs(&mut blobs, &config, &mut rng, &mut next_id);
        assert_eq!(offspring.len(), 1);
        assert_eq!(offspring[0].id(), BlobId(3));
        // Lowest-id pairing: 0 with 1.
        assert_eq!(
            blobs[0].reproduction_cooldown,
            config.reproduction.parent_cooldown
        );
        assert_eq!(
            blobs[1].reproduction_cooldown,
            config.reproduction.parent_cooldown
        );
        assert_eq!(blobs[2].reproduction_cooldown, 0.0);
    }

    #[test]
    fn test_cooldown_blocks_pairing() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut blobs = vec![adult_blob(0, 5.0, &mut rng), adult_blob(1, 5.5, &mut rng)];
        blobs[0].reproduction_cooldown = 10.0;
        let mut next_id = 2;
        let offspring = evaluate_pairs(&mut blobs, &config, &mut rng, &mut next_id);
        assert!(offspring.is_empty());
    }

    #[test]
    fn test_distance_gate() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut blobs = vec![adult_blob(0, 5.0, &mut rng), adult_blob(1, 20.0, &mut rng)];
        let mut next_id = 2;
        let offspring = evaluate_pairs(&mut blobs, &config, &mut rng, &mut next_id);
        assert!(offspring.is_empty());
    }

    #[test]
    fn test_child_spawns_at_midpoint_with_fresh_needs() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut blobs = vec![adult_blob(0, 5.0, &mut rng), adult_blob(1, 6.0, &mut rng)];
        let mut next_id = 2;
        let offspring = evaluate_pairs(&mut blobs, &config, &mut rng, &mut next_id);
        let child = &offspring[0];
        assert_eq!(child.physics.x, 5.5);
        assert_eq!(child.needs.age, 0.0);
        assert_eq!(child.needs.hunger, 0.0);
        assert_eq!(child.needs.hp, Needs::MAX);
        assert_eq!(
            child.reproduction_cooldown,
            config.reproduction.child_cooldown
        );
        assert_eq!(child.identity.generation, 1);
    }
}
