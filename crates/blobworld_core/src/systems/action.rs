//! Sequential application of decisions: movement, arrivals, and the
//! drink/harvest interactions.
//!
//! This is the only phase that mutates blobs, the occupancy grid or bush
//! growth stages. It runs in ascending blob-id order, so resource conflicts
//! resolve deterministically: when two blobs finish harvesting the same bush
//! in one tick, the lower id wins and the other observes the post-harvest
//! stage and walks away empty-handed.

use blobworld_data::{Blob, BlobState, Coord};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::lifecycle;
use crate::occupancy::OccupancyGrid;
use crate::systems::biological;
use crate::systems::perception::Decision;
use crate::terrain::TileGrid;

/// Mutable world view for the apply phase.
pub struct ActionContext<'a> {
    pub tiles: &'a TileGrid,
    pub occupancy: &'a mut OccupancyGrid,
    pub config: &'a SimConfig,
    pub rng: &'a mut ChaCha8Rng,
    pub dt: f64,
    /// Harvests completed this tick, for the tick report.
    pub harvests: u32,
    /// Drinks completed this tick.
    pub drinks: u32,
}

/// Applies passive biology plus the decided action for every blob, in
/// registry (ascending id) order.
pub fn apply_all(blobs: &mut [Blob], decisions: &[Decision], ctx: &mut ActionContext) {
    for (blob, decision) in blobs.iter_mut().zip(decisions) {
        biological::passive_update(blob, ctx.dt, &ctx.config.needs);
        if blob.is_dead() {
            continue;
        }
        apply_one(blob, *decision, ctx);
    }
}

fn apply_one(blob: &mut Blob, decision: Decision, ctx: &mut ActionContext) {
    // A committed interaction runs its timer down before anything else.
    if blob.state.is_interacting() && decision == Decision::Continue {
        tick_interaction(blob, ctx);
        return;
    }

    match decision {
        Decision::Continue => {}
        Decision::Drink { tile } => {
            blob.state = BlobState::SeekingWater { target: tile };
            steer_towards_tile(blob, tile);
            step(blob, ctx);
            try_arrive(blob, ctx);
        }
        Decision::Eat { bush } => {
            blob.state = BlobState::SeekingFood { target: bush };
            steer_towards_tile(blob, bush);
            step(blob, ctx);
            try_arrive(blob, ctx);
        }
        Decision::Court { mate, x, y } => {
            blob.state = BlobState::SeekingMate { target: mate };
            steer_towards(blob, x, y);
            step(blob, ctx);
        }
        Decision::Wander => {
            blob.state = BlobState::Wandering;
            blob.retarget_cooldown -= ctx.dt;
            if blob.retarget_cooldown <= 0.0 {
                pick_random_direction(blob, ctx.rng);
            }
            step(blob, ctx);
        }
    }
}

/// Counts down a running interaction and lands its effect on expiry.
/// A bush that stopped being ripe mid-harvest (someone else got there first)
/// aborts the interaction; the blob re-decides next tick.
fn tick_interaction(blob: &mut Blob, ctx: &mut ActionContext) {
    let interaction = &ctx.config.interaction;
    match blob.state {
        BlobState::Harvesting { target, timer } => {
            let still_ripe = ctx
                .occupancy
                .get(target)
                .is_some_and(|object| object.is_ripe_bush());
            if !still_ripe {
                blob.state = BlobState::Wandering;
                return;
            }
            let timer = timer - ctx.dt;
            if timer > 0.0 {
                blob.state = BlobState::Harvesting { target, timer };
                return;
            }
            if let Some(bush) = ctx.occupancy.get_mut(target) {
                if lifecycle::harvest_bush(bush) {
                    blob.needs.hunger -= interaction.harvest_hunger_relief;
                    blob.needs.hp += interaction.harvest_hp_gain;
                    blob.needs.clamp_to_bounds();
                    ctx.harvests += 1;
                }
            }
            blob.state = BlobState::Wandering;
            pick_random_direction(blob, ctx.rng);
        }
        BlobState::Drinking { target, timer } => {
            let timer = timer - ctx.dt;
            if timer > 0.0 {
                blob.state = BlobState::Drinking { target, timer };
                return;
            }
            blob.needs.thirst -= interaction.drink_thirst_relief;
            blob.needs.hp += interaction.drink_hp_gain;
            blob.needs.clamp_to_bounds();
            ctx.drinks += 1;
            blob.state = BlobState::Wandering;
            pick_random_direction(blob, ctx.rng);
        }
        _ => {}
    }
}

/// Starts the interaction timer if the blob reached its seek target this
/// step. A target that went invalid before arrival is abandoned.
fn try_arrive(blob: &mut Blob, ctx: &mut ActionContext) {
    let interaction = &ctx.config.interaction;
    match blob.state {
        BlobState::SeekingFood { target } => {
            if target.distance_to(blob.physics.x, blob.physics.y) <= interaction.arrival_radius {
                let ripe = ctx
                    .occupancy
                    .get(target)
                    .is_some_and(|object| object.is_ripe_bush());
                if ripe {
                    blob.state = BlobState::Harvesting {
                        target,
                        timer: interaction.duration,
                    };
                } else {
                    blob.state = BlobState::Wandering;
                }
            }
        }
        BlobState::SeekingWater { target } => {
            if target.distance_to(blob.physics.x, blob.physics.y) <= interaction.arrival_radius {
                blob.state = BlobState::Drinking {
                    target,
                    timer: interaction.duration,
                };
            }
        }
        _ => {}
    }
}

fn steer_towards_tile(blob: &mut Blob, tile: Coord) {
    let (cx, cy) = tile.center();
    steer_towards(blob, cx, cy);
}

fn steer_towards(blob: &mut Blob, x: f64, y: f64) {
    let vx = x - blob.physics.x;
    let vy = y - blob.physics.y;
    let length = (vx * vx + vy * vy).sqrt();
    if length > 0.0 {
        blob.physics.dir_x = vx / length;
        blob.physics.dir_y = vy / length;
    }
}

/// Moves one step along the current heading. A step into water or out of
/// bounds is cancelled and the blob turns a random new way.
fn step(blob: &mut Blob, ctx: &mut ActionContext) {
    let distance = blob.speed * ctx.dt;
    let new_x = blob.physics.x + blob.physics.dir_x * distance;
    let new_y = blob.physics.y + blob.physics.dir_y * distance;
    let destination = Coord::new(new_x.floor() as i32, new_y.floor() as i32);

    if ctx.tiles.is_walkable(destination) {
        blob.physics.x = new_x;
        blob.physics.y = new_y;
    } else {
        pick_random_direction(blob, ctx.rng);
    }
}

fn pick_random_direction(blob: &mut Blob, rng: &mut ChaCha8Rng) {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    blob.physics.dir_x = angle.cos();
    blob.physics.dir_y = angle.sin();
    blob.retarget_cooldown = rng.gen_range(0.5..2.0);
}
