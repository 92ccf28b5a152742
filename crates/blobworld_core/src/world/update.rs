use crate::lifecycle;
use crate::systems::action::{self, ActionContext};
use crate::systems::perception::{self, PerceptionContext};
use crate::systems::reproduction;
use crate::world::World;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: u64,
    pub population: usize,
    pub births: u32,
    pub deaths: u32,
    pub harvests: u32,
    pub drinks: u32,
}

impl World {
    /// Advances the simulation by one tick of `dt` time-units.
    ///
    /// Fixed pass order:
    /// 1. resource growth timers,
    /// 2. snapshot capture of committed blob state,
    /// 3. per-blob perception and decisions (parallel, read-only),
    /// 4. sequential application in ascending id order — the only phase
    ///    that mutates blobs, bushes or the occupancy grid,
    /// 5. reproduction pairing; offspring are buffered,
    /// 6. dead blobs leave the registry, newborns join it.
    ///
    /// Rendering and HUD consumers read a stable snapshot between calls.
    pub fn update(&mut self, dt: f64) -> TickSummary {
        let dt = dt.max(0.0);
        self.tick += 1;
        self.time += dt;

        for (_, object) in self.occupancy.iter_mut() {
            lifecycle::advance_growth(object, dt, &self.config.growth);
        }

        let mut snapshots = std::mem::take(&mut self.snapshot_buffer);
        perception::capture_snapshots(&self.blobs, &mut snapshots);

        let decisions = {
            let ctx = PerceptionContext {
                tiles: &self.tiles,
                occupancy: &self.occupancy,
                snapshots: &snapshots,
                config: &self.config,
            };
            perception::decide_all(&self.blobs, &ctx)
        };
        self.snapshot_buffer = snapshots;

        let mut action_ctx = ActionContext {
            tiles: &self.tiles,
            occupancy: &mut self.occupancy,
            config: &self.config,
            rng: &mut self.rng,
            dt,
            harvests: 0,
            drinks: 0,
        };
        action::apply_all(&mut self.blobs, &decisions, &mut action_ctx);
        let harvests = action_ctx.harvests;
        let drinks = action_ctx.drinks;

        let offspring = reproduction::evaluate_pairs(
            &mut self.blobs,
            &self.config,
            &mut self.rng,
            &mut self.next_blob_id,
        );
        let births = offspring.len() as u32;

        let before = self.blobs.len();
        self.blobs.retain(|blob| !blob.is_dead());
        let deaths = (before - self.blobs.len()) as u32;
        self.blobs.extend(offspring);

        let population = self.blobs.len();
        self.metrics
            .record_tick(population, births, deaths, harvests, drinks);

        TickSummary {
            tick: self.tick,
            population,
            births,
            deaths,
            harvests,
            drinks,
        }
    }
}
