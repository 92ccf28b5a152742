//! The application driver: the command surface an external front end uses.

use std::path::Path;

use blobworld_core::config::SimConfig;
use blobworld_core::error::ConfigError;
use blobworld_core::snapshot::WorldSnapshot;
use blobworld_core::world::{TickSummary, World};

pub struct App {
    pub world: World,
    pub running: bool,
}

impl App {
    /// Validates the configuration and generates the world. Configuration
    /// problems are fatal here, before any state exists.
    pub fn initialize(seed: u64, config: SimConfig) -> Result<Self, ConfigError> {
        let world = World::new(seed, config)?;
        Ok(Self {
            world,
            running: true,
        })
    }

    /// Loads a TOML configuration file, falling back to defaults when the
    /// file does not exist.
    pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(SimConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        SimConfig::from_toml(&content)
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self, dt: f64) -> TickSummary {
        self.world.update(dt)
    }

    /// Stops the run, logs a closing summary and hands back the final
    /// snapshot for consumers that persist or display it.
    pub fn shutdown(&mut self) -> WorldSnapshot {
        self.running = false;
        let metrics = self.world.metrics();
        tracing::info!(
            ticks = metrics.tick_count(),
            population = self.world.population(),
            births = metrics.births(),
            deaths = metrics.deaths(),
            harvests = metrics.harvests(),
            drinks = metrics.drinks(),
            "simulation stopped"
        );
        self.world.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_rejects_bad_config() {
        let mut config = SimConfig::default();
        config.world.width = 0;
        assert!(App::initialize(1, config).is_err());
    }

    #[test]
    fn test_tick_and_shutdown() {
        let mut app = App::initialize(42, SimConfig::default()).unwrap();
        let summary = app.tick(0.1);
        assert_eq!(summary.tick, 1);
        let snapshot = app.shutdown();
        assert!(!app.running);
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.seed, 42);
    }
}
