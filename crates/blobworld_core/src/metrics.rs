//! Structured logging and run counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Installs the global tracing subscriber. Respects `RUST_LOG`, defaulting
/// to `info`. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Interval between periodic tick summaries in the log.
const LOG_EVERY_TICKS: u64 = 100;

/// Cumulative counters for one simulation run.
#[derive(Debug, Default)]
pub struct Metrics {
    ticks: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    harvests: AtomicU64,
    drinks: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed tick and emits a periodic summary.
    pub fn record_tick(&self, population: usize, births: u32, deaths: u32, harvests: u32, drinks: u32) {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        self.births.fetch_add(births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(deaths as u64, Ordering::Relaxed);
        self.harvests.fetch_add(harvests as u64, Ordering::Relaxed);
        self.drinks.fetch_add(drinks as u64, Ordering::Relaxed);

        if tick % LOG_EVERY_TICKS == 0 {
            tracing::info!(
                tick,
                population,
                births = self.births.load(Ordering::Relaxed),
                deaths = self.deaths.load(Ordering::Relaxed),
                harvests = self.harvests.load(Ordering::Relaxed),
                "simulation tick"
            );
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    pub fn harvests(&self) -> u64 {
        self.harvests.load(Ordering::Relaxed)
    }

    pub fn drinks(&self) -> u64 {
        self.drinks.load(Ordering::Relaxed)
    }
}
