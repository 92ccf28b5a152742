use blobworld_data::BlobId;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::lifecycle;
use crate::metrics::Metrics;
use crate::terrain::generation;
use crate::world::World;

impl World {
    /// Builds a world from a seed and a validated configuration.
    ///
    /// Validation failures are fatal and surface before any world state is
    /// created. A given `(seed, config)` always yields the identical world.
    pub fn new(seed: u64, config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let generated = generation::generate(seed, &config, &mut rng);
        let next_blob_id = generated.blobs.len() as u64;

        tracing::info!(
            seed,
            fingerprint = %config.fingerprint(),
            width = config.world.width,
            height = config.world.height,
            population = generated.blobs.len(),
            objects = generated.occupancy.len(),
            "world generated"
        );

        Ok(Self {
            width: config.world.width,
            height: config.world.height,
            tiles: generated.tiles,
            occupancy: generated.occupancy,
            blobs: generated.blobs,
            config,
            seed,
            tick: 0,
            time: 0.0,
            next_blob_id,
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            snapshot_buffer: Vec::new(),
            metrics: Metrics::new(),
        })
    }

    /// Spawns an extra blob with randomly drawn genetics at a position.
    /// Used by tests and scenario tooling; ids stay ascending.
    pub fn spawn_blob(&mut self, x: f64, y: f64) -> BlobId {
        let id = BlobId(self.next_blob_id);
        self.next_blob_id += 1;
        let blob =
            lifecycle::spawn_blob_with_rng(id, x, y, &self.config.genetics, &mut self.rng);
        self.blobs.push(blob);
        id
    }
}
