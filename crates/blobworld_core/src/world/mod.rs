//! The simulation world: terrain, placed objects, the agent registry and
//! the tick loop that drives them.

pub mod init;
pub mod state;
pub mod update;

use blobworld_data::Blob;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::metrics::Metrics;
use crate::occupancy::OccupancyGrid;
use crate::systems::perception::BlobSnapshot;
use crate::terrain::TileGrid;

pub use update::TickSummary;

pub struct World {
    pub width: u16,
    pub height: u16,
    /// Immutable after generation.
    pub tiles: TileGrid,
    /// Authoritative owner of all placed objects.
    pub occupancy: OccupancyGrid,
    /// Agent registry, kept in ascending id order.
    pub blobs: Vec<Blob>,
    pub config: SimConfig,
    seed: u64,
    tick: u64,
    time: f64,
    next_blob_id: u64,
    rng: ChaCha8Rng,
    /// Committed previous-tick view, reused across ticks.
    snapshot_buffer: Vec<BlobSnapshot>,
    metrics: Metrics,
}
