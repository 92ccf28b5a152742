//! # Blobworld Core
//!
//! The simulation engine for Blobworld: a procedurally generated tile world
//! inhabited by autonomous blobs that forage, drink, age, reproduce and die.
//!
//! The engine is deterministic: a world is a pure function of its seed and
//! configuration, and every tick applies its systems in a fixed order so two
//! runs from the same seed stay identical forever. Rendering, HUD and input
//! are external collaborators that consume read-only [`snapshot`] data and
//! never touch live state.
//!
//! ## Architecture
//!
//! - **Generation**: seeded fractal noise ([`noise`]) is classified into
//!   biome tiles ([`terrain`]); one constrained placement pass fills the
//!   [`occupancy`] grid with objects and seeds the founding population.
//! - **Simulation**: each tick, blob decisions are computed in parallel
//!   against the previous tick's committed state, then applied sequentially
//!   in ascending blob-id order ([`systems`]).
//!
//! ## Example
//!
//! ```
//! use blobworld_core::config::SimConfig;
//! use blobworld_core::world::World;
//!
//! let mut world = World::new(42, SimConfig::default()).unwrap();
//! for _ in 0..10 {
//!     world.update(0.1);
//! }
//! let snapshot = world.snapshot();
//! assert_eq!(snapshot.seed, 42);
//! ```

/// Configuration structures and validation
pub mod config;
/// Error taxonomy of the core
pub mod error;
/// Blob creation and the berry-bush growth machine
pub mod lifecycle;
/// Run counters and structured logging
pub mod metrics;
/// Deterministic fractal noise
pub mod noise;
/// The one-object-per-tile placement grid
pub mod occupancy;
/// Read-only snapshots for rendering and the HUD
pub mod snapshot;
/// Per-tick systems: perception, action, biology, reproduction
pub mod systems;
/// Tile grid, classification and world generation
pub mod terrain;
/// The world aggregate and tick loop
pub mod world;

pub use config::SimConfig;
pub use error::{ConfigError, PlacementConflict};
pub use metrics::init_logging;
pub use snapshot::WorldSnapshot;
pub use world::{TickSummary, World};
