//! Core data structures for the Blobworld simulation.
//!
//! This crate holds the plain, serde-derived types shared by the simulation
//! engine and any read-only consumer (renderer, HUD, exporters). It contains
//! no simulation logic; all behavior lives in `blobworld_core`.

pub mod data;

pub use data::blob::{Blob, BlobId, BlobState, Identity, Needs, Physics};
pub use data::genetics::Genetics;
pub use data::object::{FlowerKind, GrowthStage, ObjectKind, WorldObject};
pub use data::tile::{Coord, TileType};
