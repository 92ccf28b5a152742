//! Blobworld: a deterministic tile-world life simulation.
//!
//! This crate is the thin application layer over [`blobworld_core`]: the
//! [`app::App`] driver exposes the command surface an external front end
//! calls (`initialize`, `tick`, `shutdown`), and the binary wraps it in a
//! headless CLI run loop.

pub mod app;

pub use app::App;
pub use blobworld_core::{ConfigError, SimConfig, TickSummary, World, WorldSnapshot};
