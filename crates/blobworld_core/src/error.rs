//! Error types for the simulation core.

use blobworld_data::Coord;
use thiserror::Error;

/// Fatal configuration problems, surfaced at initialization before any world
/// state is created.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Rejection of an object placement on an already-occupied tile.
///
/// During generation this is a normal skip, not a failure; the generator
/// consumes the result and moves on to the next tile.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tile {coord:?} is already occupied")]
pub struct PlacementConflict {
    pub coord: Coord,
}
