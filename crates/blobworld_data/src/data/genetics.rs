use serde::{Deserialize, Serialize};

/// Inherited numeric traits of a blob.
///
/// Each trait is bounded to a configured range; offspring traits are the
/// parents' average plus a bounded mutation, clamped back into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genetics {
    pub intelligence: f64,
    pub strength: f64,
    /// Base movement speed in tiles per time-unit.
    pub speed: f64,
    /// Base perception radius in tiles.
    pub sight: f64,
    /// Age at which the blob dies of old age.
    pub lifespan: f64,
}
