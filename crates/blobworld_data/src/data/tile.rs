use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Terrain classification of a single grid cell.
///
/// Assigned once at generation time; a tile never changes type afterwards.
/// The variants are listed in ascending height order, matching the noise
/// thresholds used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    DeepWater,
    Water,
    ShallowWater,
    Sand,
    Grass,
    Forest,
}

impl TileType {
    /// All tile types, in classification order. Used for per-type counts.
    pub const ALL: [TileType; 6] = [
        TileType::DeepWater,
        TileType::Water,
        TileType::ShallowWater,
        TileType::Sand,
        TileType::Grass,
        TileType::Forest,
    ];

    /// Whether blobs can stand on and cross this tile.
    pub fn is_walkable(self) -> bool {
        matches!(self, TileType::Sand | TileType::Grass | TileType::Forest)
    }

    pub fn is_water(self) -> bool {
        matches!(
            self,
            TileType::DeepWater | TileType::Water | TileType::ShallowWater
        )
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileType::DeepWater => "deep water",
            TileType::Water => "water",
            TileType::ShallowWater => "shallow water",
            TileType::Sand => "sand",
            TileType::Grass => "grass",
            TileType::Forest => "forest",
        };
        f.write_str(name)
    }
}

/// Integer grid coordinate.
///
/// Ordered row-major (y first, then x) so that sorted iteration and
/// tie-breaking follow the generator's scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of this tile in continuous world units.
    pub fn center(self) -> (f64, f64) {
        (self.x as f64 + 0.5, self.y as f64 + 0.5)
    }

    /// Euclidean distance from a continuous position to this tile's center.
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        let (cx, cy) = self.center();
        ((cx - x).powi(2) + (cy - y).powi(2)).sqrt()
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkability() {
        assert!(TileType::Grass.is_walkable());
        assert!(TileType::Sand.is_walkable());
        assert!(TileType::Forest.is_walkable());
        assert!(!TileType::ShallowWater.is_walkable());
        assert!(!TileType::DeepWater.is_walkable());
    }

    #[test]
    fn test_coord_order_is_row_major() {
        let mut coords = vec![Coord::new(3, 1), Coord::new(0, 2), Coord::new(1, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(1, 1), Coord::new(3, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_tile_center() {
        let (cx, cy) = Coord::new(4, 7).center();
        assert_eq!((cx, cy), (4.5, 7.5));
    }
}
