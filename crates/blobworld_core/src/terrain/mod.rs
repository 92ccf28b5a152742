//! Tile grid and noise-to-biome classification.

pub mod generation;

use std::collections::HashMap;

use blobworld_data::{Coord, TileType};
use serde::{Deserialize, Serialize};

use crate::config::NoiseConfig;
use crate::noise::NoiseField;

/// Ascending noise thresholds partitioning [-1, 1] into the six tile types.
/// A sample below a threshold classifies as the paired type; at or above the
/// last threshold the tile is forest. Classification constants, not data.
pub const TILE_THRESHOLDS: [(f64, TileType); 5] = [
    (-0.80, TileType::DeepWater),
    (-0.44, TileType::Water),
    (-0.30, TileType::ShallowWater),
    (-0.16, TileType::Sand),
    (0.60, TileType::Grass),
];

/// Maps a noise value in [-1, 1] to a tile type.
pub fn classify(noise: f64) -> TileType {
    for (threshold, tile) in TILE_THRESHOLDS {
        if noise < threshold {
            return tile;
        }
    }
    TileType::Forest
}

/// Immutable terrain of the world. Tiles never change type after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: u16,
    height: u16,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Classifies every coordinate of a fresh grid from the noise field,
    /// row-major.
    pub fn generate(width: u16, height: u16, seed: u64, noise_config: &NoiseConfig) -> Self {
        let field = NoiseField::new(seed, noise_config);
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(classify(field.sample(x as f64, y as f64)));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Builds a grid filled with one type. Test and tooling hook.
    pub fn filled(width: u16, height: u16, tile: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    pub fn get(&self, coord: Coord) -> Option<TileType> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(self.tiles[coord.y as usize * self.width as usize + coord.x as usize])
    }

    /// Overwrites one tile. Test and tooling hook; the simulation itself
    /// never mutates terrain.
    pub fn set(&mut self, coord: Coord, tile: TileType) {
        if self.in_bounds(coord) {
            self.tiles[coord.y as usize * self.width as usize + coord.x as usize] = tile;
        }
    }

    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|t| t.is_walkable())
    }

    /// Whether any 4-directional neighbor of `coord` has the given type.
    /// Drinking spots are walkable tiles cardinally touching shallow water.
    pub fn has_cardinal_neighbor(&self, coord: Coord, tile: TileType) -> bool {
        const CARDINALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        CARDINALS.iter().any(|(dx, dy)| {
            self.get(Coord::new(coord.x + dx, coord.y + dy)) == Some(tile)
        })
    }

    /// Row-major iteration over all coordinates and their types.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileType)> + '_ {
        let width = self.width as i32;
        self.tiles.iter().enumerate().map(move |(i, t)| {
            (Coord::new(i as i32 % width, i as i32 / width), *t)
        })
    }

    /// Tile counts per type, for the HUD surface.
    pub fn counts_by_type(&self) -> HashMap<TileType, usize> {
        let mut counts = HashMap::new();
        for tile in &self.tiles {
            *counts.entry(*tile).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_covers_all_types_in_order() {
        assert_eq!(classify(-1.0), TileType::DeepWater);
        assert_eq!(classify(-0.5), TileType::Water);
        assert_eq!(classify(-0.35), TileType::ShallowWater);
        assert_eq!(classify(-0.2), TileType::Sand);
        assert_eq!(classify(0.0), TileType::Grass);
        assert_eq!(classify(0.7), TileType::Forest);
        assert_eq!(classify(1.0), TileType::Forest);
    }

    #[test]
    fn test_thresholds_are_ascending() {
        for pair in TILE_THRESHOLDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = NoiseConfig::default();
        let a = TileGrid::generate(40, 30, 42, &config);
        let b = TileGrid::generate(40, 30, 42, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_bounds_returns_none() {
        let grid = TileGrid::filled(10, 10, TileType::Grass);
        assert_eq!(grid.get(Coord::new(-1, 0)), None);
        assert_eq!(grid.get(Coord::new(10, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 10)), None);
        assert_eq!(grid.get(Coord::new(9, 9)), Some(TileType::Grass));
    }

    #[test]
    fn test_cardinal_water_adjacency() {
        let mut grid = TileGrid::filled(5, 5, TileType::Grass);
        grid.set(Coord::new(2, 1), TileType::ShallowWater);
        assert!(grid.has_cardinal_neighbor(Coord::new(2, 2), TileType::ShallowWater));
        assert!(grid.has_cardinal_neighbor(Coord::new(1, 1), TileType::ShallowWater));
        // Diagonal contact does not count.
        assert!(!grid.has_cardinal_neighbor(Coord::new(3, 2), TileType::ShallowWater));
        assert!(!grid.has_cardinal_neighbor(Coord::new(0, 4), TileType::ShallowWater));
    }

    #[test]
    fn test_counts_sum_to_area() {
        let grid = TileGrid::generate(25, 20, 7, &NoiseConfig::default());
        let total: usize = grid.counts_by_type().values().sum();
        assert_eq!(total, 25 * 20);
    }
}
