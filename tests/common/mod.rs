use blobworld_core::config::SimConfig;
use blobworld_core::terrain::TileGrid;
use blobworld_core::world::World;
use blobworld_data::{Coord, TileType, WorldObject};

/// A configuration with all spawn probabilities zeroed, so tests start from
/// an empty world and place exactly what they need.
pub fn sterile_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.spawning.trees_forest_prob = 0.0;
    config.spawning.rocks_grass_sand_prob = 0.0;
    config.spawning.rocks_forest_prob = 0.0;
    config.spawning.bushes_grass_prob = 0.0;
    config.spawning.bushes_forest_prob = 0.0;
    config.spawning.mushrooms_forest_prob = 0.0;
    config.spawning.sugar_cane_prob = 0.0;
    config.spawning.flowers_grass_prob = 0.0;
    config.spawning.blobs_grass_sand_prob = 0.0;
    config.spawning.blobs_forest_prob = 0.0;
    config
}

#[allow(dead_code)]
pub struct WorldBuilder {
    seed: u64,
    config: SimConfig,
    flat: Option<TileType>,
    tiles: Vec<(Coord, TileType)>,
    objects: Vec<(Coord, WorldObject)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            seed: 0,
            config: sterile_config(),
            flat: None,
            tiles: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Replaces the generated terrain with a uniform grid of one type.
    pub fn with_flat(mut self, tile: TileType) -> Self {
        self.flat = Some(tile);
        self
    }

    pub fn with_tile(mut self, x: i32, y: i32, tile: TileType) -> Self {
        self.tiles.push((Coord::new(x, y), tile));
        self
    }

    pub fn with_object(mut self, x: i32, y: i32, object: WorldObject) -> Self {
        self.objects.push((Coord::new(x, y), object));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.seed, self.config).expect("config is valid");
        if let Some(tile) = self.flat {
            world.tiles = TileGrid::filled(world.width, world.height, tile);
        }
        for (coord, tile) in self.tiles {
            world.tiles.set(coord, tile);
        }
        for (coord, object) in self.objects {
            world
                .occupancy
                .place(coord, object)
                .expect("test placement on a free tile");
        }
        world
    }
}
