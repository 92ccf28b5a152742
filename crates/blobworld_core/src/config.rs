//! Configuration for the world generator and the simulation loop.
//!
//! Strongly-typed structures mapping to `config.toml`. Every tunable of the
//! simulation is reachable from [`SimConfig`]; defaults reproduce the stock
//! world. Validation happens once at initialization and is fatal before any
//! world state exists.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

macro_rules! ensure_cfg {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return Err(ConfigError::invalid(format!($($arg)*)));
        }
    };
}

/// World dimensions. `tile_size` is carried for rendering collaborators and
/// ignored by the core beyond validation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub tile_size: u16,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            tile_size: 32,
        }
    }
}

/// Fractal noise parameters for the height field.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NoiseConfig {
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 20.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Per-object spawn probabilities and adjacency radii, rolled once per tile
/// during generation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub trees_forest_prob: f64,
    pub rocks_grass_sand_prob: f64,
    pub rocks_forest_prob: f64,
    pub bushes_grass_prob: f64,
    pub bushes_forest_prob: f64,
    pub mushrooms_forest_prob: f64,
    pub sugar_cane_prob: f64,
    /// Chebyshev radius within which sugar cane requires a shallow-water tile.
    pub sugar_cane_water_radius: i32,
    pub flowers_grass_prob: f64,
    pub blobs_grass_sand_prob: f64,
    pub blobs_forest_prob: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            trees_forest_prob: 0.60,
            rocks_grass_sand_prob: 0.05,
            rocks_forest_prob: 0.10,
            bushes_grass_prob: 0.08,
            bushes_forest_prob: 0.08,
            mushrooms_forest_prob: 0.30,
            sugar_cane_prob: 0.20,
            sugar_cane_water_radius: 1,
            flowers_grass_prob: 0.10,
            blobs_grass_sand_prob: 0.01,
            blobs_forest_prob: 0.01,
        }
    }
}

/// Berry bush growth-stage durations, in time-units spent in each stage.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GrowthConfig {
    pub stage0_duration: f64,
    pub stage1_duration: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            stage0_duration: 5.0,
            stage1_duration: 5.0,
        }
    }
}

/// Inclusive bounds of one genetic trait.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Trait ranges for initial spawns plus per-trait mutation magnitudes
/// (uniform perturbation in `[-m, m]` applied to the parental average).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GeneticsConfig {
    pub intelligence: TraitRange,
    pub strength: TraitRange,
    pub speed: TraitRange,
    pub sight: TraitRange,
    pub lifespan: TraitRange,
    pub mutation_intelligence: f64,
    pub mutation_strength: f64,
    pub mutation_speed: f64,
    pub mutation_sight: f64,
    pub mutation_lifespan: f64,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        Self {
            intelligence: TraitRange { min: 1.0, max: 100.0 },
            strength: TraitRange { min: 1.0, max: 100.0 },
            speed: TraitRange { min: 0.5, max: 3.0 },
            sight: TraitRange { min: 4.0, max: 10.0 },
            lifespan: TraitRange { min: 180.0, max: 260.0 },
            mutation_intelligence: 3.0,
            mutation_strength: 3.0,
            mutation_speed: 0.15,
            mutation_sight: 0.3,
            mutation_lifespan: 10.0,
        }
    }
}

/// Need accumulation rates, seek thresholds, starvation bounds and old-age
/// penalty tiers.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NeedsConfig {
    /// Hunger gained per time-unit.
    pub hunger_rate: f64,
    /// Thirst gained per time-unit.
    pub thirst_rate: f64,
    /// Hunger level at which a blob starts looking for food.
    pub hunger_seek_threshold: f64,
    /// Thirst level at which a blob starts looking for water.
    pub thirst_seek_threshold: f64,
    /// Hunger level above which hp drains.
    pub hunger_starvation: f64,
    /// Thirst level above which hp drains.
    pub thirst_starvation: f64,
    /// Hp lost per time-unit per starving need.
    pub starvation_hp_drain: f64,
    /// Needs below this level each regenerate hp.
    pub regen_threshold: f64,
    /// Hp regained per time-unit per satisfied need.
    pub regen_hp_rate: f64,
    /// Age at which the first stat-penalty tier begins.
    pub old_age_tier1: f64,
    /// Age at which the second, harsher tier begins.
    pub old_age_tier2: f64,
    /// Extra hp drain per time-unit in the second tier.
    pub old_age_hp_drain: f64,
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self {
            hunger_rate: 2.0,
            thirst_rate: 4.0,
            hunger_seek_threshold: 40.0,
            thirst_seek_threshold: 40.0,
            hunger_starvation: 80.0,
            thirst_starvation: 85.0,
            starvation_hp_drain: 2.0,
            regen_threshold: 20.0,
            regen_hp_rate: 1.0,
            old_age_tier1: 100.0,
            old_age_tier2: 200.0,
            old_age_hp_drain: 0.2,
        }
    }
}

/// Harvest/drink interaction tuning.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InteractionConfig {
    /// Time a committed interaction takes before its effect lands.
    pub duration: f64,
    /// Distance to the target tile center that counts as arrival.
    pub arrival_radius: f64,
    pub drink_thirst_relief: f64,
    pub drink_hp_gain: f64,
    pub harvest_hunger_relief: f64,
    pub harvest_hp_gain: f64,
    /// When true, a need at its starvation level cancels an in-progress
    /// interaction serving the other need. Default: committed timers always
    /// run to completion.
    pub interruptible: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            arrival_radius: 0.4,
            drink_thirst_relief: 70.0,
            drink_hp_gain: 10.0,
            harvest_hunger_relief: 60.0,
            harvest_hp_gain: 20.0,
            interruptible: false,
        }
    }
}

/// Mate eligibility gates and cooldowns.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReproductionConfig {
    /// Minimum age to mate.
    pub adult_age: f64,
    /// Both partners must be below these need levels.
    pub max_hunger: f64,
    pub max_thirst: f64,
    /// Both partners must be at or above this hp.
    pub min_hp: f64,
    /// Maximum Euclidean distance between partners, in tiles.
    pub mating_radius: f64,
    pub parent_cooldown: f64,
    pub child_cooldown: f64,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            adult_age: 20.0,
            max_hunger: 50.0,
            max_thirst: 50.0,
            min_hp: 70.0,
            mating_radius: 2.0,
            parent_cooldown: 45.0,
            child_cooldown: 60.0,
        }
    }
}

/// Top-level simulation configuration.
///
/// Sections missing from a TOML document fall back to their defaults, so a
/// config file only needs to name what it overrides.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub noise: NoiseConfig,
    pub spawning: SpawnConfig,
    pub growth: GrowthConfig,
    pub genetics: GeneticsConfig,
    pub needs: NeedsConfig,
    pub interaction: InteractionConfig,
    pub reproduction: ReproductionConfig,
}

impl SimConfig {
    /// Validates all parameters. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_cfg!(self.world.width > 0, "world width must be positive");
        ensure_cfg!(self.world.height > 0, "world height must be positive");
        ensure_cfg!(self.world.width <= 1000, "world width too large (max 1000)");
        ensure_cfg!(
            self.world.height <= 1000,
            "world height too large (max 1000)"
        );
        ensure_cfg!(self.world.tile_size > 0, "tile size must be positive");

        ensure_cfg!(self.noise.scale > 0.0, "noise scale must be positive");
        ensure_cfg!(self.noise.octaves > 0, "noise octaves must be positive");
        ensure_cfg!(
            self.noise.octaves <= 16,
            "noise octaves too large (max 16)"
        );
        ensure_cfg!(
            self.noise.persistence > 0.0,
            "noise persistence must be positive"
        );
        ensure_cfg!(
            self.noise.lacunarity >= 1.0,
            "noise lacunarity must be at least 1.0"
        );

        let probs = [
            ("trees_forest_prob", self.spawning.trees_forest_prob),
            ("rocks_grass_sand_prob", self.spawning.rocks_grass_sand_prob),
            ("rocks_forest_prob", self.spawning.rocks_forest_prob),
            ("bushes_grass_prob", self.spawning.bushes_grass_prob),
            ("bushes_forest_prob", self.spawning.bushes_forest_prob),
            ("mushrooms_forest_prob", self.spawning.mushrooms_forest_prob),
            ("sugar_cane_prob", self.spawning.sugar_cane_prob),
            ("flowers_grass_prob", self.spawning.flowers_grass_prob),
            ("blobs_grass_sand_prob", self.spawning.blobs_grass_sand_prob),
            ("blobs_forest_prob", self.spawning.blobs_forest_prob),
        ];
        for (name, p) in probs {
            ensure_cfg!((0.0..=1.0).contains(&p), "{name} must be in [0.0, 1.0]");
        }
        ensure_cfg!(
            self.spawning.sugar_cane_water_radius >= 1,
            "sugar cane water radius must be at least 1"
        );

        ensure_cfg!(
            self.growth.stage0_duration > 0.0,
            "stage 0 duration must be positive"
        );
        ensure_cfg!(
            self.growth.stage1_duration > 0.0,
            "stage 1 duration must be positive"
        );

        let ranges = [
            ("intelligence", self.genetics.intelligence),
            ("strength", self.genetics.strength),
            ("speed", self.genetics.speed),
            ("sight", self.genetics.sight),
            ("lifespan", self.genetics.lifespan),
        ];
        for (name, range) in ranges {
            ensure_cfg!(
                range.min <= range.max,
                "genetics {name} range is inverted ({} > {})",
                range.min,
                range.max
            );
            ensure_cfg!(
                range.min > 0.0,
                "genetics {name} minimum must be positive"
            );
        }
        let mutations = [
            ("intelligence", self.genetics.mutation_intelligence),
            ("strength", self.genetics.mutation_strength),
            ("speed", self.genetics.mutation_speed),
            ("sight", self.genetics.mutation_sight),
            ("lifespan", self.genetics.mutation_lifespan),
        ];
        for (name, m) in mutations {
            ensure_cfg!(m >= 0.0, "mutation magnitude for {name} must be non-negative");
        }

        ensure_cfg!(self.needs.hunger_rate >= 0.0, "hunger rate must be non-negative");
        ensure_cfg!(self.needs.thirst_rate >= 0.0, "thirst rate must be non-negative");
        ensure_cfg!(
            self.needs.old_age_tier1 < self.needs.old_age_tier2,
            "old age tiers must be ascending"
        );

        ensure_cfg!(
            self.interaction.duration > 0.0,
            "interaction duration must be positive"
        );
        ensure_cfg!(
            self.interaction.arrival_radius > 0.0,
            "arrival radius must be positive"
        );

        ensure_cfg!(self.reproduction.adult_age >= 0.0, "adult age must be non-negative");
        ensure_cfg!(
            self.reproduction.mating_radius > 0.0,
            "mating radius must be positive"
        );
        ensure_cfg!(
            self.reproduction.parent_cooldown >= 0.0,
            "parent cooldown must be non-negative"
        );
        ensure_cfg!(
            self.reproduction.child_cooldown >= 0.0,
            "child cooldown must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates a TOML configuration document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the semantically relevant sections, logged at
    /// initialization so a run can be matched to the exact tuning that
    /// produced it.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.noise).as_bytes());
        hasher.update(format!("{:?}", self.spawning).as_bytes());
        hasher.update(format!("{:?}", self.growth).as_bytes());
        hasher.update(format!("{:?}", self.genetics).as_bytes());
        hasher.update(format!("{:?}", self.needs).as_bytes());
        hasher.update(format!("{:?}", self.interaction).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hex::encode(hasher.finalize())
    }
}
