//! # Scenarios
//!
//! A scenario describes a small world and a starting point in JSON, for running the
//! safe location search outside of a host.
//!
//! ```json
//! {
//!   "height_limit": 128,
//!   "fills": [
//!     { "from": [-8, 63, -8], "to": [8, 63, 8], "block": "minecraft:stone" }
//!   ],
//!   "start": [0.5, 70.0, 0.5],
//!   "search": { "height_radius": 3, "ring_radius": 9 }
//! }
//! ```
//!
//! Fills are applied in order, so later fills overwrite earlier ones.

use std::{fs, path::Path};

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SearchConfig};
use crate::engine_state::teleport::{Location, SafeLocationFinder};
use crate::engine_state::voxels::{
    block::block_type::BlockType,
    world::{World, DEFAULT_HEIGHT_LIMIT},
};

/// Largest number of blocks a single fill may cover.
pub const MAX_FILL_VOLUME: u64 = 1 << 24;

/// A box of blocks, corners inclusive and in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// One corner of the box.
    pub from: [i32; 3],
    /// The opposite corner of the box.
    pub to: [i32; 3],
    /// The block placed everywhere in the box.
    pub block: BlockType,
}

impl Fill {
    /// Number of blocks covered by this fill, or `None` when it does not fit a `u64`.
    pub fn volume(&self) -> Option<u64> {
        (0..3)
            .map(|axis| u64::from(self.from[axis].abs_diff(self.to[axis])) + 1)
            .try_fold(1u64, |volume, extent| volume.checked_mul(extent))
    }
}

fn default_height_limit() -> i32 {
    DEFAULT_HEIGHT_LIMIT
}

/// A world description plus a starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Exclusive upper bound of valid block rows.
    #[serde(default = "default_height_limit")]
    pub height_limit: i32,
    /// Boxes of blocks placed into an empty world, in order.
    #[serde(default)]
    pub fills: Vec<Fill>,
    /// Where the search starts.
    pub start: [f64; 3],
    /// Search parameters.
    #[serde(default)]
    pub search: SearchConfig,
}

impl Scenario {
    /// Parses and validates a scenario from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads, parses and validates a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.height_limit <= 0 {
            return Err(ConfigError::Invalid {
                reason: format!("height limit must be positive, got {}", self.height_limit),
            });
        }
        let oversized = |fill: &&Fill| fill.volume().filter(|volume| *volume <= MAX_FILL_VOLUME).is_none();
        if let Some(fill) = self.fills.iter().find(oversized) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "fill from {:?} to {:?} covers more than {} blocks",
                    fill.from, fill.to, MAX_FILL_VOLUME
                ),
            });
        }
        if self.start.iter().any(|coordinate| !coordinate.is_finite()) {
            return Err(ConfigError::Invalid {
                reason: format!("start {:?} is not a finite position", self.start),
            });
        }
        Ok(())
    }

    /// Builds the world described by the fills.
    pub fn build_world(&self) -> World {
        let mut world = World::with_height_limit(self.height_limit);
        for fill in &self.fills {
            world.fill(Point3::from(fill.from), Point3::from(fill.to), fill.block);
        }
        world
    }

    /// The starting position.
    pub fn start_position(&self) -> Point3<f64> {
        Point3::from(self.start)
    }

    /// Runs the search described by this scenario on `world`.
    pub fn find_safe_location(&self, world: &World) -> Option<Point3<f64>> {
        let finder = SafeLocationFinder::with_config(self.search.clone());
        let start = Location::new(world, self.start_position());
        finder.find_safe_location(&start).map(|found| found.position())
    }
}
