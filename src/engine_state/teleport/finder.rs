//! # Safe Location Finder
//!
//! The public entry point of the search. Given a location, it scans the surrounding
//! layers and rings for a position an entity can be placed at, and returns that
//! position centered on its block.
//!
//! The finder never moves anything. Callers apply the returned location themselves.

use std::num::NonZeroUsize;

use cgmath::Point3;
use log::{debug, info};

use super::{
    column::scan_column,
    location::Location,
    safety::Neighborhood,
    world_view::{CachedWorldView, WorldView},
};
use crate::config::SearchConfig;

/// Log target used when none is given.
pub const DEFAULT_LOG_TARGET: &str = "safe_location";

/// Finds safe positions near a location.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_safe_location::{BlockType, Location, SafeLocationFinder, World};
///
/// let mut world = World::new();
/// world.fill(Point3::new(-5, 60, -5), Point3::new(5, 60, 5), BlockType::STONE);
///
/// let finder = SafeLocationFinder::new();
/// let start = Location::new(&world, Point3::new(0.3, 62.0, 0.7));
/// let safe = finder.find_safe_location(&start).unwrap();
/// assert_eq!(safe.position(), Point3::new(0.5, 62.0, 0.5));
/// ```
#[derive(Debug, Clone)]
pub struct SafeLocationFinder {
    config: SearchConfig,
    log_target: String,
}

impl SafeLocationFinder {
    /// A finder using the default search radii.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// A finder using the radii and cache size from `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        SafeLocationFinder {
            config,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    /// Sends this finder's log records to `target` instead of `DEFAULT_LOG_TARGET`.
    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    /// The configuration this finder searches with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The log target this finder writes to.
    pub fn log_target(&self) -> &str {
        &self.log_target
    }

    /// Searches with the configured radii.
    pub fn find_safe_location<'w, W: WorldView + ?Sized>(
        &self,
        location: &Location<'w, W>,
    ) -> Option<Location<'w, W>> {
        self.find_safe_location_within(location, self.config.height_radius, self.config.ring_radius)
    }

    /// Searches `height_radius` layers above and below `location` and up to
    /// `ring_radius` rings around each layer.
    ///
    /// # Returns
    /// The first safe position found, centered on its block footprint, in the same world;
    /// `None` when the whole box holds no safe position.
    pub fn find_safe_location_within<'w, W: WorldView + ?Sized>(
        &self,
        location: &Location<'w, W>,
        height_radius: u32,
        ring_radius: u32,
    ) -> Option<Location<'w, W>> {
        let world = location.world();
        let start = location.block_position();
        debug!(target: self.log_target.as_str(), "Given location of {:?}", start);
        debug!(
            target: self.log_target.as_str(),
            "Checking +-{} layers with a radius of {}", height_radius, ring_radius
        );

        let found = match NonZeroUsize::new(self.config.cache_capacity) {
            Some(capacity) => {
                let cached = CachedWorldView::new(world, capacity);
                scan_column(&cached, start, height_radius, ring_radius)
            }
            None => scan_column(world, start, height_radius, ring_radius),
        };

        match found {
            Some(block) => {
                let neighborhood = Self::describe(world, block);
                info!(
                    target: self.log_target.as_str(),
                    "Found a safe location at {:?} [center: {}][up: {}][down: {}]",
                    block,
                    neighborhood.center,
                    neighborhood.above,
                    neighborhood.below
                );
                Some(Location::block_centered(world, block))
            }
            None => {
                info!(target: self.log_target.as_str(), "No safe location found near {:?}", start);
                None
            }
        }
    }

    /// The blocks at, above and below `position`.
    pub fn describe<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> Neighborhood {
        Neighborhood::sample(world, position)
    }
}

impl Default for SafeLocationFinder {
    fn default() -> Self {
        Self::new()
    }
}
