#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Safe Location
//!
//! Finds a safe place to put an entity in a block world: somewhere it will not be
//! inside solid blocks, standing in lava or fire, or above a long drop. Typical callers
//! are respawn and teleport flows that have a nominal target and need a nearby spot
//! that will not kill the player.
//!
//! ## Key Modules
//!
//! * `engine_state::teleport` - The search itself, generic over any `WorldView`
//! * `engine_state::voxels` - A sparse chunked `World` implementing `WorldView`
//! * `config` - Search parameters and their JSON form
//! * `scenario` - JSON world descriptions for running the search standalone
//! * `core` - Shared resource containers
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_safe_location::{BlockType, Location, SafeLocationFinder, World};
//!
//! let mut world = World::new();
//! world.fill(Point3::new(-4, 20, -4), Point3::new(4, 20, 4), BlockType::STONE);
//!
//! let start = Location::new(&world, Point3::new(1.2, 22.0, -0.4));
//! let safe = SafeLocationFinder::new().find_safe_location(&start);
//! assert_eq!(safe.map(|location| location.position()), Some(Point3::new(1.5, 22.0, -0.5)));
//! ```
//!
//! ## Hosts
//!
//! Hosts with their own block storage implement `WorldView` and never touch `World`.
//! The search only reads blocks, never writes, and never moves an entity.

use log::info;
use web_time::Instant;

pub mod config;
pub mod core;
pub mod engine_state;
pub mod scenario;

pub use config::{ConfigError, SearchConfig};
pub use engine_state::teleport::{CachedWorldView, Location, SafeLocationFinder, WorldView};
pub use engine_state::voxels::{block::block_type::BlockType, world::World};
pub use scenario::Scenario;

/// Runs the scenario file named on the command line and prints where the search landed.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let path = std::env::args().nth(1).ok_or_else(|| ConfigError::Invalid {
        reason: "usage: safe-location <scenario.json>".to_string(),
    })?;
    let scenario = Scenario::load(&path)?;
    let world = scenario.build_world();
    info!("Loaded scenario {} with {} chunks", path, world.chunks.len());

    let stopwatch = Instant::now();
    let found = scenario.find_safe_location(&world);
    info!("Search finished in {:?}", stopwatch.elapsed());

    match found {
        Some(position) => {
            let block = Location::new(&world, position).block_position();
            let neighborhood = SafeLocationFinder::describe(&world, block);
            println!(
                "safe location: ({}, {}, {}) [center: {}][up: {}][down: {}]",
                position.x,
                position.y,
                position.z,
                neighborhood.center,
                neighborhood.above,
                neighborhood.below
            );
        }
        None => println!("no safe location found"),
    }

    Ok(())
}
