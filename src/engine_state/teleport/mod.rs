//! # Teleport Module
//!
//! Finds a position near a requested location where an entity can be placed without
//! landing inside solid blocks, lava or fire, or above a long drop.
//!
//! ## Search Order
//!
//! The search is bounded and deterministic. Starting from the block containing the
//! requested location it tries, first found wins:
//!
//! 1. The starting layer: the center block, then square rings of radius 1, 2, ...
//! 2. One layer up, then one layer down, each searched the same way
//! 3. Further layers up and down, alternating, until the height radius is exhausted
//!
//! ## Components
//!
//! * `safety` - Per-block and per-position safety checks
//! * `ring` - Clockwise square ring walk and disk scan
//! * `column` - Alternating layer walk
//! * `finder` - `SafeLocationFinder`, the entry point
//! * `world_view` - The `WorldView` trait the search reads blocks through
//! * `location` - World-bound fractional positions
//!
//! ## Cost
//!
//! At most `(2h + 1)(2r + 1)²` candidates are tested, each reading up to six blocks.

pub mod column;
pub mod finder;
pub mod location;
pub mod ring;
pub mod safety;
pub mod world_view;

pub use finder::SafeLocationFinder;
pub use location::Location;
pub use world_view::{CachedWorldView, WorldView};
