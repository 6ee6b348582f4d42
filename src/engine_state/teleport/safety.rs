//! # Safety Module
//!
//! Decides whether a block position can be occupied.
//!
//! A candidate is sampled once: the block the entity stands in, the block at head
//! height and the block under its feet. When the block under the feet is air, the
//! three blocks beneath that gap are sampled as well to catch long falls and lava.
//!
//! ## Drop Check Depth
//!
//! The drop check only looks three blocks down. A fall deeper than that which
//! ends on ground, or lava further down, is outside what the check can see.

use cgmath::Point3;
use log::trace;

use super::world_view::WorldView;
use crate::engine_state::voxels::block::block_type::BlockType;

/// Classifies a single block that has already been read.
///
/// Unsafe when the block is a solid cube, outside `0..height_limit`, lava or fire.
/// Flowing lava counts as lava here, which is stricter than checking still lava alone.
pub fn is_block_type_safe(block_type: BlockType, position: Point3<i32>, height_limit: i32) -> bool {
    if block_type.is_solid_cube() {
        return false;
    }
    if position.y < 0 {
        trace!("Location {:?} is below the world", position);
        return false;
    }
    if position.y >= height_limit {
        trace!("Location {:?} is above the world", position);
        return false;
    }
    if block_type.is_lava() {
        trace!("Lava detected at {:?}", position);
        return false;
    }
    if block_type.is_fire() {
        trace!("Fire detected at {:?}", position);
        return false;
    }
    true
}

/// `position` moved `dy` rows, pinned to the `i32` range.
fn shifted(position: Point3<i32>, dy: i32) -> Point3<i32> {
    Point3::new(position.x, position.y.saturating_add(dy), position.z)
}

/// Whether the single block at `position` is neither solid nor a hazard.
pub fn is_block_safe<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> bool {
    is_block_type_safe(world.block_type_at(position), position, world.height_limit())
}

/// The blocks a candidate position is judged by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    /// The candidate position.
    pub position: Point3<i32>,
    /// The block at the candidate position.
    pub center: BlockType,
    /// The block at head height.
    pub above: BlockType,
    /// The block under the feet.
    pub below: BlockType,
}

impl Neighborhood {
    /// Reads the center, above and below blocks of `position`, each once.
    pub fn sample<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> Self {
        Neighborhood {
            position,
            center: world.block_type_at(position),
            above: world.block_type_at(shifted(position, 1)),
            below: world.block_type_at(shifted(position, -1)),
        }
    }

    /// Whether all three sampled blocks pass `is_block_type_safe`.
    pub fn is_clear(&self, height_limit: i32) -> bool {
        is_block_type_safe(self.center, self.position, height_limit)
            && is_block_type_safe(self.above, shifted(self.position, 1), height_limit)
            && is_block_type_safe(self.below, shifted(self.position, -1), height_limit)
    }
}

/// The three blocks directly beneath a position, nearest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DropColumn {
    /// Blocks one, two and three below, in that order.
    pub blocks: [BlockType; 3],
}

impl DropColumn {
    /// Reads the blocks one, two and three below `position`.
    pub fn sample<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> Self {
        DropColumn {
            blocks: [1, 2, 3].map(|depth| world.block_type_at(shifted(position, -depth))),
        }
    }

    /// Unsafe when all three blocks are air, or when air opens onto lava within the column.
    pub fn is_safe(&self) -> bool {
        let [first, second, third] = self.blocks;

        if first.is_air() && second.is_air() && third.is_air() {
            trace!("Fall detected below, avoiding spawn");
            return false;
        }

        if first.is_air() && (second.is_lava() || (second.is_air() && third.is_lava())) {
            trace!("Lava detected below, avoiding spawn");
            return false;
        }

        true
    }
}

/// Whether falling from `position` is survivable within the drop check depth.
pub fn are_blocks_below_safe<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> bool {
    DropColumn::sample(world, position).is_safe()
}

/// Whether an entity can be placed at `position`.
///
/// The position, the block above and the block below must each be non-solid and
/// non-hazardous. When the block below is air, the drop beneath it decides.
pub fn is_safe_location<W: WorldView + ?Sized>(world: &W, position: Point3<i32>) -> bool {
    let neighborhood = Neighborhood::sample(world, position);
    if !neighborhood.is_clear(world.height_limit()) {
        return false;
    }

    if neighborhood.below.is_air() {
        let below = shifted(position, -1);
        trace!("Air detected below {:?}", position);
        return are_blocks_below_safe(world, below);
    }

    true
}
