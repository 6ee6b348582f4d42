//! # World Module
//!
//! This module provides the `World` struct which manages a collection of chunks in the voxel world.
//! It serves as the block store the safe location search reads from.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been written
//! are kept in memory. Reading a block inside a chunk that was never written yields air.
//!
//! ## Vertical Bounds
//!
//! Every world has a height limit. Valid block rows are `0..height_limit`; reads
//! outside that range yield air and writes outside it are ignored.

use crate::core::MtResource;
use crate::engine_state::teleport::WorldView;
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::chunk::{Chunk, CHUNK_DIMENSION};
use cgmath::Point3;
use std::collections::HashMap;

/// Height limit used by `World::new`.
pub const DEFAULT_HEIGHT_LIMIT: i32 = 256;

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a 16x16x16
/// collection of blocks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_safe_location::{BlockType, World};
///
/// let mut world = World::new();
/// world.set_block_type_at(Point3::new(0, 63, 0), BlockType::STONE);
/// assert_eq!(world.get_block_type_at(Point3::new(0, 63, 0)), BlockType::STONE);
/// assert_eq!(world.get_block_type_at(Point3::new(0, 64, 0)), BlockType::AIR);
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    /// Chunks are stored in a thread-safe reference-counted wrapper to allow
    /// shared access between readers.
    pub chunks: HashMap<Point3<i32>, MtResource<Chunk>>,

    /// Exclusive upper bound of valid block rows.
    height_limit: i32,
}

impl World {
    /// Creates a new, empty world with the default height limit.
    pub fn new() -> Self {
        Self::with_height_limit(DEFAULT_HEIGHT_LIMIT)
    }

    /// Creates a new, empty world whose valid rows are `0..height_limit`.
    pub fn with_height_limit(height_limit: i32) -> Self {
        World {
            chunks: HashMap::new(),
            height_limit,
        }
    }

    /// Exclusive upper bound of valid block rows.
    pub fn height_limit(&self) -> i32 {
        self.height_limit
    }

    /// Adds an empty chunk at the specified chunk coordinates if one doesn't already exist.
    pub fn add_chunk_at(&mut self, position: Point3<i32>) {
        self.chunks
            .entry(position)
            .or_insert_with(|| MtResource::new(Chunk::empty(&position)));
    }

    /// Retrieves the chunk at the specified chunk coordinates.
    ///
    /// # Returns
    ///
    /// A clone of the `MtResource<Chunk>` if the chunk exists, or `None` if not.
    pub fn get_chunk_at(&self, pos: Point3<i32>) -> Option<MtResource<Chunk>> {
        self.chunks.get(&pos).cloned()
    }

    /// Splits a block position into its chunk coordinates and chunk-relative coordinates.
    pub fn to_chunk_local(position: Point3<i32>) -> (Point3<i32>, Point3<i32>) {
        let chunk = Point3::new(
            position.x.div_euclid(CHUNK_DIMENSION),
            position.y.div_euclid(CHUNK_DIMENSION),
            position.z.div_euclid(CHUNK_DIMENSION),
        );
        let local = Point3::new(
            position.x.rem_euclid(CHUNK_DIMENSION),
            position.y.rem_euclid(CHUNK_DIMENSION),
            position.z.rem_euclid(CHUNK_DIMENSION),
        );
        (chunk, local)
    }

    fn in_height_range(&self, y: i32) -> bool {
        (0..self.height_limit).contains(&y)
    }

    /// Reads the type of the block at a world position.
    ///
    /// Positions outside the height range or inside chunks that were never written read as air.
    pub fn get_block_type_at(&self, position: Point3<i32>) -> BlockType {
        if !self.in_height_range(position.y) {
            return BlockType::AIR;
        }
        let (chunk_position, local) = Self::to_chunk_local(position);
        match self.chunks.get(&chunk_position) {
            Some(chunk) => chunk.get().get_block_type_at(local),
            None => BlockType::AIR,
        }
    }

    /// Writes a block at a world position, creating its chunk on demand.
    ///
    /// Writes outside the height range are ignored, as are air writes into missing chunks.
    pub fn set_block_type_at(&mut self, position: Point3<i32>, block_type: BlockType) {
        if !self.in_height_range(position.y) {
            return;
        }
        let (chunk_position, local) = Self::to_chunk_local(position);
        if block_type.is_air() && !self.chunks.contains_key(&chunk_position) {
            return;
        }
        self.add_chunk_at(chunk_position);
        if let Some(chunk) = self.chunks.get(&chunk_position) {
            chunk.get_mut().set_block_type_at(local, block_type);
        }
    }

    /// Fills the box spanned by two inclusive corners, given in any order.
    pub fn fill(&mut self, from: Point3<i32>, to: Point3<i32>, block_type: BlockType) {
        let min_y = from.y.min(to.y).max(0);
        let max_y = from.y.max(to.y).min(self.height_limit - 1);
        for z in from.z.min(to.z)..=from.z.max(to.z) {
            for y in min_y..=max_y {
                for x in from.x.min(to.x)..=from.x.max(to.x) {
                    self.set_block_type_at(Point3::new(x, y, z), block_type);
                }
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldView for World {
    fn block_type_at(&self, position: Point3<i32>) -> BlockType {
        self.get_block_type_at(position)
    }

    fn height_limit(&self) -> i32 {
        self.height_limit
    }
}
