//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data.
//!
//! ## Memory Optimization
//!
//! Chunks use a memory-efficient storage strategy to handle the potentially large
//! number of blocks in a voxel world:
//! - `solid_array`: A bit vector (1 bit per block) indicating which blocks are not air
//! - `blocks`: A vector containing only non-air blocks, in the order they appear in the chunk
//!
//! Air blocks (which are common) only consume 1 bit each, and only non-air blocks are
//! stored in the `blocks` vector.
//!
//! ### Performance Characteristics
//! - **Occupancy Check**: O(1) - Just check the bit in `solid_array`
//! - **Block Lookup**: O(n) - Counts set bits up to the target position
//! - **Block Update**: O(n) - May insert into or remove from `blocks`

use bitvec::prelude::BitVec;
use cgmath::Point3;
use chunk_creation::ChunkCreationIterator;

use super::block::block_type::BlockType;
use super::block::Block;

mod chunk_creation;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Represents a 16x16x16 collection of voxel blocks in the world.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// A bit vector where each bit represents whether the corresponding block is occupied (1)
    /// or air (0).
    ///
    /// The bits are stored in row-major order (x, then y, then z).
    pub solid_array: BitVec,

    /// The block data for this chunk, containing only non-air blocks.
    ///
    /// The index of a block in this vector is equal to the number of set bits before its
    /// position in `solid_array`.
    pub blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: &Point3<i32>) -> Self {
        Self::filled(position, BlockType::AIR)
    }

    /// Creates a new chunk where every block has the same type.
    pub fn filled(position: &Point3<i32>, block_type: BlockType) -> Self {
        Self::from_fn(position, |_| block_type)
    }

    /// Creates a chunk by asking `block_at` for the type of every local position.
    pub fn from_fn<F>(position: &Point3<i32>, mut block_at: F) -> Self
    where
        F: FnMut(Point3<i32>) -> BlockType,
    {
        let mut cci = ChunkCreationIterator::new(*position);

        for k in 0..CHUNK_DIMENSION {
            for j in 0..CHUNK_DIMENSION {
                for i in 0..CHUNK_DIMENSION {
                    cci.push_block_type(block_at(Point3::new(i, j, k)));
                }
            }
        }

        cci.return_chunk()
    }

    /// Converts chunk-relative coordinates into an index into `solid_array`.
    ///
    /// # Panics
    /// Debug builds panic if the coordinates are outside the chunk.
    fn local_index(local: Point3<i32>) -> usize {
        debug_assert!(
            (0..CHUNK_DIMENSION).contains(&local.x)
                && (0..CHUNK_DIMENSION).contains(&local.y)
                && (0..CHUNK_DIMENSION).contains(&local.z),
            "local position {:?} is outside the chunk",
            local
        );
        (local.x + CHUNK_DIMENSION * local.y + CHUNK_PLANE_SIZE * local.z) as usize
    }

    /// Number of stored blocks before `index`, i.e. the slot of `index` in `blocks`.
    fn block_offset(&self, index: usize) -> usize {
        self.solid_array[..index].count_ones()
    }

    /// Checks if the block at the specified chunk-relative coordinates is not air.
    pub fn is_block_occupied(&self, local: Point3<i32>) -> bool {
        self.solid_array[Self::local_index(local)]
    }

    /// Gets the type of the block at the specified chunk-relative coordinates.
    pub fn get_block_type_at(&self, local: Point3<i32>) -> BlockType {
        let index = Self::local_index(local);
        if !self.solid_array[index] {
            return BlockType::AIR;
        }
        self.blocks[self.block_offset(index)].get_block_type()
    }

    /// Replaces the block at the specified chunk-relative coordinates.
    ///
    /// Keeps `solid_array` and `blocks` consistent: writing air removes the stored
    /// block, writing a block into an air slot inserts it at its ranked offset.
    pub fn set_block_type_at(&mut self, local: Point3<i32>, block_type: BlockType) {
        let index = Self::local_index(local);
        let offset = self.block_offset(index);
        let was_occupied = self.solid_array[index];

        match (was_occupied, block_type.is_air()) {
            (true, true) => {
                self.blocks.remove(offset);
                self.solid_array.set(index, false);
            }
            (true, false) => self.blocks[offset] = Block::new(block_type),
            (false, false) => {
                self.blocks.insert(offset, Block::new(block_type));
                self.solid_array.set(index, true);
            }
            (false, true) => {}
        }
    }

    /// Number of non-air blocks stored in this chunk.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
