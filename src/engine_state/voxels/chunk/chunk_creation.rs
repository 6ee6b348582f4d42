//! # Chunk Creation Module
//!
//! This module provides a builder for populating chunks while maintaining the
//! relationship between the occupancy bit vector and the sparse block storage.

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, Block};

use super::{Chunk, CHUNK_SIZE};

/// A builder for creating chunks with optimized memory usage.
///
/// Blocks are pushed in row-major order (x, then y, then z). The builder keeps
/// `solid_array` and `blocks` consistent as blocks are added.
pub struct ChunkCreationIterator {
    /// The chunk coordinates of the chunk being created
    position: Point3<i32>,
    /// Bit vector where each bit represents whether a block is occupied (1) or air (0)
    solid_array: BitVec,
    /// Vector containing only the non-air blocks, in the order they appear in the chunk
    blocks: Vec<Block>,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` for building a chunk at the given position.
    pub fn new(position: Point3<i32>) -> Self {
        ChunkCreationIterator {
            position,
            solid_array: BitVec::with_capacity(CHUNK_SIZE as usize),
            blocks: Vec::new(),
        }
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    pub fn return_chunk(self) -> Chunk {
        debug_assert_eq!(self.solid_array.len(), CHUNK_SIZE as usize);
        Chunk {
            position: self.position,
            solid_array: self.solid_array,
            blocks: self.blocks,
        }
    }

    /// Adds a block at the next position in the chunk.
    ///
    /// Only non-air blocks are stored in `blocks`; air only sets a zero bit.
    pub fn push_block_type(&mut self, block_type: BlockType) {
        let is_occupied = !block_type.is_air();
        self.solid_array.push(is_occupied);

        if is_occupied {
            self.blocks.push(Block::new(block_type));
        }
    }
}
