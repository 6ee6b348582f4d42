//! # Voxel World
//!
//! This module contains the voxel data the safe location search reads from.
//!
//! ## Architecture
//!
//! * **Block**: Defines individual voxel types and their classification
//! * **Chunk**: Manages fixed-size 3D arrays of blocks for efficient memory use
//! * **World**: Coordinates chunks and provides a unified interface for the entire voxel space
//!
//! ## Thread Safety
//!
//! Chunks are held in `MtResource` containers, so any number of searches can read a
//! world concurrently. Writes take the chunk's write lock.

pub mod block;
pub mod chunk;
pub mod world;
