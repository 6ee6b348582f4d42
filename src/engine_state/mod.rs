//! # Engine State Module
//!
//! Holds the world state and the systems that query it.
//!
//! ## Key Components
//!
//! * `voxels` - Blocks, chunks and the sparse chunk world
//! * `teleport` - The safe location search over any `WorldView`

pub mod teleport;
pub mod voxels;
