//! # World View
//!
//! The read-only seam between the safe location search and whatever owns the block data.
//! A host only has to answer "what is at this position" and "how tall is the world".

use std::{cell::RefCell, num::NonZeroUsize};

use cgmath::Point3;
use lru::LruCache;

use crate::engine_state::voxels::block::block_type::BlockType;

/// Read access to a block world.
///
/// Implementations may load missing regions on demand but must answer synchronously.
/// The search never writes through this trait.
pub trait WorldView {
    /// The type of the block at `position`.
    fn block_type_at(&self, position: Point3<i32>) -> BlockType;

    /// Exclusive upper bound of valid block rows. Valid rows are `0..height_limit()`.
    fn height_limit(&self) -> i32;
}

impl<T: WorldView + ?Sized> WorldView for &T {
    fn block_type_at(&self, position: Point3<i32>) -> BlockType {
        (**self).block_type_at(position)
    }

    fn height_limit(&self) -> i32 {
        (**self).height_limit()
    }
}

/// A `WorldView` that remembers recent block reads.
///
/// Neighboring candidates and neighboring layers share most of their sampled blocks,
/// so one search reads each voxel from the underlying world at most once while it stays
/// in the cache. The cache lives for a single search and is never shared.
pub struct CachedWorldView<'w, W: WorldView + ?Sized> {
    inner: &'w W,
    cache: RefCell<LruCache<Point3<i32>, BlockType>>,
}

impl<'w, W: WorldView + ?Sized> CachedWorldView<'w, W> {
    /// Wraps `inner`, remembering at most `capacity` blocks.
    pub fn new(inner: &'w W, capacity: NonZeroUsize) -> Self {
        CachedWorldView {
            inner,
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }

    /// Number of blocks currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<W: WorldView + ?Sized> WorldView for CachedWorldView<'_, W> {
    fn block_type_at(&self, position: Point3<i32>) -> BlockType {
        let mut cache = self.cache.borrow_mut();
        if let Some(block_type) = cache.get(&position) {
            return *block_type;
        }
        let block_type = self.inner.block_type_at(position);
        cache.put(position, block_type);
        block_type
    }

    fn height_limit(&self) -> i32 {
        self.inner.height_limit()
    }
}
