//! # Location Module
//!
//! A `Location` pairs a world reference with a fractional position. It is the shape
//! positions take at the boundary of the search; inside, the search works on integer
//! block positions.

use std::fmt;

use cgmath::Point3;

/// Offset from a block corner to the middle of its footprint.
pub const BLOCK_CENTER: f64 = 0.5;

/// A fractional position inside a specific world.
pub struct Location<'w, W: ?Sized> {
    world: &'w W,
    position: Point3<f64>,
}

impl<'w, W: ?Sized> Location<'w, W> {
    /// Creates a location at an arbitrary fractional position.
    pub fn new(world: &'w W, position: Point3<f64>) -> Self {
        Location { world, position }
    }

    /// Creates a location at the corner of a block.
    pub fn from_block(world: &'w W, block: Point3<i32>) -> Self {
        Self::new(
            world,
            Point3::new(f64::from(block.x), f64::from(block.y), f64::from(block.z)),
        )
    }

    /// Creates a location standing in the middle of a block's footprint.
    ///
    /// x and z are moved to the block center, y stays on the block floor.
    pub fn block_centered(world: &'w W, block: Point3<i32>) -> Self {
        Self::new(
            world,
            Point3::new(
                f64::from(block.x) + BLOCK_CENTER,
                f64::from(block.y),
                f64::from(block.z) + BLOCK_CENTER,
            ),
        )
    }

    /// The world this location belongs to.
    pub fn world(&self) -> &'w W {
        self.world
    }

    /// The fractional position.
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// The block containing this location, flooring every axis.
    pub fn block_position(&self) -> Point3<i32> {
        Point3::new(
            self.position.x.floor() as i32,
            self.position.y.floor() as i32,
            self.position.z.floor() as i32,
        )
    }
}

impl<W: ?Sized> Clone for Location<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: ?Sized> Copy for Location<'_, W> {}

impl<W: ?Sized> PartialEq for Location<'_, W> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.world, other.world) && self.position == other.position
    }
}

impl<W: ?Sized> fmt::Debug for Location<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
