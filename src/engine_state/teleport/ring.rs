//! # Ring Scan Module
//!
//! Horizontal search around a center block, one square ring at a time.
//!
//! ## Ring Order
//!
//! A ring of radius `r` is the perimeter of the `(2r + 1)` square around the center.
//! It is walked clockwise as seen from above (+x east, +z south): starting at the
//! middle of the east edge `(+r, 0)`, heading south to the corner `(+r, +r)`, then west,
//! north and east along the other edges, and back up the east edge to `(+r, -1)`.
//! Every perimeter offset is produced exactly once, `8r` offsets in total.

use cgmath::{Point3, Vector3};

use super::{safety::is_safe_location, world_view::WorldView};

/// Largest radius whose ring length still fits the walk counter.
pub const MAX_RING_RADIUS: u32 = (i32::MAX / 8) as u32;

/// Lazily yields the horizontal offsets on one square ring, in clockwise order.
///
/// Radius 0 yields only the zero offset.
#[derive(Clone, Debug)]
pub struct RingOffsets {
    radius: i32,
    step: i32,
    len: i32,
}

impl RingOffsets {
    /// Offsets of the ring at `radius`, clamped to `MAX_RING_RADIUS`.
    pub fn new(radius: u32) -> Self {
        let radius = radius.min(MAX_RING_RADIUS) as i32;
        RingOffsets {
            radius,
            step: 0,
            len: if radius == 0 { 1 } else { 8 * radius },
        }
    }

    /// Offset at position `step` along the walk.
    fn offset_at(radius: i32, step: i32) -> Vector3<i32> {
        let r = radius;
        let (dx, dz) = if step <= r {
            // east edge, heading south from the middle
            (r, step)
        } else if step <= 3 * r {
            // south edge, heading west
            (r - (step - r), r)
        } else if step <= 5 * r {
            // west edge, heading north
            (-r, r - (step - 3 * r))
        } else if step <= 7 * r {
            // north edge, heading east
            (-r + (step - 5 * r), -r)
        } else {
            // east edge, heading south back to the start
            (r, -r + (step - 7 * r))
        };
        Vector3::new(dx, 0, dz)
    }
}

impl Iterator for RingOffsets {
    type Item = Vector3<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.len {
            return None;
        }
        let offset = Self::offset_at(self.radius, self.step);
        self.step += 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingOffsets {}

/// `center` moved by a horizontal `offset`, or `None` when that leaves the `i32` grid.
pub fn offset_position(center: Point3<i32>, offset: Vector3<i32>) -> Option<Point3<i32>> {
    Some(Point3::new(
        center.x.checked_add(offset.x)?,
        center.y,
        center.z.checked_add(offset.z)?,
    ))
}

/// First safe position on the ring of `radius` around `center`, in ring order.
///
/// Offsets that would leave the `i32` grid are skipped.
pub fn scan_ring<W: WorldView + ?Sized>(
    world: &W,
    center: Point3<i32>,
    radius: u32,
) -> Option<Point3<i32>> {
    RingOffsets::new(radius)
        .filter_map(|offset| offset_position(center, offset))
        .find(|candidate| is_safe_location(world, *candidate))
}

/// First safe position within `max_radius` of `center`.
///
/// The center is tried first, then rings of radius 1 up to `max_radius`; the smallest
/// radius with a safe position wins.
pub fn scan_disk<W: WorldView + ?Sized>(
    world: &W,
    center: Point3<i32>,
    max_radius: u32,
) -> Option<Point3<i32>> {
    if is_safe_location(world, center) {
        return Some(center);
    }
    (1..=max_radius.min(MAX_RING_RADIUS)).find_map(|radius| scan_ring(world, center, radius))
}
