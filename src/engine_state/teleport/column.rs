//! # Column Scan Module
//!
//! Vertical search: the starting layer first, then alternating one layer up and one
//! layer down, moving further out each time. Each layer is searched with a disk scan.

use cgmath::Point3;

use super::{ring::scan_disk, world_view::WorldView};

/// Lazily yields vertical layer offsets: `0, +1, -1, +2, -2, ..., +h, -h`.
#[derive(Clone, Debug)]
pub struct LayerOffsets {
    index: u64,
    len: u64,
}

impl LayerOffsets {
    /// Layer offsets up to `height_radius` in both directions.
    pub fn new(height_radius: u32) -> Self {
        LayerOffsets {
            index: 0,
            len: 2 * u64::from(height_radius) + 1,
        }
    }
}

impl Iterator for LayerOffsets {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let index = self.index as i64;
        self.index += 1;
        Some(if index % 2 == 1 { (index + 1) / 2 } else { -(index / 2) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LayerOffsets {}

/// First safe position in the box of `height_radius` layers and `ring_radius` rings
/// around `center`.
///
/// Layers that lie entirely outside `0..height_limit` hold no safe position and are
/// skipped without reading the world.
pub fn scan_column<W: WorldView + ?Sized>(
    world: &W,
    center: Point3<i32>,
    height_radius: u32,
    ring_radius: u32,
) -> Option<Point3<i32>> {
    let height_limit = i64::from(world.height_limit());

    LayerOffsets::new(height_radius)
        .map(|offset| i64::from(center.y) + offset)
        .filter(|y| (0..height_limit).contains(y))
        .find_map(|y| scan_disk(world, Point3::new(center.x, y as i32, center.z), ring_radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_alternate_up_then_down() {
        let layers: Vec<_> = LayerOffsets::new(3).collect();
        assert_eq!(layers, vec![0, 1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn zero_height_is_the_start_layer_only() {
        let layers: Vec<_> = LayerOffsets::new(0).collect();
        assert_eq!(layers, vec![0]);
    }

    #[test]
    fn size_hint_matches_layer_count() {
        assert_eq!(LayerOffsets::new(4).len(), 9);
    }
}
