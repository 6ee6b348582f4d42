/// Behavioral tests for the safe location search, driven through the public API.
use std::cell::RefCell;

use cgmath::Point3;
use voxel_safe_location::engine_state::teleport::{
    ring::scan_disk,
    safety::{is_safe_location, Neighborhood},
};
use voxel_safe_location::{BlockType, Location, SafeLocationFinder, SearchConfig, World, WorldView};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An air world with a stone floor covering the search box.
fn flat_floor_world(floor_y: i32) -> World {
    let mut world = World::with_height_limit(128);
    world.fill(Point3::new(-16, floor_y, -16), Point3::new(16, floor_y, 16), BlockType::STONE);
    world
}

/// Makes `(x, y, z)` standable in an otherwise empty world by placing ground two blocks below.
fn place_pad(world: &mut World, x: i32, y: i32, z: i32) {
    world.set_block_type_at(Point3::new(x, y - 2, z), BlockType::STONE);
}

fn find(world: &World, start: Point3<f64>) -> Option<Point3<f64>> {
    SafeLocationFinder::new()
        .find_safe_location(&Location::new(world, start))
        .map(|found| found.position())
}

#[test]
fn start_above_flat_floor_settles_on_lowest_layer_in_range() {
    init_logger();
    let world = flat_floor_world(63);

    // Layers 70, 71, 69, 72, 68, 73 all sit over more than three blocks of air.
    // Layer 67 is the first whose drop column reaches the floor.
    assert_eq!(find(&world, Point3::new(0.0, 70.0, 0.0)), Some(Point3::new(0.5, 67.0, 0.5)));
}

#[test]
fn standing_directly_on_a_solid_block_is_not_safe() {
    init_logger();
    let world = flat_floor_world(63);

    assert!(!is_safe_location(&world, Point3::new(0, 64, 0)));
    assert_eq!(find(&world, Point3::new(0.0, 64.0, 0.0)), Some(Point3::new(0.5, 65.0, 0.5)));
}

#[test]
fn safe_start_is_returned_centered() {
    init_logger();
    let world = flat_floor_world(63);

    assert_eq!(find(&world, Point3::new(-3.9, 65.2, 7.01)), Some(Point3::new(-3.5, 65.0, 7.5)));
}

#[test]
fn bottomless_pit_has_no_safe_location() {
    init_logger();
    let world = World::with_height_limit(256);

    assert_eq!(find(&world, Point3::new(0.0, 70.0, 0.0)), None);
    assert_eq!(find(&world, Point3::new(0.0, 2.0, 0.0)), None);
}

#[test]
fn both_entry_points_report_absence_the_same_way() {
    init_logger();
    let world = World::new();
    let start = Location::new(&world, Point3::new(0.0, 100.0, 0.0));
    let finder = SafeLocationFinder::new();

    assert!(finder.find_safe_location(&start).is_none());
    assert!(finder.find_safe_location_within(&start, 1, 1).is_none());
}

struct RecordingWorld<'a> {
    inner: &'a World,
    reads: RefCell<Vec<Point3<i32>>>,
}

impl WorldView for RecordingWorld<'_> {
    fn block_type_at(&self, position: Point3<i32>) -> BlockType {
        self.reads.borrow_mut().push(position);
        self.inner.block_type_at(position)
    }

    fn height_limit(&self) -> i32 {
        self.inner.height_limit()
    }
}

#[test]
fn safe_start_only_examines_its_own_column() {
    init_logger();
    let world = flat_floor_world(63);
    let recording = RecordingWorld {
        inner: &world,
        reads: RefCell::new(Vec::new()),
    };

    let start = Location::new(&recording, Point3::new(4.5, 66.0, -2.5));
    let found = SafeLocationFinder::new().find_safe_location(&start).unwrap();

    assert_eq!(found.position(), Point3::new(4.5, 66.0, -2.5));
    let reads = recording.reads.borrow();
    assert!(!reads.is_empty());
    assert!(reads.iter().all(|read| read.x == 4 && read.z == -3 && (62..=67).contains(&read.y)));
}

#[test]
fn smaller_ring_wins_over_larger_ring() {
    init_logger();
    let mut world = World::with_height_limit(64);
    place_pad(&mut world, 4, 10, 0);
    place_pad(&mut world, -2, 10, 1);

    assert_eq!(scan_disk(&world, Point3::new(0, 10, 0), 9), Some(Point3::new(-2, 10, 1)));
    assert_eq!(scan_disk(&world, Point3::new(0, 10, 0), 1), None);
}

#[test]
fn ring_walk_starts_on_the_east_edge_and_turns_clockwise() {
    init_logger();
    let mut world = World::with_height_limit(64);
    place_pad(&mut world, -1, 10, 1);
    place_pad(&mut world, 1, 10, 1);

    assert_eq!(scan_disk(&world, Point3::new(0, 10, 0), 1), Some(Point3::new(1, 10, 1)));
}

#[test]
fn upper_layer_wins_over_lower_layer() {
    init_logger();
    let mut world = World::with_height_limit(64);
    // Only (-5, 19, 0) is safe in this column: grass underfoot, fire above the layer over it.
    world.set_block_type_at(Point3::new(-5, 18, 0), BlockType::TALL_GRASS);
    world.set_block_type_at(Point3::new(-5, 21, 0), BlockType::FIRE);
    let start = Point3::new(0.0, 20.0, 0.0);

    assert_eq!(find(&world, start), Some(Point3::new(-4.5, 19.0, 0.5)));

    place_pad(&mut world, 3, 21, 0);
    assert_eq!(find(&world, start), Some(Point3::new(3.5, 21.0, 0.5)));
}

fn drop_world(column: [BlockType; 4]) -> World {
    let mut world = World::with_height_limit(64);
    for (depth, block_type) in column.iter().enumerate() {
        world.set_block_type_at(Point3::new(0, 8 - depth as i32, 0), *block_type);
    }
    world
}

#[test]
fn three_air_blocks_under_the_gap_is_a_fall() {
    use BlockType::*;
    let standing = Point3::new(0, 10, 0);

    assert!(!is_safe_location(&drop_world([AIR, AIR, AIR, AIR]), standing));
    for depth in 0..3 {
        for filler in [STONE, WATER, TALL_GRASS] {
            let mut column = [AIR; 4];
            column[depth] = filler;
            assert!(
                is_safe_location(&drop_world(column), standing),
                "{} at depth {}",
                filler,
                depth
            );
        }
    }
}

#[test]
fn lava_within_the_drop_window_is_avoided() {
    use BlockType::*;
    let standing = Point3::new(0, 10, 0);

    assert!(!is_safe_location(&drop_world([AIR, LAVA, STONE, STONE]), standing));
    assert!(!is_safe_location(&drop_world([AIR, FLOWING_LAVA, STONE, STONE]), standing));
    assert!(!is_safe_location(&drop_world([AIR, AIR, LAVA, STONE]), standing));
    assert!(is_safe_location(&drop_world([AIR, STONE, LAVA, STONE]), standing));
}

#[test]
fn lava_below_the_drop_window_goes_unseen() {
    use BlockType::*;
    let standing = Point3::new(0, 10, 0);

    let with_lava = is_safe_location(&drop_world([AIR, AIR, AIR, LAVA]), standing);
    let without_lava = is_safe_location(&drop_world([AIR, AIR, AIR, AIR]), standing);
    assert_eq!(with_lava, without_lava);
}

#[test]
fn rows_at_the_world_edges_are_never_returned() {
    init_logger();
    let mut world = World::with_height_limit(16);
    // (0, 15, 0) has ground below but its head would be above the world.
    place_pad(&mut world, 0, 15, 0);

    let finder = SafeLocationFinder::new();
    let near_top = Location::new(&world, Point3::new(0.0, 15.0, 0.0));
    let found = finder.find_safe_location_within(&near_top, 0, 3);
    assert_eq!(found, None);

    let below = Location::new(&world, Point3::new(0.0, -3.0, 0.0));
    assert_eq!(finder.find_safe_location_within(&below, 3, 3), None);
}

#[test]
fn zero_radii_only_try_the_start() {
    init_logger();
    let mut world = World::with_height_limit(64);
    place_pad(&mut world, 1, 10, 0);
    let start = Location::new(&world, Point3::new(0.0, 10.0, 0.0));
    let finder = SafeLocationFinder::new();

    assert_eq!(finder.find_safe_location_within(&start, 0, 0), None);
    assert_eq!(
        finder.find_safe_location_within(&start, 0, 1).map(|found| found.position()),
        Some(Point3::new(1.5, 10.0, 0.5))
    );
}

#[test]
fn found_location_keeps_the_world_reference() {
    init_logger();
    let world = flat_floor_world(63);
    let start = Location::new(&world, Point3::new(0.0, 65.0, 0.0));
    let found = SafeLocationFinder::new().find_safe_location(&start).unwrap();

    assert!(std::ptr::eq(found.world(), &world));
    let neighborhood: Neighborhood = SafeLocationFinder::describe(found.world(), found.block_position());
    assert_eq!(neighborhood.below, BlockType::AIR);
}

#[test]
fn configured_radii_drive_the_default_entry_point() {
    init_logger();
    let mut world = World::with_height_limit(64);
    place_pad(&mut world, 6, 10, 0);
    let start = Location::new(&world, Point3::new(0.0, 10.0, 0.0));

    let narrow = SafeLocationFinder::with_config(SearchConfig {
        ring_radius: 5,
        ..SearchConfig::default()
    });
    assert_eq!(narrow.find_safe_location(&start), None);
    assert!(SafeLocationFinder::new().find_safe_location(&start).is_some());
}

#[test]
fn starts_at_the_edge_of_the_block_grid_are_searched_without_overflow() {
    init_logger();
    let mut world = World::with_height_limit(64);
    let finder = SafeLocationFinder::new();

    let east_edge = Location::new(&world, Point3::new(i32::MAX as f64, 10.0, 0.0));
    assert_eq!(finder.find_safe_location(&east_edge), None);
    let north_west_corner = Location::new(&world, Point3::new(i32::MIN as f64, 10.0, i32::MIN as f64));
    assert_eq!(finder.find_safe_location(&north_west_corner), None);

    place_pad(&mut world, i32::MAX - 1, 10, 0);
    assert_eq!(
        find(&world, Point3::new(i32::MAX as f64, 10.0, 0.0)),
        Some(Point3::new(2147483646.5, 10.0, 0.5))
    );
}
