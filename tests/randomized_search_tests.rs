/// Randomized checks of the search order against an exhaustive scan of the search box.
use cgmath::{Point3, Vector3};
use voxel_safe_location::engine_state::teleport::{ring::RingOffsets, safety::is_safe_location};
use voxel_safe_location::{BlockType, Location, SafeLocationFinder, SearchConfig, World};

const HEIGHT_LIMIT: i32 = 40;
const EXTENT: i32 = 7;

fn random_world(rng: &mut fastrand::Rng) -> World {
    let mut world = World::with_height_limit(HEIGHT_LIMIT);
    for z in -EXTENT..=EXTENT {
        for y in 0..HEIGHT_LIMIT {
            for x in -EXTENT..=EXTENT {
                let block_type = match rng.u32(0..100) {
                    0..=69 => BlockType::AIR,
                    70..=84 => BlockType::STONE,
                    85..=88 => BlockType::LAVA,
                    89..=90 => BlockType::FLOWING_LAVA,
                    91..=93 => BlockType::FIRE,
                    94..=96 => BlockType::WATER,
                    _ => BlockType::TALL_GRASS,
                };
                world.set_block_type_at(Point3::new(x, y, z), block_type);
            }
        }
    }
    world
}

/// Position of a layer offset in the up/down alternation.
fn layer_rank(dy: i32) -> i32 {
    match dy {
        0 => 0,
        dy if dy > 0 => 2 * dy - 1,
        dy => -2 * dy,
    }
}

fn ring_radius_of(offset: Vector3<i32>) -> i32 {
    offset.x.abs().max(offset.z.abs())
}

fn safe_candidates(world: &World, start: Point3<i32>, height: i32, radius: i32) -> Vec<Point3<i32>> {
    let mut candidates = Vec::new();
    for dy in -height..=height {
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let candidate = start + Vector3::new(dx, dy, dz);
                if is_safe_location(world, candidate) {
                    candidates.push(candidate);
                }
            }
        }
    }
    candidates
}

#[test]
fn search_matches_exhaustive_scan() {
    let mut found_count = 0;

    for seed in 0..150u64 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let world = random_world(&mut rng);
        let start_position = Point3::new(
            rng.i32(-4..=4) as f64 + rng.f64(),
            rng.i32(0..HEIGHT_LIMIT) as f64 + rng.f64(),
            rng.i32(-4..=4) as f64 + rng.f64(),
        );
        let height = rng.u32(0..=3);
        let radius = rng.u32(0..=4);
        let cache_capacity = if seed % 2 == 0 { 0 } else { 256 };

        let finder = SafeLocationFinder::with_config(SearchConfig {
            cache_capacity,
            ..SearchConfig::default()
        });
        let start = Location::new(&world, start_position);
        let start_block = start.block_position();
        let found = finder.find_safe_location_within(&start, height, radius);
        let candidates = safe_candidates(&world, start_block, height as i32, radius as i32);

        let Some(found) = found else {
            assert!(candidates.is_empty(), "seed {} missed {:?}", seed, candidates);
            continue;
        };
        found_count += 1;

        let position = found.position();
        assert_eq!(position.x - position.x.floor(), 0.5, "seed {}", seed);
        assert_eq!(position.z - position.z.floor(), 0.5, "seed {}", seed);
        assert_eq!(position.y.fract(), 0.0, "seed {}", seed);

        let block = found.block_position();
        assert!((0..HEIGHT_LIMIT).contains(&block.y), "seed {}", seed);
        assert!(is_safe_location(&world, block), "seed {}", seed);

        let offset = block - start_block;
        let rank = (layer_rank(offset.y), ring_radius_of(offset));
        for candidate in &candidates {
            let other = *candidate - start_block;
            assert!(
                (layer_rank(other.y), ring_radius_of(other)) >= rank,
                "seed {}: {:?} should have been found before {:?}",
                seed,
                candidate,
                block
            );
        }

        let layer_center = Point3::new(start_block.x, block.y, start_block.z);
        let first_on_ring = RingOffsets::new(rank.1 as u32)
            .map(|ring_offset| layer_center + ring_offset)
            .find(|candidate| is_safe_location(&world, *candidate));
        assert_eq!(first_on_ring, Some(block), "seed {}", seed);
    }

    assert!(found_count > 0);
}
