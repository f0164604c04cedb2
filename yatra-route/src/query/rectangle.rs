//! Axis-aligned rectangle adjacency tests used by the rectangle reach rules.

use crate::flags::{BlockAccessFlag, CollisionFlag};
use crate::grid::CollisionFlagMap;

/// Whether two footprint rectangles overlap.
#[allow(clippy::too_many_arguments)]
pub(crate) fn collides(
    src_x: i32,
    src_z: i32,
    dest_x: i32,
    dest_z: i32,
    src_width: i32,
    src_length: i32,
    dest_width: i32,
    dest_length: i32,
) -> bool {
    if src_x >= dest_x + dest_width || src_x + src_width <= dest_x {
        return false;
    }
    src_z < dest_z + dest_length && dest_z < src_z + src_length
}

/// Whether a 1x1 actor stands on an accessible, un-walled edge of the
/// target rectangle.
#[allow(clippy::too_many_arguments)]
pub(crate) fn reach_rectangle_1(
    flags: &CollisionFlagMap,
    level: u8,
    src_x: i32,
    src_z: i32,
    dest_x: i32,
    dest_z: i32,
    dest_width: i32,
    dest_length: i32,
    block_access_flags: u32,
) -> bool {
    let east = dest_x + dest_width - 1;
    let north = dest_z + dest_length - 1;
    let tile = flags.get(src_x, src_z, level);

    if (dest_x..=east).contains(&src_x) {
        if src_z == dest_z - 1
            && tile & CollisionFlag::WALL_NORTH == 0
            && block_access_flags & BlockAccessFlag::SOUTH == 0
        {
            return true;
        }
        if src_z == north + 1
            && tile & CollisionFlag::WALL_SOUTH == 0
            && block_access_flags & BlockAccessFlag::NORTH == 0
        {
            return true;
        }
    }
    if (dest_z..=north).contains(&src_z) {
        if src_x == dest_x - 1
            && tile & CollisionFlag::WALL_EAST == 0
            && block_access_flags & BlockAccessFlag::WEST == 0
        {
            return true;
        }
        if src_x == east + 1
            && tile & CollisionFlag::WALL_WEST == 0
            && block_access_flags & BlockAccessFlag::EAST == 0
        {
            return true;
        }
    }
    false
}

/// Whether an NxN actor touches an accessible side of the target rectangle
/// with at least one open wall boundary along the shared span.
#[allow(clippy::too_many_arguments)]
pub(crate) fn reach_rectangle_n(
    flags: &CollisionFlagMap,
    level: u8,
    src_x: i32,
    src_z: i32,
    src_size: i32,
    dest_x: i32,
    dest_z: i32,
    dest_width: i32,
    dest_length: i32,
    block_access_flags: u32,
) -> bool {
    let src_east = src_x + src_size;
    let src_north = src_z + src_size;
    let dest_east = dest_x + dest_width;
    let dest_north = dest_z + dest_length;

    // Touching the target's west side.
    if src_east == dest_x && block_access_flags & BlockAccessFlag::WEST == 0 {
        for z in src_z.max(dest_z)..src_north.min(dest_north) {
            if flags.get(src_east - 1, z, level) & CollisionFlag::WALL_EAST == 0 {
                return true;
            }
        }
    }
    // Touching the target's east side.
    if src_x == dest_east && block_access_flags & BlockAccessFlag::EAST == 0 {
        for z in src_z.max(dest_z)..src_north.min(dest_north) {
            if flags.get(src_x, z, level) & CollisionFlag::WALL_WEST == 0 {
                return true;
            }
        }
    }
    // Touching the target's south side.
    if src_north == dest_z && block_access_flags & BlockAccessFlag::SOUTH == 0 {
        for x in src_x.max(dest_x)..src_east.min(dest_east) {
            if flags.get(x, src_north - 1, level) & CollisionFlag::WALL_NORTH == 0 {
                return true;
            }
        }
    }
    // Touching the target's north side.
    if src_z == dest_north && block_access_flags & BlockAccessFlag::NORTH == 0 {
        for x in src_x.max(dest_x)..src_east.min(dest_east) {
            if flags.get(x, src_z, level) & CollisionFlag::WALL_SOUTH == 0 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_map(x0: i32, z0: i32, x1: i32, z1: i32) -> CollisionFlagMap {
        let mut map = CollisionFlagMap::new();
        for x in x0..=x1 {
            for z in z0..=z1 {
                map.set(x, z, 0, CollisionFlag::OPEN);
            }
        }
        map
    }

    #[test]
    fn overlap_detection() {
        assert!(collides(10, 10, 11, 11, 2, 2, 2, 2));
        assert!(!collides(10, 10, 12, 10, 2, 2, 1, 1));
        assert!(!collides(10, 10, 10, 12, 1, 2, 1, 1));
    }

    #[test]
    fn single_tile_sides_respect_walls_and_access() {
        let mut map = open_map(8, 8, 16, 16);
        // South approach blocked by the actor tile's north wall.
        map.add(12, 9, 0, CollisionFlag::WALL_NORTH);
        assert!(!reach_rectangle_1(&map, 0, 12, 9, 12, 10, 2, 2, 0));
        // One tile east along the same side is open.
        assert!(reach_rectangle_1(&map, 0, 13, 9, 12, 10, 2, 2, 0));
        // Access flag shuts the whole south side.
        assert!(!reach_rectangle_1(
            &map,
            0,
            13,
            9,
            12,
            10,
            2,
            2,
            BlockAccessFlag::SOUTH
        ));
        // West approach unaffected.
        assert!(reach_rectangle_1(
            &map,
            0,
            11,
            10,
            12,
            10,
            2,
            2,
            BlockAccessFlag::SOUTH
        ));
        // Diagonal corner tile does not reach.
        assert!(!reach_rectangle_1(&map, 0, 11, 9, 12, 10, 2, 2, 0));
    }

    #[test]
    fn large_actor_needs_one_open_boundary_tile() {
        let mut map = open_map(8, 8, 20, 20);
        // 2x2 actor west of a 3x2 target, wall along half the span.
        map.add(11, 10, 0, CollisionFlag::WALL_EAST);
        assert!(reach_rectangle_n(&map, 0, 10, 10, 2, 12, 10, 3, 2, 0));
        map.add(11, 11, 0, CollisionFlag::WALL_EAST);
        // Both overlapping rows walled: span z in [10, 11] has no opening.
        assert!(!reach_rectangle_n(&map, 0, 10, 10, 2, 12, 10, 3, 2, 0));
    }
}
