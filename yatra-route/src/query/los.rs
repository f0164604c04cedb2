//! Line-of-sight and line-of-walk ray casts.
//!
//! A ray is walked one tile at a time along its dominant axis, carrying the
//! minor-axis position in 16.16 fixed point seeded at the half-tile centre.
//! Sight consults the sight-blocker flag family and ignores what stands on
//! the destination tile; walk consults the wall family and must be able to
//! stand everywhere, destination included.

use crate::flags::CollisionFlag;
use crate::grid::CollisionFlagMap;

const SCALE_EXP: i32 = 16;
const HALF_TILE: i32 = 1 << (SCALE_EXP - 1);

#[inline]
fn scale_up(tiles: i32) -> i32 {
    tiles << SCALE_EXP
}

#[inline]
fn scale_down(fine: i32) -> i32 {
    fine >> SCALE_EXP
}

/// Per-family flag words consulted while the ray travels.
struct RayFlags {
    cross_east: u32,
    cross_west: u32,
    cross_north: u32,
    cross_south: u32,
    occupy: u32,
}

const SIGHT: RayFlags = RayFlags {
    cross_east: CollisionFlag::WALL_EAST_SIGHT_BLOCKER,
    cross_west: CollisionFlag::WALL_WEST_SIGHT_BLOCKER,
    cross_north: CollisionFlag::WALL_NORTH_SIGHT_BLOCKER,
    cross_south: CollisionFlag::WALL_SOUTH_SIGHT_BLOCKER,
    occupy: CollisionFlag::LOC_SIGHT_BLOCKER,
};

const WALK: RayFlags = RayFlags {
    cross_east: CollisionFlag::WALL_EAST,
    cross_west: CollisionFlag::WALL_WEST,
    cross_north: CollisionFlag::WALL_NORTH,
    cross_south: CollisionFlag::WALL_SOUTH,
    occupy: CollisionFlag::LOC | CollisionFlag::BLOCK_WALK,
};

/// Whether an unobstructed sight line runs between the two tiles.
pub fn line_of_sight(
    flags: &CollisionFlagMap,
    level: u8,
    src_x: i32,
    src_z: i32,
    dest_x: i32,
    dest_z: i32,
) -> bool {
    ray_cast(flags, level, src_x, src_z, dest_x, dest_z, true)
}

/// Whether a straight walk line runs between the two tiles.
pub fn line_of_walk(
    flags: &CollisionFlagMap,
    level: u8,
    src_x: i32,
    src_z: i32,
    dest_x: i32,
    dest_z: i32,
) -> bool {
    ray_cast(flags, level, src_x, src_z, dest_x, dest_z, false)
}

fn ray_cast(
    flags: &CollisionFlagMap,
    level: u8,
    src_x: i32,
    src_z: i32,
    dest_x: i32,
    dest_z: i32,
    los: bool,
) -> bool {
    if src_x == dest_x && src_z == dest_z {
        return true;
    }
    let family = if los { SIGHT } else { WALK };
    let dx = dest_x - src_x;
    let dz = dest_z - src_z;

    // Skip the occupancy test only for the destination tile of a sight
    // line; what stands there is what the caller is looking at.
    let passable = |x: i32, z: i32| -> bool {
        (los && x == dest_x && z == dest_z) || flags.get(x, z, level) & family.occupy == 0
    };

    if dx.abs() > dz.abs() {
        let x_inc = dx.signum();
        let cross = if x_inc > 0 {
            family.cross_east
        } else {
            family.cross_west
        };
        let tangent = scale_up(dz) / dx.abs();
        let mut fine_z = scale_up(src_z) + HALF_TILE;
        if dz < 0 {
            fine_z -= 1;
        }
        let mut x = src_x;
        let mut z = src_z;
        while x != dest_x {
            if flags.get(x, z, level) & cross != 0 {
                return false;
            }
            x += x_inc;
            fine_z += tangent;
            let next_z = scale_down(fine_z);
            if next_z != z {
                // The ray clips through (x, z) before settling on the new
                // row; both the pass-through tile and the row boundary must
                // be clear.
                if !passable(x, z) {
                    return false;
                }
                let vertical = if next_z > z {
                    family.cross_north
                } else {
                    family.cross_south
                };
                if flags.get(x, z, level) & vertical != 0 {
                    return false;
                }
                z = next_z;
            }
            if !passable(x, z) {
                return false;
            }
        }
    } else {
        let z_inc = dz.signum();
        let cross = if z_inc > 0 {
            family.cross_north
        } else {
            family.cross_south
        };
        let tangent = scale_up(dx) / dz.abs();
        let mut fine_x = scale_up(src_x) + HALF_TILE;
        if dx < 0 {
            fine_x -= 1;
        }
        let mut x = src_x;
        let mut z = src_z;
        while z != dest_z {
            if flags.get(x, z, level) & cross != 0 {
                return false;
            }
            z += z_inc;
            fine_x += tangent;
            let next_x = scale_down(fine_x);
            if next_x != x {
                if !passable(x, z) {
                    return false;
                }
                let horizontal = if next_x > x {
                    family.cross_east
                } else {
                    family.cross_west
                };
                if flags.get(x, z, level) & horizontal != 0 {
                    return false;
                }
                x = next_x;
            }
            if !passable(x, z) {
                return false;
            }
        }
    }
    true
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
    fn open_ground_has_sight_and_walk() {
        let map = open_map(10, 10, 30, 30);
        assert!(line_of_sight(&map, 0, 12, 12, 25, 17));
        assert!(line_of_walk(&map, 0, 12, 12, 25, 17));
        assert!(line_of_sight(&map, 0, 20, 20, 20, 20));
    }

    #[test]
    fn sight_blocker_wall_cuts_sight_but_not_walk_flags() {
        let mut map = open_map(10, 10, 30, 30);
        map.add(15, 12, 0, CollisionFlag::WALL_EAST_SIGHT_BLOCKER);
        assert!(!line_of_sight(&map, 0, 12, 12, 20, 12));
        assert!(line_of_walk(&map, 0, 12, 12, 20, 12));
    }

    #[test]
    fn plain_wall_cuts_walk_but_not_sight() {
        let mut map = open_map(10, 10, 30, 30);
        map.add(12, 15, 0, CollisionFlag::WALL_NORTH);
        assert!(!line_of_walk(&map, 0, 12, 12, 12, 20));
        assert!(line_of_sight(&map, 0, 12, 12, 12, 20));
    }

    #[test]
    fn sight_ignores_the_destination_tile_itself() {
        let mut map = open_map(10, 10, 30, 30);
        map.add(20, 12, 0, CollisionFlag::LOC_SIGHT_BLOCKER | CollisionFlag::LOC);
        // Looking at the loc works; looking through it does not.
        assert!(line_of_sight(&map, 0, 12, 12, 20, 12));
        assert!(!line_of_sight(&map, 0, 12, 12, 24, 12));
        // Walking onto it never works.
        assert!(!line_of_walk(&map, 0, 12, 12, 20, 12));
    }

    #[test]
    fn unloaded_ground_blocks_rays() {
        let map = CollisionFlagMap::new();
        assert!(!line_of_sight(&map, 0, 12, 12, 20, 12));
        assert!(!line_of_walk(&map, 0, 12, 12, 20, 12));
    }
}
