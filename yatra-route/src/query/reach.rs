//! Target reachability predicates.
//!
//! The finder stops expanding as soon as the actor's footprint is "adjacent
//! enough" to the target to interact with it. What that means depends on
//! the target: a door is reached from the tile its hinge faces, a counter
//! from any un-walled edge the loc permits, a plain tile only by standing
//! on it. The finder itself is agnostic: it calls whatever [`ReachStrategy`]
//! the caller injects, once per dequeued cell, with absolute coordinates.

use crate::core::rotate;
use crate::flags::CollisionFlag;
use crate::grid::CollisionFlagMap;

use super::rectangle;

/// One candidate square, the target description, and the actor size.
///
/// `dest_width`/`dest_length` are the loc's unrotated dimensions; the
/// rotation is applied by the predicate where the shape calls for it.
#[derive(Clone, Copy, Debug)]
pub struct ReachQuery {
    pub level: u8,
    /// South-west corner of the actor footprint being tested.
    pub src_x: i32,
    pub src_z: i32,
    /// Actor footprint edge, in tiles.
    pub src_size: i32,
    /// South-west corner of the target.
    pub dest_x: i32,
    pub dest_z: i32,
    pub dest_width: i32,
    pub dest_length: i32,
    /// Loc rotation, quarter turns (0..=3).
    pub loc_angle: i32,
    /// Loc shape class, or -1 for a point target, -2 for an exclusive
    /// rectangle.
    pub loc_shape: i32,
    /// Sides of the target that may not be approached.
    pub block_access_flags: u32,
}

/// Reachability predicate injected into the route finder.
///
/// Implementations must be pure: no interior mutability observable across
/// calls, no suspension, no reads beyond the flag map handed in.
pub trait ReachStrategy {
    /// Whether an actor standing at the query's source square has reached
    /// the target.
    fn reached(&self, flags: &CollisionFlagMap, query: ReachQuery) -> bool;
}

/// The standard shape-aware reach rules.
///
/// Dispatches on the loc shape class:
/// - `-2`: exclusive rectangle (overlap disqualifies, otherwise rectangle
///   rules).
/// - `-1`: point target, reached only by standing on it.
/// - `0..=3`, `9`: wall pieces.
/// - `4..=8`: wall decorations.
/// - everything else: rectangle rules with rotated dimensions and access
///   flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultReachStrategy;

#[derive(PartialEq, Eq)]
enum ExitRoute {
    Wall,
    WallDeco,
    Rectangle,
    RectangleExclusive,
    None,
}

fn exit_route(loc_shape: i32) -> ExitRoute {
    match loc_shape {
        -2 => ExitRoute::RectangleExclusive,
        -1 => ExitRoute::None,
        0..=3 | 9 => ExitRoute::Wall,
        4..=8 => ExitRoute::WallDeco,
        _ => ExitRoute::Rectangle,
    }
}

/// Rotate the access bits with the loc. The bits run clockwise
/// N, E, S, W from bit 0, so a quarter turn is a 1-bit rotate.
fn rotate_access(angle: i32, flags: u32) -> u32 {
    if angle == 0 {
        flags
    } else {
        ((flags << angle) & 0xF) | (flags >> (4 - angle))
    }
}

impl ReachStrategy for DefaultReachStrategy {
    fn reached(&self, flags: &CollisionFlagMap, q: ReachQuery) -> bool {
        let exit = exit_route(q.loc_shape);
        if exit != ExitRoute::RectangleExclusive && q.src_x == q.dest_x && q.src_z == q.dest_z {
            return true;
        }
        match exit {
            ExitRoute::Wall => reach_wall(flags, q),
            ExitRoute::WallDeco => reach_wall_deco(flags, q),
            ExitRoute::Rectangle => reach_rectangle(flags, q, false),
            ExitRoute::RectangleExclusive => reach_rectangle(flags, q, true),
            ExitRoute::None => false,
        }
    }
}

// =========================================================================
// Rectangle shapes
// =========================================================================

fn reach_rectangle(flags: &CollisionFlagMap, q: ReachQuery, exclusive: bool) -> bool {
    let width = rotate(q.loc_angle, q.dest_width, q.dest_length);
    let length = rotate(q.loc_angle, q.dest_length, q.dest_width);
    let access = rotate_access(q.loc_angle, q.block_access_flags);

    let overlaps = rectangle::collides(
        q.src_x, q.src_z, q.dest_x, q.dest_z, q.src_size, q.src_size, width, length,
    );
    if exclusive && overlaps {
        return false;
    }
    if !exclusive && overlaps {
        return true;
    }
    if q.src_size > 1 {
        rectangle::reach_rectangle_n(
            flags, q.level, q.src_x, q.src_z, q.src_size, q.dest_x, q.dest_z, width, length,
            access,
        )
    } else {
        rectangle::reach_rectangle_1(
            flags, q.level, q.src_x, q.src_z, q.dest_x, q.dest_z, width, length, access,
        )
    }
}

// =========================================================================
// Wall shapes
// =========================================================================

fn reach_wall(flags: &CollisionFlagMap, q: ReachQuery) -> bool {
    if q.src_size > 1 {
        if footprint_covers(q) {
            return true;
        }
        reach_wall_n(flags, q, q.loc_shape, q.loc_angle)
    } else {
        reach_wall_1(flags, q, q.loc_shape, q.loc_angle)
    }
}

/// A large footprint standing over the wall tile has trivially reached it.
fn footprint_covers(q: ReachQuery) -> bool {
    q.dest_x >= q.src_x
        && q.dest_x <= q.src_x + q.src_size - 1
        && q.dest_z >= q.src_z
        && q.dest_z <= q.src_z + q.src_size - 1
}

fn wall_clear(flags: &CollisionFlagMap, level: u8, x: i32, z: i32, wall: u32) -> bool {
    flags.get(x, z, level) & wall == 0
}

fn reach_wall_1(flags: &CollisionFlagMap, q: ReachQuery, shape: i32, rot: i32) -> bool {
    let (x, z) = (q.src_x, q.src_z);
    let (dx, dz) = (q.dest_x, q.dest_z);
    let level = q.level;
    match shape {
        // Straight wall: rot 0 faces west, then clockwise. The faced tile
        // reaches unconditionally; the two flanking tiles reach around the
        // wall's end when no other wall separates them from the loc tile.
        0 => match rot {
            0 => {
                (x == dx - 1 && z == dz)
                    || (x == dx
                        && z == dz + 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_SOUTH))
                    || (x == dx
                        && z == dz - 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_NORTH))
            }
            1 => {
                (x == dx && z == dz + 1)
                    || (x == dx - 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_EAST))
                    || (x == dx + 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_WEST))
            }
            2 => {
                (x == dx + 1 && z == dz)
                    || (x == dx
                        && z == dz + 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_SOUTH))
                    || (x == dx
                        && z == dz - 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_NORTH))
            }
            3 => {
                (x == dx && z == dz - 1)
                    || (x == dx - 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_EAST))
                    || (x == dx + 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_WEST))
            }
            _ => false,
        },
        // Corner pillars: reached from the diagonal tile the corner points
        // at. rot 0 is the north-west corner, then clockwise.
        1 | 3 => match rot {
            0 => x == dx - 1 && z == dz + 1,
            1 => x == dx + 1 && z == dz + 1,
            2 => x == dx + 1 && z == dz - 1,
            3 => x == dx - 1 && z == dz - 1,
            _ => false,
        },
        // L-shaped wall on two faces: both faced tiles reach directly, the
        // two opposite tiles reach around an open boundary.
        2 => match rot {
            0 => {
                (x == dx - 1 && z == dz)
                    || (x == dx && z == dz + 1)
                    || (x == dx + 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_WEST))
                    || (x == dx
                        && z == dz - 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_NORTH))
            }
            1 => {
                (x == dx && z == dz + 1)
                    || (x == dx + 1 && z == dz)
                    || (x == dx - 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_EAST))
                    || (x == dx
                        && z == dz - 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_NORTH))
            }
            2 => {
                (x == dx + 1 && z == dz)
                    || (x == dx && z == dz - 1)
                    || (x == dx - 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_EAST))
                    || (x == dx
                        && z == dz + 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_SOUTH))
            }
            3 => {
                (x == dx && z == dz - 1)
                    || (x == dx - 1 && z == dz)
                    || (x == dx + 1
                        && z == dz
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_WEST))
                    || (x == dx
                        && z == dz + 1
                        && wall_clear(flags, level, x, z, CollisionFlag::WALL_SOUTH))
            }
            _ => false,
        },
        // Diagonal wall: any cardinal neighbour with an open boundary.
        9 => {
            (x == dx && z == dz + 1 && wall_clear(flags, level, x, z, CollisionFlag::WALL_SOUTH))
                || (x == dx
                    && z == dz - 1
                    && wall_clear(flags, level, x, z, CollisionFlag::WALL_NORTH))
                || (x == dx - 1
                    && z == dz
                    && wall_clear(flags, level, x, z, CollisionFlag::WALL_EAST))
                || (x == dx + 1
                    && z == dz
                    && wall_clear(flags, level, x, z, CollisionFlag::WALL_WEST))
        }
        _ => false,
    }
}

fn reach_wall_n(flags: &CollisionFlagMap, q: ReachQuery, shape: i32, rot: i32) -> bool {
    let (x, z, size) = (q.src_x, q.src_z, q.src_size);
    let (dx, dz) = (q.dest_x, q.dest_z);
    let level = q.level;
    let east = x + size - 1;
    let north = z + size - 1;
    let covers_x = (x..=east).contains(&dx);
    let covers_z = (z..=north).contains(&dz);
    match shape {
        0 => match rot {
            0 => {
                (x == dx - size && covers_z)
                    || (covers_x
                        && z == dz + 1
                        && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH))
                    || (covers_x
                        && z == dz - size
                        && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH))
            }
            1 => {
                (z == dz + 1 && covers_x)
                    || (covers_z
                        && x == dx - size
                        && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST))
                    || (covers_z
                        && x == dx + 1
                        && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST))
            }
            2 => {
                (x == dx + 1 && covers_z)
                    || (covers_x
                        && z == dz + 1
                        && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH))
                    || (covers_x
                        && z == dz - size
                        && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH))
            }
            3 => {
                (z == dz - size && covers_x)
                    || (covers_z
                        && x == dx - size
                        && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST))
                    || (covers_z
                        && x == dx + 1
                        && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST))
            }
            _ => false,
        },
        1 | 3 => match rot {
            0 => x == dx - size && z == dz + 1,
            1 => x == dx + 1 && z == dz + 1,
            2 => x == dx + 1 && z == dz - size,
            3 => x == dx - size && z == dz - size,
            _ => false,
        },
        2 => match rot {
            0 => {
                (x == dx - size && covers_z)
                    || (z == dz + 1 && covers_x)
                    || (covers_z
                        && x == dx + 1
                        && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST))
                    || (covers_x
                        && z == dz - size
                        && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH))
            }
            1 => {
                (z == dz + 1 && covers_x)
                    || (x == dx + 1 && covers_z)
                    || (covers_z
                        && x == dx - size
                        && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST))
                    || (covers_x
                        && z == dz - size
                        && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH))
            }
            2 => {
                (x == dx + 1 && covers_z)
                    || (z == dz - size && covers_x)
                    || (covers_z
                        && x == dx - size
                        && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST))
                    || (covers_x
                        && z == dz + 1
                        && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH))
            }
            3 => {
                (z == dz - size && covers_x)
                    || (x == dx - size && covers_z)
                    || (covers_z
                        && x == dx + 1
                        && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST))
                    || (covers_x
                        && z == dz + 1
                        && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH))
            }
            _ => false,
        },
        9 => {
            (covers_x && z == dz + 1 && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH))
                || (covers_x
                    && z == dz - size
                    && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH))
                || (covers_z
                    && x == dx - size
                    && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST))
                || (covers_z
                    && x == dx + 1
                    && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST))
        }
        _ => false,
    }
}

// =========================================================================
// Wall decoration shapes
// =========================================================================

fn reach_wall_deco(flags: &CollisionFlagMap, q: ReachQuery) -> bool {
    if q.src_size > 1 && footprint_covers(q) {
        return true;
    }
    match q.loc_shape {
        // Straight decorations sit on a wall face and follow the straight
        // wall rule for their rotation.
        4 | 5 => {
            if q.src_size > 1 {
                reach_wall_n(flags, q, 0, q.loc_angle)
            } else {
                reach_wall_1(flags, q, 0, q.loc_angle)
            }
        }
        // Diagonal-offset decorations face two cardinals; shape 7 hangs on
        // the opposite side of the diagonal, so its rotation flips.
        6 | 7 => {
            let rot = if q.loc_shape == 7 {
                (q.loc_angle + 2) & 0x3
            } else {
                q.loc_angle
            };
            reach_deco_diagonal(flags, q, rot)
        }
        // Both-sides decorations: any open cardinal, as a diagonal wall.
        8 => {
            if q.src_size > 1 {
                reach_wall_n(flags, q, 9, q.loc_angle)
            } else {
                reach_wall_1(flags, q, 9, q.loc_angle)
            }
        }
        _ => false,
    }
}

fn reach_deco_diagonal(flags: &CollisionFlagMap, q: ReachQuery, rot: i32) -> bool {
    let (x, z, size) = (q.src_x, q.src_z, q.src_size);
    let (dx, dz) = (q.dest_x, q.dest_z);
    let level = q.level;
    let east = x + size - 1;
    let north = z + size - 1;
    let covers_x = (x..=east).contains(&dx);
    let covers_z = (z..=north).contains(&dz);
    let from_east = covers_z
        && x == dx + 1
        && wall_clear(flags, level, x, dz, CollisionFlag::WALL_WEST);
    let from_west = covers_z
        && x == dx - size
        && wall_clear(flags, level, east, dz, CollisionFlag::WALL_EAST);
    let from_south = covers_x
        && z == dz - size
        && wall_clear(flags, level, dx, north, CollisionFlag::WALL_NORTH);
    let from_north = covers_x
        && z == dz + 1
        && wall_clear(flags, level, dx, z, CollisionFlag::WALL_SOUTH);
    match rot {
        0 => from_east || from_south,
        1 => from_west || from_south,
        2 => from_west || from_north,
        3 => from_east || from_north,
        _ => false,
    }
}
