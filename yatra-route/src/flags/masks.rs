//! Directional mask tables.
//!
//! The BFS expansions are written once, against a table of the twelve
//! directional masks; selecting the walk family or the stricter
//! route-blocker family is a table swap, not a second copy of the loops.

use super::collision::CollisionFlag;

/// The twelve directional step masks for one wall-flag family.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DirectionMasks {
    pub west: u32,
    pub east: u32,
    pub south: u32,
    pub north: u32,
    pub south_west: u32,
    pub south_east: u32,
    pub north_west: u32,
    pub north_east: u32,
    pub north_and_south_west: u32,
    pub north_and_south_east: u32,
    pub north_east_and_west: u32,
    pub south_east_and_west: u32,
}

/// Masks over the ordinary wall family.
pub(crate) const WALK_MASKS: DirectionMasks = DirectionMasks {
    west: CollisionFlag::BLOCK_WEST,
    east: CollisionFlag::BLOCK_EAST,
    south: CollisionFlag::BLOCK_SOUTH,
    north: CollisionFlag::BLOCK_NORTH,
    south_west: CollisionFlag::BLOCK_SOUTH_WEST,
    south_east: CollisionFlag::BLOCK_SOUTH_EAST,
    north_west: CollisionFlag::BLOCK_NORTH_WEST,
    north_east: CollisionFlag::BLOCK_NORTH_EAST,
    north_and_south_west: CollisionFlag::BLOCK_NORTH_AND_SOUTH_WEST,
    north_and_south_east: CollisionFlag::BLOCK_NORTH_AND_SOUTH_EAST,
    north_east_and_west: CollisionFlag::BLOCK_NORTH_EAST_AND_WEST,
    south_east_and_west: CollisionFlag::BLOCK_SOUTH_EAST_AND_WEST,
};

/// Masks over the route-blocker family.
pub(crate) const ROUTE_BLOCKER_MASKS: DirectionMasks = DirectionMasks {
    west: CollisionFlag::BLOCK_WEST_ROUTE_BLOCKER,
    east: CollisionFlag::BLOCK_EAST_ROUTE_BLOCKER,
    south: CollisionFlag::BLOCK_SOUTH_ROUTE_BLOCKER,
    north: CollisionFlag::BLOCK_NORTH_ROUTE_BLOCKER,
    south_west: CollisionFlag::BLOCK_SOUTH_WEST_ROUTE_BLOCKER,
    south_east: CollisionFlag::BLOCK_SOUTH_EAST_ROUTE_BLOCKER,
    north_west: CollisionFlag::BLOCK_NORTH_WEST_ROUTE_BLOCKER,
    north_east: CollisionFlag::BLOCK_NORTH_EAST_ROUTE_BLOCKER,
    north_and_south_west: CollisionFlag::BLOCK_NORTH_AND_SOUTH_WEST_ROUTE_BLOCKER,
    north_and_south_east: CollisionFlag::BLOCK_NORTH_AND_SOUTH_EAST_ROUTE_BLOCKER,
    north_east_and_west: CollisionFlag::BLOCK_NORTH_EAST_AND_WEST_ROUTE_BLOCKER,
    south_east_and_west: CollisionFlag::BLOCK_SOUTH_EAST_AND_WEST_ROUTE_BLOCKER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_share_geometry() {
        // Each route-blocker mask is its walk twin with the wall/loc bits
        // relocated; the BLOCK_WALK bits are common to both.
        let pairs = [
            (WALK_MASKS.west, ROUTE_BLOCKER_MASKS.west),
            (WALK_MASKS.north_east, ROUTE_BLOCKER_MASKS.north_east),
            (
                WALK_MASKS.south_east_and_west,
                ROUTE_BLOCKER_MASKS.south_east_and_west,
            ),
        ];
        for (walk, route) in pairs {
            assert_eq!(walk & CollisionFlag::BLOCK_WALK, CollisionFlag::BLOCK_WALK);
            assert_eq!(route & CollisionFlag::BLOCK_WALK, CollisionFlag::BLOCK_WALK);
            assert_eq!(
                (walk & CollisionFlag::SIGHT_SHIFT_SOURCE) << 22,
                (route & CollisionFlag::ROUTE_SHIFT_SOURCE),
            );
        }
    }
}
