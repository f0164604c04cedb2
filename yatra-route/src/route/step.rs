//! Single-step validation.
//!
//! Movement loops that advance an actor one tile per tick along an existing
//! route re-validate each step against the live map, since doors close and
//! other actors move between ticks. The tests here are tile-for-tile the
//! same as the finder's expansions, with an extra flag OR-ed into every
//! mask for dynamic blockers the flag map does not carry.

use crate::flags::masks::{DirectionMasks, ROUTE_BLOCKER_MASKS, WALK_MASKS};
use crate::grid::CollisionFlagMap;
use crate::query::CollisionStrategy;

/// Validates single steps under one wall-flag family.
pub struct StepValidator {
    masks: DirectionMasks,
}

impl Default for StepValidator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl StepValidator {
    /// Create a validator; `use_route_blocker_flags` selects the stricter
    /// mask family, matching the finder that produced the route.
    pub fn new(use_route_blocker_flags: bool) -> Self {
        let masks = if use_route_blocker_flags {
            ROUTE_BLOCKER_MASKS
        } else {
            WALK_MASKS
        };
        Self { masks }
    }

    /// Whether a size-`size` actor at `(x, z)` may step by `(dx, dz)`,
    /// each component in `{-1, 0, 1}` and not both zero.
    ///
    /// `extra_flag` is OR-ed into every tile mask; pass an occupied-by-actor
    /// bit to keep movers from walking through each other.
    #[allow(clippy::too_many_arguments)]
    pub fn can_travel(
        &self,
        flags: &CollisionFlagMap,
        level: u8,
        x: i32,
        z: i32,
        dx: i32,
        dz: i32,
        size: i32,
        extra_flag: u32,
        collision: CollisionStrategy,
    ) -> bool {
        let m = &self.masks;
        let can = |tx: i32, tz: i32, mask: u32| {
            collision.can_move(flags.get(tx, tz, level), mask | extra_flag)
        };
        match (dx, dz) {
            (-1, 0) => match size {
                1 => can(x - 1, z, m.west),
                2 => can(x - 1, z, m.south_west) && can(x - 1, z + 1, m.north_west),
                _ => {
                    can(x - 1, z, m.south_west)
                        && can(x - 1, z + size - 1, m.north_west)
                        && (1..size - 1).all(|k| can(x - 1, z + k, m.north_and_south_west))
                }
            },
            (1, 0) => match size {
                1 => can(x + 1, z, m.east),
                2 => can(x + 2, z, m.south_east) && can(x + 2, z + 1, m.north_east),
                _ => {
                    can(x + size, z, m.south_east)
                        && can(x + size, z + size - 1, m.north_east)
                        && (1..size - 1).all(|k| can(x + size, z + k, m.north_and_south_east))
                }
            },
            (0, -1) => match size {
                1 => can(x, z - 1, m.south),
                2 => can(x, z - 1, m.south_west) && can(x + 1, z - 1, m.south_east),
                _ => {
                    can(x, z - 1, m.south_west)
                        && can(x + size - 1, z - 1, m.south_east)
                        && (1..size - 1).all(|k| can(x + k, z - 1, m.south_east_and_west))
                }
            },
            (0, 1) => match size {
                1 => can(x, z + 1, m.north),
                2 => can(x, z + 2, m.north_west) && can(x + 1, z + 2, m.north_east),
                _ => {
                    can(x, z + size, m.north_west)
                        && can(x + size - 1, z + size, m.north_east)
                        && (1..size - 1).all(|k| can(x + k, z + size, m.north_east_and_west))
                }
            },
            (-1, -1) => match size {
                1 => {
                    can(x - 1, z - 1, m.south_west)
                        && can(x - 1, z, m.west)
                        && can(x, z - 1, m.south)
                }
                2 => {
                    can(x - 1, z, m.north_and_south_west)
                        && can(x - 1, z - 1, m.south_west)
                        && can(x, z - 1, m.south_east_and_west)
                }
                _ => {
                    can(x - 1, z - 1, m.south_west)
                        && can(x - 1, z + size - 2, m.north_and_south_west)
                        && can(x + size - 2, z - 1, m.south_east_and_west)
                        && (1..size - 1).all(|k| {
                            can(x - 1, z + k - 1, m.north_and_south_west)
                                && can(x + k - 1, z - 1, m.south_east_and_west)
                        })
                }
            },
            (1, -1) => match size {
                1 => {
                    can(x + 1, z - 1, m.south_east)
                        && can(x + 1, z, m.east)
                        && can(x, z - 1, m.south)
                }
                2 => {
                    can(x + 1, z - 1, m.south_east_and_west)
                        && can(x + 2, z - 1, m.south_east)
                        && can(x + 2, z, m.north_and_south_east)
                }
                _ => {
                    can(x + size, z - 1, m.south_east)
                        && can(x + size, z + size - 2, m.north_and_south_east)
                        && can(x + 1, z - 1, m.south_east_and_west)
                        && (1..size - 1).all(|k| {
                            can(x + size, z + k - 1, m.north_and_south_east)
                                && can(x + k + 1, z - 1, m.south_east_and_west)
                        })
                }
            },
            (-1, 1) => match size {
                1 => {
                    can(x - 1, z + 1, m.north_west)
                        && can(x - 1, z, m.west)
                        && can(x, z + 1, m.north)
                }
                2 => {
                    can(x - 1, z + 1, m.north_and_south_west)
                        && can(x - 1, z + 2, m.north_west)
                        && can(x, z + 2, m.north_east_and_west)
                }
                _ => {
                    can(x - 1, z + size, m.north_west)
                        && can(x - 1, z + 1, m.north_and_south_west)
                        && can(x + size - 2, z + size, m.north_east_and_west)
                        && (1..size - 1).all(|k| {
                            can(x - 1, z + k + 1, m.north_and_south_west)
                                && can(x + k - 1, z + size, m.north_east_and_west)
                        })
                }
            },
            (1, 1) => match size {
                1 => {
                    can(x + 1, z + 1, m.north_east)
                        && can(x + 1, z, m.east)
                        && can(x, z + 1, m.north)
                }
                2 => {
                    can(x + 1, z + 2, m.north_east_and_west)
                        && can(x + 2, z + 2, m.north_east)
                        && can(x + 2, z + 1, m.north_and_south_east)
                }
                _ => {
                    can(x + size, z + size, m.north_east)
                        && can(x + size, z + 1, m.north_and_south_east)
                        && can(x + 1, z + size, m.north_east_and_west)
                        && (1..size - 1).all(|k| {
                            can(x + size, z + k + 1, m.north_and_south_east)
                                && can(x + k + 1, z + size, m.north_east_and_west)
                        })
                }
            },
            _ => false,
        }
    }
}
