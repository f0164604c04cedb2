//! Walking-rule predicates.

use serde::{Deserialize, Serialize};

use crate::flags::CollisionFlag;

/// How a mover interprets tile flags.
///
/// A closed set of stateless rules; the finder dispatches with a `match` in
/// its inner loop, so adding a variant is a compile-time event, not a vtable
/// edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionStrategy {
    /// Blocked by any flag in the tested mask.
    #[default]
    Normal,
    /// Walks only on un-standable tiles; everything else blocks. Used for
    /// movers that phase through geometry, e.g. fish bound to water tiles.
    Blocked,
    /// As Normal, but additionally requires a roof overhead.
    Indoors,
    /// As Normal, but a roof overhead blocks.
    Outdoors,
    /// Tests the sight-blocker family instead of the wall family: the wall
    /// and loc bits of the mask are lifted 9 bits, the route-blocker bits
    /// lowered 13, and the tile must be clear of the result.
    LineOfSight,
}

impl CollisionStrategy {
    /// Whether a mover under this strategy may enter a tile with word
    /// `tile_flags` when testing the directional mask `block_flags`.
    #[inline]
    pub fn can_move(self, tile_flags: u32, block_flags: u32) -> bool {
        match self {
            CollisionStrategy::Normal => tile_flags & block_flags == 0,
            CollisionStrategy::Blocked => {
                tile_flags & (block_flags & !CollisionFlag::BLOCK_WALK) == 0
                    && tile_flags & CollisionFlag::BLOCK_WALK != 0
            }
            CollisionStrategy::Indoors => {
                tile_flags & block_flags == 0 && tile_flags & CollisionFlag::ROOF != 0
            }
            CollisionStrategy::Outdoors => {
                tile_flags & (block_flags | CollisionFlag::ROOF) == 0
            }
            CollisionStrategy::LineOfSight => {
                let sight_flags = ((block_flags & CollisionFlag::SIGHT_SHIFT_SOURCE) << 9)
                    | ((block_flags & CollisionFlag::ROUTE_SHIFT_SOURCE) >> 13);
                tile_flags & sight_flags == 0
            }
        }
    }
}
