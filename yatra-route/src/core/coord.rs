//! Absolute tile coordinates.

use serde::{Deserialize, Serialize};

/// Largest valid tile coordinate on either axis.
pub const MAX_COORD: i32 = 0x7FFF;

/// Number of vertical planes in the world.
pub const LEVEL_COUNT: u8 = 4;

/// An absolute tile position on one of the world's vertical planes.
///
/// `x` and `z` are in `[0, MAX_COORD]`; `level` is in `[0, LEVEL_COUNT)`.
/// Routes never cross levels, so a single `level` describes a whole route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RouteCoordinates {
    /// X coordinate (west to east).
    pub x: i32,
    /// Z coordinate (south to north).
    pub z: i32,
    /// Vertical plane (0..=3).
    pub level: u8,
}

impl RouteCoordinates {
    /// Create a new coordinate.
    #[inline]
    pub fn new(x: i32, z: i32, level: u8) -> Self {
        Self { x, z, level }
    }

    /// Chebyshev distance to another coordinate, the step count of an
    /// unobstructed 8-direction walk.
    #[inline]
    pub fn chebyshev_distance(&self, other: &RouteCoordinates) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Whether both axes and the level are within world bounds.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..=MAX_COORD).contains(&self.x)
            && (0..=MAX_COORD).contains(&self.z)
            && self.level < LEVEL_COUNT
    }
}

/// Swap a loc footprint dimension under rotation.
///
/// Locs rotate in quarter turns; an odd angle exchanges width and length.
/// Call once with `(angle, width, length)` and once with
/// `(angle, length, width)` to obtain the rotated pair.
#[inline]
pub fn rotate(angle: i32, dimension: i32, other: i32) -> i32 {
    if angle & 0x1 == 1 {
        other
    } else {
        dimension
    }
}
