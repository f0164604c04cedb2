//! Route request and result types.

use serde::{Deserialize, Serialize};

use crate::core::RouteCoordinates;
use crate::query::CollisionStrategy;

/// Default waypoint cap per route.
pub const DEFAULT_MAX_WAYPOINTS: usize = 25;

/// One route-finding request.
///
/// `new` fills every optional field with its conventional default; the
/// `with_*` methods adjust them.
///
/// ```
/// use yatra_route::{CollisionStrategy, RouteRequest};
///
/// let request = RouteRequest::new(0, 3200, 3200, 3205, 3203)
///     .with_src_size(2)
///     .with_collision(CollisionStrategy::Outdoors);
/// assert_eq!(request.max_waypoints, 25);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Vertical plane shared by source and destination.
    pub level: u8,
    /// Source actor south-west corner.
    pub src_x: i32,
    pub src_z: i32,
    /// Destination south-west corner.
    pub dest_x: i32,
    pub dest_z: i32,
    /// Actor footprint edge in tiles (>= 1).
    pub src_size: i32,
    /// Target footprint, unrotated (>= 1 each).
    pub dest_width: i32,
    pub dest_length: i32,
    /// Target loc rotation, quarter turns.
    pub loc_angle: i32,
    /// Target loc shape class; -1 for a point destination.
    pub loc_shape: i32,
    /// Fall back to the closest approach point when the destination is
    /// unreachable.
    pub move_near: bool,
    /// Sides of the target that may not be approached.
    pub block_access_flags: u32,
    /// Waypoint cap for the reconstructed route (>= 1).
    pub max_waypoints: usize,
    /// Walking rule for every expansion in this request.
    pub collision: CollisionStrategy,
}

impl RouteRequest {
    /// A request with conventional defaults: 1x1 actor, 1x1 point
    /// destination, no rotation, move-near enabled, 25 waypoints, Normal
    /// collision.
    pub fn new(level: u8, src_x: i32, src_z: i32, dest_x: i32, dest_z: i32) -> Self {
        Self {
            level,
            src_x,
            src_z,
            dest_x,
            dest_z,
            src_size: 1,
            dest_width: 1,
            dest_length: 1,
            loc_angle: 0,
            loc_shape: -1,
            move_near: true,
            block_access_flags: 0,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
            collision: CollisionStrategy::Normal,
        }
    }

    /// Set the actor footprint edge.
    pub fn with_src_size(mut self, src_size: i32) -> Self {
        self.src_size = src_size;
        self
    }

    /// Set the unrotated target footprint.
    pub fn with_dest_size(mut self, width: i32, length: i32) -> Self {
        self.dest_width = width;
        self.dest_length = length;
        self
    }

    /// Set the target loc rotation and shape.
    pub fn with_loc(mut self, angle: i32, shape: i32) -> Self {
        self.loc_angle = angle;
        self.loc_shape = shape;
        self
    }

    /// Enable or disable the closest-approach fallback.
    pub fn with_move_near(mut self, move_near: bool) -> Self {
        self.move_near = move_near;
        self
    }

    /// Set the target's blocked-approach sides.
    pub fn with_block_access_flags(mut self, flags: u32) -> Self {
        self.block_access_flags = flags;
        self
    }

    /// Set the waypoint cap.
    pub fn with_max_waypoints(mut self, max_waypoints: usize) -> Self {
        self.max_waypoints = max_waypoints;
        self
    }

    /// Set the walking rule.
    pub fn with_collision(mut self, collision: CollisionStrategy) -> Self {
        self.collision = collision;
        self
    }
}

/// Result of a route-finding call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Straight-segment corners in travel order; the last one is the tile
    /// the actor stops on.
    pub waypoints: Vec<RouteCoordinates>,
    /// The route ends at the closest approach point instead of a tile that
    /// satisfied the reach predicate.
    pub alternative: bool,
    /// A route was produced. A source that already satisfies the reach
    /// predicate yields `success` with no waypoints, so emptiness alone
    /// does not imply failure.
    pub success: bool,
}

impl Route {
    /// The canonical failed route: no waypoints, both bits clear.
    pub const fn failed() -> Self {
        Self {
            waypoints: Vec::new(),
            alternative: false,
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults() {
        let request = RouteRequest::new(0, 10, 10, 20, 20);
        assert_eq!(request.src_size, 1);
        assert_eq!(request.dest_width, 1);
        assert_eq!(request.dest_length, 1);
        assert_eq!(request.loc_angle, 0);
        assert_eq!(request.loc_shape, -1);
        assert!(request.move_near);
        assert_eq!(request.block_access_flags, 0);
        assert_eq!(request.max_waypoints, DEFAULT_MAX_WAYPOINTS);
        assert_eq!(request.collision, CollisionStrategy::Normal);
    }

    #[test]
    fn failed_route_is_canonical() {
        let failed = Route::failed();
        assert!(failed.waypoints.is_empty());
        assert!(!failed.success);
        assert!(!failed.alternative);
    }
}
