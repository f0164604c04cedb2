//! Breadth-first route finding over the collision flag map.
//!
//! The search runs in a fixed window centred on the source, in window-local
//! coordinates. Visited cells are never revisited: a cell is enqueued
//! exactly once, when its arrival direction is recorded, and the frontier
//! lives in a power-of-two ring buffer so queue indices wrap with a mask.
//! The actor's footprint parameterises the neighbour tests; the wall-flag
//! family (ordinary or route-blocker) is a table chosen at construction.
//!
//! Every expansion is written against the fixed direction order: east to
//! west, west to east, north to south, south to north, then the four
//! diagonals north-east, north-west, south-east, south-west named by their
//! origin side. BFS correctness does not depend on the order, but the
//! tie-breaking of reconstructed paths does, and that tie-breaking is part
//! of the public contract.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::config::RouteFinderConfig;
use crate::core::{rotate, DirectionFlag, RouteCoordinates, LEVEL_COUNT, MAX_COORD};
use crate::error::Result;
use crate::flags::masks::{DirectionMasks, ROUTE_BLOCKER_MASKS, WALK_MASKS};
use crate::grid::CollisionFlagMap;
use crate::query::{CollisionStrategy, ReachQuery, ReachStrategy};

use super::types::{Route, RouteRequest};

/// Distance grid sentinel for unvisited cells.
const UNVISITED_DISTANCE: i32 = 99_999_999;
/// Closest-approach scan radius around the target footprint.
const APPROACH_RADIUS: i32 = 10;
/// Cells at or beyond this BFS depth are never approach candidates.
const APPROACH_DISTANCE_CUTOFF: i32 = 100;
/// Initial approach cost bound; a candidate must beat it.
const APPROACH_COST_CEILING: i32 = 1000;

/// Borrowed per-call inputs shared by the expansion loops.
struct ExpansionContext<'a> {
    flags: &'a CollisionFlagMap,
    collision: CollisionStrategy,
    level: u8,
    base_x: i32,
    base_z: i32,
}

impl ExpansionContext<'_> {
    /// Whether the strategy admits entering window-local tile `(x, z)`
    /// under `mask`.
    #[inline]
    fn can_enter(&self, x: i32, z: i32, mask: u32) -> bool {
        self.collision
            .can_move(self.flags.get(self.base_x + x, self.base_z + z, self.level), mask)
    }
}

/// A reusable breadth-first route finder.
///
/// One instance serves one thread: all search state is instance-local and a
/// call runs to completion without suspension. Pools of finders are the
/// intended pattern for concurrent callers.
///
/// ```
/// use yatra_route::{CollisionFlagMap, DefaultReachStrategy, RouteFinder, RouteRequest};
///
/// let mut flags = CollisionFlagMap::new();
/// for x in 3200..3210 {
///     for z in 3200..3210 {
///         flags.set(x, z, 0, 0);
///     }
/// }
/// let mut finder = RouteFinder::with_defaults();
/// let route = finder.find_route(
///     &flags,
///     &DefaultReachStrategy,
///     &RouteRequest::new(0, 3201, 3201, 3205, 3205),
/// );
/// assert!(route.success);
/// assert_eq!(route.waypoints.last().map(|w| (w.x, w.z)), Some((3205, 3205)));
/// ```
pub struct RouteFinder {
    search_map_size: i32,
    ring_mask: usize,
    masks: DirectionMasks,
    directions: Vec<i32>,
    distances: Vec<i32>,
    ring_x: Vec<i32>,
    ring_z: Vec<i32>,
    buf_reader_index: usize,
    buf_writer_index: usize,
    curr_local_x: i32,
    curr_local_z: i32,
}

impl RouteFinder {
    /// Create a finder from a validated configuration.
    pub fn new(config: RouteFinderConfig) -> Result<Self> {
        config.validate()?;
        let cells = (config.search_map_size * config.search_map_size) as usize;
        let masks = if config.use_route_blocker_flags {
            ROUTE_BLOCKER_MASKS
        } else {
            WALK_MASKS
        };
        Ok(Self {
            search_map_size: config.search_map_size,
            ring_mask: config.ring_buffer_size - 1,
            masks,
            directions: vec![0; cells],
            distances: vec![UNVISITED_DISTANCE; cells],
            ring_x: vec![0; config.ring_buffer_size],
            ring_z: vec![0; config.ring_buffer_size],
            buf_reader_index: 0,
            buf_writer_index: 0,
            curr_local_x: 0,
            curr_local_z: 0,
        })
    }

    /// Create a finder with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RouteFinderConfig::default()).expect("default configuration is valid")
    }

    /// Find a route satisfying the request, or the best approach toward it.
    ///
    /// Returns the canonical failed route when no cell in the search window
    /// reaches the target and either `move_near` is disabled or no approach
    /// candidate exists. Otherwise the waypoints run in travel order, one
    /// per straight segment corner, capped at `max_waypoints` by discarding
    /// destination-side corners.
    ///
    /// # Panics
    /// Panics when a coordinate lies outside `[0, 0x7FFF]` or the level
    /// outside `[0, 3]`.
    pub fn find_route<R: ReachStrategy>(
        &mut self,
        flags: &CollisionFlagMap,
        reach: &R,
        request: &RouteRequest,
    ) -> Route {
        let valid = |v: i32| (0..=MAX_COORD).contains(&v);
        assert!(
            valid(request.src_x) && valid(request.src_z),
            "source out of bounds: ({}, {})",
            request.src_x,
            request.src_z
        );
        assert!(
            valid(request.dest_x) && valid(request.dest_z),
            "destination out of bounds: ({}, {})",
            request.dest_x,
            request.dest_z
        );
        assert!(
            request.level < LEVEL_COUNT,
            "level out of bounds: {}",
            request.level
        );
        trace!(
            "[RouteFinder] find_route: level={} src=({}, {}) dest=({}, {}) size={} shape={}",
            request.level,
            request.src_x,
            request.src_z,
            request.dest_x,
            request.dest_z,
            request.src_size,
            request.loc_shape
        );

        self.reset();
        let base_x = request.src_x - self.search_map_size / 2;
        let base_z = request.src_z - self.search_map_size / 2;
        let local_src_x = request.src_x - base_x;
        let local_src_z = request.src_z - base_z;
        self.append_direction(local_src_x, local_src_z, DirectionFlag::SOURCE, 0);

        let path_found = match request.src_size {
            1 => self.find_path_1(flags, reach, request, base_x, base_z),
            2 => self.find_path_2(flags, reach, request, base_x, base_z),
            _ => self.find_path_n(flags, reach, request, base_x, base_z),
        };

        let mut alternative = false;
        if !path_found {
            if !request.move_near {
                debug!("[RouteFinder] frontier exhausted, move_near disabled: failed");
                return Route::failed();
            }
            let width = rotate(request.loc_angle, request.dest_width, request.dest_length);
            let length = rotate(request.loc_angle, request.dest_length, request.dest_width);
            if !self.find_closest_approach(
                request.dest_x - base_x,
                request.dest_z - base_z,
                width,
                length,
            ) {
                debug!("[RouteFinder] frontier exhausted, no approach candidate: failed");
                return Route::failed();
            }
            debug!(
                "[RouteFinder] approaching at ({}, {})",
                self.curr_local_x + base_x,
                self.curr_local_z + base_z
            );
            alternative = true;
        }

        // Backtrace from the terminal cell. Waypoints are prepended so the
        // deque reads in travel order; when full, the element at the tail
        // (the corner nearest the destination) is discarded first.
        let mut waypoints: VecDeque<RouteCoordinates> =
            VecDeque::with_capacity(request.max_waypoints.min(64));
        let mut curr_x = self.curr_local_x;
        let mut curr_z = self.curr_local_z;
        let mut last_dir = 0;
        let mut truncated = false;
        while curr_x != local_src_x || curr_z != local_src_z {
            let dir = self.directions[self.local_index(curr_x, curr_z)];
            if last_dir != dir {
                last_dir = dir;
                if waypoints.len() >= request.max_waypoints {
                    waypoints.pop_back();
                    truncated = true;
                }
                waypoints.push_front(RouteCoordinates::new(
                    curr_x + base_x,
                    curr_z + base_z,
                    request.level,
                ));
            }
            DirectionFlag::step_back(dir, &mut curr_x, &mut curr_z);
        }
        if truncated {
            debug!(
                "[RouteFinder] route truncated to {} waypoints",
                request.max_waypoints
            );
        }
        Route {
            waypoints: waypoints.into(),
            alternative,
            success: true,
        }
    }

    /// BFS depth of a window-local cell from the last call, for callers
    /// that inspect the search (tests, debug overlays).
    pub fn distance_at(&self, local_x: i32, local_z: i32) -> i32 {
        self.distances[self.local_index(local_x, local_z)]
    }

    #[inline]
    fn local_index(&self, x: i32, z: i32) -> usize {
        (x * self.search_map_size + z) as usize
    }

    fn reset(&mut self) {
        self.directions.fill(0);
        self.distances.fill(UNVISITED_DISTANCE);
        self.buf_reader_index = 0;
        self.buf_writer_index = 0;
    }

    #[inline]
    fn append_direction(&mut self, x: i32, z: i32, dir: i32, distance: i32) {
        let index = self.local_index(x, z);
        self.directions[index] = dir;
        self.distances[index] = distance;
        self.ring_x[self.buf_writer_index] = x;
        self.ring_z[self.buf_writer_index] = z;
        self.buf_writer_index = (self.buf_writer_index + 1) & self.ring_mask;
    }

    #[inline]
    fn dequeue(&mut self) -> (i32, i32) {
        self.curr_local_x = self.ring_x[self.buf_reader_index];
        self.curr_local_z = self.ring_z[self.buf_reader_index];
        self.buf_reader_index = (self.buf_reader_index + 1) & self.ring_mask;
        (self.curr_local_x, self.curr_local_z)
    }

    #[inline]
    fn unvisited(&self, x: i32, z: i32) -> bool {
        self.directions[self.local_index(x, z)] == 0
    }

    fn reach_query(request: &RouteRequest, src_x: i32, src_z: i32) -> ReachQuery {
        ReachQuery {
            level: request.level,
            src_x,
            src_z,
            src_size: request.src_size,
            dest_x: request.dest_x,
            dest_z: request.dest_z,
            dest_width: request.dest_width,
            dest_length: request.dest_length,
            loc_angle: request.loc_angle,
            loc_shape: request.loc_shape,
            block_access_flags: request.block_access_flags,
        }
    }

    /// Expansion for a 1x1 actor.
    fn find_path_1<R: ReachStrategy>(
        &mut self,
        flags: &CollisionFlagMap,
        reach: &R,
        request: &RouteRequest,
        base_x: i32,
        base_z: i32,
    ) -> bool {
        let masks = self.masks;
        let ctx = ExpansionContext {
            flags,
            collision: request.collision,
            level: request.level,
            base_x,
            base_z,
        };
        let rel = self.search_map_size - 1;
        while self.buf_writer_index != self.buf_reader_index {
            let (cx, cz) = self.dequeue();
            if reach.reached(flags, Self::reach_query(request, cx + base_x, cz + base_z)) {
                return true;
            }
            let next_distance = self.distances[self.local_index(cx, cz)] + 1;

            // East to west.
            if cx > 0 && self.unvisited(cx - 1, cz) && ctx.can_enter(cx - 1, cz, masks.west) {
                self.append_direction(cx - 1, cz, DirectionFlag::EAST, next_distance);
            }
            // West to east.
            if cx < rel && self.unvisited(cx + 1, cz) && ctx.can_enter(cx + 1, cz, masks.east) {
                self.append_direction(cx + 1, cz, DirectionFlag::WEST, next_distance);
            }
            // North to south.
            if cz > 0 && self.unvisited(cx, cz - 1) && ctx.can_enter(cx, cz - 1, masks.south) {
                self.append_direction(cx, cz - 1, DirectionFlag::NORTH, next_distance);
            }
            // South to north.
            if cz < rel && self.unvisited(cx, cz + 1) && ctx.can_enter(cx, cz + 1, masks.north) {
                self.append_direction(cx, cz + 1, DirectionFlag::SOUTH, next_distance);
            }
            // North-east to south-west.
            if cx > 0
                && cz > 0
                && self.unvisited(cx - 1, cz - 1)
                && ctx.can_enter(cx - 1, cz - 1, masks.south_west)
                && ctx.can_enter(cx - 1, cz, masks.west)
                && ctx.can_enter(cx, cz - 1, masks.south)
            {
                self.append_direction(cx - 1, cz - 1, DirectionFlag::NORTH_EAST, next_distance);
            }
            // North-west to south-east.
            if cx < rel
                && cz > 0
                && self.unvisited(cx + 1, cz - 1)
                && ctx.can_enter(cx + 1, cz - 1, masks.south_east)
                && ctx.can_enter(cx + 1, cz, masks.east)
                && ctx.can_enter(cx, cz - 1, masks.south)
            {
                self.append_direction(cx + 1, cz - 1, DirectionFlag::NORTH_WEST, next_distance);
            }
            // South-east to north-west.
            if cx > 0
                && cz < rel
                && self.unvisited(cx - 1, cz + 1)
                && ctx.can_enter(cx - 1, cz + 1, masks.north_west)
                && ctx.can_enter(cx - 1, cz, masks.west)
                && ctx.can_enter(cx, cz + 1, masks.north)
            {
                self.append_direction(cx - 1, cz + 1, DirectionFlag::SOUTH_EAST, next_distance);
            }
            // South-west to north-east.
            if cx < rel
                && cz < rel
                && self.unvisited(cx + 1, cz + 1)
                && ctx.can_enter(cx + 1, cz + 1, masks.north_east)
                && ctx.can_enter(cx + 1, cz, masks.east)
                && ctx.can_enter(cx, cz + 1, masks.north)
            {
                self.append_direction(cx + 1, cz + 1, DirectionFlag::SOUTH_WEST, next_distance);
            }
        }
        false
    }

    /// Expansion for a 2x2 actor. Cardinal steps clear both leading-edge
    /// tiles; diagonal steps additionally hold the trailing tiles to the
    /// pair masks so the sliding footprint cannot clip a wall corner.
    fn find_path_2<R: ReachStrategy>(
        &mut self,
        flags: &CollisionFlagMap,
        reach: &R,
        request: &RouteRequest,
        base_x: i32,
        base_z: i32,
    ) -> bool {
        let masks = self.masks;
        let ctx = ExpansionContext {
            flags,
            collision: request.collision,
            level: request.level,
            base_x,
            base_z,
        };
        let rel = self.search_map_size - 2;
        while self.buf_writer_index != self.buf_reader_index {
            let (cx, cz) = self.dequeue();
            if reach.reached(flags, Self::reach_query(request, cx + base_x, cz + base_z)) {
                return true;
            }
            let next_distance = self.distances[self.local_index(cx, cz)] + 1;

            // East to west.
            if cx > 0
                && self.unvisited(cx - 1, cz)
                && ctx.can_enter(cx - 1, cz, masks.south_west)
                && ctx.can_enter(cx - 1, cz + 1, masks.north_west)
            {
                self.append_direction(cx - 1, cz, DirectionFlag::EAST, next_distance);
            }
            // West to east.
            if cx < rel
                && self.unvisited(cx + 1, cz)
                && ctx.can_enter(cx + 2, cz, masks.south_east)
                && ctx.can_enter(cx + 2, cz + 1, masks.north_east)
            {
                self.append_direction(cx + 1, cz, DirectionFlag::WEST, next_distance);
            }
            // North to south.
            if cz > 0
                && self.unvisited(cx, cz - 1)
                && ctx.can_enter(cx, cz - 1, masks.south_west)
                && ctx.can_enter(cx + 1, cz - 1, masks.south_east)
            {
                self.append_direction(cx, cz - 1, DirectionFlag::NORTH, next_distance);
            }
            // South to north.
            if cz < rel
                && self.unvisited(cx, cz + 1)
                && ctx.can_enter(cx, cz + 2, masks.north_west)
                && ctx.can_enter(cx + 1, cz + 2, masks.north_east)
            {
                self.append_direction(cx, cz + 1, DirectionFlag::SOUTH, next_distance);
            }
            // North-east to south-west.
            if cx > 0
                && cz > 0
                && self.unvisited(cx - 1, cz - 1)
                && ctx.can_enter(cx - 1, cz, masks.north_and_south_west)
                && ctx.can_enter(cx - 1, cz - 1, masks.south_west)
                && ctx.can_enter(cx, cz - 1, masks.south_east_and_west)
            {
                self.append_direction(cx - 1, cz - 1, DirectionFlag::NORTH_EAST, next_distance);
            }
            // North-west to south-east.
            if cx < rel
                && cz > 0
                && self.unvisited(cx + 1, cz - 1)
                && ctx.can_enter(cx + 1, cz - 1, masks.south_east_and_west)
                && ctx.can_enter(cx + 2, cz - 1, masks.south_east)
                && ctx.can_enter(cx + 2, cz, masks.north_and_south_east)
            {
                self.append_direction(cx + 1, cz - 1, DirectionFlag::NORTH_WEST, next_distance);
            }
            // South-east to north-west.
            if cx > 0
                && cz < rel
                && self.unvisited(cx - 1, cz + 1)
                && ctx.can_enter(cx - 1, cz + 1, masks.north_and_south_west)
                && ctx.can_enter(cx - 1, cz + 2, masks.north_west)
                && ctx.can_enter(cx, cz + 2, masks.north_east_and_west)
            {
                self.append_direction(cx - 1, cz + 1, DirectionFlag::SOUTH_EAST, next_distance);
            }
            // South-west to north-east.
            if cx < rel
                && cz < rel
                && self.unvisited(cx + 1, cz + 1)
                && ctx.can_enter(cx + 1, cz + 2, masks.north_east_and_west)
                && ctx.can_enter(cx + 2, cz + 2, masks.north_east)
                && ctx.can_enter(cx + 2, cz + 1, masks.north_and_south_east)
            {
                self.append_direction(cx + 1, cz + 1, DirectionFlag::SOUTH_WEST, next_distance);
            }
        }
        false
    }

    /// Expansion for an NxN actor (N >= 3). Leading-edge corners use the
    /// size-2 composite tests; the interior of the edge is swept with the
    /// pair masks. Diagonals also sweep the trailing column and row end to
    /// end with the pair masks, so the formula at N = 2 is exactly the
    /// dedicated 2x2 case.
    fn find_path_n<R: ReachStrategy>(
        &mut self,
        flags: &CollisionFlagMap,
        reach: &R,
        request: &RouteRequest,
        base_x: i32,
        base_z: i32,
    ) -> bool {
        let masks = self.masks;
        let ctx = ExpansionContext {
            flags,
            collision: request.collision,
            level: request.level,
            base_x,
            base_z,
        };
        let size = request.src_size;
        let rel = self.search_map_size - size;
        while self.buf_writer_index != self.buf_reader_index {
            let (cx, cz) = self.dequeue();
            if reach.reached(flags, Self::reach_query(request, cx + base_x, cz + base_z)) {
                return true;
            }
            let next_distance = self.distances[self.local_index(cx, cz)] + 1;

            // East to west.
            if cx > 0
                && self.unvisited(cx - 1, cz)
                && ctx.can_enter(cx - 1, cz, masks.south_west)
                && ctx.can_enter(cx - 1, cz + size - 1, masks.north_west)
                && (1..size - 1).all(|k| ctx.can_enter(cx - 1, cz + k, masks.north_and_south_west))
            {
                self.append_direction(cx - 1, cz, DirectionFlag::EAST, next_distance);
            }
            // West to east.
            if cx < rel
                && self.unvisited(cx + 1, cz)
                && ctx.can_enter(cx + size, cz, masks.south_east)
                && ctx.can_enter(cx + size, cz + size - 1, masks.north_east)
                && (1..size - 1).all(|k| ctx.can_enter(cx + size, cz + k, masks.north_and_south_east))
            {
                self.append_direction(cx + 1, cz, DirectionFlag::WEST, next_distance);
            }
            // North to south.
            if cz > 0
                && self.unvisited(cx, cz - 1)
                && ctx.can_enter(cx, cz - 1, masks.south_west)
                && ctx.can_enter(cx + size - 1, cz - 1, masks.south_east)
                && (1..size - 1).all(|k| ctx.can_enter(cx + k, cz - 1, masks.south_east_and_west))
            {
                self.append_direction(cx, cz - 1, DirectionFlag::NORTH, next_distance);
            }
            // South to north.
            if cz < rel
                && self.unvisited(cx, cz + 1)
                && ctx.can_enter(cx, cz + size, masks.north_west)
                && ctx.can_enter(cx + size - 1, cz + size, masks.north_east)
                && (1..size - 1).all(|k| ctx.can_enter(cx + k, cz + size, masks.north_east_and_west))
            {
                self.append_direction(cx, cz + 1, DirectionFlag::SOUTH, next_distance);
            }
            // North-east to south-west.
            if cx > 0
                && cz > 0
                && self.unvisited(cx - 1, cz - 1)
                && ctx.can_enter(cx - 1, cz - 1, masks.south_west)
                && ctx.can_enter(cx - 1, cz + size - 2, masks.north_and_south_west)
                && ctx.can_enter(cx + size - 2, cz - 1, masks.south_east_and_west)
                && (1..size - 1).all(|k| {
                    ctx.can_enter(cx - 1, cz + k - 1, masks.north_and_south_west)
                        && ctx.can_enter(cx + k - 1, cz - 1, masks.south_east_and_west)
                })
            {
                self.append_direction(cx - 1, cz - 1, DirectionFlag::NORTH_EAST, next_distance);
            }
            // North-west to south-east.
            if cx < rel
                && cz > 0
                && self.unvisited(cx + 1, cz - 1)
                && ctx.can_enter(cx + size, cz - 1, masks.south_east)
                && ctx.can_enter(cx + size, cz + size - 2, masks.north_and_south_east)
                && ctx.can_enter(cx + 1, cz - 1, masks.south_east_and_west)
                && (1..size - 1).all(|k| {
                    ctx.can_enter(cx + size, cz + k - 1, masks.north_and_south_east)
                        && ctx.can_enter(cx + k + 1, cz - 1, masks.south_east_and_west)
                })
            {
                self.append_direction(cx + 1, cz - 1, DirectionFlag::NORTH_WEST, next_distance);
            }
            // South-east to north-west.
            if cx > 0
                && cz < rel
                && self.unvisited(cx - 1, cz + 1)
                && ctx.can_enter(cx - 1, cz + size, masks.north_west)
                && ctx.can_enter(cx - 1, cz + 1, masks.north_and_south_west)
                && ctx.can_enter(cx + size - 2, cz + size, masks.north_east_and_west)
                && (1..size - 1).all(|k| {
                    ctx.can_enter(cx - 1, cz + k + 1, masks.north_and_south_west)
                        && ctx.can_enter(cx + k - 1, cz + size, masks.north_east_and_west)
                })
            {
                self.append_direction(cx - 1, cz + 1, DirectionFlag::SOUTH_EAST, next_distance);
            }
            // South-west to north-east.
            if cx < rel
                && cz < rel
                && self.unvisited(cx + 1, cz + 1)
                && ctx.can_enter(cx + size, cz + size, masks.north_east)
                && ctx.can_enter(cx + size, cz + 1, masks.north_and_south_east)
                && ctx.can_enter(cx + 1, cz + size, masks.north_east_and_west)
                && (1..size - 1).all(|k| {
                    ctx.can_enter(cx + size, cz + k + 1, masks.north_and_south_east)
                        && ctx.can_enter(cx + k + 1, cz + size, masks.north_east_and_west)
                })
            {
                self.append_direction(cx + 1, cz + 1, DirectionFlag::SOUTH_WEST, next_distance);
            }
        }
        false
    }

    /// Scan a square around the rotated target footprint for the visited
    /// cell with the lowest squared distance to the rectangle, tie-broken
    /// by BFS depth. On success the cursor is left on the chosen cell.
    fn find_closest_approach(
        &mut self,
        local_dest_x: i32,
        local_dest_z: i32,
        dest_width: i32,
        dest_length: i32,
    ) -> bool {
        let mut lowest_cost = APPROACH_COST_CEILING;
        let mut max_alternative_path = APPROACH_DISTANCE_CUTOFF;
        for x in (local_dest_x - APPROACH_RADIUS)..=(local_dest_x + APPROACH_RADIUS) {
            for z in (local_dest_z - APPROACH_RADIUS)..=(local_dest_z + APPROACH_RADIUS) {
                if x < 0 || z < 0 || x >= self.search_map_size || z >= self.search_map_size {
                    continue;
                }
                let distance = self.distances[self.local_index(x, z)];
                if distance >= max_alternative_path {
                    continue;
                }
                let dx = if x < local_dest_x {
                    local_dest_x - x
                } else if x > local_dest_x + dest_width - 1 {
                    x - (local_dest_x + dest_width - 1)
                } else {
                    0
                };
                let dz = if z < local_dest_z {
                    local_dest_z - z
                } else if z > local_dest_z + dest_length - 1 {
                    z - (local_dest_z + dest_length - 1)
                } else {
                    0
                };
                let cost = dx * dx + dz * dz;
                if cost < lowest_cost || (cost == lowest_cost && distance < max_alternative_path) {
                    self.curr_local_x = x;
                    self.curr_local_z = z;
                    lowest_cost = cost;
                    max_alternative_path = distance;
                }
            }
        }
        lowest_cost != APPROACH_COST_CEILING
    }
}
