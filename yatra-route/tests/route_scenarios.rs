//! Literal-grid routing scenarios.

mod common;

use common::{ascii_grid, open_rect};
use yatra_route::{
    CollisionFlag, CollisionFlagMap, DefaultReachStrategy, RouteCoordinates, RouteFinder,
    RouteRequest,
};

fn find(map: &CollisionFlagMap, request: &RouteRequest) -> yatra_route::Route {
    RouteFinder::with_defaults().find_route(map, &DefaultReachStrategy, request)
}

fn waypoint(x: i32, z: i32) -> RouteCoordinates {
    RouteCoordinates::new(x, z, 0)
}

#[test]
fn straight_line_is_a_single_waypoint() {
    // One open column from (10, 10) to (10, 14).
    let mut map = CollisionFlagMap::new();
    open_rect(&mut map, 10, 10, 10, 14);

    let route = find(&map, &RouteRequest::new(0, 10, 10, 10, 14));
    assert!(route.success);
    assert!(!route.alternative);
    assert_eq!(route.waypoints, vec![waypoint(10, 14)]);
}

#[test]
fn l_bend_keeps_one_waypoint_per_corner() {
    // The only corridor runs over the top and down the east side.
    let map = ascii_grid(
        0,
        0,
        &[
            ". . . .", //
            ". # # .",
            ". # . .",
        ],
    );
    let route = find(&map, &RouteRequest::new(0, 0, 2, 2, 0));
    assert!(route.success);
    assert!(!route.alternative);
    assert_eq!(
        route.waypoints,
        vec![waypoint(3, 2), waypoint(3, 0), waypoint(2, 0)]
    );
}

#[test]
fn short_bend_is_corner_plus_destination() {
    let map = ascii_grid(
        0,
        0,
        &[
            ". . .", //
            "# # .",
        ],
    );
    let route = find(&map, &RouteRequest::new(0, 0, 1, 2, 0));
    assert!(route.success);
    assert_eq!(route.waypoints, vec![waypoint(2, 1), waypoint(2, 0)]);
}

#[test]
fn walled_destination_yields_closest_approach() {
    let map = ascii_grid(
        0,
        0,
        &[
            ". . . .", //
            ". # # #",
            ". # . #",
            ". # # #",
        ],
    );
    // Destination (2, 1) is sealed on all sides.
    let route = find(&map, &RouteRequest::new(0, 0, 3, 2, 1));
    assert!(route.success);
    assert!(route.alternative);
    // Cost 4 candidates are (0, 1) and (2, 3), both two steps out; the scan
    // keeps the first and the tie-break rejects the equal-depth second.
    assert_eq!(route.waypoints.last(), Some(&waypoint(0, 1)));
}

#[test]
fn walled_destination_without_move_near_fails() {
    let map = ascii_grid(
        0,
        0,
        &[
            ". . . .", //
            ". # # #",
            ". # . #",
            ". # # #",
        ],
    );
    let route = find(
        &map,
        &RouteRequest::new(0, 0, 3, 2, 1).with_move_near(false),
    );
    assert_eq!(route, yatra_route::Route::failed());
}

#[test]
fn one_tile_gap_admits_small_but_not_large_actors() {
    // A wall row with a single open tile at (2, 3).
    let mut map = CollisionFlagMap::new();
    open_rect(&mut map, 0, 0, 5, 6);
    for x in [0, 1, 3, 4, 5] {
        map.add(x, 3, 0, CollisionFlag::LOC);
    }

    let small = find(
        &map,
        &RouteRequest::new(0, 0, 0, 0, 5).with_move_near(false),
    );
    assert!(small.success, "1x1 actor slips through the gap");

    let large = find(
        &map,
        &RouteRequest::new(0, 0, 0, 0, 5)
            .with_src_size(2)
            .with_move_near(false),
    );
    assert_eq!(
        large,
        yatra_route::Route::failed(),
        "2x2 actor must not squeeze through a one-tile gap"
    );

    // With move-near the large actor walks up to the wall instead.
    let near = find(&map, &RouteRequest::new(0, 0, 0, 0, 5).with_src_size(2));
    assert!(near.success);
    assert!(near.alternative);
    let last = *near.waypoints.last().unwrap();
    assert!(last.z <= 2, "approach stays south of the wall row");
}

#[test]
fn size_three_diagonal_cannot_clip_trailing_edge_corner() {
    let mut map = CollisionFlagMap::new();
    open_rect(&mut map, 50, 50, 56, 56);
    let request = RouteRequest::new(0, 52, 52, 51, 51).with_src_size(3);

    // Unobstructed, the 3x3 actor takes the south-west diagonal directly.
    let direct = find(&map, &request);
    assert_eq!(direct.waypoints, vec![waypoint(51, 51)]);

    // A wall on the north edge of (51, 53), the top tile of the column the
    // sliding footprint enters: the diagonal and the plain west step are
    // both rejected, and the route has to go south first.
    map.add(51, 53, 0, CollisionFlag::WALL_NORTH);
    let detour = find(&map, &request);
    assert!(detour.success);
    assert_eq!(
        detour.waypoints,
        vec![waypoint(52, 51), waypoint(51, 51)]
    );
}

#[test]
fn blocked_corner_forces_orthogonal_detour() {
    let mut map = CollisionFlagMap::new();
    open_rect(&mut map, 100, 100, 101, 101);

    // Unobstructed, the diagonal is one segment.
    let direct = find(&map, &RouteRequest::new(0, 100, 100, 101, 101));
    assert_eq!(direct.waypoints, vec![RouteCoordinates::new(101, 101, 0)]);

    // A corner wall on the destination tile rejects the diagonal entry.
    map.add(101, 101, 0, CollisionFlag::WALL_SOUTH_WEST);
    let detour = find(&map, &RouteRequest::new(0, 100, 100, 101, 101));
    assert!(detour.success);
    assert_eq!(
        detour.waypoints,
        vec![
            RouteCoordinates::new(101, 100, 0),
            RouteCoordinates::new(101, 101, 0)
        ]
    );
}

#[test]
fn level_is_carried_through_waypoints() {
    let mut map = CollisionFlagMap::new();
    for z in 50..=55 {
        map.set(40, z, 2, CollisionFlag::OPEN);
    }
    let mut finder = RouteFinder::with_defaults();
    let route = finder.find_route(
        &map,
        &DefaultReachStrategy,
        &RouteRequest::new(2, 40, 50, 40, 55),
    );
    assert!(route.success);
    assert_eq!(route.waypoints, vec![RouteCoordinates::new(40, 55, 2)]);
}
