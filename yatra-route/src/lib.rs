//! # Yatra-Route: tile-grid route finding for layered 2.5D game worlds
//!
//! A breadth-first route finder over packed per-tile collision bitflags,
//! built for the per-tick movement loop of a game server: fixed search
//! window, ring-buffered frontier, footprint-aware neighbour expansion that
//! never clips wall corners, and shape-aware target reachability.
//!
//! ## Features
//!
//! - **Packed collision grids**: one `u32` per tile, zone-allocated across
//!   a 32768 x 32768 x 4 world; no per-tile objects
//! - **Footprint-parameterised BFS**: dedicated expansions for 1x1, 2x2 and
//!   NxN actors over a shared mask table
//! - **Two wall-flag families**: ordinary walk flags or the stricter
//!   route-blocker flags, selected per finder
//! - **Shape-aware reachability**: walls, wall decorations, rotated
//!   rectangles with per-side access control, all behind an injectable
//!   trait
//! - **Deterministic output**: identical inputs reproduce identical
//!   waypoints, including tie-breaks
//!
//! ## Quick Start
//!
//! ```rust
//! use yatra_route::{
//!     CollisionFlag, CollisionFlagMap, DefaultReachStrategy, RouteFinder, RouteRequest,
//! };
//!
//! // Build a little map: a 12x12 open yard with one wall segment.
//! let mut flags = CollisionFlagMap::new();
//! for x in 3200..3212 {
//!     for z in 3200..3212 {
//!         flags.set(x, z, 0, CollisionFlag::OPEN);
//!     }
//! }
//! flags.add(3205, 3205, 0, CollisionFlag::WALL_EAST);
//! flags.add(3206, 3205, 0, CollisionFlag::WALL_WEST);
//!
//! // Route a 1x1 actor across the yard.
//! let mut finder = RouteFinder::with_defaults();
//! let request = RouteRequest::new(0, 3202, 3205, 3209, 3205);
//! let route = finder.find_route(&flags, &DefaultReachStrategy, &request);
//! assert!(route.success);
//! let last = route.waypoints.last().unwrap();
//! assert_eq!((last.x, last.z), (3209, 3205));
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: coordinates, direction nibbles, loc rotation
//! - [`flags`]: the tile flag word and derived directional masks
//! - [`grid`]: zone-allocated collision flag storage
//! - [`query`]: collision strategies, reachability, sight/walk ray casts
//! - [`route`]: the BFS finder, request/result types, step validation
//! - [`config`]: finder configuration
//! - [`error`]: configuration errors
//!
//! ## Concurrency
//!
//! A [`RouteFinder`] owns its search grids and is strictly single-threaded;
//! give each worker thread its own instance and share the
//! [`CollisionFlagMap`] read-only. A call runs to completion without
//! suspension, bounded by the search window area.

pub mod config;
pub mod core;
pub mod error;
pub mod flags;
pub mod grid;
pub mod query;
pub mod route;

// Re-export the working set at the crate root.
pub use crate::config::RouteFinderConfig;
pub use crate::core::{rotate, RouteCoordinates};
pub use crate::error::RouteFinderError;
pub use crate::flags::{BlockAccessFlag, CollisionFlag};
pub use crate::grid::CollisionFlagMap;
pub use crate::query::{
    line_of_sight, line_of_walk, CollisionStrategy, DefaultReachStrategy, ReachQuery,
    ReachStrategy,
};
pub use crate::route::{naive_destination, Route, RouteFinder, RouteRequest, StepValidator};
