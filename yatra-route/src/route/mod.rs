//! Route finding: the BFS engine, its request/result types, and the
//! step-level helpers movement loops use alongside it.

mod finder;
mod naive;
mod step;
mod types;

pub use finder::RouteFinder;
pub use naive::naive_destination;
pub use step::StepValidator;
pub use types::{Route, RouteRequest, DEFAULT_MAX_WAYPOINTS};
