//! Route finder configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteFinderError};

/// Constructor-time configuration for a [`RouteFinder`](crate::RouteFinder).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RouteFinderConfig {
    /// Edge of the BFS window in tiles. The search is confined to a square
    /// of this size centred on the source; destinations outside it can only
    /// be approached, never reached.
    pub search_map_size: i32,

    /// Frontier ring capacity. Must be a non-zero power of two so indices
    /// wrap with a mask.
    pub ring_buffer_size: usize,

    /// Select the `*_ROUTE_BLOCKER` mask family for every expansion, the
    /// stricter interpretation for agents that must not cut through
    /// temporarily passable geometry. Never inferred from a request.
    pub use_route_blocker_flags: bool,
}

impl Default for RouteFinderConfig {
    fn default() -> Self {
        Self {
            search_map_size: 128,
            ring_buffer_size: 4096,
            use_route_blocker_flags: false,
        }
    }
}

impl RouteFinderConfig {
    /// Check the invariants the finder relies on.
    pub fn validate(&self) -> Result<()> {
        if self.search_map_size <= 0 || self.search_map_size % 2 != 0 {
            return Err(RouteFinderError::InvalidSearchMapSize(self.search_map_size));
        }
        if !self.ring_buffer_size.is_power_of_two() {
            return Err(RouteFinderError::InvalidRingBufferSize(self.ring_buffer_size));
        }
        Ok(())
    }
}
