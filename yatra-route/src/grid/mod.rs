//! Collision flag storage.

mod flag_map;

pub use flag_map::CollisionFlagMap;
