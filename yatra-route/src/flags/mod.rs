//! Tile flag words and the directional mask tables built from them.

pub mod access;
pub mod collision;
pub(crate) mod masks;

pub use access::BlockAccessFlag;
pub use collision::CollisionFlag;
