//! Loc access restriction bits.

/// Sides of a loc footprint that may not be approached.
///
/// Carried on the loc itself (a counter approachable only from the front,
/// a fence gate only from its two ends) and consulted by the rectangle
/// reach rules.
pub struct BlockAccessFlag;

impl BlockAccessFlag {
    pub const NORTH: u32 = 0x1;
    pub const EAST: u32 = 0x2;
    pub const SOUTH: u32 = 0x4;
    pub const WEST: u32 = 0x8;
}
