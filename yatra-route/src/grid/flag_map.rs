//! Zone-allocated collision flag storage.
//!
//! The coordinate space is a fixed 32768 x 32768 tile grid on four levels,
//! far too large to allocate densely. Flags are stored per 8x8 tile zone, and zones
//! are allocated only where map content exists. A read from an unallocated
//! zone (or from outside the world) returns a fully blocking word, so the
//! route finder never needs a bounds check on its hot path.

use crate::core::{LEVEL_COUNT, MAX_COORD};

/// Tiles per zone edge.
const ZONE_SIZE: i32 = 8;
/// Tiles per zone.
const ZONE_TILE_COUNT: usize = (ZONE_SIZE * ZONE_SIZE) as usize;
/// Zones per axis per level.
const ZONE_AXIS: usize = ((MAX_COORD as usize) + 1) / ZONE_SIZE as usize;
/// Zone slots across all levels, sized for the full coordinate space
/// (~67M slots).
///
/// `new` leans on `Option<Box<_>>` having a null niche: `vec![None; N]`
/// takes the zeroed-allocation fast path, so the slot array is untouched
/// virtual memory until zones allocate. The payload must stay a `Box` (or
/// another null-niche type) or every construction becomes a real
/// half-gigabyte write; the tests pin both properties.
const ZONE_COUNT: usize = ZONE_AXIS * ZONE_AXIS * LEVEL_COUNT as usize;

/// Flag word returned for tiles that have no allocated zone.
const BLOCKED_WORD: u32 = u32::MAX;

/// Random-access collision flags for the whole world.
///
/// Reads are `#[inline]` lookups into the owning zone; writes allocate the
/// zone on demand with every tile open. The route finder only reads.
pub struct CollisionFlagMap {
    zones: Vec<Option<Box<[u32; ZONE_TILE_COUNT]>>>,
}

impl Default for CollisionFlagMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionFlagMap {
    /// Create an empty map; every tile reads as fully blocking until its
    /// zone is allocated.
    pub fn new() -> Self {
        Self {
            zones: vec![None; ZONE_COUNT],
        }
    }

    #[inline]
    fn zone_index(x: i32, z: i32, level: u8) -> usize {
        let zx = (x / ZONE_SIZE) as usize;
        let zz = (z / ZONE_SIZE) as usize;
        zx | (zz * ZONE_AXIS) | ((level as usize) * ZONE_AXIS * ZONE_AXIS)
    }

    #[inline]
    fn tile_index(x: i32, z: i32) -> usize {
        ((x & (ZONE_SIZE - 1)) | ((z & (ZONE_SIZE - 1)) << 3)) as usize
    }

    #[inline]
    fn in_bounds(x: i32, z: i32, level: u8) -> bool {
        (0..=MAX_COORD).contains(&x) && (0..=MAX_COORD).contains(&z) && level < LEVEL_COUNT
    }

    /// Read the flag word at a tile. Unallocated or out-of-world tiles read
    /// as fully blocking.
    #[inline]
    pub fn get(&self, x: i32, z: i32, level: u8) -> u32 {
        if !Self::in_bounds(x, z, level) {
            return BLOCKED_WORD;
        }
        match &self.zones[Self::zone_index(x, z, level)] {
            Some(zone) => zone[Self::tile_index(x, z)],
            None => BLOCKED_WORD,
        }
    }

    /// Whether the tile's zone has been allocated.
    pub fn is_allocated(&self, x: i32, z: i32, level: u8) -> bool {
        Self::in_bounds(x, z, level) && self.zones[Self::zone_index(x, z, level)].is_some()
    }

    /// Allocate the zone containing a tile, with every tile open.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the world.
    pub fn allocate_if_absent(&mut self, x: i32, z: i32, level: u8) {
        assert!(
            Self::in_bounds(x, z, level),
            "tile out of bounds: ({x}, {z}, {level})"
        );
        let index = Self::zone_index(x, z, level);
        if self.zones[index].is_none() {
            self.zones[index] = Some(Box::new([0; ZONE_TILE_COUNT]));
        }
    }

    /// Release the zone containing a tile; its tiles revert to blocking.
    pub fn deallocate_if_present(&mut self, x: i32, z: i32, level: u8) {
        if Self::in_bounds(x, z, level) {
            self.zones[Self::zone_index(x, z, level)] = None;
        }
    }

    /// Overwrite the flag word at a tile, allocating its zone if needed.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the world.
    pub fn set(&mut self, x: i32, z: i32, level: u8, flags: u32) {
        self.allocate_if_absent(x, z, level);
        let zone = self.zones[Self::zone_index(x, z, level)]
            .as_mut()
            .expect("zone allocated above");
        zone[Self::tile_index(x, z)] = flags;
    }

    /// OR flags into a tile, allocating its zone if needed.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the world.
    pub fn add(&mut self, x: i32, z: i32, level: u8, flags: u32) {
        self.allocate_if_absent(x, z, level);
        let zone = self.zones[Self::zone_index(x, z, level)]
            .as_mut()
            .expect("zone allocated above");
        zone[Self::tile_index(x, z)] |= flags;
    }

    /// Clear flags from a tile, allocating its zone if needed.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the world.
    pub fn remove(&mut self, x: i32, z: i32, level: u8, flags: u32) {
        self.allocate_if_absent(x, z, level);
        let zone = self.zones[Self::zone_index(x, z, level)]
            .as_mut()
            .expect("zone allocated above");
        zone[Self::tile_index(x, z)] &= !flags;
    }
}
