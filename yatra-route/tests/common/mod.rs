//! Shared grid-building helpers for the integration tests.
#![allow(dead_code)]

use yatra_route::{CollisionFlag, CollisionFlagMap};

/// Build a level-0 collision map from ASCII rows.
///
/// Rows run north to south (the first row is the highest z); columns run
/// west to east from `origin_x`. `.` is an open tile, `#` a loc-blocked
/// tile. Tiles outside the drawing stay unallocated and therefore fully
/// blocking, which fences the search without explicit walls.
pub fn ascii_grid(origin_x: i32, origin_z: i32, rows: &[&str]) -> CollisionFlagMap {
    let mut map = CollisionFlagMap::new();
    let height = rows.len() as i32;
    for (row_index, row) in rows.iter().enumerate() {
        let z = origin_z + height - 1 - row_index as i32;
        for (col_index, tile) in row.split_whitespace().enumerate() {
            let x = origin_x + col_index as i32;
            match tile {
                "." => map.set(x, z, 0, CollisionFlag::OPEN),
                "#" => map.set(x, z, 0, CollisionFlag::LOC),
                other => panic!("unknown grid tile {other:?}"),
            }
        }
    }
    map
}

/// Open a rectangular area of level-0 tiles.
pub fn open_rect(map: &mut CollisionFlagMap, x0: i32, z0: i32, x1: i32, z1: i32) {
    for x in x0..=x1 {
        for z in z0..=z1 {
            map.set(x, z, 0, CollisionFlag::OPEN);
        }
    }
}
