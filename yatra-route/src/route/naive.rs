//! Collision-free contact coordinate between two rectangles.

use crate::core::rotate;

/// Compute a destination tile that puts the source footprint in contact
/// with the target footprint, without consulting the collision map.
///
/// The source is classified as north, east, south or west of the rotated
/// target by comparing the diagonal sums of the offset between the two
/// south-west corners against the rectangle extents, then slid along the
/// contacted side so the footprints overlap on that axis. Callers use this
/// as a cheap heuristic target when a full search is not warranted; ties
/// around the corners resolve toward the south-west.
#[allow(clippy::too_many_arguments)]
pub fn naive_destination(
    src_x: i32,
    src_z: i32,
    src_width: i32,
    src_length: i32,
    dest_x: i32,
    dest_z: i32,
    dest_width: i32,
    dest_length: i32,
    loc_angle: i32,
) -> (i32, i32) {
    let width = rotate(loc_angle, dest_width, dest_length);
    let length = rotate(loc_angle, dest_length, dest_width);
    let diagonal = (src_x - dest_x) + (src_z - dest_z);
    let anti = (src_x - dest_x) - (src_z - dest_z);

    if anti < 0 && diagonal < length - 1 {
        // West of the target: stand flush against its west side.
        (
            dest_x - src_width,
            src_z.clamp(dest_z - (src_length - 1), dest_z + length - 1),
        )
    } else if anti < 0 {
        // North of the target.
        (
            src_x.clamp(dest_x - (src_width - 1), dest_x + width - 1),
            dest_z + length,
        )
    } else if diagonal > width - 1 {
        // East of the target.
        (
            dest_x + width,
            src_z.clamp(dest_z - (src_length - 1), dest_z + length - 1),
        )
    } else {
        // South of the target.
        (
            src_x.clamp(dest_x - (src_width - 1), dest_x + width - 1),
            dest_z - src_length,
        )
    }
}
