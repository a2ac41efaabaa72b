//! Occupancy test shared by movement and pill placement.

use crate::types::Position;

/// True iff `point` equals any of `segments`.
///
/// Every segment counts, including the current tail. A move into the cell the
/// tail is about to vacate is therefore still rejected.
#[inline]
pub fn collides(segments: &[Position], point: Position) -> bool {
    segments.iter().any(|&s| s == point)
}
