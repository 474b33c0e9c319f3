use arrayvec::ArrayVec;

use crate::grid::Loc;

/// The 8 Moore-neighborhood offsets as (row, col) deltas, in the fixed
/// order N, S, E, W, NE, SE, SW, NW.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// Enumerates the in-bounds Moore neighbors of `center` on a grid of the
/// given dimensions. Positions falling outside `[0, height) x [0, width)`
/// are dropped, never wrapped, so border cells yield fewer than 8 entries.
pub fn neighbors(center: Loc, height: u32, width: u32) -> ArrayVec<Loc, 8> {
    let mut result = ArrayVec::new();
    for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
        let row = i64::from(center.row) + row_offset;
        let col = i64::from(center.col) + col_offset;
        if (0..i64::from(height)).contains(&row) && (0..i64::from(width)).contains(&col) {
            result.push(Loc::new(row as u32, col as u32));
        }
    }
    result
}
