//! Cell enumeration along a direction.
//!
//! Placement writes and lookup reads both go through [`walk`], so whatever a
//! placement stamps is exactly what a lookup with the same start, direction and
//! length reads back.

use crate::direction::Direction;

/// Visit `length` cells starting at (`start_row`, `start_col`) and stepping in
/// `direction`. `visit` receives `(row, col, index)` with `index` from 0.
///
/// Indices are not bounds-checked; callers decide what an off-grid cell means.
pub fn walk<F>(direction: Direction, start_row: isize, start_col: isize, length: usize, mut visit: F)
where
    F: FnMut(isize, isize, usize),
{
    let (drow, dcol) = direction.delta();
    let mut row = start_row;
    let mut col = start_col;
    for index in 0..length {
        visit(row, col, index);
        row += drow;
        col += dcol;
    }
}

/// Collect the cells [`walk`] would visit.
pub fn cells(direction: Direction, start_row: isize, start_col: isize, length: usize) -> Vec<(isize, isize)> {
    let mut out = Vec::with_capacity(length);
    walk(direction, start_row, start_col, length, |row, col, _| out.push((row, col)));
    out
}

/// Last cell of a walk of `length` cells. `length` must be at least 1.
pub fn end_cell(direction: Direction, start_row: isize, start_col: isize, length: usize) -> (isize, isize) {
    let (drow, dcol) = direction.delta();
    let steps = length.saturating_sub(1) as isize;
    (start_row + drow * steps, start_col + dcol * steps)
}
