//! Turns a drag between two pixel points into the word it traces.

use crate::board::Board;
use crate::direction::{DirectionError, get_direction};
use crate::walker::walk;
use kurbo::Point;

/// Word spelled by the cells between `start` and `end`.
///
/// Returns an empty string when either point is off the board. The direction
/// is snapped from the pixel points, not the cell indices, and the walk covers
/// `max(|Δrow|, |Δcol|) + 1` cells. Cells that fall off the grid contribute
/// nothing.
pub fn resolve_word(board: &Board, start: Point, end: Point) -> Result<String, DirectionError> {
    if !board.is_in_board(&[start, end]) {
        return Ok(String::new());
    }

    let layout = board.layout();
    let (start_row, start_col) = layout.pixel_to_cell(start);
    let (end_row, end_col) = layout.pixel_to_cell(end);

    if (start_row, start_col) == (end_row, end_col) {
        return Ok(board.char_at(start_row, start_col).map(String::from).unwrap_or_default());
    }

    let direction = get_direction(start, end)?;
    let length = (end_row - start_row).unsigned_abs().max((end_col - start_col).unsigned_abs()) + 1;

    let mut word = String::with_capacity(length);
    walk(direction, start_row, start_col, length, |row, col, _| {
        if let Some(letter) = board.char_at(row, col) {
            word.push(letter);
        }
    });
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Palette;
    use kurbo::Size;

    /// 4x4 board on a 400x400 surface: cells are 100px, centers at 50 + 100k.
    fn board() -> Board {
        let mut board = Board::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"], Palette::default()).unwrap();
        board.recompute_layout(Size::new(400.0, 400.0));
        board
    }

    fn center(board: &Board, row: usize, col: usize) -> Point {
        board.cell_center(row, col)
    }

    #[test]
    fn test_resolve_each_direction() {
        let board = board();
        let cases = [
            ((0, 0), (0, 3), "ABCD"),
            ((0, 3), (0, 0), "DCBA"),
            ((0, 1), (3, 1), "BFJN"),
            ((3, 1), (0, 1), "NJFB"),
            ((0, 0), (3, 3), "AFKP"),
            ((3, 3), (0, 0), "PKFA"),
            ((3, 0), (0, 3), "MJGD"),
            ((0, 3), (3, 0), "DGJM"),
        ];
        for ((r1, c1), (r2, c2), expected) in cases {
            let word = resolve_word(&board, center(&board, r1, c1), center(&board, r2, c2)).unwrap();
            assert_eq!(word, expected, "from ({r1}, {c1}) to ({r2}, {c2})");
        }
    }

    #[test]
    fn test_resolve_single_cell() {
        let board = board();
        let point = center(&board, 2, 1);
        assert_eq!(resolve_word(&board, point, point).unwrap(), "J");
        // Anywhere inside the same cell
        assert_eq!(resolve_word(&board, point, Point::new(160.0, 230.0)).unwrap(), "J");
    }

    #[test]
    fn test_resolve_outside_board_is_empty() {
        let board = board();
        let inside = center(&board, 0, 0);
        assert_eq!(resolve_word(&board, inside, Point::new(401.0, 50.0)).unwrap(), "");
        assert_eq!(resolve_word(&board, Point::new(-5.0, 50.0), inside).unwrap(), "");
        assert_eq!(resolve_word(&board, Point::new(-1.0, -1.0), inside).unwrap(), "");
    }

    #[test]
    fn test_resolve_snaps_off_axis_drag() {
        let board = board();
        // Mostly horizontal drag from A that ends in the next row still reads the top row
        let word = resolve_word(&board, center(&board, 0, 0), Point::new(350.0, 110.0)).unwrap();
        assert_eq!(word, "ABCD");
    }

    #[test]
    fn test_resolve_truncates_off_grid_cells() {
        let board = board();
        // Snaps to SE but the column span runs past the bottom edge
        let word = resolve_word(&board, center(&board, 2, 0), Point::new(350.0, 390.0)).unwrap();
        assert_eq!(word, "IN");
    }

    #[test]
    fn test_resolve_ignores_offset() {
        let mut board = Board::from_rows(&["AB", "CD"], Palette::default()).unwrap();
        board.recompute_layout(Size::new(400.0, 200.0));
        // Grid is centered horizontally with a 100px margin
        assert_eq!(resolve_word(&board, Point::new(150.0, 50.0), Point::new(250.0, 50.0)).unwrap(), "AB");
        assert_eq!(resolve_word(&board, Point::new(50.0, 50.0), Point::new(250.0, 50.0)).unwrap(), "");
    }
}
