//! The letter grid and its on-surface geometry.

use crate::direction::Direction;
use crate::layout::GridLayout;
use crate::letter::Letter;
use crate::style::Palette;
use crate::walker::{self, walk};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board needs at least one row and one column")]
    Empty,
    #[error("Row {row} has {found} letters, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// Where a word was put during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl WordPlacement {
    /// Number of cells the word covers.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell holding the word's last letter.
    pub fn end(&self) -> (isize, isize) {
        walker::end_cell(self.direction, self.row as isize, self.col as isize, self.len())
    }

    /// Every cell the word covers, first letter first.
    pub fn cells(&self) -> Vec<(isize, isize)> {
        walker::cells(self.direction, self.row as isize, self.col as isize, self.len())
    }
}

/// A rows x cols letter grid.
///
/// `letter_vals` holds the characters and `letters` the matching painted
/// cells; both always have the same dimensions. Boards are only built through
/// the constructors, so they serialize but never deserialize.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    letter_vals: Vec<Vec<char>>,
    letters: Vec<Vec<Letter>>,
    layout: GridLayout,
    surface: Size,
    placements: Vec<WordPlacement>,
    palette: Palette,
}

impl Board {
    /// Build a board whose cells are produced by `fill(row, col)`.
    pub fn with_fill<F>(rows: usize, cols: usize, palette: Palette, mut fill: F) -> Result<Self, BoardError>
    where
        F: FnMut(usize, usize) -> char,
    {
        if rows == 0 || cols == 0 {
            return Err(BoardError::Empty);
        }
        let letter_vals: Vec<Vec<char>> = (0..rows)
            .map(|row| (0..cols).map(|col| fill(row, col)).collect())
            .collect();
        Ok(Self::from_matrix(letter_vals, palette))
    }

    /// Build a board from one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], palette: Palette) -> Result<Self, BoardError> {
        let letter_vals: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
        let expected = letter_vals.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = letter_vals
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(BoardError::Ragged { row, expected, found });
        }
        Ok(Self::from_matrix(letter_vals, palette))
    }

    fn from_matrix(letter_vals: Vec<Vec<char>>, palette: Palette) -> Self {
        let letters = letter_vals
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| Letter::new(value, palette.box_fill, palette.text))
                    .collect()
            })
            .collect();
        let rows = letter_vals.len();
        let cols = letter_vals[0].len();
        Self {
            letter_vals,
            letters,
            layout: GridLayout::new(rows, cols),
            surface: Size::ZERO,
            placements: Vec::new(),
            palette,
        }
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Surface size the layout was last computed for.
    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn letter_vals(&self) -> &[Vec<char>] {
        &self.letter_vals
    }

    pub fn letters(&self) -> &[Vec<Letter>] {
        &self.letters
    }

    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Character at a cell, or `None` when the index is off the grid.
    pub fn char_at(&self, row: isize, col: isize) -> Option<char> {
        if !self.layout.contains_cell(row, col) {
            return None;
        }
        self.letter_vals.get(row as usize)?.get(col as usize).copied()
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<&Letter> {
        self.letters.get(row).and_then(|r| r.get(col))
    }

    /// Pixel center of a cell under the current layout.
    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        self.layout.cell_center(row, col)
    }

    /// Grid corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        self.layout.corners()
    }

    pub fn is_in_board(&self, points: &[Point]) -> bool {
        self.layout.is_in_board(points)
    }

    /// Fit the grid to a new surface size and move every letter accordingly.
    pub fn recompute_layout(&mut self, surface: Size) {
        self.surface = surface;
        self.layout.recompute(surface);
        let box_size = self.layout.box_size;
        for (row, letters) in self.letters.iter_mut().enumerate() {
            for (col, letter) in letters.iter_mut().enumerate() {
                letter.set_geometry(self.layout.cell_origin(row, col), box_size);
            }
        }
    }

    /// Write a word into the grid and highlight its cells.
    ///
    /// The placement must lie inside the grid; off-grid cells are skipped.
    pub(crate) fn stamp(&mut self, placement: WordPlacement) {
        let chars: Vec<char> = placement.word.chars().collect();
        let highlight = self.palette.highlight;
        let layout = self.layout;
        walk(
            placement.direction,
            placement.row as isize,
            placement.col as isize,
            chars.len(),
            |row, col, index| {
                if !layout.contains_cell(row, col) {
                    return;
                }
                let (row, col) = (row as usize, col as usize);
                self.letter_vals[row][col] = chars[index];
                self.letters[row][col].highlight(chars[index], highlight);
            },
        );
        self.placements.push(placement);
    }

    /// Rows as strings, top to bottom.
    pub fn row_strings(&self) -> Vec<String> {
        self.letter_vals.iter().map(|row| row.iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows(&["ABCD", "EFGH", "IJKL"], Palette::default()).unwrap()
    }

    #[test]
    fn test_from_rows() {
        let board = sample();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.letters().len(), 3);
        assert!(board.letters().iter().all(|row| row.len() == 4));
        assert_eq!(board.char_at(1, 2), Some('G'));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Board::from_rows(&["ABC", "DE"], Palette::default());
        assert_eq!(result.unwrap_err(), BoardError::Ragged { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: [&str; 0] = [];
        assert_eq!(Board::from_rows(&rows, Palette::default()).unwrap_err(), BoardError::Empty);
        assert_eq!(Board::from_rows(&[""], Palette::default()).unwrap_err(), BoardError::Empty);
    }

    #[test]
    fn test_with_fill() {
        let board = Board::with_fill(2, 3, Palette::default(), |row, col| if row == col { 'X' } else { 'O' }).unwrap();
        assert_eq!(board.row_strings(), vec!["XOO".to_string(), "OXO".to_string()]);
        assert_eq!(
            Board::with_fill(0, 3, Palette::default(), |_, _| 'A').unwrap_err(),
            BoardError::Empty
        );
    }

    #[test]
    fn test_char_at_out_of_range() {
        let board = sample();
        assert_eq!(board.char_at(-1, 0), None);
        assert_eq!(board.char_at(0, 4), None);
        assert_eq!(board.char_at(3, 0), None);
    }

    #[test]
    fn test_char_at_never_indexes_past_letters() {
        let mut board = sample();
        board.letter_vals.truncate(1);
        board.letter_vals[0].truncate(1);
        assert_eq!(board.char_at(0, 0), Some('A'));
        assert_eq!(board.char_at(1, 1), None);
        assert_eq!(board.char_at(0, 3), None);
    }

    #[test]
    fn test_recompute_layout_moves_letters() {
        let mut board = sample();
        board.recompute_layout(Size::new(400.0, 300.0));

        let letter = board.letter(2, 3).unwrap();
        assert!((letter.size - 100.0).abs() < f64::EPSILON);
        assert_eq!(letter.origin, Point::new(300.0, 200.0));
        assert_eq!(board.surface(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_recompute_layout_is_idempotent() {
        let mut board = sample();
        board.recompute_layout(Size::new(517.0, 211.0));
        let layout = *board.layout();
        let letters = board.letters().to_vec();

        board.recompute_layout(Size::new(517.0, 211.0));
        assert_eq!(*board.layout(), layout);
        assert_eq!(board.letters(), letters.as_slice());
    }

    #[test]
    fn test_stamp_highlights_cells() {
        let mut board = sample();
        board.stamp(WordPlacement {
            word: "XYZ".into(),
            row: 2,
            col: 0,
            direction: Direction::NE,
        });

        assert_eq!(board.row_strings(), vec!["ABZD", "EYGH", "XJKL"]);
        assert!(board.letter(1, 1).unwrap().highlighted);
        assert!(!board.letter(0, 0).unwrap().highlighted);
        assert_eq!(board.letter(0, 2).unwrap().fill, board.palette().highlight);
        assert_eq!(board.placements().len(), 1);
    }

    #[test]
    fn test_placement_cells() {
        let placement = WordPlacement {
            word: "CAT".into(),
            row: 3,
            col: 2,
            direction: Direction::E,
        };
        assert_eq!(placement.len(), 3);
        assert_eq!(placement.end(), (3, 4));
        assert_eq!(placement.cells(), vec![(3, 2), (3, 3), (3, 4)]);
    }
}
