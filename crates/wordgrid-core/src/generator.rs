//! Random board generation with conflict-aware word placement.

use crate::alphabet::Alphabet;
use crate::board::{Board, WordPlacement};
use crate::direction::Direction;
use crate::style::Palette;
use crate::walker::{end_cell, walk};
use kurbo::Size;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// Default number of start cells tried per word before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Board generation errors. A failed generation never produces a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("No words to place")]
    EmptyWordList,
    #[error("Word #{index} is empty")]
    EmptyWord { index: usize },
    #[error("Alphabet has no letters")]
    EmptyAlphabet,
    #[error("Word {word:?} uses {letter:?}, which is not in the alphabet")]
    UnknownLetter { word: String, letter: char },
    #[error("Word {word:?} could not be placed after {attempts} attempts")]
    UnplaceableWord { word: String, attempts: usize },
}

/// Characters assigned by already-placed words, keyed by (row, col).
///
/// Only lives for the duration of one generation.
#[derive(Debug, Clone, Default)]
pub struct PlacementMap {
    cells: HashMap<(usize, usize), char>,
}

impl PlacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(&(row, col)).copied()
    }

    pub fn record(&mut self, row: usize, col: usize, letter: char) {
        self.cells.insert((row, col), letter);
    }

    /// Record every letter of a placement.
    pub fn record_placement(&mut self, placement: &WordPlacement) {
        let chars: Vec<char> = placement.word.chars().collect();
        walk(
            placement.direction,
            placement.row as isize,
            placement.col as isize,
            chars.len(),
            |row, col, index| {
                if row >= 0 && col >= 0 {
                    self.record(row as usize, col as usize, chars[index]);
                }
            },
        );
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Whether `word` can start at (`row`, `col`) going `direction` in a
/// `rows` x `cols` grid.
///
/// The whole word must fit inside the grid, and every cell it crosses must be
/// either unclaimed or already hold the same character. Random filler letters
/// are never in the map, so overwriting them is always allowed.
pub fn is_valid_placement(
    rows: usize,
    cols: usize,
    map: &PlacementMap,
    row: usize,
    col: usize,
    word: &[char],
    direction: Direction,
) -> bool {
    if word.is_empty() || row >= rows || col >= cols {
        return false;
    }
    let (end_row, end_col) = end_cell(direction, row as isize, col as isize, word.len());
    if end_row < 0 || end_col < 0 || end_row as usize >= rows || end_col as usize >= cols {
        return false;
    }

    let mut valid = true;
    walk(direction, row as isize, col as isize, word.len(), |r, c, index| {
        if let Some(existing) = map.get(r as usize, c as usize) {
            if existing != word[index] {
                valid = false;
            }
        }
    });
    valid
}

/// Builds boards from word lists.
#[derive(Debug, Clone)]
pub struct BoardGenerator<R> {
    rng: R,
    alphabet: Alphabet,
    palette: Palette,
    max_attempts: usize,
}

impl<R: Rng> BoardGenerator<R> {
    pub fn new(rng: R, alphabet: Alphabet) -> Self {
        Self {
            rng,
            alphabet,
            palette: Palette::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate a `rows` x `cols` board containing every word, laid out for
    /// `surface`.
    ///
    /// Either every word is placed or an error is returned; nothing is
    /// partially built.
    pub fn fill_board<S: AsRef<str>>(
        &mut self,
        rows: usize,
        cols: usize,
        words: &[S],
        surface: Size,
    ) -> Result<Board, GenerateError> {
        let words = self.validate(rows, cols, words)?;

        let alphabet = self.alphabet.clone();
        let rng = &mut self.rng;
        let mut board = Board::with_fill(rows, cols, self.palette, |_, _| {
            // validate() rejected empty alphabets
            alphabet.random_letter(&mut *rng).unwrap_or(' ')
        })
        .map_err(|_| GenerateError::InvalidDimensions { rows, cols })?;

        let mut map = PlacementMap::new();
        for word in &words {
            let placement = self.place_word(rows, cols, word, &map)?;
            log::debug!(
                "Placed {:?} at ({}, {}) going {:?}",
                placement.word,
                placement.row,
                placement.col,
                placement.direction
            );
            map.record_placement(&placement);
            board.stamp(placement);
        }

        board.recompute_layout(surface);
        log::info!("Generated {}x{} board with {} words", rows, cols, words.len());
        Ok(board)
    }

    /// Check inputs before anything is generated.
    fn validate<S: AsRef<str>>(&self, rows: usize, cols: usize, words: &[S]) -> Result<Vec<Vec<char>>, GenerateError> {
        if rows == 0 || cols == 0 {
            return Err(GenerateError::InvalidDimensions { rows, cols });
        }
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }
        if self.alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        let mut out = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let chars: Vec<char> = word.chars().collect();
            if chars.is_empty() {
                return Err(GenerateError::EmptyWord { index });
            }
            if let Some(&letter) = chars.iter().find(|&&c| !self.alphabet.contains(c)) {
                return Err(GenerateError::UnknownLetter { word: word.to_string(), letter });
            }
            if chars.len() > rows.max(cols) {
                return Err(GenerateError::UnplaceableWord { word: word.to_string(), attempts: 0 });
            }
            out.push(chars);
        }

        let total: usize = out.iter().map(Vec::len).sum();
        if total > rows * cols {
            log::warn!("{} letters of words for only {} cells; placement relies on overlaps", total, rows * cols);
        }
        Ok(out)
    }

    /// Pick a direction that can hold the word, then sample start cells until
    /// one is valid or the attempt budget runs out.
    fn place_word(
        &mut self,
        rows: usize,
        cols: usize,
        word: &[char],
        map: &PlacementMap,
    ) -> Result<WordPlacement, GenerateError> {
        let fitting: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| word.len() <= direction.span(rows, cols))
            .collect();
        let word_string: String = word.iter().collect();
        if fitting.is_empty() {
            return Err(GenerateError::UnplaceableWord { word: word_string, attempts: 0 });
        }

        let direction = fitting[self.rng.random_range(0..fitting.len())];
        for _ in 0..self.max_attempts {
            let row = self.rng.random_range(0..rows);
            let col = self.rng.random_range(0..cols);
            if is_valid_placement(rows, cols, map, row, col, word, direction) {
                return Ok(WordPlacement {
                    word: word_string,
                    row,
                    col,
                    direction,
                });
            }
        }

        log::warn!("Gave up placing {:?} going {:?} after {} attempts", word_string, direction, self.max_attempts);
        Err(GenerateError::UnplaceableWord {
            word: word_string,
            attempts: self.max_attempts,
        })
    }
}
