//! Game session: one board, one gesture, and the word currently selected.

use crate::board::Board;
use crate::config::{ConfigError, ConfigResult, GameConfig};
use crate::direction::DirectionError;
use crate::generator::{BoardGenerator, GenerateError};
use crate::input::{GestureTracker, PointerEvent, SelectionEvent};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Direction(#[from] DirectionError),
}

/// A playable session.
///
/// Board state only changes through [`Game::regenerate`] and [`Game::resize`];
/// the host must not call either while a gesture is in flight.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    generator: BoardGenerator<StdRng>,
    board: Option<Board>,
    tracker: GestureTracker,
    selected_word: String,
}

impl Game {
    /// Create a session from a config, generating the first board when the
    /// config lists words.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let generator = BoardGenerator::new(rng, config.alphabet.clone())
            .with_palette(config.palette)
            .with_max_attempts(config.max_placement_attempts);

        let mut game = Self {
            config,
            generator,
            board: None,
            tracker: GestureTracker::new(),
            selected_word: String::new(),
        };
        if !game.config.words.is_empty() {
            game.new_round()?;
        }
        Ok(game)
    }

    /// Regenerate a board from the configured dimensions and words.
    pub fn new_round(&mut self) -> Result<&Board, GenerateError> {
        let words = self.config.words.clone();
        self.regenerate(self.config.rows, self.config.cols, &words)
    }

    /// Replace the board with a fresh one.
    ///
    /// On failure the previous board (if any) is left untouched and the error
    /// is returned.
    pub fn regenerate<S: AsRef<str>>(&mut self, rows: usize, cols: usize, words: &[S]) -> Result<&Board, GenerateError> {
        let board = match self.generator.fill_board(rows, cols, words, self.config.surface()) {
            Ok(board) => board,
            Err(e) => {
                log::warn!("Board generation failed, keeping previous board: {}", e);
                return Err(e);
            }
        };
        self.config.rows = rows;
        self.config.cols = cols;
        self.config.words = words.iter().map(|w| w.as_ref().to_string()).collect();
        self.tracker.reset();
        self.selected_word.clear();
        Ok(self.board.insert(board))
    }

    /// Fit the board to a new surface size.
    ///
    /// Gesture points are in the old pixel space, so the gesture is dropped.
    /// Non-positive sizes are rejected and leave the session untouched.
    pub fn resize(&mut self, surface: Size) -> ConfigResult<()> {
        if !(surface.width > 0.0 && surface.height > 0.0 && surface.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "surface must be positive, got {}x{}",
                surface.width, surface.height
            )));
        }
        self.config.surface_width = surface.width;
        self.config.surface_height = surface.height;
        if let Some(board) = self.board.as_mut() {
            board.recompute_layout(surface);
        }
        self.tracker.reset();
        Ok(())
    }

    /// Feed a pointer event. Without a board every event is ignored.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Result<Option<SelectionEvent>, DirectionError> {
        let Some(board) = self.board.as_ref() else {
            return Ok(None);
        };
        let selection = self.tracker.handle_pointer_event(event, board)?;
        if let Some(selection) = &selection {
            if !selection.word().is_empty() {
                self.selected_word = selection.word().to_string();
            }
        }
        Ok(selection)
    }

    /// Last non-empty word the player traced.
    pub fn selected_word(&self) -> &str {
        &self.selected_word
    }

    /// Whether the selected word is one of the hidden words.
    pub fn selection_is_target(&self) -> bool {
        !self.selected_word.is_empty() && self.config.words.iter().any(|w| *w == self.selected_word)
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Start and end of the current drag when both lie on the board.
    pub fn selection(&self) -> Option<(Point, Point)> {
        let board = self.board.as_ref()?;
        let (start, end) = (self.tracker.start(), self.tracker.end());
        (self.tracker.has_started() && board.is_in_board(&[start, end])).then_some((start, end))
    }
}
