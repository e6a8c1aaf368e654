//! Batch driver: builds a game from the command line and replays drags.

use crate::cli::{Cli, DragSpec};
use kurbo::Point;
use std::io::Write;
use thiserror::Error;
use wordgrid_core::config::{ConfigError, GameConfig};
use wordgrid_core::direction::DirectionError;
use wordgrid_core::game::{Game, GameError};
use wordgrid_core::input::PointerEvent;
use wordgrid_render::{RenderContext, Renderer, RendererError, TextRenderer};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Direction(#[from] DirectionError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("invalid drag {0}")]
    InvalidDrag(String),
    #[error("no words given; pass them as arguments or in the config file")]
    NoWords,
    #[error("output failed: {0}")]
    Output(String),
}

/// Word traced by one replayed drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub drag: DragSpec,
    pub word: String,
    pub is_target: bool,
}

/// The command line application.
pub struct App {
    game: Game,
    solution: bool,
}

impl App {
    /// Merge the config file (if any) with the command line overrides.
    pub fn config_from_cli(cli: &Cli) -> Result<GameConfig, AppError> {
        let mut config = match &cli.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = cli.rows {
            config.rows = rows;
        }
        if let Some(cols) = cli.cols {
            config.cols = cols;
        }
        if let Some(width) = cli.width {
            config.surface_width = width;
        }
        if let Some(height) = cli.height {
            config.surface_height = height;
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }
        if let Some(alphabet) = &cli.alphabet {
            config.alphabet = alphabet.clone();
        }
        if !cli.words.is_empty() {
            config.words = cli.words.clone();
        }
        if config.words.is_empty() {
            return Err(AppError::NoWords);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn new(cli: &Cli) -> Result<Self, AppError> {
        let config = Self::config_from_cli(cli)?;
        log::debug!("Using config: {:?}", config);
        Ok(Self {
            game: Game::new(config)?,
            solution: cli.solution,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Press at `drag.from`, move to `drag.to`, release there.
    pub fn replay(&mut self, drag: DragSpec) -> Result<DragOutcome, AppError> {
        let events = [
            PointerEvent::Down { x: drag.from.x, y: drag.from.y },
            PointerEvent::Move { x: drag.to.x, y: drag.to.y },
            PointerEvent::Up { x: drag.to.x, y: drag.to.y },
        ];
        let mut word = String::new();
        for event in events {
            if let Some(selection) = self.game.handle_pointer_event(event)? {
                word = selection.word().to_string();
            }
        }
        let is_target = self.game.config().words.iter().any(|w| *w == word);
        Ok(DragOutcome { drag, word, is_target })
    }

    /// Print the board, the placements and the result of every drag.
    pub fn run<W: Write>(&mut self, drags: &[DragSpec], out: &mut W) -> Result<(), AppError> {
        let Some(board) = self.game.board() else {
            return Err(AppError::NoWords);
        };
        let mut renderer = TextRenderer::new().with_solution(self.solution);
        renderer.build_scene(&RenderContext::new(board, board.surface()));
        renderer.write_to(out)?;

        let mut lines = vec![String::new(), "Placements:".to_string()];
        for placement in board.placements() {
            lines.push(format!(
                "  {} at ({}, {}) going {:?}",
                placement.word, placement.row, placement.col, placement.direction
            ));
        }
        if !drags.is_empty() {
            lines.push(String::new());
            lines.push("Drags:".to_string());
        }
        for &drag in drags {
            let outcome = self.replay(drag)?;
            lines.push(format!(
                "  {} -> {}: {:?}{}",
                format_point(drag.from),
                format_point(drag.to),
                outcome.word,
                if outcome.is_target { " (found)" } else { "" }
            ));
        }
        for line in lines {
            writeln!(out, "{line}").map_err(|e| AppError::Output(e.to_string()))?;
        }
        Ok(())
    }
}

fn format_point(point: Point) -> String {
    format!("({}, {})", point.x, point.y)
}
