//! Renderer trait abstraction.

use kurbo::{Point, Size};
use peniko::Color;
use thiserror::Error;
use wordgrid_core::board::Board;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Nothing to render: {0}")]
    EmptyScene(String),
    #[error("Write failed: {0}")]
    Write(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The board to render.
    pub board: &'a Board,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Cell outline color.
    pub grid_line_color: Color,
    /// Cell outline width.
    pub grid_line_width: f64,
    /// Color of the drag line.
    pub selection_color: Color,
    /// Current drag in surface pixels.
    pub selection: Option<(Point, Point)>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context using the board's palette.
    pub fn new(board: &'a Board, viewport_size: Size) -> Self {
        let palette = board.palette();
        Self {
            board,
            viewport_size,
            background_color: palette.background.into(),
            grid_line_color: palette.grid_line.into(),
            grid_line_width: 1.0,
            selection_color: palette.selection.into(),
            selection: None,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the cell outline color and width.
    pub fn with_grid_line(mut self, color: Color, width: f64) -> Self {
        self.grid_line_color = color;
        self.grid_line_width = width;
        self
    }

    /// Set the selection color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Set the current drag.
    pub fn with_selection(mut self, selection: Option<(Point, Point)>) -> Self {
        self.selection = selection;
        self
    }

    /// The drag, if both ends are on the board.
    pub fn visible_selection(&self) -> Option<(Point, Point)> {
        self.selection
            .filter(|&(start, end)| self.board.is_in_board(&[start, end]))
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the draw output for a frame.
    ///
    /// Called once per frame; replaces whatever the previous frame produced.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
