//! Display-list renderer: flattens a frame into draw commands a host canvas
//! can replay in order.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Point, Rect};
use peniko::Color;

/// Default glyph size relative to the cell edge.
pub const DEFAULT_FONT_SCALE: f64 = 0.5;

/// Selection line width relative to the cell edge.
const SELECTION_WIDTH_SCALE: f64 = 0.1;

/// One drawing primitive in surface pixels.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f64 },
    /// A glyph centered on `center`.
    Text { center: Point, text: char, size: f64, color: Color },
    Line { from: Point, to: Point, color: Color, width: f64 },
}

/// Renderer that records a frame as a list of [`DrawCommand`]s.
///
/// Order: background, then for every cell its fill, outline and glyph (row
/// major), then the selection line on top.
#[derive(Debug, Clone)]
pub struct DisplayListRenderer {
    commands: Vec<DrawCommand>,
    font_scale: f64,
}

impl Default for DisplayListRenderer {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            font_scale: DEFAULT_FONT_SCALE,
        }
    }
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph size as a fraction of the cell edge.
    pub fn with_font_scale(mut self, scale: f64) -> Self {
        self.font_scale = scale;
        self
    }

    /// Commands from the last [`Renderer::build_scene`] call.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn render_cells(&mut self, ctx: &RenderContext) {
        for letter in ctx.board.letters().iter().flatten() {
            if letter.size <= 0.0 {
                continue;
            }
            let rect = letter.rect();
            self.commands.push(DrawCommand::FillRect {
                rect,
                color: letter.fill.into(),
            });
            self.commands.push(DrawCommand::StrokeRect {
                rect,
                color: ctx.grid_line_color,
                width: ctx.grid_line_width,
            });
            self.commands.push(DrawCommand::Text {
                center: letter.center(),
                text: letter.value,
                size: letter.size * self.font_scale,
                color: letter.text_color.into(),
            });
        }
    }

    fn render_selection(&mut self, ctx: &RenderContext) {
        let Some((from, to)) = ctx.visible_selection() else {
            return;
        };
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: ctx.selection_color,
            width: ctx.board.layout().box_size * SELECTION_WIDTH_SCALE,
        });
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::from_origin_size(Point::ZERO, ctx.viewport_size),
            color: self.background_color(ctx),
        });
        self.render_cells(ctx);
        self.render_selection(ctx);
        log::trace!("Built display list with {} commands", self.commands.len());
    }
}
