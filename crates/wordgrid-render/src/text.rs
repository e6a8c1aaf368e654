//! Plain-text renderer for terminals and logs.

use crate::renderer::{RenderContext, Renderer, RenderResult, RendererError};
use std::io::Write;

/// Placeholder for cells outside every placed word in solution mode.
const HIDDEN_CELL: char = '.';

/// Renders the board as rows of space-separated characters.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    output: String,
    solution: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only show cells covered by placed words.
    pub fn with_solution(mut self, solution: bool) -> Self {
        self.solution = solution;
        self
    }

    /// Text from the last [`Renderer::build_scene`] call.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Write the last frame to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> RenderResult<()> {
        if self.output.is_empty() {
            return Err(RendererError::EmptyScene("build_scene has not been called".to_string()));
        }
        out.write_all(self.output.as_bytes())
            .map_err(|e| RendererError::Write(e.to_string()))
    }
}

impl Renderer for TextRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.output.clear();
        for row in ctx.board.letters() {
            let line: Vec<String> = row
                .iter()
                .map(|letter| {
                    if self.solution && !letter.highlighted {
                        HIDDEN_CELL.to_string()
                    } else {
                        letter.value.to_string()
                    }
                })
                .collect();
            self.output.push_str(&line.join(" "));
            self.output.push('\n');
        }
    }
}
