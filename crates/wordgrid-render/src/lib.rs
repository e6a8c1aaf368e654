//! WordGrid Render Library
//!
//! Renderer abstraction and implementations for WordGrid boards.
//! `DisplayListRenderer` feeds a host canvas; `TextRenderer` prints to a terminal.

mod display_list;
mod renderer;
mod text;

pub use display_list::{DEFAULT_FONT_SCALE, DisplayListRenderer, DrawCommand};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use text::TextRenderer;
