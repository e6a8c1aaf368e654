//! Colors used to paint the board.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Board colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Surface behind the grid.
    pub background: SerializableColor,
    /// Fill of an ordinary cell.
    pub box_fill: SerializableColor,
    /// Fill of a cell that belongs to a placed word.
    pub highlight: SerializableColor,
    /// Letter color.
    pub text: SerializableColor,
    /// Cell outline.
    pub grid_line: SerializableColor,
    /// Line drawn along the current drag.
    pub selection: SerializableColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: SerializableColor::rgb(135, 206, 235), // Sky blue
            box_fill: SerializableColor::white(),
            highlight: SerializableColor::rgb(254, 240, 138),
            text: SerializableColor::black(),
            grid_line: SerializableColor::black(),
            selection: SerializableColor::rgb(255, 0, 0),
        }
    }
}
