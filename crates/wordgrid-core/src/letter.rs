//! A single grid cell as painted on the surface.

use crate::style::SerializableColor;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// One cell: its character, where it sits, and how it is colored.
///
/// Letters are created when a board is built and updated in place on every
/// layout change; they live until the board is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    /// Character shown in the cell.
    pub value: char,
    /// Top-left pixel anchor.
    pub origin: Point,
    /// Edge length of the (square) cell.
    pub size: f64,
    /// Box fill color.
    pub fill: SerializableColor,
    /// Text color.
    pub text_color: SerializableColor,
    /// Whether a placed word covers this cell.
    pub highlighted: bool,
}

impl Letter {
    pub fn new(value: char, fill: SerializableColor, text_color: SerializableColor) -> Self {
        Self {
            value,
            origin: Point::ZERO,
            size: 0.0,
            fill,
            text_color,
            highlighted: false,
        }
    }

    /// Move and resize the cell.
    pub fn set_geometry(&mut self, origin: Point, size: f64) {
        self.origin = origin;
        self.size = size;
    }

    /// Overwrite the character and mark the cell as part of a word.
    pub fn highlight(&mut self, value: char, fill: SerializableColor) {
        self.value = value;
        self.fill = fill;
        self.highlighted = true;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, Size::new(self.size, self.size))
    }

    pub fn top_left(&self) -> Point {
        self.origin
    }

    pub fn top_right(&self) -> Point {
        self.origin + Vec2::new(self.size, 0.0)
    }

    pub fn bottom_left(&self) -> Point {
        self.origin + Vec2::new(0.0, self.size)
    }

    pub fn bottom_right(&self) -> Point {
        self.origin + Vec2::new(self.size, self.size)
    }

    pub fn center(&self) -> Point {
        self.origin + Vec2::new(self.size / 2.0, self.size / 2.0)
    }
}
