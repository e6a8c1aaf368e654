//! Grid layout: converts between surface pixels and cell indices.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Placement of a `rows` x `cols` grid of square cells inside a drawable surface.
///
/// The grid is scaled to the largest cell size that fits the surface and
/// centered along the axis with leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    /// Padding between the surface origin and the grid's top-left corner.
    pub offset: Vec2,
    /// Edge length of every cell.
    pub box_size: f64,
}

impl GridLayout {
    /// Create a layout for the given dimensions. Call [`GridLayout::recompute`]
    /// before mapping points; until then the cell size is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            offset: Vec2::ZERO,
            box_size: 0.0,
        }
    }

    /// Fit the grid to a surface of the given size.
    pub fn recompute(&mut self, surface: Size) {
        if self.rows == 0 || self.cols == 0 {
            self.offset = Vec2::ZERO;
            self.box_size = 0.0;
            return;
        }
        let cell_width = surface.width / self.cols as f64;
        let cell_height = surface.height / self.rows as f64;
        self.box_size = cell_width.min(cell_height);

        self.offset = Vec2::new(
            (cell_width - self.box_size) * self.cols as f64 / 2.0,
            (cell_height - self.box_size) * self.rows as f64 / 2.0,
        );
    }

    /// Map a pixel point to a (row, col) index.
    ///
    /// Rounds to the nearest index instead of flooring, so a point already
    /// quantized to a cell center always lands on that cell. Indices may fall
    /// outside the grid.
    pub fn pixel_to_cell(&self, point: Point) -> (isize, isize) {
        let half = self.box_size / 2.0;
        let col = (point.x - self.offset.x - half) / self.box_size;
        let row = (point.y - self.offset.y - half) / self.box_size;
        (round_half_up(row), round_half_up(col))
    }

    /// Top-left pixel anchor of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        Point::new(
            col as f64 * self.box_size + self.offset.x,
            row as f64 * self.box_size + self.offset.y,
        )
    }

    /// Pixel center of a cell.
    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        self.cell_origin(row, col) + Vec2::new(self.box_size / 2.0, self.box_size / 2.0)
    }

    /// Snap a point to the center of the cell containing it.
    pub fn quantize(&self, point: Point) -> Point {
        let half = self.box_size / 2.0;
        let x = point.x - self.offset.x;
        let y = point.y - self.offset.y;

        let x = (x / self.box_size).floor() * self.box_size + half;
        let y = (y / self.box_size).floor() * self.box_size + half;

        Point::new(x + self.offset.x, y + self.offset.y)
    }

    /// Bounding box of the whole grid in surface pixels.
    pub fn bounds(&self) -> Rect {
        let top_left = Point::new(self.offset.x, self.offset.y);
        Rect::from_origin_size(
            top_left,
            Size::new(
                self.box_size * self.cols as f64,
                self.box_size * self.rows as f64,
            ),
        )
    }

    /// Corners of the grid: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        let bounds = self.bounds();
        [
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x1, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
            Point::new(bounds.x1, bounds.y1),
        ]
    }

    /// Whether every point lies inside the grid, edges included.
    pub fn is_in_board(&self, points: &[Point]) -> bool {
        let bounds = self.bounds();
        points.iter().all(|p| {
            p.x >= bounds.x0 && p.x <= bounds.x1 && p.y >= bounds.y0 && p.y <= bounds.y1
        })
    }

    /// Whether a (possibly negative) index pair addresses a cell.
    pub fn contains_cell(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
}

/// Round to the nearest integer with halves going up, matching how browsers
/// round pointer coordinates.
fn round_half_up(value: f64) -> isize {
    (value + 0.5).floor() as isize
}
