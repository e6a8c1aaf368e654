//! Snap functionality for keeping a drag on one of the eight directions.

use crate::direction::{Direction, DirectionError, get_direction};
use crate::geometry::{Angle, distance};
use kurbo::Point;

/// Result of snapping a drag endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapResult {
    /// The snapped endpoint.
    pub point: Point,
    /// Direction the drag was snapped to.
    pub direction: Direction,
    /// Distance from the start to the original endpoint.
    pub distance: f64,
}

/// Move `end` onto the line from `start` along the nearest direction.
///
/// Horizontal drags keep the start's y, vertical drags keep its x, and
/// diagonal drags keep their length but are forced onto a 45° line in the
/// quadrant the pointer is in.
pub fn snap_drag_endpoint(start: Point, end: Point) -> Result<DragSnapResult, DirectionError> {
    let direction = get_direction(start, end)?;
    let distance = distance(start, end);

    let point = if direction.is_horizontal() {
        Point::new(end.x, start.y)
    } else if direction.is_vertical() {
        Point::new(start.x, end.y)
    } else {
        let diagonal = Angle::from_degrees(45.0);
        let sign_x = if end.x - start.x > 0.0 { 1.0 } else { -1.0 };
        let sign_y = if end.y - start.y > 0.0 { 1.0 } else { -1.0 };
        Point::new(
            start.x + distance * diagonal.cos() * sign_x,
            start.y + distance * diagonal.sin() * sign_y,
        )
    };

    Ok(DragSnapResult {
        point,
        direction,
        distance,
    })
}
