//! Pointer gesture tracking: press, drag and release over the board.

use crate::board::Board;
use crate::direction::DirectionError;
use crate::geometry::UNSET_POINT;
use crate::resolver::resolve_word;
use crate::snap::snap_drag_endpoint;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in surface-local pixels.
///
/// Mouse and touch input are expected to be normalized into this by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => Point::new(x, y),
        }
    }
}

/// What a gesture produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The drag reached a new cell.
    Updated { word: String, start: Point, end: Point },
    /// The pointer was released; `word` is the gesture's final value.
    Finished { word: String },
}

impl SelectionEvent {
    pub fn word(&self) -> &str {
        match self {
            SelectionEvent::Updated { word, .. } | SelectionEvent::Finished { word } => word,
        }
    }
}

/// Tracks the current drag gesture.
///
/// Both points are quantized to cell centers. They start out as
/// [`UNSET_POINT`] and keep their last values after release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    start: Point,
    end: Point,
    pressed: bool,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            start: UNSET_POINT,
            end: UNSET_POINT,
            pressed: false,
        }
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a press has ever happened.
    pub fn has_started(&self) -> bool {
        self.start != UNSET_POINT
    }

    /// Process a pointer event against the current board.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, board: &Board) -> Result<Option<SelectionEvent>, DirectionError> {
        match event {
            PointerEvent::Down { .. } => {
                self.on_pointer_down(event.position(), board);
                Ok(None)
            }
            PointerEvent::Move { .. } => self.on_pointer_move(event.position(), board),
            PointerEvent::Up { .. } => self.on_pointer_up(board),
        }
    }

    /// Start a gesture at the cell under `position`.
    pub fn on_pointer_down(&mut self, position: Point, board: &Board) {
        let start = board.layout().quantize(position);
        self.start = start;
        self.end = start;
        self.pressed = true;
    }

    /// Extend the gesture. Emits only when the snapped end cell changes.
    pub fn on_pointer_move(&mut self, position: Point, board: &Board) -> Result<Option<SelectionEvent>, DirectionError> {
        if !self.pressed {
            return Ok(None);
        }
        let snapped = snap_drag_endpoint(self.start, position)?;
        let end = board.layout().quantize(snapped.point);
        if end == self.end {
            return Ok(None);
        }
        self.end = end;
        let word = resolve_word(board, self.start, end)?;
        Ok(Some(SelectionEvent::Updated {
            word,
            start: self.start,
            end,
        }))
    }

    /// End the gesture. The last end point is final; nothing is rolled back.
    pub fn on_pointer_up(&mut self, board: &Board) -> Result<Option<SelectionEvent>, DirectionError> {
        if !self.pressed {
            return Ok(None);
        }
        self.pressed = false;
        let word = resolve_word(board, self.start, self.end)?;
        Ok(Some(SelectionEvent::Finished { word }))
    }

    /// Forget the current gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Palette;
    use kurbo::Size;

    fn board() -> Board {
        let mut board = Board::from_rows(&["CATX", "OQRS", "WBGU", "LMNP"], Palette::default()).unwrap();
        board.recompute_layout(Size::new(400.0, 400.0));
        board
    }

    #[test]
    fn test_initial_state() {
        let tracker = GestureTracker::new();
        assert_eq!(tracker.start(), UNSET_POINT);
        assert_eq!(tracker.end(), UNSET_POINT);
        assert!(!tracker.is_pressed());
        assert!(!tracker.has_started());
    }

    #[test]
    fn test_down_quantizes_start() {
        let board = board();
        let mut tracker = GestureTracker::new();
        let event = tracker.handle_pointer_event(PointerEvent::Down { x: 12.0, y: 88.0 }, &board).unwrap();

        assert!(event.is_none());
        assert!(tracker.is_pressed());
        assert_eq!(tracker.start(), Point::new(50.0, 50.0));
        assert_eq!(tracker.end(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_drag_emits_on_cell_change_only() {
        let board = board();
        let mut tracker = GestureTracker::new();
        tracker.on_pointer_down(Point::new(40.0, 60.0), &board);

        // Still inside the start cell
        assert_eq!(tracker.on_pointer_move(Point::new(70.0, 55.0), &board).unwrap(), None);

        let event = tracker.on_pointer_move(Point::new(160.0, 70.0), &board).unwrap().unwrap();
        assert_eq!(event.word(), "CA");

        // Same cell again: nothing new
        assert_eq!(tracker.on_pointer_move(Point::new(170.0, 40.0), &board).unwrap(), None);

        let event = tracker.on_pointer_move(Point::new(290.0, 90.0), &board).unwrap().unwrap();
        assert_eq!(
            event,
            SelectionEvent::Updated {
                word: "CAT".into(),
                start: Point::new(50.0, 50.0),
                end: Point::new(250.0, 50.0),
            }
        );
    }

    #[test]
    fn test_release_reports_final_word() {
        let board = board();
        let mut tracker = GestureTracker::new();
        tracker.on_pointer_down(Point::new(50.0, 50.0), &board);
        tracker.on_pointer_move(Point::new(50.0, 340.0), &board).unwrap();

        let event = tracker.handle_pointer_event(PointerEvent::Up { x: 0.0, y: 0.0 }, &board).unwrap();
        assert_eq!(event, Some(SelectionEvent::Finished { word: "COWL".into() }));
        assert!(!tracker.is_pressed());
        // Points survive the release
        assert_eq!(tracker.end(), Point::new(50.0, 350.0));
    }

    #[test]
    fn test_diagonal_drag_is_snapped() {
        let board = board();
        let mut tracker = GestureTracker::new();
        tracker.on_pointer_down(Point::new(50.0, 50.0), &board);

        // Slightly off the 45° line, ends on the diagonal anyway
        let event = tracker.on_pointer_move(Point::new(260.0, 235.0), &board).unwrap().unwrap();
        assert_eq!(event.word(), "CQG");
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let board = board();
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.on_pointer_move(Point::new(150.0, 50.0), &board).unwrap(), None);
        assert_eq!(tracker.on_pointer_up(&board).unwrap(), None);
        assert_eq!(tracker.end(), UNSET_POINT);
    }

    #[test]
    fn test_drag_off_board_resolves_empty() {
        let board = board();
        let mut tracker = GestureTracker::new();
        tracker.on_pointer_down(Point::new(350.0, 50.0), &board);

        let event = tracker.on_pointer_move(Point::new(480.0, 50.0), &board).unwrap().unwrap();
        assert_eq!(event.word(), "");
    }

    #[test]
    fn test_pointer_event_serde() {
        let event: PointerEvent = serde_json::from_str(r#"{"phase": "move", "x": 3.5, "y": 4.0}"#).unwrap();
        assert_eq!(event, PointerEvent::Move { x: 3.5, y: 4.0 });
        assert_eq!(event.position(), Point::new(3.5, 4.0));
    }

    #[test]
    fn test_reset() {
        let board = board();
        let mut tracker = GestureTracker::new();
        tracker.on_pointer_down(Point::new(50.0, 50.0), &board);
        tracker.reset();
        assert_eq!(tracker, GestureTracker::new());
    }
}
