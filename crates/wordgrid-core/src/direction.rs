//! The eight compass directions and angle-to-direction snapping.
//!
//! ```text
//!          N (270)
//!  W (180)         E (0, 360)
//!          S (90)
//! ```
//!
//! Degrees run clockwise from east because the screen y-axis points down.

use crate::geometry::{Angle, angle_between};
use kurbo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of one direction bucket in degrees.
pub const BUCKET_WIDTH: f64 = 45.0;

const HALF_BUCKET: f64 = BUCKET_WIDTH / 2.0;

/// Direction classification errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DirectionError {
    #[error("Invalid angle: {0}°")]
    InvalidAngle(f64),
}

/// A snapped compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    E,
    SE,
    S,
    SW,
    W,
    NW,
    N,
    NE,
}

impl Direction {
    /// All directions, clockwise from east.
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::N,
        Direction::NE,
    ];

    /// Order in which buckets are tested. Boundaries are inclusive on both
    /// sides, so an angle on a boundary belongs to whichever comes first here.
    const PRECEDENCE: [Direction; 8] = [
        Direction::E,
        Direction::N,
        Direction::W,
        Direction::S,
        Direction::NE,
        Direction::NW,
        Direction::SW,
        Direction::SE,
    ];

    /// Center of this direction's bucket in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Direction::E => 0.0,
            Direction::SE => 45.0,
            Direction::S => 90.0,
            Direction::SW => 135.0,
            Direction::W => 180.0,
            Direction::NW => 225.0,
            Direction::N => 270.0,
            Direction::NE => 315.0,
        }
    }

    /// Row and column step for one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Direction::SE | Direction::SW | Direction::NW | Direction::NE)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::E | Direction::W)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::N | Direction::S)
    }

    /// Longest run of cells this direction can cover in a `rows` x `cols` grid.
    pub fn span(self, rows: usize, cols: usize) -> usize {
        if self.is_horizontal() {
            cols
        } else if self.is_vertical() {
            rows
        } else {
            rows.min(cols)
        }
    }

    /// Pick a direction uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether `degrees` falls in this direction's bucket (boundaries inclusive).
    fn bucket_contains(self, degrees: f64) -> bool {
        let center = self.degrees();
        if self == Direction::E {
            // Wraps around 0°, so it is two ranges rather than one
            return degrees >= 360.0 - HALF_BUCKET || degrees <= HALF_BUCKET;
        }
        degrees >= center - HALF_BUCKET && degrees <= center + HALF_BUCKET
    }
}

/// Snap an angle to one of the eight directions.
///
/// Comparisons use the angle rounded to whole degrees, reduced modulo 360.
pub fn snap(angle: Angle) -> Result<Direction, DirectionError> {
    let degrees = angle.rounded_degrees().rem_euclid(360.0);
    Direction::PRECEDENCE
        .into_iter()
        .find(|direction| direction.bucket_contains(degrees))
        .ok_or(DirectionError::InvalidAngle(angle.degrees()))
}

/// Snapped direction of the drag from `from` to `to`.
pub fn get_direction(from: Point, to: Point) -> Result<Direction, DirectionError> {
    snap(angle_between(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snap_deg(degrees: f64) -> Direction {
        snap(Angle::from_degrees(degrees)).unwrap()
    }

    #[test]
    fn test_snap_centers() {
        for direction in Direction::ALL {
            assert_eq!(snap_deg(direction.degrees()), direction);
        }
    }

    #[test]
    fn test_snap_east_wraparound() {
        assert_eq!(snap_deg(0.0), Direction::E);
        assert_eq!(snap_deg(10.0), Direction::E);
        assert_eq!(snap_deg(350.0), Direction::E);
        assert_eq!(snap_deg(359.9), Direction::E);
    }

    #[test]
    fn test_snap_boundaries_follow_precedence() {
        assert_eq!(snap_deg(22.5), Direction::E);
        assert_eq!(snap_deg(337.5), Direction::E);
        assert_eq!(snap_deg(67.5), Direction::S);
        assert_eq!(snap_deg(112.5), Direction::S);
        assert_eq!(snap_deg(157.5), Direction::W);
        assert_eq!(snap_deg(202.5), Direction::W);
        assert_eq!(snap_deg(247.5), Direction::N);
        assert_eq!(snap_deg(292.5), Direction::N);
    }

    #[test]
    fn test_snap_just_past_boundaries() {
        assert_eq!(snap_deg(22.6), Direction::SE);
        assert_eq!(snap_deg(23.0), Direction::SE);
        assert_eq!(snap_deg(337.0), Direction::NE);
        assert_eq!(snap_deg(113.0), Direction::SW);
    }

    #[test]
    fn test_snap_45_is_south_east() {
        assert_eq!(snap_deg(45.0), Direction::SE);
    }

    #[test]
    fn test_snap_is_total_and_periodic() {
        let mut degrees = 0.0;
        while degrees < 360.0 {
            let direction = snap_deg(degrees);
            assert_eq!(snap_deg(degrees + 360.0), direction, "at {degrees}");
            degrees += 0.25;
        }
    }

    #[test]
    fn test_snap_rejects_nan() {
        let result = snap(Angle::from_radians(f64::NAN));
        assert!(matches!(result, Err(DirectionError::InvalidAngle(_))));
    }

    #[test]
    fn test_get_direction() {
        let start = Point::new(50.0, 50.0);
        assert_eq!(get_direction(start, Point::new(90.0, 52.0)).unwrap(), Direction::E);
        assert_eq!(get_direction(start, Point::new(10.0, 50.0)).unwrap(), Direction::W);
        assert_eq!(get_direction(start, Point::new(50.0, 0.0)).unwrap(), Direction::N);
        assert_eq!(get_direction(start, Point::new(90.0, 10.0)).unwrap(), Direction::NE);
        assert_eq!(get_direction(start, Point::new(10.0, 90.0)).unwrap(), Direction::SW);
    }

    #[test]
    fn test_delta_matches_degrees() {
        for direction in Direction::ALL {
            let (drow, dcol) = direction.delta();
            let from = Point::new(0.0, 0.0);
            let to = Point::new(dcol as f64, drow as f64);
            assert_eq!(get_direction(from, to).unwrap(), direction);
        }
    }

    #[test]
    fn test_axis_classification() {
        let diagonals: Vec<Direction> = Direction::ALL.into_iter().filter(|d| d.is_diagonal()).collect();
        assert_eq!(diagonals, vec![Direction::SE, Direction::SW, Direction::NW, Direction::NE]);
        for direction in Direction::ALL {
            let axes = [direction.is_diagonal(), direction.is_horizontal(), direction.is_vertical()];
            assert_eq!(axes.iter().filter(|&&a| a).count(), 1, "{direction:?}");
        }
    }

    #[test]
    fn test_span() {
        assert_eq!(Direction::E.span(4, 7), 7);
        assert_eq!(Direction::N.span(4, 7), 4);
        assert_eq!(Direction::SW.span(4, 7), 4);
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Direction::random(&mut rng));
        }
        assert_eq!(seen.len(), 8);
    }
}
