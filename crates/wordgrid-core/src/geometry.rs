//! Angle type and pure geometric helpers on pixel-space points.

use kurbo::Point;
use std::f64::consts::{PI, TAU};
use std::fmt;

/// Sentinel used for gesture points before any press has happened.
pub const UNSET_POINT: Point = Point::new(-1.0, -1.0);

const DEGREE_NOISE_SCALE: f64 = 1e9;

/// An angle stored in radians.
///
/// Direction logic compares in degrees, but the radian value is kept as the
/// source of truth so repeated conversions don't accumulate drift.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees_to_radians(degrees))
    }

    /// Angle of the vector (x, y), as returned by `atan2(y, x)`.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    pub fn radians(self) -> f64 {
        self.radians
    }

    pub fn degrees(self) -> f64 {
        radians_to_degrees(self.radians)
    }

    /// Degrees rounded to the nearest integer, ties to even.
    ///
    /// This is the value direction buckets are compared against. Ties to even
    /// keeps every 22.5° boundary on the bucket that wins by precedence.
    pub fn rounded_degrees(self) -> f64 {
        // Strip rad/deg conversion noise first so exact half degrees still tie.
        let degrees = (self.degrees() * DEGREE_NOISE_SCALE).round() / DEGREE_NOISE_SCALE;
        degrees.round_ties_even()
    }

    pub fn add_degrees(self, degrees: f64) -> Self {
        Self::from_radians(self.radians + degrees_to_radians(degrees))
    }

    pub fn add_radians(self, radians: f64) -> Self {
        Self::from_radians(self.radians + radians)
    }

    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    pub fn tan(self) -> f64 {
        self.radians.tan()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deg: {}°, rad: {}rad", self.degrees(), self.radians)
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Bearing from `from` to `to`, clockwise from east with y pointing down.
///
/// The result is always in [0, 360) degrees.
pub fn angle_between(from: Point, to: Point) -> Angle {
    let radians = (to.y - from.y).atan2(to.x - from.x).rem_euclid(TAU);
    // A tiny negative bearing wraps to exactly TAU after rounding
    Angle::from_radians(if radians >= TAU { 0.0 } else { radians })
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Slope of the line through two points. Infinite for vertical lines.
pub fn slope(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}
