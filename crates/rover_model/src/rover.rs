//! The rover: a point robot on an unbounded integer grid.

use std::fmt;

use crate::heading::Heading;

/// Position and heading of the rover.
///
/// Coordinates are signed 64-bit integers with no bounds, walls, or
/// wraparound. The heading is always one of the four cardinal
/// directions; the type makes other states unrepresentable.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rover {
    /// Grid x coordinate (east positive).
    x: i64,
    /// Grid y coordinate (north positive).
    y: i64,
    /// Current facing direction.
    heading: Heading,
}

impl Rover {
    /// Creates a rover at the origin, facing north.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: Heading::North,
        }
    }

    /// Creates a rover at the given position and heading.
    #[must_use]
    pub const fn at(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the current heading.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns the position as an (x, y) pair.
    #[must_use]
    pub const fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Displaces the rover `steps` units along its heading.
    ///
    /// Negative steps move the rover backward. The grid is unbounded,
    /// so movement always succeeds.
    pub fn advance(&mut self, steps: i64) {
        let (dx, dy) = self.heading.unit_vector();
        self.x += dx * steps;
        self.y += dy * steps;
    }

    /// Rotates the heading 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotates the heading 90 degrees clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Moves the rover to the given coordinates, keeping its heading.
    pub fn set_position(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }

    /// Points the rover along the given heading.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Returns the rover to the origin, facing north.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Rover {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Rover {
    /// Formats the status line: `(x, y) heading=H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) heading={}", self.x, self.y, self.heading)
    }
}
