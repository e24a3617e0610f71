//! Cardinal headings.
//!
//! The rover always faces one of four directions, ordered cyclically
//! N, E, S, W. Turning left or right steps through that cycle.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Heading {
    /// Up the grid: +y.
    #[default]
    North,
    /// Right across the grid: +x.
    East,
    /// Down the grid: -y.
    South,
    /// Left across the grid: -x.
    West,
}

impl Heading {
    /// All four headings in cyclic order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the heading 90 degrees counter-clockwise from this one.
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Returns the heading 90 degrees clockwise from this one.
    #[must_use]
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Returns the displacement (dx, dy) of one step along this heading.
    #[must_use]
    pub const fn unit_vector(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Returns the single-letter name of this heading.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl FromStr for Heading {
    type Err = Error;

    /// Parses a single-letter heading, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "E" => Ok(Self::East),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            _ => Err(Error::invalid_heading(s)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
