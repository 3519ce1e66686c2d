use crate::error::WorldError;
use std::fmt;
use std::str::FromStr;

/// Compass orientation of an adventurer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Heading {
    /// All possible headings
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// Single-character symbol used in scenario files
    pub const fn symbol(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::South => 'S',
            Heading::East => 'E',
            Heading::West => 'W',
        }
    }

    /// Heading for a scenario symbol
    pub fn from_symbol(symbol: char) -> Result<Self, WorldError> {
        match symbol {
            'N' => Ok(Heading::North),
            'S' => Ok(Heading::South),
            'E' => Ok(Heading::East),
            'W' => Ok(Heading::West),
            other => Err(WorldError::InvalidHeading(other.to_string())),
        }
    }

    /// Quarter turn counter-clockwise
    #[inline]
    pub const fn rotate_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Quarter turn clockwise
    #[inline]
    pub const fn rotate_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit step `(dx, dy)`; y grows southwards
    #[inline]
    pub const fn forward_offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::South => (0, 1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = WorldError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Heading::from_symbol(symbol)
    }
}

impl FromStr for Heading {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::from_symbol(c),
            _ => Err(WorldError::InvalidHeading(s.to_string())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
