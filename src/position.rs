use std::fmt;

/// Grid cell coordinate, compared and hashed by value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    #[inline]
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Key for row-major ordering (by row, then column)
    #[inline]
    pub(crate) const fn row_major(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
