use crate::direction::{Direction, Heading};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinate. Entities compare positions by value, never by identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, or `None` when it leaves a `width` x `height` grid
    #[inline]
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < height && col < width).then_some(Position { row, col })
    }

    /// Manhattan distance between two cells
    #[inline]
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Coordinate delta from `self` to `target`
    pub fn heading_to(self, target: Position) -> Heading {
        Heading {
            d_row: target.row as i32 - self.row as i32,
            d_col: target.col as i32 - self.col as i32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
