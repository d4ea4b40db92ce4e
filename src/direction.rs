use serde::{Deserialize, Serialize};

/// The 4 grid directions, in neighbor lookup order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// All possible directions, north/south/east/west
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row/column offset of one step in this direction
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Coordinate delta of an ant's last step, `(0, 0)` when it has not moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub d_row: i32,
    pub d_col: i32,
}

impl Heading {
    pub const STILL: Heading = Heading { d_row: 0, d_col: 0 };
}
