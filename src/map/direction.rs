use std::fmt;

/// One of the four cardinal directions a room can link towards.
///
/// The map grid is row-major with y growing southward, so north is (0, -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed order. Generators shuffle a copy of
    /// this before scanning so no direction is favoured.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing the opposite way.
    ///
    /// For every direction d, `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Direction {
        use self::Direction::*;
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// The grid offset (dx, dy) of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        use self::Direction::*;
        match self {
            North => (0, -1),
            South => (0, 1),
            East => (1, 0),
            West => (-1, 0),
        }
    }

    /// The index of this direction within a room's link table
    pub(in crate::map) fn index(self) -> usize {
        use self::Direction::*;
        match self {
            North => 0,
            South => 1,
            East => 2,
            West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Direction::*;
        write!(f, "{}", match self {
            North => "north",
            South => "south",
            East => "east",
            West => "west",
        })
    }
}
