//! The [`Cell`] coordinate type and the fixed 4-connected [`Direction`] order.

use std::fmt;

/// A grid coordinate `(row, col)`.
///
/// Used directly as the key for every map, set, queue entry and edge
/// endpoint in the workspace. Two cells are equal iff both components
/// match. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl Cell {
    /// Construct a cell from its row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step in `dir`.
    ///
    /// Returns `None` when the step would produce a negative coordinate
    /// or overflow `u32`. Upper bounds are the grid's concern, not the
    /// cell's.
    pub fn neighbour(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one of this cell's four axis-aligned neighbours.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

/// One of the four axis-aligned moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row - 1.
    Up,
    /// Col + 1.
    Right,
    /// Row + 1.
    Down,
    /// Col - 1.
    Left,
}

impl Direction {
    /// Neighbour scan order used by the search engine.
    ///
    /// The order fixes the sequence of discovery edges within a step.
    /// It has no effect on depths or path lengths.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(d_row, d_col)` for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}
