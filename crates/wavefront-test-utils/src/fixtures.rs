//! Reusable maze fixtures.
//!
//! - [`open_room`]: walled border, fully open interior.
//! - [`walled_target`]: target boxed in by walls on all four sides.
//! - [`classic_maze`]: the hand-drawn 10x10 demo maze.
//! - [`corridor`]: a single-row passage, start at one end, target at the other.
//!
//! Fixtures panic on misuse; they are only for tests and benches.

use wavefront_core::{Cell, CellKind, Grid};

/// The 10x10 demo maze as cell codes (0 free, 1 wall, 2 start, 3 target).
///
/// Start `(1, 1)`, target `(7, 3)`, shortest route 10 moves.
pub const CLASSIC_MAZE: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 3, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// The demo maze as a [`Grid`].
pub fn classic_maze() -> Grid {
    Grid::from_codes(&CLASSIC_MAZE).unwrap()
}

/// A `rows x cols` grid with a wall border and an open interior.
pub fn open_room(rows: u32, cols: u32, start: Cell, target: Cell) -> Grid {
    let mut g = Grid::new(rows, cols, CellKind::Free).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                g.set(Cell::new(r, c), CellKind::Wall).unwrap();
            }
        }
    }
    g.set(start, CellKind::Start).unwrap();
    g.set(target, CellKind::Target).unwrap();
    g
}

/// 7x7 room whose target at `(3, 4)` is surrounded by walls.
pub fn walled_target() -> Grid {
    "
    #######
    #S....#
    #...#.#
    #..#T##
    #...#.#
    #.....#
    #######
    "
    .parse()
    .unwrap()
}

/// `1 x len` passage `S...T`.
pub fn corridor(len: u32) -> Grid {
    assert!(len >= 2, "corridor needs room for start and target");
    let mut g = Grid::new(1, len, CellKind::Free).unwrap();
    g.set(Cell::new(0, 0), CellKind::Start).unwrap();
    g.set(Cell::new(0, len - 1), CellKind::Target).unwrap();
    g
}
