//! Benchmark profiles for the Wavefront search engine and maze generator.
//!
//! Provides pre-built mazes for benchmarking:
//!
//! - [`reference_maze`]: 101x101 seeded maze (~10K cells)
//! - [`stress_maze`]: 301x301 seeded maze (~90K cells)
//! - [`open_field`]: walled border, empty interior, corner-to-corner search

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wavefront_core::{Cell, CellKind, Grid};
use wavefront_maze::MazeConfig;

/// Wall probability shared by the seeded profiles.
pub const PROFILE_WALL_PROBABILITY: f64 = 0.3;

/// Build the reference benchmark maze: 101x101, p=0.3.
pub fn reference_maze(seed: u64) -> Grid {
    seeded_maze(101, 101, seed)
}

/// Build the stress benchmark maze: 301x301, p=0.3.
///
/// Same layout rules as [`reference_maze`] at roughly 9x the cell count.
pub fn stress_maze(seed: u64) -> Grid {
    seeded_maze(301, 301, seed)
}

fn seeded_maze(rows: u32, cols: u32, seed: u64) -> Grid {
    MazeConfig::new(rows, cols)
        .with_wall_probability(PROFILE_WALL_PROBABILITY)
        .with_seed(seed)
        .generate()
        .unwrap()
}

/// An `n x n` grid with a wall border, start at `(1, 1)` and target at
/// `(n - 2, n - 2)`.
///
/// BFS visits every interior cell before reaching the target, which makes
/// this the worst case for frontier width.
pub fn open_field(n: u32) -> Grid {
    let mut grid = Grid::new(n, n, CellKind::Wall).unwrap();
    for r in 1..n - 1 {
        for c in 1..n - 1 {
            grid.set(Cell::new(r, c), CellKind::Free).unwrap();
        }
    }
    grid.set(Cell::new(1, 1), CellKind::Start).unwrap();
    grid.set(Cell::new(n - 2, n - 2), CellKind::Target).unwrap();
    grid
}
