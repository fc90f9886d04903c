//! Random wall placement plus the connectivity carve.
//!
//! Generation has two phases:
//!
//! 1. **Scatter**: the border is all walls; every interior cell is a wall
//!    with probability `p`, otherwise free. Start goes to `(1, 1)` and
//!    target to `(rows - 2, cols - 2)`.
//! 2. **Carve**: a walker leaves the start and, each round, flips a fair
//!    coin between the row axis and the column axis. It steps one cell
//!    toward the target on the chosen axis (or stays put if that axis is
//!    already aligned) and clears any wall it lands on. The walk ends on
//!    the target, leaving a monotone free route behind it.

use rand::Rng;
use tracing::debug;
use wavefront_core::{Cell, CellKind, GenerateError, Grid};

use crate::config::{self, MazeConfig, DEFAULT_WALL_PROBABILITY};

/// Generate a solvable `rows x cols` maze with a fresh random seed.
///
/// `wall_probability` defaults to [`DEFAULT_WALL_PROBABILITY`].
///
/// # Errors
///
/// See [`MazeConfig::validate`].
///
/// # Examples
///
/// ```
/// use wavefront_core::{Cell, CellKind};
/// use wavefront_maze::generate_maze;
///
/// let grid = generate_maze(12, 16, None).unwrap();
/// assert_eq!(grid.kind(Cell::new(1, 1)), Some(CellKind::Start));
/// assert_eq!(grid.kind(Cell::new(10, 14)), Some(CellKind::Target));
/// assert!(grid.has_wall_border());
/// ```
pub fn generate_maze(
    rows: u32,
    cols: u32,
    wall_probability: Option<f64>,
) -> Result<Grid, GenerateError> {
    MazeConfig {
        rows,
        cols,
        wall_probability: wall_probability.unwrap_or(DEFAULT_WALL_PROBABILITY),
        seed: None,
    }
    .generate()
}

/// Generate a solvable maze drawing all randomness from `rng`.
///
/// # Errors
///
/// See [`MazeConfig::validate`].
pub fn generate_maze_with<R: Rng + ?Sized>(
    rows: u32,
    cols: u32,
    wall_probability: f64,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    config::validate_dimensions(rows, cols)?;
    config::validate_wall_probability(wall_probability)?;
    build(rows, cols, wall_probability, rng)
}

/// Scatter and carve. Inputs must already be validated.
pub(crate) fn build<R: Rng + ?Sized>(
    rows: u32,
    cols: u32,
    p: f64,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let start = Cell::new(1, 1);
    let target = Cell::new(rows - 2, cols - 2);

    let mut cells: Vec<Vec<CellKind>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let border = r == 0 || c == 0 || r == rows - 1 || c == cols - 1;
                    if border || rng.random_bool(p) {
                        CellKind::Wall
                    } else {
                        CellKind::Free
                    }
                })
                .collect()
        })
        .collect();
    cells[start.row as usize][start.col as usize] = CellKind::Start;
    cells[target.row as usize][target.col as usize] = CellKind::Target;

    let carved = carve(&mut cells, start, target, rng);

    let grid = Grid::from_rows(cells).map_err(|_| GenerateError::InvalidDimensions {
        rows,
        cols,
        reason: "grid exceeds the addressable cell range",
    })?;
    debug!(
        rows,
        cols,
        wall_probability = p,
        walls = grid.count(CellKind::Wall),
        carved,
        "maze generated"
    );
    Ok(grid)
}

/// Walk from `start` to `target`, clearing walls underfoot.
///
/// Returns the number of walls cleared. Start and target keep their
/// kinds.
fn carve<R: Rng + ?Sized>(
    cells: &mut [Vec<CellKind>],
    start: Cell,
    target: Cell,
    rng: &mut R,
) -> usize {
    let mut walker = start;
    let mut carved = 0;
    while walker != target {
        if rng.random_bool(0.5) {
            walker.row = step_toward(walker.row, target.row);
        } else {
            walker.col = step_toward(walker.col, target.col);
        }
        let kind = &mut cells[walker.row as usize][walker.col as usize];
        if *kind == CellKind::Wall {
            *kind = CellKind::Free;
            carved += 1;
        }
    }
    carved
}

fn step_toward(from: u32, to: u32) -> u32 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Greater => from - 1,
        std::cmp::Ordering::Equal => from,
    }
}
