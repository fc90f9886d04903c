//! The rectangular maze grid.
//!
//! A [`Grid`] is a row-major matrix of [`CellKind`]. Every constructor
//! enforces the shape invariant (rectangular, non-empty); start/target
//! uniqueness is checked separately by [`Grid::endpoints`] because only
//! the search engine requires it.
//!
//! Two interchange formats are supported:
//!
//! - **codes**: a matrix of small integers, `0` free, `1` wall, `2` start,
//!   `3` target ([`Grid::from_codes`], [`Grid::to_codes`]).
//! - **text**: one line per row, `.` free, `#` wall, `S` start, `T` target
//!   ([`str::parse`], [`std::fmt::Display`]).

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::error::MazeError;

/// What occupies a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open floor.
    #[default]
    Free,
    /// Impassable.
    Wall,
    /// Where the search begins. Passable.
    Start,
    /// What the search looks for. Passable.
    Target,
}

impl CellKind {
    /// Decode a numeric cell code (`0..=3`).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Free),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::Target),
            _ => None,
        }
    }

    /// The numeric cell code.
    pub fn code(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Target => 3,
        }
    }

    /// Decode a text-format glyph.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Free),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'T' => Some(Self::Target),
            _ => None,
        }
    }

    /// The text-format glyph.
    pub fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Target => 'T',
        }
    }

    /// Everything except walls can be walked on.
    pub fn is_passable(self) -> bool {
        self != Self::Wall
    }
}

/// A rectangular, non-empty matrix of [`CellKind`] stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// A `rows x cols` grid with every cell set to `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavefront_core::{Cell, CellKind, Grid};
    ///
    /// let grid = Grid::new(3, 4, CellKind::Wall).unwrap();
    /// assert_eq!(grid.len(), 12);
    /// assert_eq!(grid.kind(Cell::new(2, 3)), Some(CellKind::Wall));
    /// assert_eq!(grid.kind(Cell::new(3, 0)), None);
    /// ```
    pub fn new(rows: u32, cols: u32, fill: CellKind) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }
        let len = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or(MazeError::TooLarge {
                rows: rows as usize,
                cols: cols as usize,
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; len],
        })
    }

    /// Build a grid from nested rows, validating the shape.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, MazeError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(MazeError::Empty);
        }
        let (n_rows, n_cols) = match (u32::try_from(rows.len()), u32::try_from(expected)) {
            (Ok(r), Ok(c)) => (r, c),
            _ => {
                return Err(MazeError::TooLarge {
                    rows: rows.len(),
                    cols: expected,
                })
            }
        };
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(MazeError::Ragged {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Build a grid from a matrix of numeric cell codes.
    pub fn from_codes<R: AsRef<[u8]>>(codes: &[R]) -> Result<Self, MazeError> {
        let mut rows = Vec::with_capacity(codes.len());
        for (r, row) in codes.iter().enumerate() {
            let decoded = row
                .as_ref()
                .iter()
                .enumerate()
                .map(|(c, &code)| {
                    CellKind::from_code(code).ok_or(MazeError::UnknownCode { row: r, col: c, code })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(decoded);
        }
        Self::from_rows(rows)
    }

    /// The grid as a matrix of numeric cell codes.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|k| k.code()).collect())
            .collect()
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Packed row-major index `row * cols + col`, or `None` out of bounds.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.cells.len()).then(|| {
            let cols = self.cols as usize;
            Cell::new((index / cols) as u32, (index % cols) as u32)
        })
    }

    /// The kind of `cell`, or `None` out of bounds.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.kind(cell).is_some_and(CellKind::is_passable)
    }

    /// Overwrite a single cell.
    ///
    /// Grids are only mutable while they are being built; once handed to
    /// a search engine they are shared behind an `Arc` and frozen.
    pub fn set(&mut self, cell: Cell, kind: CellKind) -> Result<(), MazeError> {
        let i = self.index(cell).ok_or(MazeError::OutOfBounds { cell })?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Row-major iterator over `(cell, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| (Cell::new((i / cols) as u32, (i % cols) as u32), k))
    }

    /// First cell of `kind` in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Cell> {
        self.cells().find(|&(_, k)| k == kind).map(|(c, _)| c)
    }

    /// Number of cells of `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// The unique start and target cells.
    ///
    /// # Errors
    ///
    /// [`MazeError::MissingStart`] / [`MazeError::MultipleStarts`] and the
    /// target equivalents. Start is checked first.
    pub fn endpoints(&self) -> Result<(Cell, Cell), MazeError> {
        let start = match self.unique(CellKind::Start) {
            Ok(cell) => cell,
            Err(0) => return Err(MazeError::MissingStart),
            Err(count) => return Err(MazeError::MultipleStarts { count }),
        };
        let target = match self.unique(CellKind::Target) {
            Ok(cell) => cell,
            Err(0) => return Err(MazeError::MissingTarget),
            Err(count) => return Err(MazeError::MultipleTargets { count }),
        };
        Ok((start, target))
    }

    /// The only cell of `kind`, or how many there are when that is not one.
    fn unique(&self, kind: CellKind) -> Result<Cell, usize> {
        let mut found = self.cells().filter(|&(_, k)| k == kind).map(|(c, _)| c);
        match (found.next(), found.next()) {
            (Some(cell), None) => Ok(cell),
            (None, _) => Err(0),
            (Some(_), Some(_)) => Err(2 + found.count()),
        }
    }

    /// Open 4-connected neighbours of `cell`, in [`Direction::ALL`] order.
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| cell.neighbour(d))
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// Whether every cell on the outer ring is a wall.
    pub fn has_wall_border(&self) -> bool {
        self.cells().all(|(c, k)| {
            let border =
                c.row == 0 || c.col == 0 || c.row == self.rows - 1 || c.col == self.cols - 1;
            !border || k == CellKind::Wall
        })
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parse the text format. Blank lines and per-line surrounding
    /// whitespace are ignored, so indented literals work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .map(|(c, g)| {
                        CellKind::from_glyph(g).ok_or(MazeError::UnknownGlyph {
                            row: r,
                            col: c,
                            glyph: g,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for k in row {
                write!(f, "{}", k.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: u32, col: u32) -> Cell {
        Cell::new(r, col)
    }

    const ROOM: &str = "
        ####
        #S.#
        #.T#
        ####
    ";

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_zero_dimension_is_empty() {
        assert_eq!(Grid::new(0, 5, CellKind::Free), Err(MazeError::Empty));
        assert_eq!(Grid::new(5, 0, CellKind::Free), Err(MazeError::Empty));
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(Grid::from_rows(vec![]), Err(MazeError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(MazeError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![
            vec![CellKind::Free; 3],
            vec![CellKind::Free; 3],
            vec![CellKind::Free; 2],
        ];
        assert_eq!(
            Grid::from_rows(rows),
            Err(MazeError::Ragged {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn from_codes_decodes_and_round_trips() {
        let codes = vec![vec![1, 1, 1], vec![2, 0, 3], vec![1, 1, 1]];
        let g = Grid::from_codes(&codes).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.kind(c(1, 0)), Some(CellKind::Start));
        assert_eq!(g.kind(c(1, 2)), Some(CellKind::Target));
        assert_eq!(g.to_codes(), codes);
    }

    #[test]
    fn from_codes_rejects_unknown_code() {
        let codes = vec![vec![0, 0], vec![0, 7]];
        assert_eq!(
            Grid::from_codes(&codes),
            Err(MazeError::UnknownCode {
                row: 1,
                col: 1,
                code: 7
            })
        );
    }

    // ── Text format ─────────────────────────────────────────────

    #[test]
    fn parse_text_format() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 4));
        assert_eq!(g.kind(c(1, 1)), Some(CellKind::Start));
        assert_eq!(g.kind(c(2, 2)), Some(CellKind::Target));
        assert_eq!(g.kind(c(1, 2)), Some(CellKind::Free));
        assert_eq!(g.kind(c(0, 0)), Some(CellKind::Wall));
    }

    #[test]
    fn display_matches_text_format() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), "####\n#S.#\n#.T#\n####\n");
        let again: Grid = g.to_string().parse().unwrap();
        assert_eq!(again, g);
    }

    #[test]
    fn parse_single_line_literal() {
        let g: Grid = "####\n#S.#\n#.T#\n####".parse().unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 4));
        assert_eq!(g, ROOM.parse::<Grid>().unwrap());
        assert_eq!(g.count(CellKind::Wall), 12);
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        let err = "#S\n#x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            MazeError::UnknownGlyph {
                row: 1,
                col: 1,
                glyph: 'x'
            }
        );
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn index_and_cell_at_are_inverse() {
        let g = Grid::new(3, 5, CellKind::Free).unwrap();
        assert_eq!(g.index(c(2, 4)), Some(14));
        assert_eq!(g.cell_at(14), Some(c(2, 4)));
        assert_eq!(g.index(c(3, 0)), None);
        assert_eq!(g.cell_at(15), None);
    }

    #[test]
    fn set_out_of_bounds_is_error() {
        let mut g = Grid::new(2, 2, CellKind::Free).unwrap();
        assert_eq!(
            g.set(c(2, 0), CellKind::Wall),
            Err(MazeError::OutOfBounds { cell: c(2, 0) })
        );
        g.set(c(1, 1), CellKind::Wall).unwrap();
        assert!(!g.is_open(c(1, 1)));
    }

    #[test]
    fn endpoints_unique() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.endpoints(), Ok((c(1, 1), c(2, 2))));
    }

    #[test]
    fn endpoints_missing_and_duplicate() {
        let g: Grid = "#..T".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MissingStart));
        let g: Grid = "S.S.T".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MultipleStarts { count: 2 }));
        let g: Grid = "S...".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MissingTarget));
        let g: Grid = "S.T.T".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MultipleTargets { count: 2 }));
    }

    #[test]
    fn endpoints_count_every_duplicate() {
        let g: Grid = "S.S\n.S.\n..T".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MultipleStarts { count: 3 }));
        let g: Grid = "T.S\n...\nT.T".parse().unwrap();
        assert_eq!(g.endpoints(), Err(MazeError::MultipleTargets { count: 3 }));
    }

    #[test]
    fn endpoints_found_anywhere_in_scan_order() {
        let g: Grid = "T..\n...\n..S".parse().unwrap();
        assert_eq!(g.endpoints(), Ok((c(2, 2), c(0, 0))));
        let g: Grid = "ST".parse().unwrap();
        assert_eq!(g.endpoints(), Ok((c(0, 0), c(0, 1))));
    }

    #[test]
    fn open_neighbours_skip_walls_and_bounds() {
        let g: Grid = "
            S.#
            .#.
            ..T
        "
        .parse()
        .unwrap();
        assert_eq!(g.open_neighbours(c(0, 0)).as_slice(), &[c(0, 1), c(1, 0)]);
        assert_eq!(g.open_neighbours(c(0, 1)).as_slice(), &[c(0, 0)]);
        assert_eq!(g.open_neighbours(c(2, 1)).as_slice(), &[c(2, 2), c(2, 0)]);
    }

    #[test]
    fn wall_border_detection() {
        let g: Grid = ROOM.parse().unwrap();
        assert!(g.has_wall_border());
        let g: Grid = "S.\n.T".parse().unwrap();
        assert!(!g.has_wall_border());
    }

    proptest! {
        #[test]
        fn codes_round_trip(rows in 1usize..8, cols in 1usize..8, seed in any::<u64>()) {
            let codes: Vec<Vec<u8>> = (0..rows)
                .map(|r| (0..cols).map(|c| ((seed >> ((r * cols + c) % 64)) & 3) as u8).collect())
                .collect();
            let g = Grid::from_codes(&codes).unwrap();
            prop_assert_eq!(g.len(), rows * cols);
            prop_assert_eq!(g.to_codes(), codes);
        }
    }
}
