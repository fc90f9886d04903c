//! Error types for the Wavefront workspace.
//!
//! One enum per subsystem: grid validation ([`MazeError`]), maze
//! generation ([`GenerateError`]) and path reconstruction ([`PathError`]).
//! All failures are local and synchronous; none are retryable.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;

/// The grid is not a valid maze for searching.
///
/// Raised by grid constructors (shape and encoding problems) and by
/// engine construction (start/target uniqueness).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// The grid has more rows or columns than a [`Cell`] can address.
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// No cell is marked Start.
    MissingStart,
    /// More than one cell is marked Start.
    MultipleStarts {
        /// Number of Start cells found.
        count: usize,
    },
    /// No cell is marked Target.
    MissingTarget,
    /// More than one cell is marked Target.
    MultipleTargets {
        /// Number of Target cells found.
        count: usize,
    },
    /// A numeric cell code outside `0..=3`.
    UnknownCode {
        /// Row of the offending code.
        row: usize,
        /// Column of the offending code.
        col: usize,
        /// The code itself.
        code: u8,
    },
    /// A character not in the text format's alphabet.
    UnknownGlyph {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The character itself.
        glyph: char,
    },
    /// A cell lies outside the grid.
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid {rows}x{cols} exceeds the u32 coordinate range")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::MissingStart => write!(f, "grid has no start cell"),
            Self::MultipleStarts { count } => write!(f, "grid has {count} start cells"),
            Self::MissingTarget => write!(f, "grid has no target cell"),
            Self::MultipleTargets { count } => write!(f, "grid has {count} target cells"),
            Self::UnknownCode { row, col, code } => {
                write!(f, "unknown cell code {code} at ({row}, {col})")
            }
            Self::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown cell glyph {glyph:?} at ({row}, {col})")
            }
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the grid"),
        }
    }
}

impl Error for MazeError {}

/// Maze generation was refused before any cell was drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The grid is too small (or too large) for the fixed start/target
    /// placement.
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
        /// Which constraint failed.
        reason: &'static str,
    },
    /// A numeric parameter is outside its accepted range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "invalid maze dimensions {rows}x{cols}: {reason}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name} = {value}")
            }
        }
    }
}

impl Error for GenerateError {}

/// A shortest path was requested before the search found the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The search has not (yet) reached the target.
    Unavailable,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "shortest path unavailable: target not found"),
        }
    }
}

impl Error for PathError {}
