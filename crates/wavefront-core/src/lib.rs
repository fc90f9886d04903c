//! Grid model for the Wavefront maze search workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the types every other crate shares: the [`Cell`] coordinate, the
//! [`Grid`] of [`CellKind`]s, and the error enums for grid validation,
//! maze generation and path reconstruction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, Direction};
pub use error::{GenerateError, MazeError, PathError};
pub use grid::{CellKind, Grid};
