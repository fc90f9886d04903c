//! Random maze generation for Wavefront.
//!
//! Mazes are bordered by walls, have their start at `(1, 1)` and their
//! target at `(rows - 2, cols - 2)`, and scatter interior walls with a
//! configurable probability. A biased random walk from start to target
//! then clears a route, so every generated maze is solvable. Only that
//! one connection is promised: walls may still seal off pockets
//! elsewhere in the grid.
//!
//! - [`generate_maze`]: one-shot generation with an entropy seed.
//! - [`MazeConfig`]: validated configuration with an optional seed for
//!   reproducible mazes.
//! - [`generate_maze_with`]: generation driven by a caller-supplied RNG.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;

pub use config::{MazeConfig, DEFAULT_WALL_PROBABILITY};
pub use generator::{generate_maze, generate_maze_with};
