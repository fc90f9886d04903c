//! Test fixtures and reference oracles for Wavefront development.
//!
//! Provides a handful of fixed mazes ([`fixtures`]) and an independent
//! shortest-distance computation ([`oracle`]) that property tests use
//! to check the search engine's depths and path lengths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{classic_maze, corridor, open_room, walled_target, CLASSIC_MAZE};
pub use oracle::{oracle_distance, oracle_distances};
