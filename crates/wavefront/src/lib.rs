//! Wavefront: watch breadth-first search flood a grid maze, one step at a
//! time.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Wavefront sub-crates. For most users, adding `wavefront` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wavefront::prelude::*;
//!
//! // A reproducible 15x21 maze with 35% interior walls.
//! let grid = MazeConfig::new(15, 21)
//!     .with_wall_probability(0.35)
//!     .with_seed(7)
//!     .generate()
//!     .unwrap();
//!
//! let mut engine = BfsEngine::new(grid).unwrap();
//! for state in engine.steps() {
//!     // Render `state.frontier`, `state.visited`, `state.current`...
//!     let _ = state.frontier.len();
//! }
//!
//! let state = engine.snapshot();
//! assert_eq!(state.phase(), SearchPhase::Found);
//! assert_eq!(state.shortest_path.first(), Some(&Cell::new(1, 1)));
//! assert_eq!(state.shortest_path.last(), Some(&Cell::new(13, 19)));
//! println!("{}", state.stats());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wavefront-core` | Cells, directions, grids, error types |
//! | [`maze`] | `wavefront-maze` | Random maze generation and its configuration |
//! | [`search`] | `wavefront-search` | The BFS engine, snapshots, stats, discovery tree |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid types (`wavefront-core`).
///
/// [`types::Grid`] with its text and numeric-code formats,
/// [`types::Cell`] coordinates and the error enums shared by every crate.
pub use wavefront_core as types;

/// Maze generation (`wavefront-maze`).
///
/// [`maze::generate_maze`] for one-off mazes, [`maze::MazeConfig`] for
/// validated and optionally seeded generation.
pub use wavefront_maze as maze;

/// Step-driven search (`wavefront-search`).
///
/// [`search::BfsEngine`] advances one dequeue per step and hands out
/// owned [`search::SearchState`] snapshots.
pub use wavefront_search as search;

/// Common imports for typical Wavefront usage.
///
/// ```rust
/// use wavefront::prelude::*;
/// ```
pub mod prelude {
    // Grid model
    pub use wavefront_core::{Cell, CellKind, Direction, Grid};

    // Errors
    pub use wavefront_core::{GenerateError, MazeError, PathError};

    // Generation
    pub use wavefront_maze::{generate_maze, MazeConfig};

    // Search
    pub use wavefront_search::{
        BfsEngine, DiscoveryEdge, DiscoveryTree, SearchPhase, SearchState, SearchStats,
    };
}
