//! Step-driven breadth-first search over Wavefront grids.
//!
//! [`BfsEngine`] runs BFS one dequeue-and-expand round per
//! [`step()`](BfsEngine::step) call and hands out an owned
//! [`SearchState`] after each step, so an observer can watch the
//! frontier, visited set, depth layers and discovery tree grow.
//!
//! # Example
//!
//! ```
//! use wavefront_core::{Cell, Grid};
//! use wavefront_search::{BfsEngine, SearchPhase};
//!
//! let grid: Grid = "####\n#S.#\n#.T#\n####".parse().unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (4, 4));
//! let mut engine = BfsEngine::new(grid).unwrap();
//! assert_eq!(engine.phase(), SearchPhase::Ready);
//!
//! while engine.step() {}
//!
//! let state = engine.snapshot();
//! assert!(state.found);
//! assert_eq!(state.shortest_path.len(), 3);
//! assert_eq!(state.shortest_path[0], Cell::new(1, 1));
//! assert_eq!(state.phase(), SearchPhase::Found);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod state;
pub mod stats;
pub mod tree;

pub use engine::{BfsEngine, Steps};
pub use state::{DiscoveryEdge, SearchPhase, SearchState};
pub use stats::SearchStats;
pub use tree::DiscoveryTree;
