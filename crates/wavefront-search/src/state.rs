//! Owned search-state snapshots.
//!
//! A [`SearchState`] is copied out of the engine by
//! [`BfsEngine::snapshot()`](crate::BfsEngine::snapshot). Nothing in it
//! aliases live engine storage except the grid, which is immutable and
//! shared behind an `Arc`, so a snapshot can be held and read
//! indefinitely while the engine keeps stepping.

use std::sync::Arc;

use indexmap::IndexMap;
use wavefront_core::{Cell, Grid};

use crate::stats::SearchStats;
use crate::tree::DiscoveryTree;

// Compile-time assertion: snapshots can be handed to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<SearchState>();
    }
};

/// One first-discovery event: `from` discovered `to` at `depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiscoveryEdge {
    /// The cell being expanded.
    pub from: Cell,
    /// The newly discovered cell.
    pub to: Cell,
    /// Depth assigned to `to` (`depth[from] + 1`).
    pub depth: u32,
}

/// Lifecycle of a search.
///
/// `Ready → Searching → Found | Exhausted`. Both `Found` and
/// `Exhausted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// No step has executed yet.
    Ready,
    /// At least one step executed and the search has not terminated.
    Searching,
    /// The target was dequeued.
    Found,
    /// The frontier emptied without reaching the target.
    Exhausted,
}

impl SearchPhase {
    pub(crate) fn from_flags(steps: u64, found: bool, terminated: bool) -> Self {
        match (found, terminated) {
            (true, _) => Self::Found,
            (false, true) => Self::Exhausted,
            (false, false) if steps == 0 => Self::Ready,
            (false, false) => Self::Searching,
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Read-only copy of the engine's state after some number of steps.
#[derive(Clone, Debug)]
pub struct SearchState {
    /// The searched grid (shared, immutable).
    pub grid: Arc<Grid>,
    /// The unique start cell.
    pub start: Cell,
    /// The unique target cell.
    pub target: Cell,
    /// Row-major visited flags, one per grid cell.
    pub visited: Vec<bool>,
    /// The most recently dequeued cell, `None` before the first step.
    pub current: Option<Cell>,
    /// Cells awaiting expansion, head first.
    pub frontier: Vec<Cell>,
    /// Every first-discovery event, in discovery order.
    pub discovery_edges: Vec<DiscoveryEdge>,
    /// Which cell discovered each visited non-start cell.
    pub parent: IndexMap<Cell, Cell>,
    /// BFS layer of each visited cell, in discovery order (start first).
    pub depth: IndexMap<Cell, u32>,
    /// Largest depth assigned so far.
    pub max_depth: u32,
    /// Largest frontier length observed so far.
    pub peak_frontier: usize,
    /// Number of executed steps.
    pub steps: u64,
    /// Whether the target has been dequeued.
    pub found: bool,
    /// Whether the search has terminated.
    pub terminated: bool,
    /// Start-to-target path, empty unless `terminated && found`.
    pub shortest_path: Vec<Cell>,
}

impl SearchState {
    /// Whether `cell` has been visited. Out-of-bounds cells never are.
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.grid
            .index(cell)
            .and_then(|i| self.visited.get(i).copied())
            .unwrap_or(false)
    }

    /// Visited flags reshaped into rows, for row-by-row renderers.
    pub fn visited_rows(&self) -> Vec<Vec<bool>> {
        self.visited
            .chunks(self.grid.cols() as usize)
            .map(<[bool]>::to_vec)
            .collect()
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Depth of `cell`, if it has been discovered.
    pub fn depth_of(&self, cell: Cell) -> Option<u32> {
        self.depth.get(&cell).copied()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SearchPhase {
        SearchPhase::from_flags(self.steps, self.found, self.terminated)
    }

    /// Summary counters for this snapshot.
    pub fn stats(&self) -> SearchStats {
        SearchStats::from_state(self)
    }

    /// The discovery tree rooted at the start cell.
    pub fn tree(&self) -> DiscoveryTree {
        DiscoveryTree::from_edges(self.start, &self.discovery_edges)
    }
}
