//! Summary counters for a search snapshot.
//!
//! [`SearchStats`] condenses a [`SearchState`] into the handful of
//! numbers a stats panel shows: work done (steps), peak memory (largest
//! frontier), reach (visited cells, deepest layer) and outcome.

use std::fmt;

use crate::state::{SearchPhase, SearchState};

/// Work, memory and outcome counters for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of executed steps (dequeues).
    pub steps: u64,
    /// Number of visited cells, start included.
    pub visited: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
    /// Deepest BFS layer reached.
    pub max_depth: u32,
    /// Nodes in the discovery tree (edges + 1).
    pub tree_nodes: usize,
    /// Edge count of the shortest path, once found.
    pub path_length: Option<usize>,
    /// Lifecycle phase at snapshot time.
    pub phase: SearchPhase,
}

impl SearchStats {
    /// Compute the counters for `state`.
    pub fn from_state(state: &SearchState) -> Self {
        let path_length = state
            .shortest_path
            .len()
            .checked_sub(1)
            .filter(|_| state.found);
        Self {
            steps: state.steps,
            visited: state.visited_count(),
            peak_frontier: state.peak_frontier,
            max_depth: state.max_depth,
            tree_nodes: state.discovery_edges.len() + 1,
            path_length,
            phase: state.phase(),
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.phase {
            SearchPhase::Ready => "ready",
            SearchPhase::Searching => "searching",
            SearchPhase::Found => "target found",
            SearchPhase::Exhausted => "target unreachable",
        };
        write!(
            f,
            "{status}: steps={} visited={} peak_frontier={} max_depth={} tree_nodes={}",
            self.steps, self.visited, self.peak_frontier, self.max_depth, self.tree_nodes
        )?;
        if let Some(len) = self.path_length {
            write!(f, " path_length={len}")?;
        }
        Ok(())
    }
}
