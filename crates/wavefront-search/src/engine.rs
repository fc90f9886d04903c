//! The step-driven BFS engine.
//!
//! [`BfsEngine`] owns all mutable search state. Each call to
//! [`step()`](BfsEngine::step) dequeues one cell and expands it;
//! [`snapshot()`](BfsEngine::snapshot) copies the state out for an
//! observer. Nothing runs in the background: the caller drives the
//! search on whatever schedule it likes and cancels by simply not
//! stepping again.
//!
//! # Ownership model
//!
//! `step()` takes `&mut self`, so the borrow checker rules out
//! concurrent stepping. Snapshots are owned values sharing only the
//! immutable `Arc<Grid>`, so they never race later steps.
//!
//! # Restarting
//!
//! State is never reset in place. [`restarted()`](BfsEngine::restarted)
//! builds a fresh engine over the same shared grid.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};
use wavefront_core::{Cell, Grid, MazeError, PathError};

use crate::state::{DiscoveryEdge, SearchPhase, SearchState};

// Compile-time assertion: an engine can be moved to the thread that
// drives it.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<BfsEngine>();
    }
};

/// Breadth-first search over a [`Grid`], advanced one step at a time.
pub struct BfsEngine {
    grid: Arc<Grid>,
    start: Cell,
    target: Cell,
    frontier: VecDeque<Cell>,
    visited: Vec<bool>,
    parent: IndexMap<Cell, Cell>,
    depth: IndexMap<Cell, u32>,
    edges: Vec<DiscoveryEdge>,
    current: Option<Cell>,
    found: bool,
    terminated: bool,
    steps: u64,
    max_depth: u32,
    peak_frontier: usize,
}

impl BfsEngine {
    /// Create an engine ready to search `grid`.
    ///
    /// The start cell is enqueued, marked visited and given depth 0.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError`] if the grid does not contain exactly one
    /// Start and exactly one Target cell.
    pub fn new(grid: impl Into<Arc<Grid>>) -> Result<Self, MazeError> {
        let grid = grid.into();
        let (start, target) = grid.endpoints()?;
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            %start,
            %target,
            "search engine ready"
        );
        Ok(Self::init(grid, start, target))
    }

    fn init(grid: Arc<Grid>, start: Cell, target: Cell) -> Self {
        let mut visited = vec![false; grid.len()];
        if let Some(i) = grid.index(start) {
            visited[i] = true;
        }
        let mut depth = IndexMap::new();
        depth.insert(start, 0);
        Self {
            grid,
            start,
            target,
            frontier: VecDeque::from([start]),
            visited,
            parent: IndexMap::new(),
            depth,
            edges: Vec::new(),
            current: None,
            found: false,
            terminated: false,
            steps: 0,
            max_depth: 0,
            peak_frontier: 1,
        }
    }

    /// A fresh engine over the same grid, back in [`SearchPhase::Ready`].
    pub fn restarted(&self) -> Self {
        debug!(steps = self.steps, "search restarted");
        Self::init(Arc::clone(&self.grid), self.start, self.target)
    }

    /// Execute one dequeue-and-expand round.
    ///
    /// Returns `false` without doing anything once the search has
    /// terminated, and terminates it (returning `false`) when the
    /// frontier is empty. Otherwise dequeues the frontier head into
    /// `current`. If that is the target the search is found and
    /// terminated with no expansion; if not, every in-bounds, non-wall,
    /// unvisited neighbour (scanned up, right, down, left) is visited,
    /// enqueued, and recorded with its parent, depth and discovery edge.
    /// Returns `true` whenever a cell was dequeued.
    pub fn step(&mut self) -> bool {
        if self.terminated {
            return false;
        }
        let Some(current) = self.frontier.pop_front() else {
            self.terminated = true;
            debug!(
                steps = self.steps,
                visited = self.depth.len(),
                "frontier exhausted, target unreachable"
            );
            return false;
        };
        self.current = Some(current);
        self.steps += 1;

        if current == self.target {
            self.found = true;
            self.terminated = true;
            debug!(
                steps = self.steps,
                visited = self.depth.len(),
                depth = self.depth.get(&current).copied(),
                "target found"
            );
            return true;
        }

        let next_depth = self.depth.get(&current).map_or(1, |d| d + 1);
        let mut discovered = 0usize;
        for nb in self.grid.open_neighbours(current) {
            let Some(i) = self.grid.index(nb) else {
                continue;
            };
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            self.frontier.push_back(nb);
            self.parent.insert(nb, current);
            self.depth.insert(nb, next_depth);
            self.edges.push(DiscoveryEdge {
                from: current,
                to: nb,
                depth: next_depth,
            });
            discovered += 1;
        }
        if discovered > 0 {
            self.max_depth = self.max_depth.max(next_depth);
        }
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());
        trace!(
            step = self.steps,
            %current,
            discovered,
            frontier = self.frontier.len(),
            "expanded"
        );
        true
    }

    /// Step until [`step()`](Self::step) returns `false`.
    ///
    /// Returns the number of steps executed by this call.
    pub fn run_to_completion(&mut self) -> usize {
        let mut n = 0;
        while self.step() {
            n += 1;
        }
        n
    }

    /// Iterator that executes one step per `next()` and yields the
    /// snapshot taken after it. Ends once the search has terminated.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { engine: self }
    }

    /// The start-to-target path, both ends inclusive.
    ///
    /// # Errors
    ///
    /// [`PathError::Unavailable`] until the target has been found.
    pub fn shortest_path(&self) -> Result<Vec<Cell>, PathError> {
        if !self.found {
            return Err(PathError::Unavailable);
        }
        let mut path = vec![self.target];
        let mut cur = self.target;
        while cur != self.start {
            cur = *self.parent.get(&cur).ok_or(PathError::Unavailable)?;
            path.push(cur);
        }
        path.reverse();
        Ok(path)
    }

    /// Copy the current state out of the engine.
    pub fn snapshot(&self) -> SearchState {
        let shortest_path = if self.terminated && self.found {
            self.shortest_path().unwrap_or_default()
        } else {
            Vec::new()
        };
        SearchState {
            grid: Arc::clone(&self.grid),
            start: self.start,
            target: self.target,
            visited: self.visited.clone(),
            current: self.current,
            frontier: self.frontier.iter().copied().collect(),
            discovery_edges: self.edges.clone(),
            parent: self.parent.clone(),
            depth: self.depth.clone(),
            max_depth: self.max_depth,
            peak_frontier: self.peak_frontier,
            steps: self.steps,
            found: self.found,
            terminated: self.terminated,
            shortest_path,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SearchPhase {
        SearchPhase::from_flags(self.steps, self.found, self.terminated)
    }

    /// The searched grid.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// The start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The target cell.
    pub fn target(&self) -> Cell {
        self.target
    }

    /// The most recently dequeued cell.
    pub fn current(&self) -> Option<Cell> {
        self.current
    }

    /// Whether the target has been dequeued.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Whether the search has terminated (found or exhausted).
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Number of executed steps.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Number of cells awaiting expansion.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// BFS depth of `cell`, if discovered.
    pub fn depth_of(&self, cell: Cell) -> Option<u32> {
        self.depth.get(&cell).copied()
    }

    /// The cell that discovered `cell`. `None` for the start and for
    /// undiscovered cells.
    pub fn parent_of(&self, cell: Cell) -> Option<Cell> {
        self.parent.get(&cell).copied()
    }
}

impl std::fmt::Debug for BfsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BfsEngine")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("phase", &self.phase())
            .field("steps", &self.steps)
            .field("frontier_len", &self.frontier.len())
            .field("visited", &self.depth.len())
            .finish()
    }
}

/// Iterator returned by [`BfsEngine::steps`].
pub struct Steps<'e> {
    engine: &'e mut BfsEngine,
}

impl Iterator for Steps<'_> {
    type Item = SearchState;

    fn next(&mut self) -> Option<SearchState> {
        self.engine.step().then(|| self.engine.snapshot())
    }
}

impl FusedIterator for Steps<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u32, col: u32) -> Cell {
        Cell::new(r, col)
    }

    fn engine(text: &str) -> BfsEngine {
        BfsEngine::new(text.parse::<Grid>().unwrap()).unwrap()
    }

    const ROOM: &str = "
        ####
        #S.#
        #.T#
        ####
    ";

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_initialises_state() {
        let e = engine(ROOM);
        let s = e.snapshot();
        assert_eq!(s.start, c(1, 1));
        assert_eq!(s.target, c(2, 2));
        assert_eq!(s.frontier, vec![c(1, 1)]);
        assert!(s.is_visited(c(1, 1)));
        assert_eq!(s.visited_count(), 1);
        assert_eq!(s.depth_of(c(1, 1)), Some(0));
        assert!(s.parent.is_empty());
        assert!(s.discovery_edges.is_empty());
        assert_eq!(s.current, None);
        assert!(!s.found && !s.terminated);
        assert_eq!(s.peak_frontier, 1);
        assert_eq!(s.phase(), SearchPhase::Ready);
    }

    #[test]
    fn new_rejects_missing_or_duplicate_endpoints() {
        let g: Grid = "#..T".parse().unwrap();
        assert_eq!(BfsEngine::new(g).unwrap_err(), MazeError::MissingStart);
        let g: Grid = "S..S\n...T".parse().unwrap();
        assert_eq!(
            BfsEngine::new(g).unwrap_err(),
            MazeError::MultipleStarts { count: 2 }
        );
        let g: Grid = "S...".parse().unwrap();
        assert_eq!(BfsEngine::new(g).unwrap_err(), MazeError::MissingTarget);
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn first_step_expands_start_in_scan_order() {
        let mut e = engine(ROOM);
        assert!(e.step());
        let s = e.snapshot();
        assert_eq!(s.current, Some(c(1, 1)));
        // Up and left are walls; right before down.
        assert_eq!(s.frontier, vec![c(1, 2), c(2, 1)]);
        assert_eq!(
            s.discovery_edges,
            vec![
                DiscoveryEdge {
                    from: c(1, 1),
                    to: c(1, 2),
                    depth: 1
                },
                DiscoveryEdge {
                    from: c(1, 1),
                    to: c(2, 1),
                    depth: 1
                },
            ]
        );
        assert_eq!(s.parent.get(&c(2, 1)), Some(&c(1, 1)));
        assert_eq!(s.max_depth, 1);
        assert_eq!(s.peak_frontier, 2);
        assert_eq!(s.phase(), SearchPhase::Searching);
    }

    #[test]
    fn open_room_finds_target_with_length_three_path() {
        let mut e = engine(ROOM);
        let executed = e.run_to_completion();
        assert!(e.is_found());
        assert!(e.is_terminated());
        // (1,1), (1,2), (2,1), then (2,2) is dequeued.
        assert_eq!(executed, 4);
        let path = e.shortest_path().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], c(1, 1));
        assert_eq!(path[2], c(2, 2));
        assert!(path[1] == c(1, 2) || path[1] == c(2, 1));
        assert_eq!(e.snapshot().shortest_path, path);
    }

    #[test]
    fn target_step_does_not_expand() {
        let mut e = engine("S.T.");
        e.run_to_completion();
        let s = e.snapshot();
        assert_eq!(s.current, Some(c(0, 2)));
        // (0,3) is never discovered: the target is not expanded.
        assert!(!s.is_visited(c(0, 3)));
        assert!(s.frontier.is_empty());
    }

    #[test]
    fn step_after_termination_is_noop() {
        let mut e = engine(ROOM);
        e.run_to_completion();
        let before = e.snapshot();
        assert!(!e.step());
        assert!(!e.step());
        let after = e.snapshot();
        assert_eq!(before.steps, after.steps);
        assert_eq!(before.frontier, after.frontier);
        assert_eq!(before.discovery_edges, after.discovery_edges);
        assert_eq!(after.phase(), SearchPhase::Found);
    }

    #[test]
    fn walled_off_target_exhausts() {
        let mut e = engine(
            "
            #######
            #S.#..#
            #..#T.#
            #######
        ",
        );
        let last_true = e.run_to_completion();
        assert_eq!(last_true, 4);
        let s = e.snapshot();
        assert!(!s.found);
        assert!(s.terminated);
        assert!(s.frontier.is_empty());
        assert!(s.shortest_path.is_empty());
        assert_eq!(s.phase(), SearchPhase::Exhausted);
        assert_eq!(e.shortest_path(), Err(PathError::Unavailable));
    }

    #[test]
    fn exhaustion_needs_one_extra_step_to_terminate() {
        let mut e = engine("S#T");
        assert!(e.step());
        assert!(!e.is_terminated());
        assert_eq!(e.frontier_len(), 0);
        assert!(!e.step());
        assert!(e.is_terminated());
        assert_eq!(e.phase(), SearchPhase::Exhausted);
    }

    #[test]
    fn shortest_path_before_found_is_unavailable() {
        let mut e = engine(ROOM);
        assert_eq!(e.shortest_path(), Err(PathError::Unavailable));
        e.step();
        assert_eq!(e.shortest_path(), Err(PathError::Unavailable));
        assert!(e.snapshot().shortest_path.is_empty());
    }

    // ── Snapshots ───────────────────────────────────────────────

    #[test]
    fn snapshot_is_independent_of_later_steps() {
        let mut e = engine(ROOM);
        e.step();
        let early = e.snapshot();
        e.run_to_completion();
        assert_eq!(early.steps, 1);
        assert_eq!(early.frontier, vec![c(1, 2), c(2, 1)]);
        assert!(!early.is_visited(c(2, 2)));
        assert!(!early.found);
        assert!(Arc::ptr_eq(&early.grid, e.grid()));
    }

    #[test]
    fn visited_rows_reshape() {
        let mut e = engine(ROOM);
        e.step();
        let rows = e.snapshot().visited_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec![false, true, true, false]);
        assert_eq!(rows[2], vec![false, true, false, false]);
    }

    // ── Driver helpers ──────────────────────────────────────────

    #[test]
    fn steps_iterator_yields_one_snapshot_per_step() {
        let mut e = engine(ROOM);
        let snaps: Vec<_> = e.steps().collect();
        assert_eq!(snaps.len(), 4);
        for (i, s) in snaps.iter().enumerate() {
            assert_eq!(s.steps, i as u64 + 1);
        }
        assert!(snaps.last().unwrap().found);
        assert_eq!(e.steps().next().map(|s| s.steps), None);
    }

    #[test]
    fn restarted_shares_grid_and_resets_state() {
        let mut e = engine(ROOM);
        e.run_to_completion();
        let fresh = e.restarted();
        assert!(Arc::ptr_eq(fresh.grid(), e.grid()));
        assert_eq!(fresh.phase(), SearchPhase::Ready);
        assert_eq!(fresh.step_count(), 0);
        assert_eq!(fresh.frontier_len(), 1);
        assert!(e.is_found());
    }

    #[test]
    fn accessors_track_discovery() {
        let mut e = engine(ROOM);
        e.step();
        assert_eq!(e.depth_of(c(1, 2)), Some(1));
        assert_eq!(e.parent_of(c(1, 2)), Some(c(1, 1)));
        assert_eq!(e.parent_of(c(1, 1)), None);
        assert_eq!(e.depth_of(c(2, 2)), None);
        assert_eq!(e.current(), Some(c(1, 1)));
    }
}
