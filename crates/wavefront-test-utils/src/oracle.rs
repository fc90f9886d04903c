//! Reference distance computation for checking search results.
//!
//! Distances come from repeated relaxation (`d[v] = min(d[v], d[u] + 1)`
//! over every open edge) until a full pass changes nothing. No queue, no
//! visit order.

use wavefront_core::{Cell, Grid};

/// Edge-count distance from `from` to every cell, row-major.
///
/// `None` for walls and for open cells with no route from `from`.
pub fn oracle_distances(grid: &Grid, from: Cell) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    if let Some(i) = grid.index(from) {
        if grid.is_open(from) {
            dist[i] = Some(0);
        }
    }
    loop {
        let mut changed = false;
        for (cell, _) in grid.cells() {
            if !grid.is_open(cell) {
                continue;
            }
            let best = grid
                .open_neighbours(cell)
                .iter()
                .filter_map(|&nb| grid.index(nb).and_then(|j| dist[j]))
                .min()
                .map(|d| d + 1);
            let i = grid.index(cell).unwrap();
            if let Some(b) = best {
                if dist[i].is_none_or(|cur| b < cur) {
                    dist[i] = Some(b);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Distance from `from` to `to`, or `None` if unreachable.
pub fn oracle_distance(grid: &Grid, from: Cell, to: Cell) -> Option<u32> {
    grid.index(to)
        .and_then(|i| oracle_distances(grid, from)[i])
}
