//! The BFS discovery tree.
//!
//! Every visited cell except the start has exactly one parent, so the
//! discovery edges always form a single tree rooted at the start. It is
//! stored as flat maps (no pointer-linked nodes) and grouped into depth
//! layers for level-by-level rendering.

use indexmap::IndexMap;
use smallvec::SmallVec;
use wavefront_core::Cell;

use crate::state::DiscoveryEdge;

/// Discovery tree reconstructed from a list of [`DiscoveryEdge`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryTree {
    root: Cell,
    layers: Vec<Vec<Cell>>,
    parent: IndexMap<Cell, Cell>,
    children: IndexMap<Cell, SmallVec<[Cell; 4]>>,
}

impl DiscoveryTree {
    /// Build the tree rooted at `root` from edges in discovery order.
    ///
    /// An edge whose `to` is already in the tree (or is the root) is
    /// ignored; the first discovery wins. Layer `d` holds the cells
    /// discovered at depth `d`, in discovery order.
    pub fn from_edges(root: Cell, edges: &[DiscoveryEdge]) -> Self {
        let mut layers = vec![vec![root]];
        let mut parent = IndexMap::with_capacity(edges.len());
        let mut children: IndexMap<Cell, SmallVec<[Cell; 4]>> = IndexMap::new();

        for edge in edges {
            if edge.to == root || parent.contains_key(&edge.to) {
                continue;
            }
            parent.insert(edge.to, edge.from);
            children.entry(edge.from).or_default().push(edge.to);
            let d = edge.depth as usize;
            if layers.len() <= d {
                layers.resize_with(d + 1, Vec::new);
            }
            layers[d].push(edge.to);
        }

        Self {
            root,
            layers,
            parent,
            children,
        }
    }

    /// The start cell.
    pub fn root(&self) -> Cell {
        self.root
    }

    /// Cells grouped by depth; `layers()[0] == [root]`.
    pub fn layers(&self) -> &[Vec<Cell>] {
        &self.layers
    }

    /// Cells at depth `depth`, empty past the deepest layer.
    pub fn layer(&self, depth: u32) -> &[Cell] {
        self.layers
            .get(depth as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The cell that discovered `cell`. `None` for the root and for
    /// cells not in the tree.
    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        self.parent.get(&cell).copied()
    }

    /// Cells discovered by `cell`, in discovery order.
    pub fn children(&self, cell: Cell) -> &[Cell] {
        self.children
            .get(&cell)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `cell` is in the tree.
    pub fn contains(&self, cell: Cell) -> bool {
        cell == self.root || self.parent.contains_key(&cell)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.parent.len() + 1
    }

    /// Deepest layer index.
    pub fn height(&self) -> u32 {
        (self.layers.len() - 1) as u32
    }

    /// Size of the widest layer.
    pub fn max_breadth(&self) -> usize {
        self.layers.iter().map(Vec::len).max().unwrap_or(1)
    }

    /// Root-to-`cell` branch, or `None` if `cell` is not in the tree.
    pub fn branch(&self, cell: Cell) -> Option<Vec<Cell>> {
        if !self.contains(cell) {
            return None;
        }
        let mut out = vec![cell];
        let mut cur = cell;
        while let Some(p) = self.parent(cur) {
            out.push(p);
            cur = p;
        }
        out.reverse();
        Some(out)
    }
}
