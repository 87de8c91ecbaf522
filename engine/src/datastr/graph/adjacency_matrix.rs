//! Dense adjacency matrix representation.
//!
//! A single row-major `n x n` table of weights.
//! The diagonal starts out as `0`, all other cells as `INFINITY` (no edge).
//! Inserting an edge overwrites the cell for its node pair,
//! so of several parallel edges only the last inserted one survives.

use super::*;
use std::{fmt, iter::Enumerate, slice};

#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixGraph {
    num_nodes: usize,
    // row-major, cell `from * num_nodes + to`
    weights: Vec<Weight>,
}

impl AdjacencyMatrixGraph {
    /// The raw cell for `from -> to`. `INFINITY` if there is no edge.
    #[inline]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Weight {
        self.row(from)[to as usize]
    }

    /// Borrow the full row of `node`, diagonal included.
    #[inline]
    pub fn row(&self, node: NodeId) -> &[Weight] {
        let start = node as usize * self.num_nodes;
        &self.weights[start..start + self.num_nodes]
    }
}

impl BuildGraph for AdjacencyMatrixGraph {
    fn with_num_nodes(num_nodes: usize) -> Self {
        let num_cells = num_nodes.checked_mul(num_nodes).expect("matrix dimensions overflow");
        let mut weights = vec![INFINITY; num_cells];
        for node in 0..num_nodes {
            weights[node * num_nodes + node] = 0;
        }

        AdjacencyMatrixGraph { num_nodes, weights }
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        assert_valid_edge(self.num_nodes, from, to, weight);
        self.weights[from as usize * self.num_nodes + to as usize] = weight;
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Off-diagonal cells holding an edge.
    fn num_arcs(&self) -> usize {
        (0..self.num_nodes as NodeId).map(|node| self.degree(node)).sum()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.link_iter(node).count()
    }
}

/// Iterator over the edges stored in one matrix row.
/// Skips the diagonal and cells without an edge.
#[derive(Debug, Clone)]
pub struct RowLinks<'a> {
    node: usize,
    cells: Enumerate<slice::Iter<'a, Weight>>,
}

impl<'a> Iterator for RowLinks<'a> {
    type Item = Link;

    #[inline]
    fn next(&mut self) -> Option<Link> {
        let node = self.node;
        self.cells
            .find(|&(head, &weight)| head != node && weight < INFINITY)
            .map(|(head, &weight)| Link { node: head as NodeId, weight })
    }
}

impl LinkIterable<Link> for AdjacencyMatrixGraph {
    type Iter<'a> = RowLinks<'a>;

    #[inline]
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        RowLinks {
            node: node as usize,
            cells: self.row(node).iter().enumerate(),
        }
    }
}

/// One line per row, cells separated by spaces, missing edges printed as `INF`.
impl fmt::Display for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in 0..self.num_nodes as NodeId {
            for (column, &weight) in self.row(node).iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                if weight == INFINITY {
                    f.write_str("INF")?;
                } else {
                    write!(f, "{}", weight)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
