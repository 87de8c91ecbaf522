//! Adjacency list representation.
//!
//! Each node owns a growable vector of its outgoing links in insertion order.
//! Parallel edges are all kept.

use super::*;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph {
    adjacency: Vec<Vec<Link>>,
}

impl AdjacencyListGraph {
    /// Borrow the outgoing links of `node` in insertion order.
    pub fn neighbors(&self, node: NodeId) -> &[Link] {
        &self.adjacency[node as usize]
    }
}

impl BuildGraph for AdjacencyListGraph {
    fn with_num_nodes(num_nodes: usize) -> Self {
        AdjacencyListGraph {
            adjacency: (0..num_nodes).map(|_| Vec::new()).collect(),
        }
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        assert_valid_edge(self.num_nodes(), from, to, weight);
        self.adjacency[from as usize].push(Link { node: to, weight });
    }
}

impl Graph for AdjacencyListGraph {
    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_arcs(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node as usize].len()
    }
}

impl LinkIterable<Link> for AdjacencyListGraph {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Link>>;

    #[inline]
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        self.adjacency[node as usize].iter().copied()
    }
}

/// One line per node: `node: -> (head, weight) -> (head, weight) ...`
impl fmt::Display for AdjacencyListGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (node, links) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", node)?;
            for Link { node: head, weight } in links {
                write!(f, " -> ({}, {})", head, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_parallel_edges_in_insertion_order() {
        let mut graph = AdjacencyListGraph::with_num_nodes(3);
        graph.add_edge(0, 2, 7);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 3);

        assert_eq!(
            graph.neighbors(0),
            &[Link { node: 2, weight: 7 }, Link { node: 1, weight: 4 }, Link { node: 2, weight: 3 }]
        );
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.link_iter(0).map(|link| link.node).collect::<Vec<_>>(), vec![2, 1, 2]);
    }

    #[test]
    fn empty_graph_has_no_arcs() {
        let graph = AdjacencyListGraph::with_num_nodes(0);
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
        assert_eq!(graph.to_string(), "");
    }

    #[test]
    fn display_lists_links_per_node() {
        let mut graph = AdjacencyListGraph::with_num_nodes(3);
        graph.add_edge(0, 1, 5);
        graph.add_edge(0, 2, 9);
        graph.add_edge(2, 2, 1);

        assert_eq!(graph.to_string(), "0: -> (1, 5) -> (2, 9)\n1:\n2: -> (2, 1)\n");
    }

    #[test]
    #[should_panic]
    fn rejects_head_out_of_range() {
        let mut graph = AdjacencyListGraph::with_num_nodes(2);
        graph.add_edge(0, 2, 1);
    }

    #[test]
    #[should_panic]
    fn rejects_infinite_weight() {
        let mut graph = AdjacencyListGraph::with_num_nodes(2);
        graph.add_edge(0, 1, INFINITY);
    }
}
