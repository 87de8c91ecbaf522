//! Graph vocabulary shared by both storage forms.
//!
//! Nodes are identified by ids from `0` to `n-1`. Edges are directed and carry a non-negative integer weight.
//! There are two representations with identical construction interfaces:
//! an adjacency list (`AdjacencyListGraph`) which keeps every inserted edge
//! and a dense adjacency matrix (`AdjacencyMatrixGraph`) which keeps one weight per ordered node pair.

pub mod adjacency_list;
pub mod adjacency_matrix;

pub use self::adjacency_list::AdjacencyListGraph;
pub use self::adjacency_matrix::AdjacencyMatrixGraph;

/// Node ids are 32bit unsigned ints
pub type NodeId = u32;
/// Basic weights are 32bit unsigned ints
pub type Weight = u32;
/// A sufficiently large infinity constant.
/// Edge weights must stay below this value, the matrix uses it to mark absent edges.
pub const INFINITY: Weight = std::u32::MAX / 2;

/// Largest vertex count accepted from files or the generator.
/// The matrix stores `n^2` weights, this caps it at 1 GiB.
pub const MAX_NUM_NODES: usize = 1 << 14;

/// Simple struct for weighted links.
/// No behaviour, just a pure data struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Link {
    pub node: NodeId,
    pub weight: Weight,
}

/// Base trait for graphs.
/// Interesting behaviour will be added through subtraits.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_arcs(&self) -> usize;
    fn degree(&self, node: NodeId) -> usize;
}

pub trait LinkIterable<Link>: Graph {
    /// Type of the outgoing neighbor iterator.
    type Iter<'a>: Iterator<Item = Link>
    where
        Self: 'a;

    /// Get a iterator over the outgoing links of the given node.
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_>;
}

/// Incremental construction: create a graph with a fixed number of nodes, then insert edges.
/// Edges can never be removed again.
pub trait BuildGraph: Sized {
    /// Create a graph with `num_nodes` nodes and no edges.
    fn with_num_nodes(num_nodes: usize) -> Self;

    /// Insert the directed edge `from -> to`.
    /// Panics if one of the endpoints is not a node of the graph or if `weight >= INFINITY`.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight);
}

pub(crate) fn assert_valid_edge(num_nodes: usize, from: NodeId, to: NodeId, weight: Weight) {
    assert!((from as usize) < num_nodes, "edge tail {} out of range for {} nodes", from, num_nodes);
    assert!((to as usize) < num_nodes, "edge head {} out of range for {} nodes", to, num_nodes);
    assert!(weight < INFINITY, "edge weight {} must be smaller than INFINITY", weight);
}
