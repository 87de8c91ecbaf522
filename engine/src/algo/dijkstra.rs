//! Two variants of Dijkstra's algorithm computing distances from one source to all nodes.
//!
//! - `lazy_heap`: priority queue frontier without decrease key, `O(m log m)`.
//!   Works on any `LinkIterable<Link>` graph, used for the adjacency list.
//! - `linear_scan`: selects the next node by scanning all tentative distances, `O(n^2)`.
//!   Reads the weights directly from the adjacency matrix.
//!
//! Both produce the same distances for the same edge set.

use super::*;
use std::{fmt, ops::Index};

pub mod lazy_heap;
pub mod linear_scan;

/// Path costs are summed in a wider type than edge weights.
/// A simple path has at most `n - 1 < 2^32` arcs of weight below `INFINITY < 2^31`,
/// so no path cost can reach `UNREACHABLE`.
pub type Distance = u64;

/// Sentinel for nodes without a path from the source.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Priority Queue entries
#[derive(Copy, Clone, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct State<W> {
    pub key: W,
    pub node: NodeId,
}

/// Graphs which can answer one-to-all shortest path queries.
pub trait OneToAll {
    /// Compute the distances from `source` to all nodes.
    /// Panics if `source` is not a node of the graph.
    fn shortest_paths(&self, source: NodeId) -> Distances;
}

/// Result of a one-to-all query, one entry per node.
/// Unreachable nodes hold `UNREACHABLE` internally, the accessors map that to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances(Vec<Distance>);

impl Distances {
    /// All nodes unreachable except `source` which has distance zero.
    pub(crate) fn init(num_nodes: usize, source: NodeId) -> Self {
        assert!((source as usize) < num_nodes, "source {} out of range for {} nodes", source, num_nodes);
        let mut distances = vec![UNREACHABLE; num_nodes];
        distances[source as usize] = 0;
        Distances(distances)
    }

    /// Distance to `node` or `None` if it is unreachable.
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        match self.0[node as usize] {
            UNREACHABLE => None,
            dist => Some(dist),
        }
    }

    /// The raw distances with `UNREACHABLE` for unreachable nodes.
    pub fn as_slice(&self) -> &[Distance] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Distance>> + '_ {
        self.0.iter().map(|&dist| if dist == UNREACHABLE { None } else { Some(dist) })
    }

    pub fn num_reachable(&self) -> usize {
        self.0.iter().filter(|&&dist| dist != UNREACHABLE).count()
    }

    pub(crate) fn set(&mut self, node: NodeId, dist: Distance) {
        self.0[node as usize] = dist;
    }
}

impl Index<NodeId> for Distances {
    type Output = Distance;

    fn index(&self, node: NodeId) -> &Distance {
        &self.0[node as usize]
    }
}

/// Formats as `[0, 5, 8, INF]`.
impl fmt::Display for Distances {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (node, dist) in self.iter().enumerate() {
            if node > 0 {
                f.write_str(", ")?;
            }
            match dist {
                Some(dist) => write!(f, "{}", dist)?,
                None => f.write_str("INF")?,
            }
        }
        f.write_str("]")
    }
}

/// Helper to print optional distances, `INF` for `None`.
pub struct DisplayDistance(pub Option<Distance>);

impl fmt::Display for DisplayDistance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(dist) => write!(f, "{}", dist),
            None => f.write_str("INF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_entries_are_none() {
        let mut distances = Distances::init(4, 1);
        distances.set(2, 17);

        assert_eq!(distances.iter().collect::<Vec<_>>(), vec![None, Some(0), Some(17), None]);
        assert_eq!(distances[3], UNREACHABLE);
        assert_eq!(distances.num_reachable(), 2);
        assert_eq!(distances.to_string(), "[INF, 0, 17, INF]");
    }

    #[test]
    #[should_panic]
    fn source_must_exist() {
        Distances::init(0, 0);
    }
}
