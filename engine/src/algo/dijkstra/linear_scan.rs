//! Dijkstra without a priority queue for dense graphs.
//!
//! Each round scans all unsettled nodes for the smallest tentative distance (the lowest id wins ties)
//! and relaxes the full matrix row of that node.
//! `n` rounds of `O(n)` work each, independent of the number of edges.

use super::*;

/// Distances from `source` to all nodes of `graph`.
pub fn shortest_paths(graph: &AdjacencyMatrixGraph, source: NodeId) -> Distances {
    let num_nodes = graph.num_nodes();
    let mut distances = Distances::init(num_nodes, source);
    let mut settled = vec![false; num_nodes];

    let mut num_settled_nodes: usize = 0;
    let mut num_relaxed_arcs: usize = 0;

    for _ in 0..num_nodes {
        let mut min_node: Option<NodeId> = None;
        for node in 0..num_nodes as NodeId {
            if settled[node as usize] {
                continue;
            }
            match min_node {
                Some(current) if distances[node] >= distances[current] => (),
                _ => min_node = Some(node),
            }
        }

        let node = match min_node {
            Some(node) if distances[node] != UNREACHABLE => node,
            // everything left is unreachable
            _ => break,
        };
        settled[node as usize] = true;
        num_settled_nodes += 1;

        let dist = distances[node];
        for (head, &weight) in graph.row(node).iter().enumerate() {
            if settled[head] || weight == INFINITY {
                continue;
            }
            num_relaxed_arcs += 1;
            let head = head as NodeId;
            let tentative = dist + Distance::from(weight);
            if tentative < distances[head] {
                distances.set(head, tentative);
            }
        }
    }

    report!("num_settled_nodes", num_settled_nodes);
    report!("num_relaxed_arcs", num_relaxed_arcs);

    distances
}

impl OneToAll for AdjacencyMatrixGraph {
    fn shortest_paths(&self, source: NodeId) -> Distances {
        shortest_paths(self, source)
    }
}
