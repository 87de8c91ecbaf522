//! Dijkstra with a priority queue that tolerates outdated entries.
//!
//! Whenever a tentative distance improves, the node is pushed again with the new key.
//! Entries of nodes which were already settled are skipped when popped.

use super::*;
use crate::datastr::heap::MinHeap;

/// Distances from `source` to all nodes of `graph`.
pub fn shortest_paths<G: LinkIterable<Link>>(graph: &G, source: NodeId) -> Distances {
    let mut distances = Distances::init(graph.num_nodes(), source);
    let mut settled = vec![false; graph.num_nodes()];
    let mut queue = MinHeap::with_capacity(graph.num_nodes());
    queue.push(State { key: 0, node: source });

    let mut num_queue_pops: usize = 0;
    let mut num_queue_pushs: usize = 1;
    let mut num_relaxed_arcs: usize = 0;

    while let Some(State { node, .. }) = queue.pop() {
        num_queue_pops += 1;
        if settled[node as usize] {
            continue;
        }
        settled[node as usize] = true;

        let dist = distances[node];
        for Link { node: head, weight } in graph.link_iter(node) {
            num_relaxed_arcs += 1;
            let tentative = dist + Distance::from(weight);
            if tentative < distances[head] {
                distances.set(head, tentative);
                queue.push(State { key: tentative, node: head });
                num_queue_pushs += 1;
            }
        }
    }

    report!("num_queue_pops", num_queue_pops);
    report!("num_queue_pushs", num_queue_pushs);
    report!("num_relaxed_arcs", num_relaxed_arcs);

    distances
}

impl OneToAll for AdjacencyListGraph {
    fn shortest_paths(&self, source: NodeId) -> Distances {
        shortest_paths(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> AdjacencyListGraph {
        // This is the directed graph we're going to use.
        // The node numbers correspond to the different states,
        // and the edge weights symbolize the cost of moving
        // from one node to another.
        // Note that the edges are one-way.
        //
        //                  7
        //          +-----------------+
        //          |                 |
        //          v   1        2    |  2
        //          0 -----> 1 -----> 3 ---> 4
        //          |        ^        ^      ^
        //          |        | 1      |      |
        //          |        |        | 3    | 1
        //          +------> 2 -------+      |
        //           10      |               |
        //                   +---------------+
        //
        let mut graph = AdjacencyListGraph::with_num_nodes(5);
        for &(from, to, weight) in &[(0, 2, 10), (0, 1, 1), (1, 3, 2), (2, 1, 1), (2, 3, 3), (2, 4, 1), (3, 0, 7), (3, 4, 2)] {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    #[test]
    fn correct_distances() {
        let graph = graph();

        assert_eq!(graph.shortest_paths(0).iter().collect::<Vec<_>>(), vec![Some(0), Some(1), Some(10), Some(3), Some(5)]);
        assert_eq!(graph.shortest_paths(3).get(0), Some(7));
        assert_eq!(graph.shortest_paths(4).iter().collect::<Vec<_>>(), vec![None, None, None, None, Some(0)]);
    }

    #[test]
    fn parallel_edges_use_the_cheapest() {
        let mut graph = AdjacencyListGraph::with_num_nodes(2);
        graph.add_edge(0, 1, 3);
        graph.add_edge(0, 1, 10);

        assert_eq!(graph.shortest_paths(0).get(1), Some(3));
    }

    #[test]
    fn works_on_matrix_links_too() {
        let mut matrix = AdjacencyMatrixGraph::with_num_nodes(3);
        matrix.add_edge(0, 1, 4);
        matrix.add_edge(1, 2, 4);
        matrix.add_edge(0, 2, 9);

        assert_eq!(shortest_paths(&matrix, 0).as_slice(), &[0, 4, 8]);
    }

    #[test]
    fn path_costs_beyond_the_weight_range_stay_reachable() {
        let mut graph = AdjacencyListGraph::with_num_nodes(4);
        graph.add_edge(0, 1, INFINITY - 1);
        graph.add_edge(1, 2, INFINITY - 1);
        graph.add_edge(2, 3, INFINITY - 1);

        let distances = graph.shortest_paths(0);
        let max_weight = Distance::from(INFINITY - 1);
        assert_eq!(distances.get(1), Some(max_weight));
        assert_eq!(distances.get(2), Some(2 * max_weight));
        assert_eq!(distances.get(3), Some(3 * max_weight));
        assert_eq!(distances.num_reachable(), 4);
    }

    #[test]
    fn two_heavy_arcs_sum_past_the_sentinel() {
        let mut graph = AdjacencyListGraph::with_num_nodes(3);
        graph.add_edge(0, 1, 1_500_000_000);
        graph.add_edge(1, 2, 1_500_000_000);

        assert_eq!(graph.shortest_paths(0).get(2), Some(3_000_000_000));
    }
}
