//! Random graph generation.
//!
//! For `n` vertices and a density `d` in percent, `d * n * (n - 1) / 200` edges are drawn.
//! Endpoints and weights are drawn independently and uniformly,
//! so self loops and parallel edges may occur.

use crate::datastr::graph::*;
use crate::error::GraphError;
use rand::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};

/// Random edge weights are drawn from `1..=MAX_RANDOM_WEIGHT`.
pub const MAX_RANDOM_WEIGHT: Weight = 100;

/// The number of edges generated for `num_nodes` vertices at `density` percent.
/// Saturates at `usize::MAX` instead of overflowing.
pub fn num_random_edges(num_nodes: usize, density: u32) -> usize {
    let num_nodes = num_nodes as u128;
    u128::from(density)
        .checked_mul(num_nodes)
        .and_then(|n| n.checked_mul(num_nodes.saturating_sub(1)))
        .and_then(|n| usize::try_from(n / 200).ok())
        .unwrap_or(usize::MAX)
}

/// Generate a random graph, seeded from the wall clock on every call.
pub fn generate_random<G: BuildGraph>(num_nodes: usize, density: u32) -> Result<G, GraphError> {
    let mut rng = StdRng::seed_from_u64(wall_clock_seed());
    generate_random_with_rng(num_nodes, density, &mut rng)
}

/// Generate a random graph drawing from the given rng.
pub fn generate_random_with_rng<G: BuildGraph, R: Rng>(num_nodes: usize, density: u32, rng: &mut R) -> Result<G, GraphError> {
    if density > 100 {
        return Err(GraphError::InvalidDensity(density));
    }
    if num_nodes > MAX_NUM_NODES {
        return Err(GraphError::TooManyNodes(num_nodes));
    }

    let mut graph = G::with_num_nodes(num_nodes);
    for _ in 0..num_random_edges(num_nodes, density) {
        let from = rng.gen_range(0..num_nodes as NodeId);
        let to = rng.gen_range(0..num_nodes as NodeId);
        let weight = rng.gen_range(1..=MAX_RANDOM_WEIGHT);
        graph.add_edge(from, to, weight);
    }

    Ok(graph)
}

/// Nanoseconds since the epoch, truncated to 64 bits.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |t| t.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_count_formula() {
        assert_eq!(num_random_edges(0, 100), 0);
        assert_eq!(num_random_edges(1, 100), 0);
        assert_eq!(num_random_edges(10, 100), 45);
        assert_eq!(num_random_edges(10, 50), 22);
        assert_eq!(num_random_edges(1000, 0), 0);
        assert_eq!(num_random_edges(usize::MAX, 100), usize::MAX);
    }

    #[test]
    fn zero_density_has_no_edges() {
        let graph: AdjacencyListGraph = generate_random(50, 0).unwrap();
        assert_eq!(graph.num_nodes(), 50);
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    fn draws_expected_number_of_edges_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph: AdjacencyListGraph = generate_random_with_rng(20, 30, &mut rng).unwrap();

        assert_eq!(graph.num_arcs(), num_random_edges(20, 30));
        for node in 0..20 {
            for link in graph.link_iter(node) {
                assert!(link.node < 20);
                assert!((1..=MAX_RANDOM_WEIGHT).contains(&link.weight));
            }
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let a: AdjacencyMatrixGraph = generate_random_with_rng(15, 40, &mut StdRng::seed_from_u64(7)).unwrap();
        let b: AdjacencyMatrixGraph = generate_random_with_rng(15, 40, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn rejects_density_above_hundred() {
        assert!(matches!(generate_random::<AdjacencyListGraph>(5, 101), Err(GraphError::InvalidDensity(101))));
    }

    #[test]
    fn rejects_more_nodes_than_the_matrix_can_hold() {
        let res = generate_random::<AdjacencyMatrixGraph>(4294967295, 0);
        assert!(matches!(res, Err(GraphError::TooManyNodes(4294967295))));
        assert!(matches!(generate_random::<AdjacencyListGraph>(MAX_NUM_NODES + 1, 100), Err(GraphError::TooManyNodes(_))));
    }
}
