//! Reading graphs from plain text edge lists.
//!
//! The format is a sequence of whitespace separated unsigned integers:
//! the number of vertices `n`, the number of edges `m`, followed by `m` triples `from to weight`.
//! Line breaks carry no meaning, there is no header and there are no comments.
//!
//! Only the header is validated, vertex counts above `MAX_NUM_NODES` are rejected.
//! If the edge section ends early or contains a token which is no unsigned integer,
//! reading stops there and the edges read so far make up the graph.
//! Edges with endpoints outside of `0..n` or a weight of at least `INFINITY` are skipped.
//! Both cases print a warning to stderr.
//!
//! # Example
//!
//! ```
//! # use dijkstra_compare::{datastr::graph::*, io::read_edge_list};
//! let graph: AdjacencyListGraph = read_edge_list("3 2\n0 1 5\n1 2 3\n".as_bytes())?;
//! assert_eq!(graph.num_nodes(), 3);
//! assert_eq!(graph.num_arcs(), 2);
//! # Ok::<(), dijkstra_compare::error::GraphError>(())
//! ```

use crate::datastr::graph::*;
use crate::error::GraphError;
use std::{fs::File, io::prelude::*, path::Path, str::FromStr};

/// Read an edge list from the file at `path` into a new graph.
/// Fails if the file can not be opened or read, or if the header is malformed.
pub fn load_edge_list<G: BuildGraph, P: AsRef<Path>>(path: P) -> Result<G, GraphError> {
    read_edge_list(File::open(path)?)
}

/// Read an edge list from `reader` into a new graph.
/// Edges are inserted in the order in which they appear.
pub fn read_edge_list<G: BuildGraph, R: Read>(mut reader: R) -> Result<G, GraphError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    let num_nodes: usize = parse_next(&mut tokens).ok_or(GraphError::MalformedHeader)?;
    let num_edges: usize = parse_next(&mut tokens).ok_or(GraphError::MalformedHeader)?;
    if num_nodes > MAX_NUM_NODES {
        return Err(GraphError::TooManyNodes(num_nodes));
    }

    let mut graph = G::with_num_nodes(num_nodes);
    let mut num_read = 0;
    let mut num_skipped = 0;

    while num_read < num_edges {
        let (from, to, weight) = match parse_edge(&mut tokens) {
            Some(edge) => edge,
            None => {
                eprintln!("edge list ended after {} of {} edges, keeping partial graph", num_read, num_edges);
                break;
            }
        };
        num_read += 1;

        if (from as usize) >= num_nodes || (to as usize) >= num_nodes || weight >= INFINITY {
            num_skipped += 1;
            continue;
        }
        graph.add_edge(from, to, weight);
    }

    if num_skipped > 0 {
        eprintln!("skipped {} edges with invalid endpoints or weights", num_skipped);
    }

    Ok(graph)
}

fn parse_edge<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<(NodeId, NodeId, Weight)> {
    Some((parse_next(tokens)?, parse_next(tokens)?, parse_next(tokens)?))
}

fn parse_next<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<T> {
    tokens.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_edges_in_order() {
        let graph: AdjacencyListGraph = read_edge_list("4 3 0 1 5\n1 2 3\n\n0 2 9".as_bytes()).unwrap();

        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.neighbors(0), &[Link { node: 1, weight: 5 }, Link { node: 2, weight: 9 }]);
        assert_eq!(graph.neighbors(1), &[Link { node: 2, weight: 3 }]);
    }

    #[test]
    fn malformed_header_is_an_error() {
        assert!(matches!(read_edge_list::<AdjacencyListGraph, _>("".as_bytes()), Err(GraphError::MalformedHeader)));
        assert!(matches!(read_edge_list::<AdjacencyListGraph, _>("4".as_bytes()), Err(GraphError::MalformedHeader)));
        assert!(matches!(read_edge_list::<AdjacencyListGraph, _>("-4 2".as_bytes()), Err(GraphError::MalformedHeader)));
        assert!(matches!(read_edge_list::<AdjacencyListGraph, _>("four 2".as_bytes()), Err(GraphError::MalformedHeader)));
    }

    #[test]
    fn vertex_count_beyond_matrix_capacity_is_an_error() {
        let res = read_edge_list::<AdjacencyListGraph, _>("4294967295 0".as_bytes());
        assert!(matches!(res, Err(GraphError::TooManyNodes(4294967295))));

        let res = read_edge_list::<AdjacencyMatrixGraph, _>(format!("{} 0", MAX_NUM_NODES + 1).as_bytes());
        assert!(matches!(res, Err(GraphError::TooManyNodes(n)) if n == MAX_NUM_NODES + 1));
    }

    #[test]
    fn short_input_keeps_partial_graph() {
        let graph: AdjacencyMatrixGraph = read_edge_list("3 5\n0 1 5\n1 2".as_bytes()).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.weight(0, 1), 5);
    }

    #[test]
    fn negative_weight_ends_edge_section() {
        let graph: AdjacencyListGraph = read_edge_list("3 3\n0 1 5\n1 2 -3\n0 2 1".as_bytes()).unwrap();

        assert_eq!(graph.num_arcs(), 1);
    }

    #[test]
    fn skips_invalid_edges() {
        let graph: AdjacencyListGraph = read_edge_list(format!("2 3\n0 7 1\n0 1 {}\n1 0 2", INFINITY).as_bytes()).unwrap();

        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.neighbors(1), &[Link { node: 0, weight: 2 }]);
    }

    #[test]
    fn ignores_trailing_tokens() {
        let graph: AdjacencyListGraph = read_edge_list("2 1\n0 1 5\n1 0 7".as_bytes()).unwrap();

        assert_eq!(graph.num_arcs(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let res = load_edge_list::<AdjacencyListGraph, _>("/this/file/does/not/exist.txt");
        assert!(matches!(res, Err(GraphError::Io(_))));
    }
}
