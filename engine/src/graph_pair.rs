//! Both graph representations side by side.
//!
//! A `GraphPair` receives every edge in both forms, so the two always describe the same edge stream
//! and their Dijkstra variants can be compared on identical input.
//! The only behavioural difference between them is the handling of parallel edges:
//! the list keeps all of them, the matrix only the last one inserted.

use crate::algo::{dijkstra::*, Query};
use crate::datastr::graph::*;
use crate::report::*;
use serde::Serialize;
use std::io::{Result, Write};

#[derive(Debug, Clone)]
pub struct GraphPair {
    list: AdjacencyListGraph,
    matrix: AdjacencyMatrixGraph,
}

impl BuildGraph for GraphPair {
    fn with_num_nodes(num_nodes: usize) -> Self {
        GraphPair {
            list: AdjacencyListGraph::with_num_nodes(num_nodes),
            matrix: AdjacencyMatrixGraph::with_num_nodes(num_nodes),
        }
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.list.add_edge(from, to, weight);
        self.matrix.add_edge(from, to, weight);
    }
}

/// Outcome of running one representation's Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub running_time_ms: f64,
    /// Distance to the query target, `None` if unreachable
    pub distance: Option<Distance>,
}

/// Result of `GraphPair::run_and_compare`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub from: NodeId,
    pub to: NodeId,
    pub list: Measurement,
    pub matrix: Measurement,
}

impl Comparison {
    /// Did both representations compute the same distance.
    /// Only parallel edges with different weights can make this false.
    pub fn agrees(&self) -> bool {
        self.list.distance == self.matrix.distance
    }
}

impl GraphPair {
    pub fn list(&self) -> &AdjacencyListGraph {
        &self.list
    }

    pub fn matrix(&self) -> &AdjacencyMatrixGraph {
        &self.matrix
    }

    pub fn num_nodes(&self) -> usize {
        self.list.num_nodes()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        (node as usize) < self.num_nodes()
    }

    /// Run both Dijkstra variants from `query.from`, each timed on its own, and compare the distances to `query.to`.
    /// Panics if one of the query nodes does not exist.
    pub fn run_and_compare(&self, query: Query) -> Comparison {
        let Query { from, to } = query;
        assert!(self.contains_node(to), "target {} out of range for {} nodes", to, self.num_nodes());

        let list = Self::measure_run("adjacency_list", || self.list.shortest_paths(from), to);
        let matrix = Self::measure_run("adjacency_matrix", || self.matrix.shortest_paths(from), to);

        Comparison { from, to, list, matrix }
    }

    fn measure_run(key: &str, run: impl FnOnce() -> Distances, to: NodeId) -> Measurement {
        let _ctx = push_context(key.to_string());
        let (distances, running_time) = measure(run);
        let running_time_ms = to_ms(running_time);
        report!("running_time_ms", running_time_ms);

        Measurement {
            running_time_ms,
            distance: distances.get(to),
        }
    }

    /// Write both representations, the list form first.
    pub fn display(&self, out: &mut impl Write) -> Result<()> {
        display(&self.list, &self.matrix, out)
    }
}

/// Write a textual dump of both representations to `out`.
pub fn display(list: &AdjacencyListGraph, matrix: &AdjacencyMatrixGraph, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Adjacency list:")?;
    write!(out, "{}", list)?;
    writeln!(out, "Adjacency matrix:")?;
    write!(out, "{}", matrix)
}
