//! Single source shortest paths with Dijkstra's algorithm on two graph representations.
//!
//! The same edge stream is stored both as an adjacency list and as a dense adjacency matrix
//! (`graph_pair::GraphPair`) so that the priority queue variant and the `O(n^2)` scanning variant
//! of Dijkstra can be timed against each other on identical input.

#[macro_use]
pub mod report;

pub mod algo;
pub mod cli;
pub mod datastr;
pub mod error;
pub mod experiments;
pub mod generator;
pub mod graph_pair;
pub mod io;
pub mod menu;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
