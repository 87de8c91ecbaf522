//! Errors while building graphs from external input.

use crate::datastr::graph::MAX_NUM_NODES;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("could not open graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("graph header must start with the vertex count and the edge count")]
    MalformedHeader,
    #[error("{0} vertices exceed the supported maximum of {}", MAX_NUM_NODES)]
    TooManyNodes(usize),
    #[error("density must be between 0 and 100, got {0}")]
    InvalidDensity(u32),
}
