//! Floyd APSP - All-Pairs Shortest Paths over dense weight matrices
//!
//! This library implements Floyd-Warshall over an adjacency matrix and records,
//! for every improved pair, the split point that last shortened it. Paths are
//! reconstructed by recursing on those split points.
//!
//! The algorithm is O(n³) in the vertex count and makes no attempt to exploit
//! sparsity. Negative edge weights are accepted, negative cycles are not
//! detected as errors and give unspecified distances.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    floyd::{FloydWarshall, ShortestPathEngine, SolverConfig},
    paths::{AllPaths, ShortestPath},
    split::SplitPoint,
    AllPairsResult, AllPairsShortestPath,
};
/// Re-export main types for convenient use
pub use graph::{matrix::AdjacencyMatrix, weight::EdgeWeight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid graph size: {0} (a graph needs at least one vertex)")]
    InvalidGraphSize(usize),

    #[error("Vertex index {index} out of range for a graph with {vertex_count} vertices")]
    VertexIndexOutOfRange { index: usize, vertex_count: usize },

    #[error("Edge weight {weight} outside the allowed range [-{bound}, {bound}]")]
    WeightOutOfRange { weight: String, bound: String },

    #[error("Shortest paths have not been computed yet")]
    NotSolved,

    #[error("No path from {from} to {to}")]
    UnreachablePair { from: usize, to: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
