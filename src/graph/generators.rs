use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::matrix::AdjacencyMatrix;
use crate::Result;

/// Generates a random directed graph with `i32` weights
///
/// Every ordered pair `i != j` gets an edge with probability
/// `edge_probability`, weighted uniformly in `1..=max_weight`. The same seed
/// always yields the same graph.
pub fn random_graph(
    vertex_count: usize,
    edge_probability: f64,
    max_weight: i32,
    seed: u64,
) -> Result<AdjacencyMatrix<i32>> {
    let mut graph = AdjacencyMatrix::new(vertex_count)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.clamp(1, graph.bound());
    let p = edge_probability.clamp(0.0, 1.0);

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && rng.gen_bool(p) {
                graph.set_edge(from, to, rng.gen_range(1..=max_weight))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random DAG whose edges may carry negative weights
///
/// Edges only run from lower to higher ids, so there are no cycles at all
/// and negative weights are safe.
pub fn random_dag(
    vertex_count: usize,
    edge_probability: f64,
    max_abs_weight: i32,
    seed: u64,
) -> Result<AdjacencyMatrix<i32>> {
    let mut graph = AdjacencyMatrix::new(vertex_count)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let max_abs = max_abs_weight.clamp(1, graph.bound());
    let p = edge_probability.clamp(0.0, 1.0);

    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            if rng.gen_bool(p) {
                graph.set_edge(from, to, rng.gen_range(-max_abs..=max_abs))?;
            }
        }
    }

    Ok(graph)
}
