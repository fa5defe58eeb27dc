use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::algorithm::paths::{AllPaths, ShortestPath};
use crate::algorithm::split::SplitPoint;
use crate::algorithm::{AllPairsResult, AllPairsShortestPath};
use crate::data_structures::SquareMatrix;
use crate::graph::{AdjacencyMatrix, EdgeWeight, Graph};
use crate::{Error, Result};

/// Settings for a Floyd-Warshall run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Sweep the rows of each `k` iteration in parallel
    pub parallel: bool,
    /// Log a warning when the result contains a negative cycle
    pub detect_negative_cycles: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            detect_negative_cycles: true,
        }
    }
}

/// Floyd-Warshall all-pairs shortest paths
///
/// For `k` in `0..n`, every pair `(i, j)` is relaxed through `k`. The `k`
/// loop must stay outermost: iteration `k` may only build on distances that
/// already use intermediates from `{0, ..., k-1}`.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    config: SolverConfig,
}

impl FloydWarshall {
    /// Creates a new solver with default settings
    pub fn new() -> Self {
        FloydWarshall::default()
    }

    /// Creates a solver with the given settings
    pub fn with_config(config: SolverConfig) -> Self {
        FloydWarshall { config }
    }

    /// Enable or disable the rayon row sweep
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.config.parallel = enabled;
        self
    }

    /// Enable or disable the negative cycle warning
    pub fn with_negative_cycle_detection(mut self, enabled: bool) -> Self {
        self.config.detect_negative_cycles = enabled;
        self
    }

    /// Current settings
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solves an adjacency matrix, returning `D` and `P`
    pub fn solve<W: EdgeWeight>(&self, graph: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>> {
        <Self as AllPairsShortestPath<W, AdjacencyMatrix<W>>>::compute_all_pairs(self, graph)
    }

    /// Relaxes every pair through `k`
    ///
    /// Row `k` is copied first. It only changes during iteration `k` when
    /// `D[k][k] < 0`, so the copy is exact for graphs without negative cycles
    /// and lets the rows be updated independently.
    fn relax_through<W: EdgeWeight>(
        &self,
        distances: &mut SquareMatrix<W>,
        splits: &mut SquareMatrix<SplitPoint>,
        k: usize,
    ) -> usize {
        let pivot_row = distances.row(k).to_vec();
        let n = distances.size();

        if self.config.parallel {
            distances
                .cells_mut()
                .par_chunks_exact_mut(n)
                .zip(splits.cells_mut().par_chunks_exact_mut(n))
                .map(|(dist_row, split_row)| relax_row(dist_row, split_row, &pivot_row, k))
                .sum()
        } else {
            distances
                .rows_mut()
                .zip(splits.rows_mut())
                .map(|(dist_row, split_row)| relax_row(dist_row, split_row, &pivot_row, k))
                .sum()
        }
    }
}

/// Relaxes one row `i` through `k`, returning the number of improved cells
fn relax_row<W: EdgeWeight>(
    dist_row: &mut [W],
    split_row: &mut [SplitPoint],
    pivot_row: &[W],
    k: usize,
) -> usize {
    let to_pivot = dist_row[k];
    if to_pivot.is_sentinel() {
        return 0;
    }

    let mut updates = 0;
    for (j, &from_pivot) in pivot_row.iter().enumerate() {
        // An unreachable leg must never produce a finite candidate
        if from_pivot.is_sentinel() {
            continue;
        }

        let candidate = to_pivot.path_sum(from_pivot);
        if candidate < dist_row[j] {
            trace!("column {} improved via {}: {:?} -> {:?}", j, k, dist_row[j], candidate);
            dist_row[j] = candidate;
            split_row[j] = SplitPoint::SplitAt(k);
            updates += 1;
        }
    }
    updates
}

impl<W, G> AllPairsShortestPath<W, G> for FloydWarshall
where
    W: EdgeWeight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<W>> {
        let n = graph.vertex_count();
        if n < 1 {
            return Err(Error::InvalidGraphSize(n));
        }

        debug!(
            "Solving all pairs on {} vertices, {} edges (parallel: {})",
            n,
            graph.edge_count(),
            self.config.parallel
        );

        // D starts as a copy of W, P starts with no intermediates
        let mut distances = SquareMatrix::from_fn(n, |i, j| {
            graph.weight(i, j).unwrap_or_else(W::sentinel)
        });
        let mut splits = SquareMatrix::filled(n, SplitPoint::NoIntermediate);

        let mut total_updates = 0;
        for k in 0..n {
            let updates = self.relax_through(&mut distances, &mut splits, k);
            debug!("Pivot {}/{}: {} pairs improved", k + 1, n, updates);
            total_updates += updates;
        }
        debug!("Finished after {} improving relaxations", total_updates);

        let result = AllPairsResult::new(distances, splits);

        if self.config.detect_negative_cycles {
            let cyclic = result.negative_cycle_vertices();
            if !cyclic.is_empty() {
                warn!(
                    "Graph contains a negative cycle through vertices {:?}; distances are unspecified",
                    cyclic
                );
            }
        }

        Ok(result)
    }
}

/// Owns a graph together with its (eventual) shortest path matrices
///
/// The engine starts `Unsolved`. `solve` computes `D` and `P` from scratch
/// and moves it to `Solved`; path queries before that fail with `NotSolved`.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W>
where
    W: EdgeWeight,
{
    graph: AdjacencyMatrix<W>,
    solver: FloydWarshall,
    solution: Option<AllPairsResult<W>>,
}

impl<W> ShortestPathEngine<W>
where
    W: EdgeWeight,
{
    /// Creates an unsolved engine over `graph`
    pub fn new(graph: AdjacencyMatrix<W>) -> Self {
        Self::with_solver(graph, FloydWarshall::new())
    }

    /// Creates an unsolved engine using a configured solver
    pub fn with_solver(graph: AdjacencyMatrix<W>, solver: FloydWarshall) -> Self {
        ShortestPathEngine {
            graph,
            solver,
            solution: None,
        }
    }

    /// The input graph
    pub fn graph(&self) -> &AdjacencyMatrix<W> {
        &self.graph
    }

    /// Returns true once `solve` has completed
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Computes `D` and `P`, recomputing from scratch if already solved
    pub fn solve(&mut self) -> Result<&AllPairsResult<W>> {
        let result = self.solver.solve(&self.graph)?;
        Ok(&*self.solution.insert(result))
    }

    /// The solved matrices
    pub fn result(&self) -> Result<&AllPairsResult<W>> {
        self.solution.as_ref().ok_or(Error::NotSolved)
    }

    /// Shortest distance between two vertices, None if unreachable
    pub fn distance(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.result()?.distance(from, to)
    }

    /// Shortest path between two vertices
    pub fn reconstruct_path(&self, from: usize, to: usize) -> Result<ShortestPath<W>> {
        self.result()?.reconstruct_path(from, to)
    }

    /// Lazily enumerates every reachable ordered pair with distinct endpoints
    pub fn all_paths(&self) -> Result<AllPaths<'_, W>> {
        Ok(self.result()?.all_paths())
    }
}
