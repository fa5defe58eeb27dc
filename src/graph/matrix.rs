use log::warn;

use crate::data_structures::SquareMatrix;
use crate::graph::traits::Graph;
use crate::graph::weight::EdgeWeight;
use crate::{Error, Result};

/// A dense directed graph stored as an adjacency matrix
///
/// The diagonal is always zero and absent edges hold `W::sentinel()`.
/// Every stored weight lies within `[-bound, bound]`, where the bound is
/// small enough that no simple path can reach the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: EdgeWeight,
{
    /// Edge weights, `weights[(from, to)]`
    weights: SquareMatrix<W>,

    /// Largest absolute weight accepted by `set_edge`
    bound: W,
}

impl<W> AdjacencyMatrix<W>
where
    W: EdgeWeight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_bound(vertex_count, W::default_bound(vertex_count))
    }

    /// Creates an empty graph that only accepts weights in `[-bound, bound]`
    ///
    /// A bound looser than `W::default_bound(vertex_count)` is tightened to it.
    pub fn with_bound(vertex_count: usize, bound: W) -> Result<Self> {
        if vertex_count < 1 {
            return Err(Error::InvalidGraphSize(vertex_count));
        }

        let bound = bound.max(W::zero()).min(W::default_bound(vertex_count));
        let weights = SquareMatrix::from_fn(vertex_count, |from, to| {
            if from == to {
                W::zero()
            } else {
                W::sentinel()
            }
        });

        Ok(AdjacencyMatrix { weights, bound })
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (from, to, weight) in edges {
            graph.set_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Sets the weight of the edge `from → to`, replacing any previous weight
    ///
    /// Diagonal assignments are ignored so that `W[i][i]` stays zero.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if !weight.is_within(self.bound) {
            return Err(Error::WeightOutOfRange {
                weight: weight.to_string(),
                bound: self.bound.to_string(),
            });
        }

        if from == to {
            warn!("Ignoring self-loop on vertex {} with weight {}", from, weight);
            return Ok(());
        }

        self.weights[(from, to)] = weight;
        Ok(())
    }

    /// Sets `from → to` and `to → from` to the same weight
    pub fn set_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)
    }

    /// Removes the edge `from → to` if present
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from != to {
            self.weights[(from, to)] = W::sentinel();
        }
        Ok(())
    }

    /// Returns the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<W> {
        self.check_vertex(row)?;
        self.check_vertex(col)?;
        Ok(self.weights[(row, col)])
    }

    /// The value stored for absent edges
    pub fn sentinel(&self) -> W {
        W::sentinel()
    }

    /// The largest absolute weight this graph accepts
    pub fn bound(&self) -> W {
        self.bound
    }

    /// Read-only view of the underlying matrix
    pub fn as_matrix(&self) -> &SquareMatrix<W> {
        &self.weights
    }

    fn check_vertex(&self, index: usize) -> Result<()> {
        if self.has_vertex(index) {
            Ok(())
        } else {
            Err(Error::VertexIndexOutOfRange {
                index,
                vertex_count: self.weights.size(),
            })
        }
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: EdgeWeight,
{
    fn vertex_count(&self) -> usize {
        self.weights.size()
    }

    fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        (0..n)
            .flat_map(|from| (0..n).map(move |to| (from, to)))
            .filter(|&(from, to)| from != to && !self.weights[(from, to)].is_sentinel())
            .count()
    }

    fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get(from, to).copied()
    }
}
