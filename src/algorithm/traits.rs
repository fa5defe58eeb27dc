use crate::algorithm::split::SplitPoint;
use crate::data_structures::SquareMatrix;
use crate::graph::{EdgeWeight, Graph};
use crate::{Error, Result};

/// Result of an all-pairs shortest path computation
///
/// Holds the distance matrix `D` and the split-point matrix `P`. Both are
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsResult<W>
where
    W: EdgeWeight,
{
    /// `distances[(i, j)]` is the shortest `i → j` length, or the sentinel
    pub(crate) distances: SquareMatrix<W>,

    /// `splits[(i, j)]` is the vertex that last improved the pair
    pub(crate) splits: SquareMatrix<SplitPoint>,
}

impl<W> AllPairsResult<W>
where
    W: EdgeWeight,
{
    pub(crate) fn new(distances: SquareMatrix<W>, splits: SquareMatrix<SplitPoint>) -> Self {
        AllPairsResult { distances, splits }
    }

    /// Number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.distances.size()
    }

    /// The distance matrix `D`
    pub fn distances(&self) -> &SquareMatrix<W> {
        &self.distances
    }

    /// The split-point matrix `P`
    pub fn split_points(&self) -> &SquareMatrix<SplitPoint> {
        &self.splits
    }

    /// Consumes the result, returning `(D, P)`
    pub fn into_parts(self) -> (SquareMatrix<W>, SquareMatrix<SplitPoint>) {
        (self.distances, self.splits)
    }

    /// Shortest distance from `from` to `to`, None if unreachable
    pub fn distance(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let d = self.distances[(from, to)];
        Ok(if d.is_sentinel() { None } else { Some(d) })
    }

    /// Split point recorded for the pair
    pub fn split_point(&self, from: usize, to: usize) -> Result<SplitPoint> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.splits[(from, to)])
    }

    /// Vertices lying on a negative cycle (`D[i][i] < 0`)
    ///
    /// Distances are unspecified when this is non-empty.
    pub fn negative_cycle_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&i| self.distances[(i, i)] < W::zero())
            .collect()
    }

    pub(crate) fn check_vertex(&self, index: usize) -> Result<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::VertexIndexOutOfRange {
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsShortestPath<W, G>
where
    W: EdgeWeight,
    G: Graph<W>,
{
    /// Compute shortest distances and split points between every pair of vertices
    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
