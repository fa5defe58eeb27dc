use std::fmt;

use log::warn;

use crate::algorithm::split::SplitPoint;
use crate::algorithm::AllPairsResult;
use crate::graph::EdgeWeight;
use crate::{Error, Result};

/// A reconstructed shortest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<W>
where
    W: EdgeWeight,
{
    /// First vertex
    pub from: usize,
    /// Last vertex
    pub to: usize,
    /// Total weight, `D[from][to]`
    pub distance: W,
    /// Vertices strictly between `from` and `to`, in travel order
    pub intermediates: Vec<usize>,
}

impl<W> ShortestPath<W>
where
    W: EdgeWeight,
{
    /// The full vertex sequence `from, intermediates..., to`
    ///
    /// A path from a vertex to itself is the single vertex.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(self.intermediates.len() + 2);
        vertices.push(self.from);
        vertices.extend_from_slice(&self.intermediates);
        if self.to != self.from {
            vertices.push(self.to);
        }
        vertices
    }

    /// Number of edges travelled
    pub fn edge_count(&self) -> usize {
        self.vertices().len() - 1
    }
}

impl<W> fmt::Display for ShortestPath<W>
where
    W: EdgeWeight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, v) in self.vertices().iter().enumerate() {
            if idx > 0 {
                write!(f, " --> ")?;
            }
            write!(f, "V{}", v)?;
        }
        Ok(())
    }
}

impl<W> AllPairsResult<W>
where
    W: EdgeWeight,
{
    /// Reconstructs the shortest path from `from` to `to`
    ///
    /// Fails with `UnreachablePair` when no path exists.
    pub fn reconstruct_path(&self, from: usize, to: usize) -> Result<ShortestPath<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let distance = self.distances[(from, to)];
        if distance.is_sentinel() {
            return Err(Error::UnreachablePair { from, to });
        }

        let mut intermediates = Vec::new();
        if from != to {
            self.push_intermediates(from, to, 0, &mut intermediates);
        }

        Ok(ShortestPath {
            from,
            to,
            distance,
            intermediates,
        })
    }

    /// Appends the vertices strictly between `from` and `to`
    ///
    /// Splits recorded for the sub-pairs `(from, k)` and `(k, to)` are always
    /// lower than `k`, so recursion depth is bounded by the vertex count and a
    /// simple path has at most `n - 2` intermediates. On graphs with negative
    /// cycles neither holds; the output is then cut off at `n - 2` vertices,
    /// which also bounds the work done.
    fn push_intermediates(&self, from: usize, to: usize, depth: usize, out: &mut Vec<usize>) {
        let k = match self.splits[(from, to)] {
            SplitPoint::NoIntermediate => return,
            SplitPoint::SplitAt(k) => k,
        };

        let limit = self.vertex_count().saturating_sub(2);
        if depth >= self.vertex_count() || out.len() >= limit {
            warn!("Split points for {} -> {} do not form a simple path; path cut off", from, to);
            return;
        }

        self.push_intermediates(from, k, depth + 1, out);
        if out.len() >= limit {
            return;
        }
        out.push(k);
        self.push_intermediates(k, to, depth + 1, out);
    }

    /// Lazily enumerates every reachable ordered pair with distinct endpoints,
    /// in row-major order
    pub fn all_paths(&self) -> AllPaths<'_, W> {
        AllPaths {
            result: self,
            next: 0,
        }
    }
}

/// Iterator over all reachable pairs, see [`AllPairsResult::all_paths`]
#[derive(Debug, Clone)]
pub struct AllPaths<'a, W>
where
    W: EdgeWeight,
{
    result: &'a AllPairsResult<W>,
    /// Next cell to inspect, `from * n + to`
    next: usize,
}

impl<'a, W> Iterator for AllPaths<'a, W>
where
    W: EdgeWeight,
{
    type Item = ShortestPath<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.result.vertex_count();
        while self.next < n * n {
            let (from, to) = (self.next / n, self.next % n);
            self.next += 1;

            if from == to || self.result.distances[(from, to)].is_sentinel() {
                continue;
            }
            match self.result.reconstruct_path(from, to) {
                Ok(path) => return Some(path),
                Err(e) => warn!("Skipping {} -> {}: {}", from, to, e),
            }
        }
        None
    }
}
