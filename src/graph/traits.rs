use std::fmt::Debug;

use crate::graph::weight::EdgeWeight;

/// Trait representing a weighted directed graph with dense vertex ids `0..n`
pub trait Graph<W>: Debug
where
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, excluding the diagonal
    fn edge_count(&self) -> usize;

    /// Returns the stored cell for `from → to`: zero on the diagonal,
    /// the sentinel when there is no edge, None when out of range
    fn weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == to {
            return None;
        }
        self.weight(from, to).filter(|w| !w.is_sentinel())
    }

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            (0..self.vertex_count())
                .filter_map(move |to| self.get_edge_weight(vertex, to).map(|w| (to, w))),
        )
    }
}
