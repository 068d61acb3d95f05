use crate::error::GraphError;

pub mod edge;
pub mod vec_vec_graph;

use edge::TaillessEdge;

pub type VertexId = u32;
pub type Weight = f64;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> usize {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).map_or(0, |edges| edges.len()))
            .sum::<usize>()
    }

    /// Outgoing edges of `tail`, in insertion order.
    fn edges(&self, tail: VertexId) -> Result<&[TaillessEdge], GraphError>;

    /// Fails with `InvalidVertex` unless `vertex` indexes into the graph.
    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex >= self.number_of_vertices() {
            return Err(GraphError::InvalidVertex {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }
}
