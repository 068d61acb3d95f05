use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, VertexId, Weight,
};
use crate::error::GraphError;

/// Adjacency list graph. Edges are directed; an undirected edge is stored as
/// two directed ones.
///
/// Every head is a vertex of the graph and the number of vertices fits into a
/// `VertexId`. Deserialization checks both.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "UncheckedVecVecGraph")]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

#[derive(Deserialize)]
struct UncheckedVecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl TryFrom<UncheckedVecVecGraph> for VecVecGraph {
    type Error = GraphError;

    fn try_from(unchecked: UncheckedVecVecGraph) -> Result<Self, Self::Error> {
        if u32::try_from(unchecked.edges.len()).is_err() {
            return Err(GraphError::TooManyVertices {
                number_of_vertices: unchecked.edges.len(),
            });
        }

        let graph = VecVecGraph {
            edges: unchecked.edges,
        };
        for edge in graph.all_edges() {
            graph.check_vertex(edge.head)?;
        }
        Ok(graph)
    }
}

impl VecVecGraph {
    /// Creates a graph with `number_of_vertices` vertices and no edges.
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<VecVecGraph, GraphError> {
        let mut graph = VecVecGraph::with_vertices(number_of_vertices);
        for edge in edges {
            graph.add_directed_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    /// Appends the edge `tail -> head`. Parallel edges and self-loops are kept
    /// as given.
    pub fn add_directed_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let edge = WeightedEdge::new(tail, head, weight);
        self.check_vertex(edge.tail)?;
        self.check_vertex(edge.head)?;
        self.edges[edge.tail as usize].push(edge.tailless());
        Ok(())
    }

    /// Appends `u -> v` and `v -> u` with the same weight. Nothing is inserted
    /// if either endpoint is out of range.
    pub fn add_undirected_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let edge = WeightedEdge::new(u, v, weight);
        for edge in [edge, edge.reversed()] {
            self.edges[edge.tail as usize].push(edge.tailless());
        }
        Ok(())
    }

    /// All stored edges with their tails, grouped by tail.
    pub fn all_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().enumerate().flat_map(|(tail, edges)| {
            edges.iter().map(move |edge| edge.set_tail(tail as VertexId))
        })
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        // Fits by construction: `with_vertices` takes a u32 and deserialization
        // rejects larger graphs.
        u32::try_from(self.edges.len()).unwrap_or(u32::MAX)
    }

    fn edges(&self, tail: VertexId) -> Result<&[TaillessEdge], GraphError> {
        self.edges
            .get(tail as usize)
            .map(|edges| edges.as_slice())
            .ok_or(GraphError::InvalidVertex {
                vertex: tail,
                number_of_vertices: self.number_of_vertices(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_keep_insertion_order() {
        let mut graph = VecVecGraph::with_vertices(3);
        graph.add_directed_edge(0, 2, 5.0).unwrap();
        graph.add_directed_edge(0, 1, 1.0).unwrap();
        graph.add_directed_edge(0, 1, 1.0).unwrap();

        let heads: Vec<_> = graph.edges(0).unwrap().iter().map(|e| e.head).collect();
        assert_eq!(heads, vec![2, 1, 1]);
        assert!(graph.edges(1).unwrap().is_empty());
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn undirected_edge_is_stored_both_ways() {
        let mut graph = VecVecGraph::with_vertices(2);
        graph.add_undirected_edge(0, 1, 4.0).unwrap();

        assert_eq!(graph.edges(0).unwrap(), &[TaillessEdge::new(1, 4.0)]);
        assert_eq!(graph.edges(1).unwrap(), &[TaillessEdge::new(0, 4.0)]);
    }

    #[test]
    fn self_loops_are_stored() {
        let mut graph = VecVecGraph::with_vertices(1);
        graph.add_directed_edge(0, 0, 2.0).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut graph = VecVecGraph::with_vertices(2);

        assert!(matches!(
            graph.add_directed_edge(0, 2, 1.0),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                number_of_vertices: 2
            })
        ));
        assert!(graph.add_undirected_edge(5, 0, 1.0).is_err());
        assert!(graph.add_undirected_edge(0, 5, 1.0).is_err());
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.edges(2).is_err());
    }

    #[test]
    fn all_edges_restores_tails() {
        let edges = vec![WeightedEdge::new(1, 0, 3.0), WeightedEdge::new(0, 1, 2.0)];
        let graph = VecVecGraph::from_edges(2, &edges).unwrap();

        let collected: Vec<_> = graph.all_edges().collect();
        assert_eq!(collected, vec![edges[1], edges[0]]);
    }
}
