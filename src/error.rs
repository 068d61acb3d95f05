use thiserror::Error;

use crate::graphs::{VertexId, Weight};

/// Errors returned by graph construction, searches and graph file access.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    InvalidVertex {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    #[error("graph with {number_of_vertices} vertices exceeds the vertex id range")]
    TooManyVertices { number_of_vertices: usize },

    #[error("edge {tail} -> {head} has negative weight {weight}, which shortest path search does not support")]
    NegativeWeight {
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}
