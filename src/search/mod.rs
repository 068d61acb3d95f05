use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    graphs::{VertexId, Weight},
};

pub mod dijkstra;

/// Represents a request for finding a shortest path in a graph.
///
/// Source and target may be the same vertex, in which case the shortest path
/// has weight zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: VertexId,
    target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total weight associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

/// `Ok(None)` means the target is unreachable from the source.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, path_request: &ShortestPathRequest)
        -> Result<Option<Path>, GraphError>;

    fn shortest_path_weight(
        &self,
        path_request: &ShortestPathRequest,
    ) -> Result<Option<Weight>, GraphError>;
}
