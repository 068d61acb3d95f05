use log::debug;

use super::{Path, PathFinding, ShortestPathRequest};
use crate::{
    error::GraphError,
    graphs::{Graph, VertexId, Weight},
    queue::{expanded_vertices::ExpandedVertices, DijkstraQueueElement, FrontierQueue},
};

/// Result of one search. Only expanded vertices carry a distance.
pub struct DijkstraData {
    distances: Vec<Option<Weight>>,
    tentative: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl DijkstraData {
    fn new(number_of_vertices: u32) -> DijkstraData {
        DijkstraData {
            distances: vec![None; number_of_vertices as usize],
            tentative: vec![None; number_of_vertices as usize],
            predecessors: vec![None; number_of_vertices as usize],
        }
    }

    // Remembers the cheapest tail per head so the path can be rebuilt. The
    // queue entry is pushed regardless of whether it improves anything.
    fn update(&mut self, tail: VertexId, head: VertexId, alternative_weight: Weight) {
        let current_weight = self.tentative[head as usize];
        if current_weight.map_or(true, |current_weight| alternative_weight < current_weight) {
            self.tentative[head as usize] = Some(alternative_weight);
            self.predecessors[head as usize] = Some(tail);
        }
    }

    pub fn get_distance(&self, vertex: VertexId) -> Option<Weight> {
        *self.distances.get(vertex as usize)?
    }

    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        let weight = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessors[current as usize] {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, weight })
    }

    pub fn into_distances(self) -> Vec<Option<Weight>> {
        self.distances
    }
}

/// Dijkstra's algorithm with a lazy-deletion priority queue.
///
/// Instead of decreasing the key of a queued vertex, every relaxation pushes a
/// new entry. Entries of vertices that are already expanded are skipped when
/// popped. The first entry popped for a vertex carries its final distance.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(
        &self,
        path_request: &ShortestPathRequest,
    ) -> Result<Option<Path>, GraphError> {
        let data = self.get_data(path_request.source(), Some(path_request.target()))?;
        Ok(data.get_path(path_request.target()))
    }

    fn shortest_path_weight(
        &self,
        path_request: &ShortestPathRequest,
    ) -> Result<Option<Weight>, GraphError> {
        let data = self.get_data(path_request.source(), Some(path_request.target()))?;
        Ok(data.get_distance(path_request.target()))
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    /// Distances from `source` to every vertex, `None` where unreachable.
    pub fn single_source(&self, source: VertexId) -> Result<Vec<Option<Weight>>, GraphError> {
        Ok(self.get_data(source, None)?.into_distances())
    }

    /// Runs the search from `source`. With a target, the search stops as soon
    /// as the target is expanded.
    pub fn get_data(
        &self,
        source: VertexId,
        target: Option<VertexId>,
    ) -> Result<DijkstraData, GraphError> {
        self.graph.check_vertex(source)?;
        if let Some(target) = target {
            self.graph.check_vertex(target)?;
        }

        let number_of_vertices = self.graph.number_of_vertices();
        let mut data = DijkstraData::new(number_of_vertices);
        let mut expanded = ExpandedVertices::new(number_of_vertices);
        let mut queue = FrontierQueue::new();

        data.tentative[source as usize] = Some(0.0);
        queue.push(DijkstraQueueElement::new(0.0, source));

        while let Some(DijkstraQueueElement { weight, vertex }) = queue.pop_unexpanded(&expanded)
        {
            expanded.expand(vertex);
            data.distances[vertex as usize] = Some(weight);

            if Some(vertex) == target {
                break;
            }

            for edge in self.graph.edges(vertex)? {
                self.graph.check_vertex(edge.head)?;
                if edge.weight < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        tail: vertex,
                        head: edge.head,
                        weight: edge.weight,
                    });
                }
                if expanded.is_expanded(edge.head) {
                    continue;
                }

                let alternative_weight = weight + edge.weight;
                data.update(vertex, edge.head, alternative_weight);
                queue.push(DijkstraQueueElement::new(alternative_weight, edge.head));
            }
        }

        debug!(
            "dijkstra from {} to {:?}: {} vertices expanded, {} entries pushed, {} stale entries skipped",
            source,
            target,
            expanded.count(),
            queue.pushed(),
            queue.stale()
        );

        Ok(data)
    }
}

/// Weight of a shortest path from `source` to `target`, `None` if there is no
/// path.
pub fn shortest_path_weight(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Weight>, GraphError> {
    Dijkstra::new(graph).shortest_path_weight(&ShortestPathRequest::new(source, target))
}
