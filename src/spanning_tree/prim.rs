use log::debug;

use super::SpanningTree;
use crate::{
    error::GraphError,
    graphs::{edge::WeightedEdge, Graph, VertexId, Weight},
    queue::{expanded_vertices::ExpandedVertices, FrontierQueue, PrimQueueElement},
};

/// Prim's algorithm over the stored, directed edges.
///
/// The tree covers exactly the vertices reachable from the start vertex. For a
/// minimum spanning tree of an undirected graph every edge has to be stored in
/// both directions. If fewer vertices than the whole graph are reachable, the
/// weight of the partial tree is returned without any indication.
///
/// Like the shortest path search, the queue is never updated in place: edges
/// into vertices that joined the tree in the meantime are skipped on pop. This
/// also filters self-loops and parallel edges.
#[derive(Clone)]
pub struct Prim<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Prim<'a> {
    pub fn new(graph: &'a dyn Graph) -> Prim<'a> {
        Prim { graph }
    }

    pub fn tree_weight(&self, source: VertexId) -> Result<Weight, GraphError> {
        Ok(self.spanning_tree(source)?.weight)
    }

    pub fn spanning_tree(&self, source: VertexId) -> Result<SpanningTree, GraphError> {
        self.graph.check_vertex(source)?;

        let number_of_vertices = self.graph.number_of_vertices();
        let mut expanded = ExpandedVertices::new(number_of_vertices);
        let mut queue = FrontierQueue::new();
        let mut tree = SpanningTree::default();

        expanded.expand(source);
        self.push_edges(source, &expanded, &mut queue)?;

        for _ in 1..number_of_vertices {
            let Some(PrimQueueElement { weight, tail, head }) = queue.pop_unexpanded(&expanded)
            else {
                break;
            };

            expanded.expand(head);
            tree.weight += weight;
            tree.edges.push(WeightedEdge::new(tail, head, weight));

            self.push_edges(head, &expanded, &mut queue)?;
        }

        debug!(
            "prim from {}: {} of {} vertices in tree, {} entries pushed, {} stale entries skipped",
            source,
            expanded.count(),
            number_of_vertices,
            queue.pushed(),
            queue.stale()
        );

        Ok(tree)
    }

    fn push_edges(
        &self,
        tail: VertexId,
        expanded: &ExpandedVertices,
        queue: &mut FrontierQueue<PrimQueueElement>,
    ) -> Result<(), GraphError> {
        for edge in self.graph.edges(tail)? {
            self.graph.check_vertex(edge.head)?;
            if !expanded.is_expanded(edge.head) {
                queue.push(PrimQueueElement::new(edge.weight, tail, edge.head));
            }
        }
        Ok(())
    }
}

/// Total weight of a minimum spanning tree over the vertices reachable from
/// `source`.
pub fn minimum_spanning_tree_weight(
    graph: &dyn Graph,
    source: VertexId,
) -> Result<Weight, GraphError> {
    Prim::new(graph).tree_weight(source)
}
