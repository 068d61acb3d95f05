use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{VertexId, Weight};

pub mod expanded_vertices;

use expanded_vertices::ExpandedVertices;

/// Tentative distance of a vertex, as pushed during shortest path search.
#[derive(Copy, Clone, Debug)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: VertexId,
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: VertexId) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, vertex }
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on costs.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraQueueElement {}

/// Candidate edge for the spanning tree, ordered by its weight alone.
#[derive(Copy, Clone, Debug)]
pub struct PrimQueueElement {
    pub weight: Weight,
    pub tail: VertexId,
    pub head: VertexId,
}

impl PrimQueueElement {
    pub fn new(weight: Weight, tail: VertexId, head: VertexId) -> PrimQueueElement {
        PrimQueueElement { weight, tail, head }
    }
}

impl Ord for PrimQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.head.cmp(&other.head))
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl PartialOrd for PrimQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PrimQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrimQueueElement {}

/// Entries that are filtered by the vertex they would finalize.
pub trait QueueElement: Ord {
    fn vertex(&self) -> VertexId;
}

impl QueueElement for DijkstraQueueElement {
    fn vertex(&self) -> VertexId {
        self.vertex
    }
}

impl QueueElement for PrimQueueElement {
    fn vertex(&self) -> VertexId {
        self.head
    }
}

/// Append-only min-queue without decrease key. Superseded entries stay in the
/// heap and are dropped when popped after their vertex was expanded.
pub struct FrontierQueue<E: QueueElement> {
    heap: BinaryHeap<E>,
    pushed: usize,
    stale: usize,
}

impl<E: QueueElement> Default for FrontierQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: QueueElement> FrontierQueue<E> {
    pub fn new() -> FrontierQueue<E> {
        FrontierQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
            stale: 0,
        }
    }

    pub fn push(&mut self, element: E) {
        self.pushed += 1;
        self.heap.push(element);
    }

    /// Pops the smallest entry whose vertex is not expanded yet, discarding
    /// every stale entry on the way.
    pub fn pop_unexpanded(&mut self, expanded: &ExpandedVertices) -> Option<E> {
        while let Some(element) = self.heap.pop() {
            if !expanded.is_expanded(element.vertex()) {
                return Some(element);
            }
            self.stale += 1;
        }

        None
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries pushed so far.
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Number of entries discarded because their vertex was already expanded.
    pub fn stale(&self) -> usize {
        self.stale
    }
}
