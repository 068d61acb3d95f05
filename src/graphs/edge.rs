use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// An entry of an adjacency list. The tail is the index of the list holding it.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn new(head: VertexId, weight: Weight) -> TaillessEdge {
        TaillessEdge { head, weight }
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
