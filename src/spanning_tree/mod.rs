use serde::{Deserialize, Serialize};

use crate::graphs::{edge::WeightedEdge, Weight};

pub mod prim;

/// Edges accepted into a spanning tree, in acceptance order, and their total
/// weight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub edges: Vec<WeightedEdge>,
    pub weight: Weight,
}
