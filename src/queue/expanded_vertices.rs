use crate::graphs::VertexId;

/// Finalized flag per vertex. A vertex is expanded at most once.
pub struct ExpandedVertices {
    expanded: Vec<bool>,
    count: u32,
}

impl ExpandedVertices {
    pub fn new(number_of_vertices: u32) -> Self {
        ExpandedVertices {
            expanded: vec![false; number_of_vertices as usize],
            count: 0,
        }
    }

    /// Marks `vertex` as expanded and returns whether it already was.
    pub fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        if !is_expanded {
            self.expanded[vertex as usize] = true;
            self.count += 1;
        }
        is_expanded
    }

    pub fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded[vertex as usize]
    }

    /// Number of expanded vertices.
    pub fn count(&self) -> u32 {
        self.count
    }
}
