use crate::graph::store::{Neighbors, Vertices};
use crate::graph::types::Vertex;
use crate::graph::Graph;

/// Trait for providing graph adjacency to the traversal and search engines
pub trait GraphProvider {
    fn successors(&self, v: Vertex) -> Neighbors<'_>;
    fn contains_vertex(&self, v: Vertex) -> bool;
    fn vertices(&self) -> Vertices<'_>;
    fn vertex_count(&self) -> usize;
    fn max_vertex(&self) -> Vertex;
    fn is_directed(&self) -> bool;
}

impl GraphProvider for Graph {
    fn successors(&self, v: Vertex) -> Neighbors<'_> {
        self.successors(v)
    }

    fn contains_vertex(&self, v: Vertex) -> bool {
        self.contains_vertex(v)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn max_vertex(&self) -> Vertex {
        self.max_vertex()
    }

    fn is_directed(&self) -> bool {
        self.is_directed()
    }
}
