//! Graphs that carry a payload on vertices and edges
//!
//! Labels are keyed by vertex and edge identity; the underlying [`Graph`]
//! never sees them. Removing a vertex or edge drops its labels.

use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::provider::GraphProvider;
use crate::graph::store::{Neighbors, Vertices};
use crate::graph::types::{EdgeId, GraphKind, Vertex};
use crate::graph::Graph;
use std::collections::HashMap;

/// A [`Graph`] with a `VL` label per vertex and an `EL` label per edge
#[derive(Debug, Clone)]
pub struct LabeledGraph<VL, EL> {
    graph: Graph,
    vertex_labels: HashMap<Vertex, VL>,
    edge_labels: HashMap<EdgeId, EL>,
}

impl<VL, EL> LabeledGraph<VL, EL> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            graph: Graph::new(kind),
            vertex_labels: HashMap::new(),
            edge_labels: HashMap::new(),
        }
    }

    /// The unlabeled structure
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Add a vertex carrying `label`
    pub fn add_vertex(&mut self, label: VL) -> Vertex {
        let v = self.graph.add_vertex();
        self.vertex_labels.insert(v, label);
        v
    }

    /// Add the edge `(u, v)` carrying `label`.
    ///
    /// Re-adding an existing edge replaces its label.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, label: EL) -> Result<EdgeId> {
        let id = self.graph.add_edge(u, v)?;
        self.edge_labels.insert(id, label);
        Ok(id)
    }

    pub fn remove_vertex(&mut self, v: Vertex) {
        if !self.graph.contains_vertex(v) {
            return;
        }
        let incident: Vec<EdgeId> = self
            .graph
            .edges()
            .filter(|&(a, b)| a == v || b == v)
            .map(|(a, b)| self.graph.edge_id(a, b))
            .collect();
        for id in incident {
            self.edge_labels.remove(&id);
        }
        self.vertex_labels.remove(&v);
        self.graph.remove_vertex(v);
    }

    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) {
        if self.graph.contains_edge(u, v) {
            self.edge_labels.remove(&self.graph.edge_id(u, v));
            self.graph.remove_edge(u, v);
        }
    }

    pub fn label(&self, v: Vertex) -> Option<&VL> {
        self.vertex_labels.get(&v)
    }

    pub fn edge_label(&self, u: Vertex, v: Vertex) -> Option<&EL> {
        if !self.graph.contains_edge(u, v) {
            return None;
        }
        self.edge_labels.get(&self.graph.edge_id(u, v))
    }

    pub fn set_label(&mut self, v: Vertex, label: VL) -> Result<()> {
        ensure_vertex!(self.graph, v);
        self.vertex_labels.insert(v, label);
        Ok(())
    }

    pub fn set_edge_label(&mut self, u: Vertex, v: Vertex, label: EL) -> Result<()> {
        if !self.graph.contains_edge(u, v) {
            return Err(GraphError::invalid_value("edge", format!("({}, {})", u, v)));
        }
        self.edge_labels.insert(self.graph.edge_id(u, v), label);
        Ok(())
    }

    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.graph.contains_edge(u, v)
    }
}

impl<VL, EL> GraphProvider for LabeledGraph<VL, EL> {
    fn successors(&self, v: Vertex) -> Neighbors<'_> {
        self.graph.successors(v)
    }

    fn contains_vertex(&self, v: Vertex) -> bool {
        self.graph.contains_vertex(v)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn max_vertex(&self) -> Vertex {
        self.graph.max_vertex()
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Road {
        name: &'static str,
        miles: f64,
    }

    fn road(name: &'static str, miles: f64) -> Road {
        Road { name, miles }
    }

    #[test]
    fn test_vertex_labels() {
        let mut g: LabeledGraph<&str, Road> = LabeledGraph::new(GraphKind::Directed);
        let berkeley = g.add_vertex("Berkeley");
        let oakland = g.add_vertex("Oakland");
        assert_eq!(g.label(berkeley), Some(&"Berkeley"));
        assert_eq!(g.label(oakland), Some(&"Oakland"));
        assert_eq!(g.label(3), None);

        g.set_label(oakland, "Oakland_CA").unwrap();
        assert_eq!(g.label(oakland), Some(&"Oakland_CA"));
        assert!(g.set_label(9, "nowhere").is_err());
    }

    #[test]
    fn test_edge_labels_directed() {
        let mut g = LabeledGraph::new(GraphKind::Directed);
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        g.add_edge(a, b, road("I-80", 3.5)).unwrap();
        g.add_edge(b, a, road("I-80", 3.4)).unwrap();

        assert_eq!(g.edge_label(a, b).map(|r| r.miles), Some(3.5));
        assert_eq!(g.edge_label(b, a).map(|r| r.miles), Some(3.4));

        g.set_edge_label(a, b, road("I-580", 4.0)).unwrap();
        assert_eq!(g.edge_label(a, b), Some(&road("I-580", 4.0)));
        assert!(g.set_edge_label(a, a, road("loop", 1.0)).is_err());
    }

    #[test]
    fn test_edge_labels_undirected_share_identity() {
        let mut g = LabeledGraph::new(GraphKind::Undirected);
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, road("Shattuck", 1.2)).unwrap();
        assert_eq!(g.edge_label(b, a).map(|r| r.name), Some("Shattuck"));
    }

    #[test]
    fn test_remove_drops_labels() {
        let mut g = LabeledGraph::new(GraphKind::Directed);
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        let c = g.add_vertex("C");
        g.add_edge(a, b, road("ab", 1.0)).unwrap();
        g.add_edge(c, b, road("cb", 1.0)).unwrap();
        g.add_edge(a, c, road("ac", 1.0)).unwrap();

        g.remove_vertex(b);
        assert_eq!(g.label(b), None);
        assert_eq!(g.edge_label(a, b), None);
        assert_eq!(g.edge_label(a, c).map(|r| r.name), Some("ac"));

        // The recycled identity starts without the old labels
        let d = g.add_vertex("D");
        assert_eq!(d, b);
        g.graph.add_edge(a, d).unwrap();
        assert_eq!(g.label(d), Some(&"D"));
        assert_eq!(g.edge_label(a, d), None);

        g.remove_edge(a, c);
        assert_eq!(g.edge_label(a, c), None);
        assert!(!g.contains_edge(a, c));
    }

    #[test]
    fn test_provider_delegates_to_graph() {
        let mut g = LabeledGraph::new(GraphKind::Directed);
        let a = g.add_vertex(());
        let b = g.add_vertex(());
        g.add_edge(a, b, ()).unwrap();

        let provider: &dyn GraphProvider = &g;
        assert_eq!(provider.successors(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(provider.vertex_count(), 2);
        assert_eq!(provider.max_vertex(), 2);
        assert!(provider.is_directed());
    }
}
