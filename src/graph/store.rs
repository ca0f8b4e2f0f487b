//! Vertex and edge store shared by directed and undirected graphs

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::{Direction, EdgeId, GraphKind, Vertex};
use std::collections::{btree_set, BTreeSet, HashSet};

/// A graph whose vertices are positive integers.
///
/// Vertex identities are recycled: a removed vertex's number is handed out
/// again by the next [`Graph::add_vertex`], smallest first. Edges are kept in
/// insertion order, which is the order successors and predecessors are
/// reported in. Self edges are allowed; duplicate edges are not.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    vertices: BTreeSet<Vertex>,
    free: BTreeSet<Vertex>,
    edges: Vec<(Vertex, Vertex)>,
    edge_ids: HashSet<EdgeId>,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn from_config(config: &crate::config::GraphConfig) -> Self {
        Self::new(config.kind)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Largest live vertex, or 0 for an empty graph
    pub fn max_vertex(&self) -> Vertex {
        self.vertices.last().copied().unwrap_or(0)
    }

    pub fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        self.kind.edge_id(u, v)
    }

    /// Add a vertex and return its identity
    pub fn add_vertex(&mut self) -> Vertex {
        let vertex = match self.free.pop_first() {
            Some(reused) => reused,
            None => self.max_vertex() + 1,
        };
        self.vertices.insert(vertex);
        tracing::trace!(vertex, "add_vertex");
        vertex
    }

    /// Add the edge `(u, v)` unless it (or its undirected twin) is present.
    ///
    /// Returns the edge identity whether or not anything was added.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<EdgeId> {
        ensure_vertex!(self, u);
        ensure_vertex!(self, v);

        let id = self.edge_id(u, v);
        if self.edge_ids.insert(id) {
            self.edges.push((u, v));
            tracing::trace!(u, v, edge_id = id, "add_edge");
        }
        Ok(id)
    }

    /// Remove `v` and every edge touching it. Absent vertices are ignored.
    pub fn remove_vertex(&mut self, v: Vertex) {
        if !self.vertices.remove(&v) {
            return;
        }
        self.free.insert(v);

        let kind = self.kind;
        let edge_ids = &mut self.edge_ids;
        self.edges.retain(|&(a, b)| {
            let incident = a == v || b == v;
            if incident {
                edge_ids.remove(&kind.edge_id(a, b));
            }
            !incident
        });
        tracing::trace!(vertex = v, "remove_vertex");
    }

    /// Remove the edge `(u, v)` (either orientation when undirected)
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) {
        let id = self.edge_id(u, v);
        if !self.edge_ids.remove(&id) {
            return;
        }
        let kind = self.kind;
        self.edges.retain(|&(a, b)| kind.edge_id(a, b) != id);
        tracing::trace!(u, v, edge_id = id, "remove_edge");
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }

    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.contains_vertex(u)
            && self.contains_vertex(v)
            && self.edge_ids.contains(&self.edge_id(u, v))
    }

    /// Fail with `VertexNotFound` unless `v` is live
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        ensure_vertex!(self, v);
        Ok(())
    }

    /// Live vertices in ascending order
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices {
            inner: self.vertices.iter(),
        }
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.edges.iter().copied()
    }

    /// Vertices adjacent to `v` along the given direction, in edge-insertion order
    pub fn neighbors(&self, v: Vertex, direction: Direction) -> Neighbors<'_> {
        let direction = if self.is_directed() {
            direction
        } else {
            Direction::Both
        };
        Neighbors {
            edges: self.edges.iter(),
            vertex: v,
            direction,
        }
    }

    pub fn successors(&self, v: Vertex) -> Neighbors<'_> {
        self.neighbors(v, Direction::Out)
    }

    /// Directed graphs scan every edge; no reverse index is kept
    pub fn predecessors(&self, v: Vertex) -> Neighbors<'_> {
        self.neighbors(v, Direction::In)
    }

    pub fn out_degree(&self, v: Vertex) -> usize {
        if !self.contains_vertex(v) {
            return 0;
        }
        self.successors(v).count()
    }

    pub fn in_degree(&self, v: Vertex) -> usize {
        if !self.contains_vertex(v) {
            return 0;
        }
        self.predecessors(v).count()
    }

    /// Synonym for [`Graph::out_degree`], intended for undirected graphs
    pub fn degree(&self, v: Vertex) -> usize {
        self.out_degree(v)
    }
}

/// Iterator over live vertices
#[derive(Debug, Clone)]
pub struct Vertices<'a> {
    inner: btree_set::Iter<'a, Vertex>,
}

impl Iterator for Vertices<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Lazy scan of the edge list for the neighbors of one vertex
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    edges: std::slice::Iter<'a, (Vertex, Vertex)>,
    vertex: Vertex,
    direction: Direction,
}

impl Iterator for Neighbors<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let v = self.vertex;
        for &(from, to) in self.edges.by_ref() {
            match self.direction {
                Direction::Out if from == v => return Some(to),
                Direction::In if to == v => return Some(from),
                Direction::Both if from == v => return Some(to),
                Direction::Both if to == v => return Some(from),
                _ => {}
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.edges.len()))
    }
}
