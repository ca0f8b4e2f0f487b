use serde::{Deserialize, Serialize};

/// Vertex identity. Live vertices are numbered from 1; 0 never names a vertex.
pub type Vertex = usize;

/// Edge identity derived from its endpoints by a pairing function
pub type EdgeId = usize;

/// Whether edges have an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    /// `(u, v)` and `(v, u)` are different edges
    Directed,
    /// `(u, v)` and `(v, u)` name the same edge
    Undirected,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        }
    }

    /// Identity of the edge `(u, v)`.
    ///
    /// Directed: `((u+v)(u+v+1))/2 + v`. Undirected: the same with
    /// `x = max(u, v)`, `y = min(u, v)` so both orientations agree.
    pub fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        let (x, y) = match self {
            GraphKind::Directed => (u, v),
            GraphKind::Undirected => (u.max(v), u.min(v)),
        };
        ((x + y) * (x + y + 1)) / 2 + y
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which endpoint of an edge an adjacency scan follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    /// Edges leaving the vertex (successors)
    Out,
    /// Edges entering the vertex (predecessors)
    In,
    /// Either endpoint
    Both,
}
