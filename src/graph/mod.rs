//! Graph storage, traversal and path-finding
//!
//! Provides the building blocks for working with integer-identified graphs:
//! - `Graph` store with stable, reusable vertex identities
//! - `LabeledGraph` for attaching data to vertices and edges
//! - Traversal engine with breadth-first and depth-first specializations
//! - Dijkstra / A* shortest paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod labeled;
pub mod provider;
pub mod store;
pub mod types;

pub use algos::{
    bfs_find_path, bfs_order, dfs_postorder, dfs_preorder, topological_order,
    BreadthFirstTraversal, DepthFirstTraversal, EdgeWeights, PathState, ShortestPaths, Traversal,
    Visitor,
};
pub use labeled::LabeledGraph;
pub use provider::GraphProvider;
pub use store::{Graph, Neighbors, Vertices};
pub use types::{Direction, EdgeId, GraphKind, Vertex};
