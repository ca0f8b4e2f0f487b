//! Graph algorithm implementations
//!
//! Contains the traversal and search engines:
//! - `traversal`: Fringe-driven traversal engine and visitor hooks
//! - `bfs`: Breadth-first specialization and fewest-edge paths
//! - `dfs`: Depth-first specialization with cycle detection
//! - `dijkstra`: Weighted shortest paths and A*
//! - `path`: Path reconstruction from predecessor links

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;
pub mod traversal;

pub use bfs::{bfs_find_path, bfs_order, BreadthFirstTraversal};
pub use dfs::{dfs_postorder, dfs_preorder, topological_order, DepthFirst, DepthFirstTraversal};
pub use dijkstra::{
    DensePathState, EdgeWeights, FringeEntry, MapPathState, PathState, ShortestPaths,
    WithHeuristic,
};
pub use path::reconstruct_path;
pub use traversal::{
    Completion, FifoFringe, Fringe, LifoFringe, PriorityFringe, Traversal, TraversalContext,
    VisitResult, Visitor,
};
