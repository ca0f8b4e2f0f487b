//! Trailgraph Library
//!
//! Integer-identified directed and undirected graphs, a hook-driven traversal
//! engine (breadth-first, depth-first, custom fringes) and a Dijkstra/A*
//! shortest-path engine.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphKind, LabeledGraph, Vertex};
