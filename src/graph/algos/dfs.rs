//! Depth-first traversal with cycle detection
//!
//! Depth-first order comes from the generic engine with a LIFO fringe,
//! successors pushed in reverse (so they pop in adjacency order) and a
//! post-visit for every vertex. The post-visit doubles as a cycle check: a
//! successor that is marked but not yet finished is still on the active path,
//! so the edge to it closes a cycle.

use crate::error::{GraphError, Result};
use crate::graph::algos::traversal::{
    LifoFringe, Traversal, TraversalContext, Visitor, VisitResult,
};
use crate::graph::provider::GraphProvider;
use crate::graph::types::Vertex;
use std::ops::ControlFlow;

/// Adapts any [`Visitor`] to depth-first scheduling
pub struct DepthFirst<V> {
    inner: V,
    detect_cycles: bool,
}

impl<V> DepthFirst<V> {
    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Visitor> Visitor for DepthFirst<V> {
    fn visit(&mut self, cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        self.inner.visit(cx, v)
    }

    fn should_post_visit(&self, _v: Vertex) -> bool {
        true
    }

    fn post_visit(&mut self, cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        if self.detect_cycles {
            for successor in cx.successors(v) {
                if cx.is_marked(successor) && !cx.is_post_visited(successor) {
                    tracing::debug!(vertex = v, successor, "back edge found");
                    return Err(GraphError::CyclicStructure {
                        vertex: v,
                        successor,
                    });
                }
            }
        }
        self.inner.post_visit(cx, v)
    }

    fn reverse_successors(&self, _v: Vertex) -> bool {
        true
    }

    fn process_successor(&mut self, cx: &TraversalContext<'_>, u: Vertex, v: Vertex) -> bool {
        self.inner.process_successor(cx, u, v)
    }
}

/// Depth-first traversal session
pub type DepthFirstTraversal<'g, V> = Traversal<'g, DepthFirst<V>, LifoFringe>;

impl<'g, V: Visitor> Traversal<'g, DepthFirst<V>, LifoFringe> {
    /// Cycle detection starts on for directed graphs and off for undirected
    /// ones, where every tree edge is seen again from the child's side.
    pub fn depth_first(graph: &'g dyn GraphProvider, visitor: V) -> Self {
        let adapter = DepthFirst {
            inner: visitor,
            detect_cycles: graph.is_directed(),
        };
        Traversal::new(graph, LifoFringe::default(), adapter)
    }

    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.visitor_mut().detect_cycles = enabled;
        self
    }
}

#[derive(Default)]
struct OrderRecorder {
    pre: Vec<Vertex>,
    post: Vec<Vertex>,
}

impl Visitor for OrderRecorder {
    fn visit(&mut self, _cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        self.pre.push(v);
        Ok(ControlFlow::Continue(()))
    }

    fn post_visit(&mut self, _cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        self.post.push(v);
        Ok(ControlFlow::Continue(()))
    }
}

fn run_from(graph: &dyn GraphProvider, start: Vertex) -> Result<OrderRecorder> {
    let mut traversal = DepthFirstTraversal::depth_first(graph, OrderRecorder::default());
    traversal.traverse_from(start)?;
    Ok(traversal.into_visitor().into_inner())
}

/// Vertices reachable from `start` in depth-first pre-order.
///
/// Fails with `CyclicStructure` if a directed cycle is reachable.
pub fn dfs_preorder(graph: &dyn GraphProvider, start: Vertex) -> Result<Vec<Vertex>> {
    Ok(run_from(graph, start)?.pre)
}

/// Vertices reachable from `start` in depth-first post-order.
///
/// Fails with `CyclicStructure` if a directed cycle is reachable.
pub fn dfs_postorder(graph: &dyn GraphProvider, start: Vertex) -> Result<Vec<Vertex>> {
    Ok(run_from(graph, start)?.post)
}

/// Order the vertices of a directed graph so every edge points forward.
///
/// Roots are explored in ascending vertex order, which makes the result
/// deterministic for a given graph.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topological_order(graph: &dyn GraphProvider) -> Result<Vec<Vertex>> {
    if !graph.is_directed() {
        crate::bail_invalid!("graph kind for topological order", "undirected");
    }

    let mut traversal =
        DepthFirstTraversal::depth_first(graph, OrderRecorder::default()).detect_cycles(true);
    // LIFO fringe: seed in descending order so the smallest root runs first
    let mut roots: Vec<Vertex> = graph.vertices().collect();
    roots.reverse();
    traversal.traverse(roots)?;

    let mut order = traversal.into_visitor().into_inner().post;
    order.reverse();
    Ok(order)
}
