use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::algos::path::reconstruct_path;
use crate::graph::algos::traversal::{
    Completion, FifoFringe, Traversal, TraversalContext, Visitor, VisitResult,
};
use crate::graph::provider::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::HashMap;
use std::ops::ControlFlow;

/// Breadth-first traversal: FIFO fringe, no post-visits
pub type BreadthFirstTraversal<'g, V> = Traversal<'g, V, FifoFringe>;

impl<'g, V: Visitor> Traversal<'g, V, FifoFringe> {
    pub fn breadth_first(graph: &'g dyn GraphProvider, visitor: V) -> Self {
        Traversal::new(graph, FifoFringe::default(), visitor)
    }
}

struct OrderRecorder(Vec<Vertex>);

impl Visitor for OrderRecorder {
    fn visit(&mut self, _cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        self.0.push(v);
        Ok(ControlFlow::Continue(()))
    }
}

/// Vertices reachable from `start`, in breadth-first order
pub fn bfs_order(graph: &dyn GraphProvider, start: Vertex) -> Result<Vec<Vertex>> {
    let mut traversal = BreadthFirstTraversal::breadth_first(graph, OrderRecorder(Vec::new()));
    traversal.traverse_from(start)?;
    Ok(traversal.into_visitor().0)
}

/// Remembers the vertex each successor was first discovered from and stops
/// once the target is visited
struct PathFinder {
    target: Vertex,
    discovered_from: HashMap<Vertex, Vertex>,
}

impl Visitor for PathFinder {
    fn visit(&mut self, _cx: &TraversalContext<'_>, v: Vertex) -> VisitResult {
        if v == self.target {
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }

    fn process_successor(&mut self, cx: &TraversalContext<'_>, u: Vertex, v: Vertex) -> bool {
        if cx.is_marked(v) {
            return false;
        }
        self.discovered_from.entry(v).or_insert(u);
        true
    }
}

/// Fewest-edge path from `from` to `to`, or `None` when `to` is unreachable
#[tracing::instrument(skip(graph))]
pub fn bfs_find_path(
    graph: &dyn GraphProvider,
    from: Vertex,
    to: Vertex,
) -> Result<Option<Vec<Vertex>>> {
    ensure_vertex!(graph, to);

    let finder = PathFinder {
        target: to,
        discovered_from: HashMap::new(),
    };
    let mut traversal = BreadthFirstTraversal::breadth_first(graph, finder);
    if traversal.traverse_from(from)? == Completion::Finished {
        tracing::debug!("target not reached");
        return Ok(None);
    }

    let finder = traversal.into_visitor();
    let path = reconstruct_path(
        from,
        to,
        |v| finder.discovered_from.get(&v).copied(),
        graph.vertex_count(),
    )?;
    Ok(Some(path))
}
