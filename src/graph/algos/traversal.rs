//! Fringe-driven graph traversal
//!
//! A traversal repeatedly removes a vertex from the fringe, visits it, puts it
//! back, and schedules its successors. When the vertex comes off the fringe a
//! second time it is post-visited (if the visitor asks for that). With a LIFO
//! fringe the second removal happens only after every successor pushed above
//! it has been drained, which yields depth-first post-order without recursion.

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::provider::GraphProvider;
use crate::graph::store::Neighbors;
use crate::graph::types::Vertex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::ops::ControlFlow;

/// Outcome of a visitor hook: `Continue` keeps going, `Break` ends the traversal
pub type VisitResult = Result<ControlFlow<()>>;

/// Ordering policy for vertices waiting to be processed
pub trait Fringe {
    fn push(&mut self, v: Vertex);
    fn pop(&mut self) -> Option<Vertex>;
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out (breadth-first)
#[derive(Debug, Clone, Default)]
pub struct FifoFringe(VecDeque<Vertex>);

impl Fringe for FifoFringe {
    fn push(&mut self, v: Vertex) {
        self.0.push_back(v);
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out (depth-first)
#[derive(Debug, Clone, Default)]
pub struct LifoFringe(Vec<Vertex>);

impl Fringe for LifoFringe {
    fn push(&mut self, v: Vertex) {
        self.0.push(v);
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Smallest key first; equal keys come out in insertion order
pub struct PriorityFringe<K, F> {
    heap: BinaryHeap<Reverse<(K, u64, Vertex)>>,
    key: F,
    seq: u64,
}

impl<K: Ord, F: Fn(Vertex) -> K> PriorityFringe<K, F> {
    pub fn new(key: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            seq: 0,
        }
    }
}

impl<K: Ord, F: Fn(Vertex) -> K> Fringe for PriorityFringe<K, F> {
    fn push(&mut self, v: Vertex) {
        let key = (self.key)(v);
        self.heap.push(Reverse((key, self.seq, v)));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Vertex> {
        self.heap.pop().map(|Reverse((_, _, v))| v)
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Read-only view of a traversal in progress, handed to visitor hooks
pub struct TraversalContext<'a> {
    graph: &'a dyn GraphProvider,
    marked: &'a HashSet<Vertex>,
    post_visited: &'a HashSet<Vertex>,
}

impl<'a> TraversalContext<'a> {
    fn new(
        graph: &'a dyn GraphProvider,
        marked: &'a HashSet<Vertex>,
        post_visited: &'a HashSet<Vertex>,
    ) -> Self {
        Self {
            graph,
            marked,
            post_visited,
        }
    }

    pub fn graph(&self) -> &'a dyn GraphProvider {
        self.graph
    }

    pub fn successors(&self, v: Vertex) -> Neighbors<'a> {
        self.graph.successors(v)
    }

    pub fn is_marked(&self, v: Vertex) -> bool {
        self.marked.contains(&v)
    }

    pub fn is_post_visited(&self, v: Vertex) -> bool {
        self.post_visited.contains(&v)
    }
}

/// Hooks a traversal calls as it runs. Every method has a default, so a
/// visitor only overrides what it needs.
pub trait Visitor {
    /// Called once per vertex, in fringe-removal order
    fn visit(&mut self, _cx: &TraversalContext<'_>, _v: Vertex) -> VisitResult {
        Ok(ControlFlow::Continue(()))
    }

    /// Whether `v` should be post-visited after its successors are scheduled
    fn should_post_visit(&self, _v: Vertex) -> bool {
        false
    }

    /// Called when `v` comes off the fringe again, if `should_post_visit(v)`
    fn post_visit(&mut self, _cx: &TraversalContext<'_>, _v: Vertex) -> VisitResult {
        Ok(ControlFlow::Continue(()))
    }

    /// Schedule the successors of `v` in reverse adjacency order
    fn reverse_successors(&self, _v: Vertex) -> bool {
        false
    }

    /// Whether successor `v` of `u` goes onto the fringe
    fn process_successor(&mut self, cx: &TraversalContext<'_>, _u: Vertex, v: Vertex) -> bool {
        !cx.is_marked(v)
    }
}

/// How a call to [`Traversal::traverse`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The fringe ran empty
    Finished,
    /// A hook returned `Break` while handling this vertex
    Stopped(Vertex),
}

/// A traversal session over one graph.
///
/// Marks persist across calls to [`Traversal::traverse`] until
/// [`Traversal::clear`], so a second seed set skips what the first one
/// reached. A traversal stopped by a hook keeps its pending fringe: the next
/// `traverse` (or [`Traversal::resume`]) carries on from where it stopped.
/// After an error the pending fringe is kept as well; call `clear` to start
/// over.
pub struct Traversal<'g, V, F> {
    graph: &'g dyn GraphProvider,
    fringe: F,
    visitor: V,
    marked: HashSet<Vertex>,
    post_visited: HashSet<Vertex>,
}

impl<'g, V: Visitor, F: Fringe> Traversal<'g, V, F> {
    pub fn new(graph: &'g dyn GraphProvider, fringe: F, visitor: V) -> Self {
        Self {
            graph,
            fringe,
            visitor,
            marked: HashSet::new(),
            post_visited: HashSet::new(),
        }
    }

    /// Unmark all vertices and drop any pending work
    pub fn clear(&mut self) {
        self.marked.clear();
        self.post_visited.clear();
        self.fringe.clear();
    }

    pub fn is_marked(&self, v: Vertex) -> bool {
        self.marked.contains(&v)
    }

    pub fn is_post_visited(&self, v: Vertex) -> bool {
        self.post_visited.contains(&v)
    }

    pub fn graph(&self) -> &'g dyn GraphProvider {
        self.graph
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Traverse starting from the single vertex `v0`
    pub fn traverse_from(&mut self, v0: Vertex) -> Result<Completion> {
        self.traverse([v0])
    }

    /// Continue a stopped traversal without adding seeds
    pub fn resume(&mut self) -> Result<Completion> {
        self.traverse(std::iter::empty())
    }

    /// Seed the fringe with `start` and run until it empties or a hook stops.
    ///
    /// Every seed must be a live vertex. Seeds that are already marked are
    /// skipped: they are either finished or still pending from a stopped run.
    #[tracing::instrument(
        skip_all,
        fields(marked = self.marked.len(), pending = self.fringe.len())
    )]
    pub fn traverse<I>(&mut self, start: I) -> Result<Completion>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let seeds: Vec<Vertex> = start.into_iter().collect();
        for &v in &seeds {
            ensure_vertex!(self.graph, v);
        }
        for v in seeds {
            if !self.marked.contains(&v) {
                self.fringe.push(v);
            }
        }

        while let Some(v) = self.fringe.pop() {
            if self.marked.contains(&v) {
                if self.visitor.should_post_visit(v) && !self.post_visited.contains(&v) {
                    let cx = TraversalContext::new(self.graph, &self.marked, &self.post_visited);
                    let flow = self.visitor.post_visit(&cx, v)?;
                    self.post_visited.insert(v);
                    if flow.is_break() {
                        tracing::debug!(vertex = v, "traversal stopped in post_visit");
                        return Ok(Completion::Stopped(v));
                    }
                }
                continue;
            }

            self.marked.insert(v);
            let cx = TraversalContext::new(self.graph, &self.marked, &self.post_visited);
            let flow = self.visitor.visit(&cx, v)?;
            // A visited vertex is always expanded, so a later run can finish it
            self.fringe.push(v);
            self.schedule_successors(v);
            if flow.is_break() {
                tracing::debug!(
                    vertex = v,
                    pending = self.fringe.len(),
                    "traversal stopped in visit"
                );
                return Ok(Completion::Stopped(v));
            }
        }

        tracing::debug!(
            marked = self.marked.len(),
            post_visited = self.post_visited.len(),
            "traversal finished"
        );
        Ok(Completion::Finished)
    }

    fn schedule_successors(&mut self, u: Vertex) {
        let mut successors: Vec<Vertex> = self.graph.successors(u).collect();
        if self.visitor.reverse_successors(u) {
            successors.reverse();
        }
        for v in successors {
            let cx = TraversalContext::new(self.graph, &self.marked, &self.post_visited);
            if self.visitor.process_successor(&cx, u, v) {
                self.fringe.push(v);
            }
        }
    }
}
