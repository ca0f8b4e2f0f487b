//! Shortest paths by Dijkstra's algorithm, generalized to A*
//!
//! The frontier is an ordered set keyed by `f(v) = g(v) + h(v)` with the
//! vertex id as tie-breaker. When a relaxation improves a queued vertex its
//! old key is removed and the new one inserted. Settled vertices are final
//! and never relaxed again. With the default zero heuristic this is plain
//! Dijkstra; an admissible heuristic lets the search stop as soon as the
//! destination settles without losing optimality.

use crate::config::SearchConfig;
use crate::error::{GraphError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::provider::GraphProvider;
use crate::graph::types::Vertex;
use crate::{bail_invalid, ensure_vertex, trace_time};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Instant;

/// Edge costs and remaining-distance estimates supplied by the caller
pub trait EdgeWeights {
    /// Cost of the edge `u -> v`; `f64::INFINITY` when there is no such edge
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64;

    /// Estimated cost from `v` to the destination. Must never overestimate.
    fn heuristic(&self, _v: Vertex) -> f64 {
        0.0
    }
}

impl<F> EdgeWeights for F
where
    F: Fn(Vertex, Vertex) -> f64,
{
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        self(u, v)
    }
}

/// Pairs a weight function with a heuristic function
#[derive(Debug, Clone)]
pub struct WithHeuristic<W, H> {
    weights: W,
    heuristic: H,
}

impl<W, H> WithHeuristic<W, H>
where
    W: Fn(Vertex, Vertex) -> f64,
    H: Fn(Vertex) -> f64,
{
    pub fn new(weights: W, heuristic: H) -> Self {
        Self { weights, heuristic }
    }
}

impl<W, H> EdgeWeights for WithHeuristic<W, H>
where
    W: Fn(Vertex, Vertex) -> f64,
    H: Fn(Vertex) -> f64,
{
    fn edge_weight(&self, u: Vertex, v: Vertex) -> f64 {
        (self.weights)(u, v)
    }

    fn heuristic(&self, v: Vertex) -> f64 {
        (self.heuristic)(v)
    }
}

/// Per-vertex tentative weight and predecessor storage
pub trait PathState {
    /// Tentative weight; `f64::INFINITY` until the search reaches `v`
    fn weight(&self, v: Vertex) -> f64;
    fn set_weight(&mut self, v: Vertex, weight: f64);
    fn predecessor(&self, v: Vertex) -> Option<Vertex>;
    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>);

    /// Forget every weight and predecessor
    fn reset(&mut self);

    /// Whether the storage can hold every identity up to `max_vertex`
    fn covers(&self, _max_vertex: Vertex) -> bool {
        true
    }
}

/// Array-backed state sized once to the graph's largest vertex id
#[derive(Debug, Clone)]
pub struct DensePathState {
    weights: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
}

impl DensePathState {
    pub fn with_capacity(max_vertex: Vertex) -> Self {
        Self {
            weights: vec![f64::INFINITY; max_vertex],
            predecessors: vec![None; max_vertex],
        }
    }

    pub fn for_graph(graph: &dyn GraphProvider) -> Self {
        Self::with_capacity(graph.max_vertex())
    }

    pub fn capacity(&self) -> usize {
        self.weights.len()
    }

    fn index(v: Vertex) -> Option<usize> {
        v.checked_sub(1)
    }
}

impl PathState for DensePathState {
    fn weight(&self, v: Vertex) -> f64 {
        Self::index(v)
            .and_then(|i| self.weights.get(i).copied())
            .unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: Vertex, weight: f64) {
        if let Some(slot) = Self::index(v).and_then(|i| self.weights.get_mut(i)) {
            *slot = weight;
        }
    }

    fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        Self::index(v).and_then(|i| self.predecessors.get(i).copied().flatten())
    }

    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        if let Some(slot) = Self::index(v).and_then(|i| self.predecessors.get_mut(i)) {
            *slot = predecessor;
        }
    }

    fn reset(&mut self) {
        self.weights.fill(f64::INFINITY);
        self.predecessors.fill(None);
    }

    fn covers(&self, max_vertex: Vertex) -> bool {
        max_vertex <= self.capacity()
    }
}

/// Hash-backed state for graphs with sparse vertex ids
#[derive(Debug, Clone, Default)]
pub struct MapPathState {
    weights: HashMap<Vertex, f64>,
    predecessors: HashMap<Vertex, Vertex>,
}

impl MapPathState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathState for MapPathState {
    fn weight(&self, v: Vertex) -> f64 {
        self.weights.get(&v).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: Vertex, weight: f64) {
        self.weights.insert(v, weight);
    }

    fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors.get(&v).copied()
    }

    fn set_predecessor(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        match predecessor {
            Some(p) => {
                self.predecessors.insert(v, p);
            }
            None => {
                self.predecessors.remove(&v);
            }
        }
    }

    fn reset(&mut self) {
        self.weights.clear();
        self.predecessors.clear();
    }
}

/// Frontier key: estimated total cost, then vertex id
#[derive(Debug, Clone, Copy)]
pub struct FringeEntry {
    pub priority: f64,
    pub vertex: Vertex,
}

impl FringeEntry {
    pub fn new(priority: f64, vertex: Vertex) -> Self {
        Self { priority, vertex }
    }
}

impl PartialEq for FringeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FringeEntry {}

impl PartialOrd for FringeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FringeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest-path search over a borrowed graph.
///
/// Construct, optionally adjust options, call [`ShortestPaths::set_paths`],
/// then query weights, predecessors and paths. Calling `set_paths` again
/// recomputes from scratch.
pub struct ShortestPaths<'g, W, S = DensePathState> {
    graph: &'g dyn GraphProvider,
    source: Vertex,
    destination: Option<Vertex>,
    weights: W,
    state: S,
    settled: HashSet<Vertex>,
    computed: bool,
    validate_weights: bool,
}

impl<'g, W: EdgeWeights> ShortestPaths<'g, W, DensePathState> {
    /// Search every vertex reachable from `source`
    pub fn new(graph: &'g dyn GraphProvider, source: Vertex, weights: W) -> Result<Self> {
        let state = DensePathState::for_graph(graph);
        Self::with_state(graph, source, None, weights, state)
    }

    /// Search until `destination` is settled
    pub fn with_destination(
        graph: &'g dyn GraphProvider,
        source: Vertex,
        destination: Vertex,
        weights: W,
    ) -> Result<Self> {
        let state = DensePathState::for_graph(graph);
        Self::with_state(graph, source, Some(destination), weights, state)
    }
}

impl<'g, W: EdgeWeights, S: PathState> ShortestPaths<'g, W, S> {
    pub fn with_state(
        graph: &'g dyn GraphProvider,
        source: Vertex,
        destination: Option<Vertex>,
        weights: W,
        state: S,
    ) -> Result<Self> {
        ensure_vertex!(graph, source);
        if let Some(destination) = destination {
            ensure_vertex!(graph, destination);
        }

        Ok(Self {
            graph,
            source,
            destination,
            weights,
            state,
            settled: HashSet::new(),
            computed: false,
            validate_weights: SearchConfig::default().validate_weights,
        })
    }

    /// Apply the `[search]` configuration table
    pub fn configure(mut self, config: &SearchConfig) -> Self {
        self.validate_weights = config.validate_weights;
        self
    }

    /// Toggle the NaN / negative edge weight check
    pub fn validate_weights(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn destination(&self) -> Option<Vertex> {
        self.destination
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Run the search.
    ///
    /// On error the previous results are discarded and queries behave as if
    /// the search never ran.
    #[tracing::instrument(skip(self), fields(source = self.source, destination = ?self.destination))]
    pub fn set_paths(&mut self) -> Result<()> {
        let start = Instant::now();
        self.computed = false;

        let max_vertex = self.graph.max_vertex();
        if !self.state.covers(max_vertex) {
            self.discard();
            bail_invalid!(
                "path state size",
                format!("graph grew to vertex {} after the state was sized", max_vertex)
            );
        }

        self.discard();
        if let Err(err) = self.search() {
            self.discard();
            return Err(err);
        }

        self.computed = true;
        trace_time!(start, "set_paths", settled = self.settled.len());
        Ok(())
    }

    fn discard(&mut self) {
        self.state.reset();
        self.settled.clear();
    }

    fn search(&mut self) -> Result<()> {
        let mut frontier: BTreeSet<FringeEntry> = BTreeSet::new();
        // Current key of every vertex in the frontier, needed to remove it
        let mut queued: HashMap<Vertex, f64> = HashMap::new();

        self.state.set_weight(self.source, 0.0);
        let priority = self.weights.heuristic(self.source);
        frontier.insert(FringeEntry::new(priority, self.source));
        queued.insert(self.source, priority);

        while let Some(FringeEntry { vertex: current, .. }) = frontier.pop_first() {
            queued.remove(&current);
            self.settled.insert(current);

            if self.destination == Some(current) {
                tracing::debug!(vertex = current, "destination settled");
                break;
            }

            let base = self.state.weight(current);
            for successor in self.graph.successors(current) {
                if self.settled.contains(&successor) {
                    continue;
                }

                let edge_weight = self.weights.edge_weight(current, successor);
                if self.validate_weights && (edge_weight.is_nan() || edge_weight < 0.0) {
                    bail_invalid!(
                        "edge weight",
                        format!("{} on edge {} -> {}", edge_weight, current, successor)
                    );
                }

                let cost = base + edge_weight;
                if cost < self.state.weight(successor) {
                    self.state.set_weight(successor, cost);
                    self.state.set_predecessor(successor, Some(current));

                    if let Some(old) = queued.remove(&successor) {
                        frontier.remove(&FringeEntry::new(old, successor));
                    }
                    let priority = cost + self.weights.heuristic(successor);
                    frontier.insert(FringeEntry::new(priority, successor));
                    queued.insert(successor, priority);
                }
            }
        }

        tracing::debug!(
            settled = self.settled.len(),
            unexplored = frontier.len(),
            "search finished"
        );
        Ok(())
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Tentative weight of `v`; final once `v` is settled
    pub fn weight(&self, v: Vertex) -> f64 {
        self.state.weight(v)
    }

    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.state.predecessor(v)
    }

    pub fn is_settled(&self, v: Vertex) -> bool {
        self.settled.contains(&v)
    }

    /// Vertices from the source to `v`, inclusive.
    ///
    /// Only settled vertices have final paths. When the search stopped at its
    /// destination, a vertex still on the frontier has a finite tentative
    /// weight but no shortest path yet, and asking for it is an error.
    pub fn path_to(&self, v: Vertex) -> Result<Vec<Vertex>> {
        if !self.computed {
            return Err(GraphError::PathsNotComputed);
        }
        ensure_vertex!(self.graph, v);
        if self.state.weight(v).is_infinite() {
            return Err(GraphError::Unreachable {
                origin: self.source,
                target: v,
            });
        }
        if !self.is_settled(v) {
            bail_invalid!(
                "path target",
                format!("{} was not settled before the search stopped", v)
            );
        }

        reconstruct_path(
            self.source,
            v,
            |x| self.state.predecessor(x),
            self.graph.vertex_count(),
        )
    }

    /// Path to the configured destination
    pub fn path(&self) -> Result<Vec<Vertex>> {
        match self.destination {
            Some(destination) => self.path_to(destination),
            None => Err(GraphError::invalid_value("destination", "none configured")),
        }
    }
}
