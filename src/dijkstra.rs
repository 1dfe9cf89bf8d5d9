//! Single-source shortest paths over positively weighted undirected graphs.
//!
//! Selection is a linear scan over the unvisited vertices in enumeration
//! order, keeping the first strictly smaller distance. Among tied vertices the
//! earliest-created one is therefore finalised first, and a relaxation only
//! replaces a predecessor on a strictly shorter candidate. Both rules make the
//! output fully determined by the graph's vertex and edge order.

use std::{collections::BTreeMap, fmt};

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use serde::{Serialize, Serializer};

use crate::{
    errors::GraphError,
    graph::{Graph, VertexId, Weight},
};

/// Tentative distance of a vertex. Every finite distance orders below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_u64(*value),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub source: VertexId,
    pub target: VertexId,
    /// Source-to-target vertices; empty when the target is unreachable.
    pub path: Vec<VertexId>,
    /// Total weight of `path`; `None` when the target is unreachable.
    pub cost: Option<u64>,
    pub distances: BTreeMap<VertexId, Distance>,
    pub predecessors: BTreeMap<VertexId, Option<VertexId>>,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Computes the minimum-cost path from `source` to `target`.
///
/// An unreachable target is a normal result with an empty path and no cost.
/// Only vertices missing from `graph` are errors.
pub fn shortest_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<ShortestPath, GraphError> {
    let mut search = Search::new(graph, source, Some(target))?;
    if source == target {
        debug!("shortest path {source} -> {target}: identical endpoints, cost 0");
        return Ok(search.into_result(target));
    }
    search.run();
    let result = search.into_result(target);
    match result.cost {
        Some(cost) => debug!(
            "shortest path {source} -> {target}: {} (cost {cost})",
            format_path(&result.path)
        ),
        None => debug!("shortest path {source} -> {target}: unreachable"),
    }
    Ok(result)
}

/// Renders a path as `A → B → C`.
pub fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.label())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One finalised vertex of the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    pub iteration: usize,
    pub vertex: VertexId,
    pub distance: u64,
}

/// Working state of one search. Shared by the plain, instrumented and
/// exhaustive entry points so that all of them select and relax identically.
pub(crate) struct Search<'g> {
    graph: &'g Graph,
    source: VertexId,
    target: Option<VertexId>,
    distances: AHashMap<VertexId, Distance>,
    predecessors: AHashMap<VertexId, Option<VertexId>>,
    /// Enumeration order is preserved; selection scans it front to back.
    unvisited: Vec<VertexId>,
    visited: AHashSet<VertexId>,
    /// Vertex selected by the last `advance` whose edges are not relaxed yet.
    pending: Option<VertexId>,
    iteration: usize,
    done: bool,
}

impl<'g> Search<'g> {
    pub(crate) fn new(
        graph: &'g Graph,
        source: VertexId,
        target: Option<VertexId>,
    ) -> Result<Self, GraphError> {
        graph.require_vertex(source)?;
        if let Some(target) = target {
            graph.require_vertex(target)?;
        }
        let vertices = graph.vertices();
        let mut distances = AHashMap::with_capacity(vertices.len());
        let mut predecessors = AHashMap::with_capacity(vertices.len());
        for &vertex in vertices {
            distances.insert(vertex, Distance::Infinite);
            predecessors.insert(vertex, None);
        }
        distances.insert(source, Distance::Finite(0));
        Ok(Self {
            graph,
            source,
            target,
            distances,
            predecessors,
            unvisited: vertices.to_vec(),
            visited: AHashSet::with_capacity(vertices.len()),
            pending: None,
            iteration: 0,
            done: false,
        })
    }

    /// Finalises the next vertex, or returns `None` once the loop has ended.
    ///
    /// Relaxation of the returned vertex is deferred to the following call so
    /// that callers observe the state exactly as it was at selection time.
    pub(crate) fn advance(&mut self) -> Option<Selection> {
        if let Some(vertex) = self.pending.take() {
            self.relax(vertex);
        }
        if self.done {
            return None;
        }
        let Some((position, distance)) = self.select() else {
            trace!("no reachable unvisited vertices remain");
            self.done = true;
            return None;
        };
        let vertex = self.unvisited.remove(position);
        self.visited.insert(vertex);
        self.iteration += 1;
        trace!(
            "iteration {}: selected {vertex} (distance {distance})",
            self.iteration
        );
        if Some(vertex) == self.target {
            trace!("target {vertex} reached");
            self.done = true;
        } else {
            self.pending = Some(vertex);
        }
        Some(Selection {
            iteration: self.iteration,
            vertex,
            distance,
        })
    }

    pub(crate) fn run(&mut self) {
        while self.advance().is_some() {}
    }

    /// First unvisited vertex holding the strictly smallest finite distance.
    fn select(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (position, vertex) in self.unvisited.iter().enumerate() {
            let Some(distance) = self.distance(*vertex).finite() else {
                continue;
            };
            if best.is_none_or(|(_, current)| distance < current) {
                best = Some((position, distance));
            }
        }
        best
    }

    fn relax(&mut self, vertex: VertexId) {
        let base = self.distance(vertex);
        for neighbor in self.graph.neighbors(vertex).iter() {
            if self.visited.contains(&neighbor.vertex) {
                continue;
            }
            let candidate = base.extend(neighbor.weight);
            let current = self.distance(neighbor.vertex);
            if candidate < current {
                trace!(
                    "relaxed {}: {current} -> {candidate} via {vertex}",
                    neighbor.vertex
                );
                self.distances.insert(neighbor.vertex, candidate);
                self.predecessors.insert(neighbor.vertex, Some(vertex));
            }
        }
    }

    pub(crate) fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    pub(crate) fn source(&self) -> VertexId {
        self.source
    }

    pub(crate) fn distance_table(&self) -> BTreeMap<VertexId, Distance> {
        self.distances.iter().map(|(&k, &v)| (k, v)).collect()
    }

    pub(crate) fn predecessor_table(&self) -> BTreeMap<VertexId, Option<VertexId>> {
        self.predecessors.iter().map(|(&k, &v)| (k, v)).collect()
    }

    pub(crate) fn unvisited(&self) -> &[VertexId] {
        &self.unvisited
    }

    /// Follows predecessor links back from `target`. Empty unless the chain ends at the source.
    pub(crate) fn reconstruct_path(&self, target: VertexId) -> Vec<VertexId> {
        let mut reversed = vec![target];
        let mut current = target;
        while let Some(&Some(previous)) = self.predecessors.get(&current) {
            if reversed.len() > self.predecessors.len() {
                return Vec::new();
            }
            reversed.push(previous);
            current = previous;
        }
        if current != self.source {
            return Vec::new();
        }
        reversed.reverse();
        reversed
    }

    pub(crate) fn into_result(self, target: VertexId) -> ShortestPath {
        let path = self.reconstruct_path(target);
        let cost = if path.is_empty() {
            None
        } else {
            self.distance(target).finite()
        };
        ShortestPath {
            source: self.source,
            target,
            path,
            cost,
            distances: self.distance_table(),
            predecessors: self.predecessor_table(),
        }
    }
}
