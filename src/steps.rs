//! Instrumented shortest-path search.
//!
//! [`SearchSteps`] runs the same loop as [`shortest_path`](crate::dijkstra::shortest_path)
//! one iteration at a time and yields a snapshot per finalised vertex. A
//! snapshot is taken after the vertex leaves the unvisited set and before its
//! edges are relaxed.

use std::{collections::BTreeMap, fmt, iter::FusedIterator};

use serde::Serialize;

use crate::{
    dijkstra::{Distance, Search, ShortestPath},
    errors::GraphError,
    graph::{Graph, VertexId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    /// 1-based iteration number.
    pub iteration: usize,
    pub current: VertexId,
    pub min_distance: u64,
    pub distances: BTreeMap<VertexId, Distance>,
    pub predecessors: BTreeMap<VertexId, Option<VertexId>>,
    pub unvisited: Vec<VertexId>,
}

impl fmt::Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "iteration {}: {} (distance {})",
            self.iteration, self.current, self.min_distance
        )?;
        writeln!(f, "distances:")?;
        for (vertex, distance) in &self.distances {
            writeln!(f, "  {vertex}: {distance}")?;
        }
        writeln!(f, "predecessors:")?;
        for (vertex, previous) in &self.predecessors {
            match previous {
                Some(previous) => writeln!(f, "  {vertex}: {previous}")?,
                None => writeln!(f, "  {vertex}: -")?,
            }
        }
        let unvisited: Vec<String> = self.unvisited.iter().map(|v| v.label()).collect();
        write!(f, "unvisited: [{}]", unvisited.join(", "))
    }
}

/// Lazy, finite sequence of [`SearchStep`]s. Once exhausted it stays exhausted.
pub struct SearchSteps<'g> {
    search: Search<'g>,
    target: VertexId,
}

impl<'g> SearchSteps<'g> {
    pub fn source(&self) -> VertexId {
        self.search.source()
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Finishes any remaining iterations and returns the final result.
    pub fn into_result(mut self) -> ShortestPath {
        self.search.run();
        self.search.into_result(self.target)
    }
}

impl Iterator for SearchSteps<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        let selection = self.search.advance()?;
        Some(SearchStep {
            iteration: selection.iteration,
            current: selection.vertex,
            min_distance: selection.distance,
            distances: self.search.distance_table(),
            predecessors: self.search.predecessor_table(),
            unvisited: self.search.unvisited().to_vec(),
        })
    }
}

impl FusedIterator for SearchSteps<'_> {}

pub fn shortest_path_steps(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<SearchSteps<'_>, GraphError> {
    let search = Search::new(graph, source, Some(target))?;
    Ok(SearchSteps { search, target })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TracedPath {
    pub result: ShortestPath,
    pub steps: Vec<SearchStep>,
}

impl TracedPath {
    pub fn total_iterations(&self) -> usize {
        self.steps.len()
    }
}

/// Runs the instrumented search to completion, keeping every step.
pub fn trace_shortest_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<TracedPath, GraphError> {
    let mut steps_iter = shortest_path_steps(graph, source, target)?;
    let steps: Vec<SearchStep> = steps_iter.by_ref().collect();
    Ok(TracedPath {
        result: steps_iter.into_result(),
        steps,
    })
}
