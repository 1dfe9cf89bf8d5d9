use std::collections::BTreeMap;

use crate::{
    dijkstra::{Search, shortest_path},
    errors::GraphError,
    graph::{Graph, VertexId},
};

pub fn has_path(graph: &Graph, source: VertexId, target: VertexId) -> Result<bool, GraphError> {
    Ok(shortest_path(graph, source, target)?.is_reachable())
}

/// Cost from `source` to every vertex in enumeration order; `None` marks unreachable ones.
///
/// Runs the loop once without a target instead of once per vertex. Each entry
/// equals the `cost` a `shortest_path(graph, source, vertex)` call reports.
pub fn all_distances(
    graph: &Graph,
    source: VertexId,
) -> Result<BTreeMap<VertexId, Option<u64>>, GraphError> {
    let mut search = Search::new(graph, source, None)?;
    search.run();
    Ok(graph
        .vertices()
        .iter()
        .map(|&vertex| (vertex, search.distance(vertex).finite()))
        .collect())
}

/// Vertices reachable from `source`, including itself, in enumeration order.
pub fn reachable_from(graph: &Graph, source: VertexId) -> Result<Vec<VertexId>, GraphError> {
    Ok(all_distances(graph, source)?
        .into_iter()
        .filter_map(|(vertex, cost)| cost.map(|_| vertex))
        .collect())
}
