use crate::{
    errors::GraphError,
    graph::{Graph, VertexId},
};

/// Edge list of the five-vertex example graph (`A`..`E`), as `(from, to, weight)` labels.
pub const EXAMPLE_EDGES: [(&str, &str, u32); 7] = [
    ("A", "B", 4),
    ("A", "D", 2),
    ("B", "C", 3),
    ("B", "D", 1),
    ("B", "E", 7),
    ("C", "E", 2),
    ("D", "E", 5),
];

/// Builds the example graph. The cheapest `A` to `E` route is `A → D → E`, cost 7.
pub fn example_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for _ in 0..5 {
        graph.add_vertex();
    }
    for (from, to, weight) in EXAMPLE_EDGES {
        let u = resolve(&graph, from)?;
        let v = resolve(&graph, to)?;
        graph.add_edge(u, v, weight)?;
    }
    Ok(graph)
}

fn resolve(graph: &Graph, label: &str) -> Result<VertexId, GraphError> {
    graph
        .vertex_by_label(label)
        .ok_or_else(|| GraphError::vertex_not_found(format!("vertex {label}")))
}
