use weightgraph::{
    Distance, Graph, GraphError, VertexId, demo::example_graph, format_path, shortest_path,
};

fn labelled(graph: &Graph, label: &str) -> VertexId {
    graph.vertex_by_label(label).expect("vertex")
}

fn labels(path: &[VertexId]) -> Vec<String> {
    path.iter().map(|v| v.label()).collect()
}

/// Diamond `A-B`, `A-C`, `B-D`, `C-D`, all weight 1, edges inserted in `edge_order`.
fn diamond(edge_order: &[(u32, u32)]) -> Graph {
    let mut graph = Graph::new();
    for _ in 0..4 {
        graph.add_vertex();
    }
    for &(u, v) in edge_order {
        graph.add_edge(VertexId(u), VertexId(v), 1).unwrap();
    }
    graph
}

#[test]
fn test_example_graph_a_to_e() {
    let graph = example_graph().unwrap();
    let result = shortest_path(&graph, labelled(&graph, "A"), labelled(&graph, "E")).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "D", "E"]);
    assert_eq!(result.cost, Some(7));
    assert_eq!(result.hops(), 2);
    assert_eq!(format_path(&result.path), "A → D → E");
}

#[test]
fn test_example_graph_final_state() {
    let graph = example_graph().unwrap();
    let result = shortest_path(&graph, labelled(&graph, "A"), labelled(&graph, "E")).unwrap();
    let distances: Vec<(String, Distance)> = result
        .distances
        .iter()
        .map(|(v, d)| (v.label(), *d))
        .collect();
    assert_eq!(
        distances,
        vec![
            ("A".to_string(), Distance::Finite(0)),
            ("B".to_string(), Distance::Finite(3)),
            ("C".to_string(), Distance::Finite(6)),
            ("D".to_string(), Distance::Finite(2)),
            ("E".to_string(), Distance::Finite(7)),
        ]
    );
    let predecessors: Vec<(String, Option<String>)> = result
        .predecessors
        .iter()
        .map(|(v, p)| (v.label(), p.map(VertexId::label)))
        .collect();
    assert_eq!(
        predecessors,
        vec![
            ("A".to_string(), None),
            ("B".to_string(), Some("D".to_string())),
            ("C".to_string(), Some("B".to_string())),
            ("D".to_string(), Some("A".to_string())),
            ("E".to_string(), Some("D".to_string())),
        ]
    );
}

#[test]
fn test_example_graph_a_to_c_goes_through_d_and_b() {
    let graph = example_graph().unwrap();
    let result = shortest_path(&graph, labelled(&graph, "A"), labelled(&graph, "C")).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "D", "B", "C"]);
    assert_eq!(result.cost, Some(6));
}

#[test]
fn test_removing_b_leaves_direct_detour() {
    let mut graph = example_graph().unwrap();
    graph.remove_vertex(labelled(&graph, "B"));
    let result = shortest_path(&graph, labelled(&graph, "A"), labelled(&graph, "E")).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "D", "E"]);
    assert_eq!(result.cost, Some(7));
    assert!(!result.distances.contains_key(&VertexId(1)));
}

#[test]
fn test_removing_direct_edge_forces_long_route() {
    let mut graph = example_graph().unwrap();
    let d = labelled(&graph, "D");
    let e = labelled(&graph, "E");
    assert!(graph.remove_edge_between(d, e));
    let result = shortest_path(&graph, labelled(&graph, "A"), e).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "D", "B", "C", "E"]);
    assert_eq!(result.cost, Some(8));
}

#[test]
fn test_unreachable_target_is_not_an_error() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let result = shortest_path(&graph, a, b).unwrap();
    assert!(result.path.is_empty());
    assert_eq!(result.cost, None);
    assert!(!result.is_reachable());
    assert_eq!(result.distances[&a], Distance::Finite(0));
    assert_eq!(result.distances[&b], Distance::Infinite);
    assert_eq!(result.predecessors[&b], None);
}

#[test]
fn test_unreachable_component_keeps_partial_distances() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    let d = graph.add_vertex();
    graph.add_edge(a, b, 2).unwrap();
    graph.add_edge(c, d, 1).unwrap();
    let result = shortest_path(&graph, a, d).unwrap();
    assert_eq!(result.cost, None);
    assert_eq!(result.distances[&b], Distance::Finite(2));
    assert_eq!(result.distances[&c], Distance::Infinite);
}

#[test]
fn test_same_source_and_target() {
    let graph = example_graph().unwrap();
    for &v in graph.vertices() {
        let result = shortest_path(&graph, v, v).unwrap();
        assert_eq!(result.path, vec![v]);
        assert_eq!(result.cost, Some(0));
        assert_eq!(result.hops(), 0);
        assert!(result.predecessors.values().all(Option::is_none));
    }
}

#[test]
fn test_isolated_vertex_to_itself() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let result = shortest_path(&graph, a, a).unwrap();
    assert_eq!(result.path, vec![a]);
    assert_eq!(result.cost, Some(0));
}

#[test]
fn test_missing_vertices_are_errors() {
    let mut graph = example_graph().unwrap();
    let a = labelled(&graph, "A");
    let err = shortest_path(&graph, a, VertexId(30)).expect_err("target");
    assert!(matches!(err, GraphError::VertexNotFound(_)));
    let err = shortest_path(&graph, VertexId(30), a).expect_err("source");
    assert!(matches!(err, GraphError::VertexNotFound(_)));
    let c = labelled(&graph, "C");
    graph.remove_vertex(c);
    let err = shortest_path(&graph, a, c).expect_err("removed");
    assert!(matches!(err, GraphError::VertexNotFound(_)));
}

#[test]
fn test_ties_resolve_to_earliest_vertex() {
    let graph = diamond(&[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let result = shortest_path(&graph, VertexId(0), VertexId(3)).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "B", "D"]);
    assert_eq!(result.cost, Some(2));
}

#[test]
fn test_ties_ignore_edge_insertion_order() {
    let graph = diamond(&[(2, 3), (0, 2), (3, 1), (1, 0)]);
    let result = shortest_path(&graph, VertexId(0), VertexId(3)).unwrap();
    assert_eq!(labels(&result.path), vec!["A", "B", "D"]);
}

#[test]
fn test_equal_cost_relaxation_keeps_first_predecessor() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    graph.add_edge(a, c, 4).unwrap();
    graph.add_edge(a, b, 2).unwrap();
    graph.add_edge(b, c, 2).unwrap();
    let result = shortest_path(&graph, a, c).unwrap();
    assert_eq!(result.path, vec![a, c]);
    assert_eq!(result.cost, Some(4));
    assert_eq!(result.predecessors[&c], Some(a));
}

#[test]
fn test_symmetric_costs_on_example_graph() {
    let graph = example_graph().unwrap();
    for &u in graph.vertices() {
        for &v in graph.vertices() {
            let forward = shortest_path(&graph, u, v).unwrap();
            let backward = shortest_path(&graph, v, u).unwrap();
            assert_eq!(forward.cost, backward.cost, "{u} <-> {v}");
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = example_graph().unwrap();
    let a = labelled(&graph, "A");
    let c = labelled(&graph, "C");
    let first = shortest_path(&graph, a, c).unwrap();
    let second = shortest_path(&graph, a, c).unwrap();
    let cloned = shortest_path(&graph.clone(), a, c).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, cloned);
}

#[test]
fn test_result_serializes_with_labels() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let _c = graph.add_vertex();
    graph.add_edge(a, b, 3).unwrap();
    let result = shortest_path(&graph, a, b).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["path"], serde_json::json!(["A", "B"]));
    assert_eq!(value["cost"], serde_json::json!(3));
    assert_eq!(value["distances"]["C"], serde_json::Value::Null);
    assert_eq!(value["predecessors"]["B"], serde_json::json!("A"));
}
