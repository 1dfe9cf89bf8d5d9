use weightgraph::{
    Graph, GraphError, VertexId, all_distances, demo::example_graph, has_path, reachable_from,
    shortest_path,
};

fn labelled(graph: &Graph, label: &str) -> VertexId {
    graph.vertex_by_label(label).expect("vertex")
}

#[test]
fn test_has_path_within_component() {
    let graph = example_graph().unwrap();
    assert!(has_path(&graph, labelled(&graph, "A"), labelled(&graph, "E")).unwrap());
    assert!(has_path(&graph, labelled(&graph, "C"), labelled(&graph, "C")).unwrap());
}

#[test]
fn test_has_path_across_components() {
    let mut graph = example_graph().unwrap();
    let f = graph.add_vertex();
    assert!(!has_path(&graph, labelled(&graph, "A"), f).unwrap());
    let err = has_path(&graph, VertexId(50), f).expect_err("missing");
    assert!(matches!(err, GraphError::VertexNotFound(_)));
}

#[test]
fn test_all_distances_from_a() {
    let mut graph = example_graph().unwrap();
    let f = graph.add_vertex();
    let distances = all_distances(&graph, labelled(&graph, "A")).unwrap();
    let flat: Vec<(String, Option<u64>)> = distances
        .into_iter()
        .map(|(v, cost)| (v.label(), cost))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("A".to_string(), Some(0)),
            ("B".to_string(), Some(3)),
            ("C".to_string(), Some(6)),
            ("D".to_string(), Some(2)),
            ("E".to_string(), Some(7)),
            (f.label(), None),
        ]
    );
}

#[test]
fn test_all_distances_match_single_target_runs() {
    let mut graph = example_graph().unwrap();
    graph.add_vertex();
    for &source in graph.vertices() {
        let all = all_distances(&graph, source).unwrap();
        for &target in graph.vertices() {
            let single = shortest_path(&graph, source, target).unwrap();
            assert_eq!(all[&target], single.cost, "{source} -> {target}");
        }
    }
}

#[test]
fn test_reachable_from_lists_component() {
    let mut graph = example_graph().unwrap();
    let f = graph.add_vertex();
    let g = graph.add_vertex();
    graph.add_edge(f, g, 1).unwrap();
    let reachable = reachable_from(&graph, f).unwrap();
    assert_eq!(reachable, vec![f, g]);
    assert_eq!(reachable_from(&graph, labelled(&graph, "B")).unwrap().len(), 5);
}
