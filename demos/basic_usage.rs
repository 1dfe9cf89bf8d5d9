use weightgraph::{
    EdgeInsert, demo::example_graph, format_path, shortest_path, shortest_path_steps,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("basic_usage error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = example_graph()?;
    let a = graph.vertex_by_label("A").ok_or("missing A")?;
    let b = graph.vertex_by_label("B").ok_or("missing B")?;
    let e = graph.vertex_by_label("E").ok_or("missing E")?;

    let neighbors: Vec<String> = graph
        .neighbors(b)
        .iter()
        .map(|n| format!("{}({})", n.vertex, n.weight))
        .collect();
    println!("neighbors: [{}]", neighbors.join(", "));

    if let EdgeInsert::AlreadyExists(id) = graph.add_edge(b, a, 9)? {
        println!("duplicate rejected, kept {id}");
    }

    let mut steps = shortest_path_steps(&graph, a, e)?;
    for step in steps.by_ref() {
        println!("step {}: visit {} at {}", step.iteration, step.current, step.min_distance);
    }
    let result = steps.into_result();
    println!(
        "shortest path: {} cost {}",
        format_path(&result.path),
        result.cost.unwrap_or_default()
    );
    println!("highlight edges: {:?}", graph.path_edges(&result.path));

    graph.remove_vertex(b);
    let detour = shortest_path(&graph, a, e)?;
    println!(
        "without B: {} cost {}",
        format_path(&detour.path),
        detour.cost.unwrap_or_default()
    );
    Ok(())
}
