use std::{env, process};

use serde::Serialize;
use weightgraph::{
    Graph, GraphError, VertexId, all_distances, format_path, has_path,
    config::{CommandLineConfig, OutputFormat, parse_label},
    shortest_path, trace_shortest_path,
};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let graph = match config.build_graph() {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&graph, &config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run_command(graph: &Graph, config: &CommandLineConfig) -> Result<(), GraphError> {
    match config.command.as_str() {
        "path" => {
            let (source, target) = endpoints(config)?;
            let result = shortest_path(graph, source, target)?;
            if config.format == OutputFormat::Json {
                return print_json(&result);
            }
            match result.cost {
                Some(cost) => {
                    println!("path: {}", format_path(&result.path));
                    println!("cost: {cost}");
                }
                None => println!("no path between {source} and {target}"),
            }
            Ok(())
        }
        "steps" => {
            let (source, target) = endpoints(config)?;
            let traced = trace_shortest_path(graph, source, target)?;
            if config.format == OutputFormat::Json {
                return print_json(&traced);
            }
            for step in &traced.steps {
                println!("{step}");
                println!();
            }
            println!("iterations: {}", traced.total_iterations());
            match traced.result.cost {
                Some(cost) => println!("path: {} (cost {cost})", format_path(&traced.result.path)),
                None => println!("no path between {source} and {target}"),
            }
            Ok(())
        }
        "distances" => {
            let source = required_vertex(config.from.as_deref(), "--from")?;
            let distances = all_distances(graph, source)?;
            if config.format == OutputFormat::Json {
                return print_json(&distances);
            }
            for (vertex, cost) in distances {
                match cost {
                    Some(cost) => println!("{vertex}: {cost}"),
                    None => println!("{vertex}: unreachable"),
                }
            }
            Ok(())
        }
        "reachable" => {
            let (source, target) = endpoints(config)?;
            let reachable = has_path(graph, source, target)?;
            if config.format == OutputFormat::Json {
                return print_json(&serde_json::json!({ "reachable": reachable }));
            }
            println!("{reachable}");
            Ok(())
        }
        "stats" => {
            let stats = graph.stats();
            if config.format == OutputFormat::Json {
                return print_json(&stats);
            }
            println!(
                "vertices={} edges={} max_degree={} density={:.3}",
                stats.vertices, stats.edges, stats.max_degree, stats.density
            );
            Ok(())
        }
        other => Err(GraphError::invalid_input(format!("unknown command {other}"))),
    }
}

fn endpoints(config: &CommandLineConfig) -> Result<(VertexId, VertexId), GraphError> {
    Ok((
        required_vertex(config.from.as_deref(), "--from")?,
        required_vertex(config.to.as_deref(), "--to")?,
    ))
}

fn required_vertex(label: Option<&str>, flag: &str) -> Result<VertexId, GraphError> {
    let label = label.ok_or_else(|| GraphError::invalid_input(format!("{flag} is required")))?;
    parse_label(label)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), GraphError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| GraphError::invalid_input(e.to_string()))?;
    println!("{text}");
    Ok(())
}
