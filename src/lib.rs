//! Undirected weighted graphs with a deterministic Dijkstra shortest-path engine.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod cache;
pub mod config;
pub mod demo;
pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod steps;

pub use crate::algo::{all_distances, has_path, reachable_from};
pub use crate::dijkstra::{Distance, ShortestPath, format_path, shortest_path};
pub use crate::errors::GraphError;
pub use crate::graph::{
    Edge, EdgeId, EdgeInsert, Graph, GraphStats, Neighbor, VertexId, Weight, parse_weight,
};
pub use crate::steps::{
    SearchStep, SearchSteps, TracedPath, shortest_path_steps, trace_shortest_path,
};
