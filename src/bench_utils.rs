use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::GraphError,
    graph::{Graph, VertexId, Weight},
};

/// Seeded weighted edge list over vertex indices `0..vertices`.
#[derive(Clone, Debug)]
pub struct WeightedDataset {
    pub vertices: usize,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl WeightedDataset {
    pub fn nodes(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.vertices];
        for &(from, to, _) in &self.edges {
            counts[from] += 1;
            counts[to] += 1;
        }
        counts
    }

    pub fn hub_index(&self) -> usize {
        let mut best = (0usize, 0usize);
        for (idx, deg) in self.degrees().into_iter().enumerate() {
            if deg > best.0 {
                best = (deg, idx);
            }
        }
        best.1
    }

    /// Materialises the dataset. Vertex index `i` becomes `VertexId(i)`.
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        let ids: Vec<VertexId> = (0..self.vertices).map(|_| graph.add_vertex()).collect();
        for &(from, to, weight) in &self.edges {
            graph.add_edge(ids[from], ids[to], weight)?;
        }
        Ok(graph)
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
}

/// Generates a dataset of `shape` whose weights are drawn uniformly from `1..=max_weight`.
pub fn generate_graph(
    shape: GraphShape,
    node_count: usize,
    max_weight: Weight,
    seed: u64,
) -> WeightedDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    assert!(max_weight > 0, "max_weight must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = match shape {
        GraphShape::Line => generate_line_pairs(node_count),
        GraphShape::Star => generate_star_pairs(node_count),
        GraphShape::Grid2D { width, height } => generate_grid_pairs(width, height, node_count),
        GraphShape::RandomErdosRenyi { edges } => {
            generate_random_pairs(node_count, edges, &mut rng)
        }
    };
    let edges = pairs
        .into_iter()
        .map(|(from, to)| (from, to, rng.gen_range(1..=max_weight)))
        .collect();
    WeightedDataset {
        vertices: node_count,
        edges,
    }
}

fn generate_line_pairs(count: usize) -> Vec<(usize, usize)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_star_pairs(count: usize) -> Vec<(usize, usize)> {
    (1..count).map(|leaf| (0, leaf)).collect()
}

fn generate_grid_pairs(width: usize, height: usize, node_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        node_count,
        "grid dimensions must match node count"
    );
    let mut pairs = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = grid_index(x, y, width);
            if x + 1 < width {
                pairs.push((base, grid_index(x + 1, y, width)));
            }
            if y + 1 < height {
                pairs.push((base, grid_index(x, y + 1, width)));
            }
        }
    }
    pairs
}

fn generate_random_pairs(
    node_count: usize,
    edge_count: usize,
    rng: &mut StdRng,
) -> Vec<(usize, usize)> {
    let total_pairs = pair_count(node_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut pairs = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        idx += sample_geometric(rng, p);
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, node_count as u64);
        pairs.push((from as usize, to as usize));
        idx += 1;
        remaining_edges -= 1;
    }
    pairs
}

fn grid_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < nodes - 1 {
        let remaining = nodes - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (nodes - 2, nodes - 1)
}
