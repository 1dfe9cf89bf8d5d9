//! In-memory undirected weighted graph.
//!
//! Vertices are kept in creation order and edges in insertion order; both
//! orders are observable through enumeration and adjacency queries, and the
//! shortest-path engine breaks ties by them.

mod types;

use std::sync::Arc;

use log::{debug, warn};

use crate::{cache::NeighborCache, errors::GraphError};

pub use types::{
    Edge, EdgeId, EdgeInsert, GraphStats, Neighbor, VertexId, Weight, parse_weight,
    validate_weight,
};

pub struct Graph {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    next_vertex: u32,
    next_edge: u64,
    neighbor_cache: NeighborCache,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            next_vertex: self.next_vertex,
            next_edge: self.next_edge,
            neighbor_cache: NeighborCache::new(),
        }
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_vertex: 0,
            next_edge: 0,
            neighbor_cache: NeighborCache::new(),
        }
    }

    /// Creates a vertex with the next unused id. Ids of removed vertices are not reissued.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.push(id);
        debug!("vertex added: {id}");
        id
    }

    /// Connects `u` and `v`.
    ///
    /// Self-loops, zero weights and unknown endpoints are errors. A pair that is
    /// already connected, in either order, is left alone and reported through
    /// [`EdgeInsert::AlreadyExists`].
    ///
    /// Checks run in this order: self-loop, weight, endpoints, duplicate. An
    /// invalid request is an error even when the pair is already connected.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<EdgeInsert, GraphError> {
        if u == v {
            return Err(GraphError::invalid_edge(format!(
                "cannot connect {u} to itself"
            )));
        }
        validate_weight(weight)?;
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        if let Some(existing) = self.edge_between(u, v) {
            warn!("edge already exists between {u} and {v}");
            return Ok(EdgeInsert::AlreadyExists(existing.id));
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge {
            id,
            a: u,
            b: v,
            weight,
        });
        self.neighbor_cache.clear();
        debug!("edge added: {u} <-> {v} (weight {weight})");
        Ok(EdgeInsert::Created(id))
    }

    /// Removes `vertex` together with every incident edge. Returns `false` if absent.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        let Some(position) = self.vertices.iter().position(|&v| v == vertex) else {
            return false;
        };
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(vertex));
        self.vertices.remove(position);
        self.neighbor_cache.clear();
        debug!(
            "vertex removed: {vertex} ({} incident edges dropped)",
            before - self.edges.len()
        );
        true
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(position) = self.edges.iter().position(|edge| edge.id == id) else {
            return false;
        };
        let edge = self.edges.remove(position);
        self.neighbor_cache.clear();
        debug!("edge removed: {} <-> {}", edge.a, edge.b);
        true
    }

    pub fn remove_edge_between(&mut self, u: VertexId, v: VertexId) -> bool {
        match self.edge_between(u, v).map(|edge| edge.id) {
            Some(id) => self.remove_edge(id),
            None => false,
        }
    }

    /// Adjacent vertices of `vertex` with connecting weights, in edge-insertion order.
    /// Unknown vertices have no neighbors.
    pub fn neighbors(&self, vertex: VertexId) -> Arc<[Neighbor]> {
        self.neighbor_cache.neighbors(vertex, &self.edges)
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|edge| edge.touches(vertex)).count()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(u, v))
    }

    /// Edges joining consecutive vertices of `path`. Missing links are skipped.
    pub fn path_edges(&self, path: &[VertexId]) -> Vec<EdgeId> {
        path.windows(2)
            .filter_map(|pair| self.edge_between(pair[0], pair[1]).map(|edge| edge.id))
            .collect()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn find_vertex<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(VertexId) -> bool,
    {
        self.vertices.iter().copied().find(|&v| predicate(v))
    }

    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        let id = VertexId::from_label(label)?;
        self.contains_vertex(id).then_some(id)
    }

    pub fn stats(&self) -> GraphStats {
        let vertices = self.vertices.len();
        let max_degree = self
            .vertices
            .iter()
            .map(|&v| self.degree(v))
            .max()
            .unwrap_or(0);
        let density = if vertices < 2 {
            0.0
        } else {
            let pairs = (vertices * (vertices - 1)) as f64 / 2.0;
            self.edges.len() as f64 / pairs
        };
        GraphStats {
            vertices,
            edges: self.edges.len(),
            max_degree,
            density,
        }
    }

    /// Drops every vertex and edge and restarts id generation at `A`.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_vertex = 0;
        self.next_edge = 0;
        self.neighbor_cache.clear();
        debug!("graph cleared");
    }

    pub(crate) fn require_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(format!("vertex {vertex}")))
        }
    }
}
