use std::sync::Arc;

use ahash::AHashMap;
use log::trace;
use parking_lot::RwLock;

use crate::graph::{Edge, Neighbor, VertexId};

type AdjacencyIndex = AHashMap<VertexId, Arc<[Neighbor]>>;

/// Lazily built adjacency index over the whole edge list.
///
/// One pass over the edges fills every vertex's list, so a full search costs
/// a single `O(E)` build instead of one edge scan per finalised vertex. Lists
/// are shared as `Arc<[Neighbor]>`; lookups never copy them. Callers clear the
/// index on every mutation.
#[derive(Default)]
pub struct NeighborCache {
    index: RwLock<Option<AdjacencyIndex>>,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjacency of `vertex` in edge order, building the index from `edges` if it is stale.
    pub fn neighbors(&self, vertex: VertexId, edges: &[Edge]) -> Arc<[Neighbor]> {
        if let Some(index) = self.index.read().as_ref() {
            return lookup(index, vertex);
        }
        let mut guard = self.index.write();
        let index = guard.get_or_insert_with(|| build_index(edges));
        lookup(index, vertex)
    }

    pub fn is_built(&self) -> bool {
        self.index.read().is_some()
    }

    pub fn clear(&self) {
        *self.index.write() = None;
    }
}

fn lookup(index: &AdjacencyIndex, vertex: VertexId) -> Arc<[Neighbor]> {
    index
        .get(&vertex)
        .cloned()
        .unwrap_or_else(|| Arc::from(Vec::<Neighbor>::new()))
}

fn build_index(edges: &[Edge]) -> AdjacencyIndex {
    let mut lists: AHashMap<VertexId, Vec<Neighbor>> = AHashMap::new();
    for edge in edges {
        lists.entry(edge.a).or_default().push(Neighbor {
            vertex: edge.b,
            weight: edge.weight,
            edge: edge.id,
        });
        lists.entry(edge.b).or_default().push(Neighbor {
            vertex: edge.a,
            weight: edge.weight,
            edge: edge.id,
        });
    }
    trace!("adjacency index built for {} vertices", lists.len());
    lists
        .into_iter()
        .map(|(vertex, list)| (vertex, Arc::from(list)))
        .collect()
}
