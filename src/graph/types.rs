use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::GraphError;

/// Edge weights are positive integers; path costs are summed in `u64`.
pub type Weight = u32;

/// Key of a vertex inside a [`Graph`](super::Graph).
///
/// The wrapped value is the creation counter. It renders as a spreadsheet-style
/// label (`A`..`Z`, `AA`, `AB`, ...), so ids sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn index(self) -> u32 {
        self.0
    }

    pub fn label(self) -> String {
        let mut n = u64::from(self.0) + 1;
        let mut buf = Vec::new();
        while n > 0 {
            n -= 1;
            buf.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        buf.reverse();
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Parses a label produced by [`VertexId::label`]. Only `A`..`Z` are accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return None;
        }
        let mut acc: u64 = 0;
        for byte in label.bytes() {
            if !byte.is_ascii_uppercase() {
                return None;
            }
            acc = acc
                .checked_mul(26)?
                .checked_add(u64::from(byte - b'A') + 1)?;
        }
        u32::try_from(acc - 1).ok().map(VertexId)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Undirected weighted connection. `a` and `b` are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// The endpoint across from `vertex`, or `None` when the edge does not touch it.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
    pub edge: EdgeId,
}

/// Outcome of [`Graph::add_edge`](super::Graph::add_edge) for a well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    Created(EdgeId),
    /// The pair was already connected; carries the untouched existing edge.
    AlreadyExists(EdgeId),
}

impl EdgeInsert {
    pub fn id(self) -> EdgeId {
        match self {
            EdgeInsert::Created(id) | EdgeInsert::AlreadyExists(id) => id,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, EdgeInsert::Created(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub density: f64,
}

pub fn validate_weight(weight: Weight) -> Result<Weight, GraphError> {
    if weight == 0 {
        return Err(GraphError::invalid_weight("weight must be a positive integer"));
    }
    Ok(weight)
}

/// Parses a user-entered weight. Surrounding whitespace is ignored.
pub fn parse_weight(raw: &str) -> Result<Weight, GraphError> {
    let trimmed = raw.trim();
    let weight = trimmed
        .parse::<Weight>()
        .map_err(|_| GraphError::invalid_weight(format!("'{trimmed}' is not a positive integer")))?;
    validate_weight(weight)
}
