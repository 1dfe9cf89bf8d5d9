use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
    #[error("invalid weight: {0}")]
    InvalidWeight(String),
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn invalid_edge<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidEdge(msg.into())
    }

    pub fn invalid_weight<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidWeight(msg.into())
    }

    pub fn vertex_not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::VertexNotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
