//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed construction or insertion input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex name is not part of the graph.
    #[error("Vertex not found: {0:?}")]
    VertexNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph definition could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
