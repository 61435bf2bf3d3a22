//! The adjacency-list edge entry.

use super::NO_EDGE;

/// An outgoing edge stored in a vertex's adjacency list.
///
/// The source is implied by the list the edge lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the destination vertex.
    pub destination: usize,
    /// Edge weight. Always finite.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge entry.
    pub fn new(destination: usize, weight: f64) -> Self {
        Self {
            destination,
            weight,
        }
    }
}

/// Whether a matrix cell holds a real weight rather than the sentinel.
pub fn is_edge(cell: f64) -> bool {
    cell != NO_EDGE
}
