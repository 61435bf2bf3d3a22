//! All data types for the graphwalk library.

pub mod edge;
pub mod error;

pub use edge::{is_edge, Edge};
pub use error::{GraphError, GraphResult};

/// Matrix cell value meaning "no edge between these vertices".
pub const NO_EDGE: f64 = f64::INFINITY;

/// Weight used when a graph definition omits one.
pub const DEFAULT_WEIGHT: f64 = 1.0;
