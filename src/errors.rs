use thiserror::Error;

/// Errors reported by graph construction and path search.
/// All are returned synchronously at the offending call; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge weight was negative. Dijkstra and A* require weights >= 0.
    #[error("invalid edge weight {0}: weights must be non-negative")]
    InvalidWeight(String),

    /// Query referenced a node never inserted via any edge.
    #[error("unknown node {0}")]
    UnknownNode(String),

    /// Start and goal are in disconnected components.
    #[error("no path between start and goal")]
    NoPath,
}
