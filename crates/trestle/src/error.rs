//! Error types for trestle operations.

use crate::domain::NodeId;
use thiserror::Error;

/// The error type for graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A node id was referenced that is not registered in the graph.
    ///
    /// Raised when an edge endpoint, a traversal source, or a traversal
    /// destination is not a registered node. Unreachability is never an
    /// error; it is reported through the operation's return value.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}

/// A specialized Result type for trestle operations.
pub type Result<T> = std::result::Result<T, Error>;
