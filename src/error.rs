//! Error types for shuttle-route queries.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors produced by path, matrix, tour, and planning queries.
///
/// Unreachability is not an error: a shortest-path query against a
/// disconnected destination returns an empty path, and matrix entries for
/// unreachable pairs are `None`. These variants cover the conditions a
/// caller must handle distinctly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// A query referenced a node the graph has never seen.
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    /// The tour heuristic had stops left to visit but no finite-distance
    /// candidate to continue with.
    #[error("no feasible tour: {remaining} stop(s) unreachable from node {at}")]
    NoFeasibleTour { at: NodeId, remaining: usize },

    /// A plan response needed the passenger record for a node that has none.
    #[error("no passenger record for node {0}")]
    MissingPassenger(NodeId),
}

/// Convenience result type for shuttle-route operations.
pub type Result<T> = std::result::Result<T, RouteError>;
