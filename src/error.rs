//! Error types for graph construction and influencer selection.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors surfaced by parsing, validation, and selection.
///
/// The computation itself is deterministic and stateless, so there is no
/// retry or recovery path anywhere: every error propagates straight to the
/// caller.
#[derive(Debug, Error)]
pub enum InfluenceError {
    /// An edge-list line that does not parse into a `source target weight`
    /// triple. No partial graph is built.
    #[error("malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    /// Shortest-path search requires non-negative weights; see
    /// [`Graph::validate_nonnegative`](crate::graph::Graph::validate_nonnegative).
    #[error("unsupported weight {weight} on edge {source_node} -> {target}: weights must be non-negative")]
    NegativeWeight {
        source_node: NodeId,
        target: NodeId,
        weight: f64,
    },

    /// The influence map has no candidates at all, e.g. the deadline is
    /// negative or no node has outgoing edges.
    #[error("no influencer reaches any node within the deadline")]
    NoInfluencer,

    /// Every candidate's reach is already covered by the earlier pick.
    #[error("no candidate adds marginal reach beyond the existing influencees")]
    NoMarginalInfluencer,
}
