use thiserror::Error;

use crate::graph::NodeId;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    #[error("node {0} is not part of the graph")]
    InvalidReference(NodeId), // handle was never added to this graph

    /// Invalid reference from a cost lookup: both nodes exist but are not connected
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("no path found")]
    NoPathFound, // goal was never relaxed, or the predecessor chain is broken

    #[error("need at least 2 nodes to pick distinct endpoints, graph has {nodes}")]
    DegenerateInstance { nodes: usize },
}
